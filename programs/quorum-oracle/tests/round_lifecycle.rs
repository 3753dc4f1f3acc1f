//! Host-side tests driving the round state machine through the same
//! sequences the instruction handlers orchestrate on-chain.

use anchor_lang::prelude::*;
use quorum_oracle::errors::OracleError;
use quorum_oracle::state::{AggregatorConfig, LatestReport, Round, RoundPhase};

fn pk(n: u8) -> Pubkey {
    Pubkey::new_from_array([n; 32])
}

fn config(n: u8, threshold: u8, timeout_seconds: i64) -> AggregatorConfig {
    let reporters: Vec<Pubkey> = (1..=n).map(pk).collect();
    AggregatorConfig::validate_params(&reporters, threshold, timeout_seconds).unwrap();
    AggregatorConfig {
        requester: pk(200),
        reporters,
        threshold,
        timeout_seconds,
        active_round_id: 0,
        last_round_id: 0,
        latest_report: None,
        bump: 255,
    }
}

fn open_round(config: &mut AggregatorConfig, opened_at: i64) -> Round {
    assert!(!config.has_active_round(), "one active round at a time");
    let round_id = config.last_round_id + 1;
    config.last_round_id = round_id;
    config.active_round_id = round_id;
    Round {
        round_id,
        phase: RoundPhase::Collecting,
        opened_at,
        observations: Vec::new(),
        report_value: None,
        confirmations: Vec::new(),
        bump: 255,
    }
}

/// One reporter submission, with the full-collection aggregation trigger the
/// submit_observation handler performs.
fn submit(config: &AggregatorConfig, round: &mut Round, reporter: Pubkey, value: i64) -> Result<()> {
    assert!(config.is_reporter(&reporter));
    assert_eq!(round.round_id, config.active_round_id);
    round.record_observation(reporter, value)?;
    if round.observation_count() == config.reporter_count() {
        round.compute_report(config.reporter_count())?;
    }
    Ok(())
}

/// One reporter confirmation, with the quorum finalization trigger the
/// confirm_report handler performs.
fn confirm(config: &mut AggregatorConfig, round: &mut Round, reporter: Pubkey) -> Result<()> {
    assert!(config.is_reporter(&reporter));
    assert_eq!(round.round_id, config.active_round_id);
    round.record_confirmation(reporter)?;
    if round.confirmation_count() >= config.threshold as usize {
        let report = round.finalize()?;
        config.latest_report = Some(LatestReport {
            value: report,
            round_id: round.round_id,
        });
        config.active_round_id = 0;
    }
    Ok(())
}

#[test]
fn test_end_to_end_three_reporters_quorum_two() {
    let mut config = config(3, 2, 300);
    let mut round = open_round(&mut config, 1_000);
    assert_eq!(round.round_id, 1);
    assert_eq!(config.active_round_id, 1);

    // A, B, C report 10, 20, 30; report not computed until the set is full.
    submit(&config, &mut round, pk(1), 10).unwrap();
    submit(&config, &mut round, pk(2), 20).unwrap();
    assert_eq!(round.phase, RoundPhase::Collecting);
    assert_eq!(round.report(), None);

    submit(&config, &mut round, pk(3), 30).unwrap();
    assert_eq!(round.phase, RoundPhase::ReportReady);
    assert_eq!(round.report(), Some(20));

    // First confirmation is below the quorum.
    confirm(&mut config, &mut round, pk(1)).unwrap();
    assert_eq!(round.phase, RoundPhase::ReportReady);
    assert_eq!(round.confirmation_count(), 1);
    assert_eq!(config.latest_report, None);

    // Second confirmation reaches K = 2 and finalizes.
    confirm(&mut config, &mut round, pk(2)).unwrap();
    assert_eq!(round.phase, RoundPhase::Finalized);
    assert_eq!(
        config.latest_report,
        Some(LatestReport { value: 20, round_id: 1 })
    );
    assert_eq!(config.active_round_id, 0);
}

#[test]
fn test_five_reporters_median_with_duplicates() {
    let mut config = config(5, 3, 300);
    let mut round = open_round(&mut config, 1_000);

    for (i, value) in [10, 2, 7, 7, 100].iter().enumerate() {
        submit(&config, &mut round, pk(i as u8 + 1), *value).unwrap();
    }
    // sorted: {2, 7, 7, 10, 100}
    assert_eq!(round.report(), Some(7));

    confirm(&mut config, &mut round, pk(5)).unwrap();
    confirm(&mut config, &mut round, pk(3)).unwrap();
    assert_eq!(round.phase, RoundPhase::ReportReady);
    confirm(&mut config, &mut round, pk(1)).unwrap();
    assert_eq!(round.phase, RoundPhase::Finalized);
    assert_eq!(
        config.latest_report,
        Some(LatestReport { value: 7, round_id: 1 })
    );
}

#[test]
fn test_duplicate_submission_and_confirmation_leave_state_unchanged() {
    let mut config = config(3, 2, 300);
    let mut round = open_round(&mut config, 1_000);

    submit(&config, &mut round, pk(1), 10).unwrap();
    assert_eq!(
        submit(&config, &mut round, pk(1), 99),
        Err(OracleError::DuplicateObservation.into())
    );
    assert_eq!(round.observation_count(), 1);

    submit(&config, &mut round, pk(2), 20).unwrap();
    submit(&config, &mut round, pk(3), 30).unwrap();
    confirm(&mut config, &mut round, pk(1)).unwrap();
    assert_eq!(
        confirm(&mut config, &mut round, pk(1)),
        Err(OracleError::DuplicateConfirmation.into())
    );
    assert_eq!(round.confirmation_count(), 1);
    assert_eq!(round.phase, RoundPhase::ReportReady);
}

#[test]
fn test_timeout_cancellation_discards_round() {
    let mut config = config(3, 2, 300);
    let mut round = open_round(&mut config, 1_000);
    submit(&config, &mut round, pk(1), 10).unwrap();

    // Deadline not yet elapsed: the watchdog check fails, phase unchanged.
    assert!(!round.timed_out(1_000 + 300, config.timeout_seconds));
    assert_eq!(round.phase, RoundPhase::Collecting);

    // Past the deadline: cancel and clear the cursor, no partial aggregation.
    assert!(round.timed_out(1_000 + 301, config.timeout_seconds));
    round.cancel().unwrap();
    config.active_round_id = 0;
    assert_eq!(round.phase, RoundPhase::Cancelled);
    assert_eq!(round.report(), None);
    assert_eq!(config.latest_report, None);

    // The cancelled round rejects all further activity.
    assert_eq!(
        round.record_observation(pk(2), 20),
        Err(OracleError::RoundClosed.into())
    );
    assert_eq!(
        round.record_confirmation(pk(2)),
        Err(OracleError::RoundClosed.into())
    );

    // A fresh round can be opened and gets the next id.
    let round2 = open_round(&mut config, 2_000);
    assert_eq!(round2.round_id, 2);
}

#[test]
fn test_cancellation_during_confirmation_phase() {
    let mut config = config(3, 3, 300);
    let mut round = open_round(&mut config, 1_000);
    for (i, value) in [10, 20, 30].iter().enumerate() {
        submit(&config, &mut round, pk(i as u8 + 1), *value).unwrap();
    }
    confirm(&mut config, &mut round, pk(1)).unwrap();
    confirm(&mut config, &mut round, pk(2)).unwrap();

    // Quorum of 3 never arrives; the round times out mid-confirmation and the
    // two collected confirmations are discarded with it.
    assert!(round.timed_out(1_000 + 301, config.timeout_seconds));
    round.cancel().unwrap();
    config.active_round_id = 0;
    assert_eq!(round.phase, RoundPhase::Cancelled);
    assert_eq!(config.latest_report, None);
}

#[test]
fn test_round_ids_strictly_increase() {
    let mut config = config(3, 2, 300);
    for expected_id in 1..=3u64 {
        let mut round = open_round(&mut config, 1_000);
        assert_eq!(round.round_id, expected_id);
        for (i, value) in [1, 2, 3].iter().enumerate() {
            submit(&config, &mut round, pk(i as u8 + 1), *value).unwrap();
        }
        confirm(&mut config, &mut round, pk(1)).unwrap();
        confirm(&mut config, &mut round, pk(2)).unwrap();
        assert_eq!(round.phase, RoundPhase::Finalized);
    }
    assert_eq!(config.last_round_id, 3);
    assert_eq!(
        config.latest_report,
        Some(LatestReport { value: 2, round_id: 3 })
    );
}

#[test]
fn test_confirmation_rejected_before_report_ready() {
    let mut config = config(3, 2, 300);
    let mut round = open_round(&mut config, 1_000);
    submit(&config, &mut round, pk(1), 10).unwrap();
    assert_eq!(
        confirm(&mut config, &mut round, pk(2)),
        Err(OracleError::ReportNotReady.into())
    );
    assert_eq!(round.confirmation_count(), 0);
}
