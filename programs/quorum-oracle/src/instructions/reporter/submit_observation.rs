use anchor_lang::prelude::*;
use crate::state::{AggregatorConfig, Round};
use crate::events::{ObservationSubmitted, ReportComputed};
use crate::errors::OracleError;

#[derive(Accounts)]
pub struct SubmitObservation<'info> {
    #[account(
        mut,
        seeds = [b"round", round.round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,

    #[account(
        seeds = [b"aggregator_config"],
        bump = aggregator_config.bump,
    )]
    pub aggregator_config: Account<'info, AggregatorConfig>,

    pub reporter: Signer<'info>,
}

pub fn process_submit_observation(ctx: Context<SubmitObservation>, value: i64) -> Result<()> {
    let config = &ctx.accounts.aggregator_config;
    let round = &mut ctx.accounts.round;
    let reporter = ctx.accounts.reporter.key();

    // Guards
    require!(config.is_reporter(&reporter), OracleError::NotInReporterSet);
    require!(config.has_active_round(), OracleError::NoActiveRound);
    require!(round.round_id == config.active_round_id, OracleError::RoundNotActive);

    round.record_observation(reporter, value)?;

    emit!(ObservationSubmitted {
        round_id: round.round_id,
        reporter,
        value,
        observation_count: round.observation_count() as u8,
    });

    // The submission that completes the reporter set triggers aggregation
    // within the same transaction.
    if round.observation_count() == config.reporter_count() {
        let report = round.compute_report(config.reporter_count())?;
        msg!("round {}: report computed = {}", round.round_id, report);
        emit!(ReportComputed {
            round_id: round.round_id,
            value: report,
        });
    }

    Ok(())
}
