use anchor_lang::prelude::*;
use crate::errors::OracleError;
use crate::state::aggregator::MAX_REPORTERS;
use crate::utils::math;

#[account]
pub struct Round {
    pub round_id: u64,
    pub phase: RoundPhase,
    pub opened_at: i64,
    pub observations: Vec<Observation>, // one entry per reporter, in submission order
    pub report_value: Option<i64>,      // set exactly once, at full collection
    pub confirmations: Vec<Pubkey>,     // one entry per reporter
    pub bump: u8,
}

impl Round {
    // 8 (discriminator)
    // 8 (round_id) + 1 (phase) + 8 (opened_at)
    // 4 + 40 * MAX_REPORTERS (observations)
    // 1 + 8 (report_value option)
    // 4 + 32 * MAX_REPORTERS (confirmations)
    // 1 (bump)
    pub const LEN: usize =
        8 + 8 + 1 + 8 + (4 + 40 * MAX_REPORTERS) + (1 + 8) + (4 + 32 * MAX_REPORTERS) + 1;

    pub fn observation_count(&self) -> usize {
        self.observations.len()
    }

    pub fn confirmation_count(&self) -> usize {
        self.confirmations.len()
    }

    /// A round is open while it still accepts observations or confirmations.
    pub fn is_open(&self) -> bool {
        matches!(self.phase, RoundPhase::Collecting | RoundPhase::ReportReady)
    }

    pub fn has_submitted(&self, reporter: &Pubkey) -> bool {
        self.observations.iter().any(|obs| obs.reporter == *reporter)
    }

    pub fn has_confirmed(&self, reporter: &Pubkey) -> bool {
        self.confirmations.contains(reporter)
    }

    /// Consensus value; present only once the round reached ReportReady.
    pub fn report(&self) -> Option<i64> {
        self.report_value
    }

    /// Record one reporter's observed value for this round.
    pub fn record_observation(&mut self, reporter: Pubkey, value: i64) -> Result<()> {
        require!(self.is_open(), OracleError::RoundClosed);
        require!(self.phase == RoundPhase::Collecting, OracleError::RoundNotCollecting);
        require!(!self.has_submitted(&reporter), OracleError::DuplicateObservation);
        self.observations.push(Observation { reporter, value });
        Ok(())
    }

    /// Aggregate the collected observations into the consensus report and
    /// move the round to ReportReady. Invoked once, on the submission that
    /// completes the reporter set; a partial set never aggregates.
    pub fn compute_report(&mut self, reporter_count: usize) -> Result<i64> {
        require!(self.phase == RoundPhase::Collecting, OracleError::RoundNotCollecting);
        require!(self.report_value.is_none(), OracleError::ReportAlreadyComputed);
        require!(
            self.observations.len() == reporter_count,
            OracleError::IncompleteObservations
        );
        let values: Vec<i64> = self.observations.iter().map(|obs| obs.value).collect();
        let report = math::median(&values).ok_or(OracleError::IncompleteObservations)?;
        self.report_value = Some(report);
        self.phase = RoundPhase::ReportReady;
        Ok(report)
    }

    /// Record one reporter's confirmation of the computed report.
    pub fn record_confirmation(&mut self, reporter: Pubkey) -> Result<()> {
        require!(self.is_open(), OracleError::RoundClosed);
        require!(self.phase == RoundPhase::ReportReady, OracleError::ReportNotReady);
        require!(!self.has_confirmed(&reporter), OracleError::DuplicateConfirmation);
        self.confirmations.push(reporter);
        Ok(())
    }

    /// Accept the report as authoritative. The caller checks the quorum.
    pub fn finalize(&mut self) -> Result<i64> {
        require!(self.phase == RoundPhase::ReportReady, OracleError::ReportNotReady);
        let report = self.report_value.ok_or(OracleError::ReportNotReady)?;
        self.phase = RoundPhase::Finalized;
        Ok(report)
    }

    /// Whether the round outlived its deadline without finalizing.
    pub fn timed_out(&self, now: i64, timeout_seconds: i64) -> bool {
        now.saturating_sub(self.opened_at) > timeout_seconds
    }

    /// Discard the round. Collected observations and confirmations are
    /// abandoned whole; a timed-out round is never partially finalized.
    pub fn cancel(&mut self) -> Result<()> {
        require!(self.is_open(), OracleError::RoundClosed);
        self.phase = RoundPhase::Cancelled;
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum RoundPhase {
    Collecting,
    ReportReady,
    Finalized,
    Cancelled,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub struct Observation {
    pub reporter: Pubkey,
    pub value: i64,
}
