use anchor_lang::prelude::*;
use crate::state::{AggregatorConfig, LatestReport, Round};
use crate::events::{ReportConfirmed, RoundFinalized};
use crate::errors::OracleError;

#[derive(Accounts)]
pub struct ConfirmReport<'info> {
    #[account(
        mut,
        seeds = [b"round", round.round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,

    #[account(
        mut,
        seeds = [b"aggregator_config"],
        bump = aggregator_config.bump,
    )]
    pub aggregator_config: Account<'info, AggregatorConfig>,

    pub reporter: Signer<'info>,
}

pub fn process_confirm_report(ctx: Context<ConfirmReport>) -> Result<()> {
    let config = &mut ctx.accounts.aggregator_config;
    let round = &mut ctx.accounts.round;
    let reporter = ctx.accounts.reporter.key();

    // Guards
    require!(config.is_reporter(&reporter), OracleError::NotInReporterSet);
    require!(config.has_active_round(), OracleError::NoActiveRound);
    require!(round.round_id == config.active_round_id, OracleError::RoundNotActive);

    round.record_confirmation(reporter)?;

    emit!(ReportConfirmed {
        round_id: round.round_id,
        reporter,
        confirmation_count: round.confirmation_count() as u8,
    });

    // Reaching the quorum finalizes the round within the same transaction;
    // the report becomes the authoritative latest value.
    if round.confirmation_count() >= config.threshold as usize {
        let report = round.finalize()?;
        config.latest_report = Some(LatestReport {
            value: report,
            round_id: round.round_id,
        });
        config.active_round_id = 0;
        msg!(
            "round {}: finalized with {} confirmations",
            round.round_id,
            round.confirmation_count()
        );
        emit!(RoundFinalized {
            round_id: round.round_id,
            value: report,
        });
    }

    Ok(())
}
