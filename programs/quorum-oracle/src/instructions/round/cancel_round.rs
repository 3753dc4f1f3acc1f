use anchor_lang::prelude::*;
use crate::state::{AggregatorConfig, Round};
use crate::events::RoundCancelled;
use crate::errors::OracleError;

#[derive(Accounts)]
pub struct CancelRound<'info> {
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

    // Permissionless liveness recovery: any signer may trigger the check.
    pub caller: Signer<'info>,
}

pub fn process_cancel_round(ctx: Context<CancelRound>) -> Result<()> {
    let config = &mut ctx.accounts.aggregator_config;
    let round = &mut ctx.accounts.round;
    let clock = Clock::get()?;

    // Guards
    require!(config.has_active_round(), OracleError::NoActiveRound);
    require!(round.round_id == config.active_round_id, OracleError::RoundNotActive);
    require!(
        round.timed_out(clock.unix_timestamp, config.timeout_seconds),
        OracleError::TimeoutNotElapsed
    );

    // A stalled round is discarded entirely; partial quorums are never
    // promoted to a result.
    round.cancel()?;
    config.active_round_id = 0;

    msg!("round {}: cancelled after timeout", round.round_id);
    emit!(RoundCancelled {
        round_id: round.round_id,
        opened_at: round.opened_at,
        cancelled_at: clock.unix_timestamp,
    });

    Ok(())
}
