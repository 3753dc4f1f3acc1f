use anchor_lang::prelude::*;
use crate::state::{AggregatorConfig, Round, RoundPhase};
use crate::events::RoundOpened;
use crate::errors::OracleError;

#[derive(Accounts)]
#[instruction(round_id: u64)] // round_id is passed as instruction arg to derive seeds
pub struct OpenRound<'info> {
    #[account(
        init,
        seeds = [b"round", round_id.to_le_bytes().as_ref()],
        bump,
        payer = requester,
        space = Round::LEN
    )]
    pub round: Account<'info, Round>,

    #[account(
        mut,
        seeds = [b"aggregator_config"],
        bump = aggregator_config.bump,
        constraint = aggregator_config.requester == requester.key() @ OracleError::Unauthorized
    )]
    pub aggregator_config: Account<'info, AggregatorConfig>,

    #[account(mut)]
    pub requester: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_open_round(ctx: Context<OpenRound>, round_id: u64) -> Result<()> {
    let config = &mut ctx.accounts.aggregator_config;
    let round = &mut ctx.accounts.round;
    let clock = Clock::get()?;

    // Guards
    require!(!config.has_active_round(), OracleError::RoundAlreadyActive);
    // The client derives the round PDA from last_round_id + 1; verify the
    // passed id so round ids stay strictly sequential on-chain.
    let next_id = config
        .last_round_id
        .checked_add(1)
        .ok_or(OracleError::MathOverflow)?;
    require!(round_id == next_id, OracleError::RoundIdMismatch);

    // Initialize Round
    round.round_id = round_id;
    round.phase = RoundPhase::Collecting;
    round.opened_at = clock.unix_timestamp;
    round.observations = Vec::new();
    round.report_value = None;
    round.confirmations = Vec::new();
    round.bump = ctx.bumps.round;

    // Update cursor
    config.last_round_id = round_id;
    config.active_round_id = round_id;

    emit!(RoundOpened {
        round_id,
        opened_at: round.opened_at,
    });

    Ok(())
}
