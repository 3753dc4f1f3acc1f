use anchor_lang::prelude::*;
use crate::state::AggregatorConfig;
use crate::errors::OracleError;

#[derive(Accounts)]
pub struct UpdateTimeout<'info> {
    #[account(
        mut,
        seeds = [b"aggregator_config"],
        bump = aggregator_config.bump,
        constraint = aggregator_config.requester == requester.key() @ OracleError::Unauthorized
    )]
    pub aggregator_config: Account<'info, AggregatorConfig>,
    pub requester: Signer<'info>,
}

pub fn update_timeout(ctx: Context<UpdateTimeout>, new_timeout_seconds: i64) -> Result<()> {
    AggregatorConfig::validate_timeout(new_timeout_seconds)?;
    ctx.accounts.aggregator_config.timeout_seconds = new_timeout_seconds;
    Ok(())
}
