use anchor_lang::prelude::*;
use crate::state::AggregatorConfig;
use crate::events::AggregatorInitialized;

#[derive(Accounts)]
pub struct InitAggregator<'info> {
    #[account(
        init,
        seeds = [b"aggregator_config"],
        bump,
        payer = requester,
        space = AggregatorConfig::LEN
    )]
    pub aggregator_config: Account<'info, AggregatorConfig>,

    #[account(mut)]
    pub requester: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_init_aggregator(
    ctx: Context<InitAggregator>,
    reporters: Vec<Pubkey>,
    threshold: u8,
    timeout_seconds: i64,
) -> Result<()> {
    AggregatorConfig::validate_params(&reporters, threshold, timeout_seconds)?;

    let config = &mut ctx.accounts.aggregator_config;
    config.requester = ctx.accounts.requester.key();
    config.reporters = reporters;
    config.threshold = threshold;
    config.timeout_seconds = timeout_seconds;
    config.active_round_id = 0;
    config.last_round_id = 0;
    config.latest_report = None;
    config.bump = ctx.bumps.aggregator_config;

    emit!(AggregatorInitialized {
        requester: config.requester,
        reporter_count: config.reporters.len() as u8,
        threshold,
        timeout_seconds,
    });

    Ok(())
}
