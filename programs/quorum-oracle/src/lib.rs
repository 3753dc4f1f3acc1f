use anchor_lang::prelude::*;

pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod utils;

use instructions::*;

declare_id!("67hMNHGeYLA16LWFbqCab7s7QQeu9q6fcq5MGPML8nGF");

#[program]
pub mod quorum_oracle {
    use super::*;

    pub fn init_aggregator(
        ctx: Context<InitAggregator>,
        reporters: Vec<Pubkey>,
        threshold: u8,
        timeout_seconds: i64,
    ) -> Result<()> {
        instructions::admin::init_aggregator::process_init_aggregator(
            ctx,
            reporters,
            threshold,
            timeout_seconds,
        )
    }

    pub fn open_round(ctx: Context<OpenRound>, round_id: u64) -> Result<()> {
        instructions::round::open_round::process_open_round(ctx, round_id)
    }

    pub fn submit_observation(ctx: Context<SubmitObservation>, value: i64) -> Result<()> {
        instructions::reporter::submit_observation::process_submit_observation(ctx, value)
    }

    pub fn confirm_report(ctx: Context<ConfirmReport>) -> Result<()> {
        instructions::reporter::confirm_report::process_confirm_report(ctx)
    }

    pub fn cancel_round(ctx: Context<CancelRound>) -> Result<()> {
        instructions::round::cancel_round::process_cancel_round(ctx)
    }

    pub fn update_timeout(ctx: Context<UpdateTimeout>, new_timeout_seconds: i64) -> Result<()> {
        instructions::admin::update_timeout::update_timeout(ctx, new_timeout_seconds)
    }
}
