use anchor_lang::prelude::*;
use crate::errors::OracleError;

/// Hard cap on the reporter whitelist; bounds account space.
pub const MAX_REPORTERS: usize = 15;
/// Odd and at least 3, so the median is always a unique middle element.
pub const MIN_REPORTERS: usize = 3;

/// Allowed range for the round timeout, in seconds (1 minute to 7 days).
pub const MIN_TIMEOUT_SECONDS: i64 = 60;
pub const MAX_TIMEOUT_SECONDS: i64 = 7 * 24 * 60 * 60;

#[account]
pub struct AggregatorConfig {
    pub requester: Pubkey,          // only identity allowed to open rounds
    pub reporters: Vec<Pubkey>,     // fixed whitelist, max MAX_REPORTERS
    pub threshold: u8,              // K confirmations required to finalize
    pub timeout_seconds: i64,       // only field mutable after init
    pub active_round_id: u64,       // 0 = no round active
    pub last_round_id: u64,         // round ids start at 1, increase by 1
    pub latest_report: Option<LatestReport>,
    pub bump: u8,
}

impl AggregatorConfig {
    // 8 (discriminator)
    // 32 (requester)
    // 4 + 32 * MAX_REPORTERS (reporters)
    // 1 (threshold) + 8 (timeout_seconds)
    // 8 (active_round_id) + 8 (last_round_id)
    // 1 + 16 (latest_report option)
    // 1 (bump)
    pub const LEN: usize = 8 + 32 + (4 + 32 * MAX_REPORTERS) + 1 + 8 + 8 + 8 + (1 + 16) + 1;

    /// Construction-time validation of the full configuration.
    pub fn validate_params(reporters: &[Pubkey], threshold: u8, timeout_seconds: i64) -> Result<()> {
        let n = reporters.len();
        require!(n <= MAX_REPORTERS, OracleError::TooManyReporters);
        require!(n >= MIN_REPORTERS && n % 2 == 1, OracleError::InvalidReporterCount);
        for (i, reporter) in reporters.iter().enumerate() {
            require!(!reporters[..i].contains(reporter), OracleError::DuplicateReporter);
        }
        require!(
            threshold >= 1 && (threshold as usize) <= n,
            OracleError::InvalidThreshold
        );
        Self::validate_timeout(timeout_seconds)
    }

    pub fn validate_timeout(timeout_seconds: i64) -> Result<()> {
        require!(
            (MIN_TIMEOUT_SECONDS..=MAX_TIMEOUT_SECONDS).contains(&timeout_seconds),
            OracleError::TimeoutOutOfRange
        );
        Ok(())
    }

    pub fn is_reporter(&self, key: &Pubkey) -> bool {
        self.reporters.contains(key)
    }

    pub fn reporter_count(&self) -> usize {
        self.reporters.len()
    }

    pub fn has_active_round(&self) -> bool {
        self.active_round_id != 0
    }
}

/// Latest finalized result, keyed by the round that produced it.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub struct LatestReport {
    pub value: i64,
    pub round_id: u64,
}
