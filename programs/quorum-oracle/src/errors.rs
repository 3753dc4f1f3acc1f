use anchor_lang::prelude::*;

#[error_code]
pub enum OracleError {
    #[msg("Caller is not the requester")]
    Unauthorized,
    #[msg("Caller is not in the reporter set")]
    NotInReporterSet,
    #[msg("A round is already active")]
    RoundAlreadyActive,
    #[msg("No round is currently active")]
    NoActiveRound,
    #[msg("Round is not the active round")]
    RoundNotActive,
    #[msg("Round id does not follow the last opened round")]
    RoundIdMismatch,
    #[msg("Round is not collecting observations")]
    RoundNotCollecting,
    #[msg("Report has not been computed yet")]
    ReportNotReady,
    #[msg("Round is already finalized or cancelled")]
    RoundClosed,
    #[msg("Report already computed for this round")]
    ReportAlreadyComputed,
    #[msg("Observation set is incomplete")]
    IncompleteObservations,
    #[msg("Reporter already submitted an observation this round")]
    DuplicateObservation,
    #[msg("Reporter already confirmed the report this round")]
    DuplicateConfirmation,
    #[msg("Reporter count must be odd and at least 3")]
    InvalidReporterCount,
    #[msg("Reporter set exceeds the maximum size")]
    TooManyReporters,
    #[msg("Reporter set contains duplicate identities")]
    DuplicateReporter,
    #[msg("Threshold must be between 1 and the reporter count")]
    InvalidThreshold,
    #[msg("Timeout outside the allowed range")]
    TimeoutOutOfRange,
    #[msg("Round deadline has not elapsed yet")]
    TimeoutNotElapsed,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
