use anchor_lang::prelude::*;

#[event]
pub struct AggregatorInitialized {
    pub requester: Pubkey,
    pub reporter_count: u8,
    pub threshold: u8,
    pub timeout_seconds: i64,
}

#[event]
pub struct RoundOpened {
    pub round_id: u64,
    pub opened_at: i64,
}

#[event]
pub struct ObservationSubmitted {
    pub round_id: u64,
    pub reporter: Pubkey,
    pub value: i64,
    pub observation_count: u8,
}

#[event]
pub struct ReportComputed {
    pub round_id: u64,
    pub value: i64,
}

#[event]
pub struct ReportConfirmed {
    pub round_id: u64,
    pub reporter: Pubkey,
    pub confirmation_count: u8,
}

#[event]
pub struct RoundFinalized {
    pub round_id: u64,
    pub value: i64,
}

#[event]
pub struct RoundCancelled {
    pub round_id: u64,
    pub opened_at: i64,
    pub cancelled_at: i64,
}
