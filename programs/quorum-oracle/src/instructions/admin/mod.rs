pub mod init_aggregator;
pub mod update_timeout;

pub use init_aggregator::*;
pub use update_timeout::*;
