pub mod submit_observation;
pub mod confirm_report;

pub use submit_observation::*;
pub use confirm_report::*;
