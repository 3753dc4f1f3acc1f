pub mod open_round;
pub mod cancel_round;

pub use open_round::*;
pub use cancel_round::*;
