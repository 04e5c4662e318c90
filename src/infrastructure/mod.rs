pub mod response_source;
pub mod session_timer;

pub use response_source::{PendingRead, ReadOutcome, ResponseSource};
pub use session_timer::{SessionTimer, TimerState};
