mod fixture;
pub mod tracing;

pub use fixture::TestLogs;
pub use tracing::{CapturedEvent, captured_events, init_test_tracing};
