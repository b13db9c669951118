pub mod partition;
pub mod schema;
pub mod state_machine;
pub mod test_harness;
pub mod types;
pub mod validator;

pub mod api;
pub mod error;
pub mod session;

pub use api::*;
pub use error::*;
pub use session::*;
pub use types::*;

/// Re-export test harness for external use
pub use test_harness::{RecordingGateway, SlowGateway};
