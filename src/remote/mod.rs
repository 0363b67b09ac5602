//! Remote logging fan-out
//!
//! Forwards one message to every registered backend (crash reporters,
//! telemetry collectors, ...) in registration order.

pub mod backend;
pub mod fanout;

pub use backend::{CallSite, LogRecord, RemoteBackend};
pub use fanout::{LoggerFanout, LoggerFanoutBuilder};
