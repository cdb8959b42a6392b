//! System wiring, startup and shutdown.

pub mod admin_system;
pub mod telemetry;

pub use admin_system::*;
pub use telemetry::*;
