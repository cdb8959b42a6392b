//! Admin product list state and the request lifecycles that change it.

mod actions;
mod actor;
pub mod reducer;
mod state;

pub use actions::*;
pub use actor::*;
pub use state::*;
