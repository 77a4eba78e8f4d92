//! Domain logic for DisciplineOS.
//!
//! Everything in this crate is pure except the session timer, which talks to
//! its persistence gateway through the [`timer::SessionGateway`] trait.

pub mod analytics;
pub mod edit_mode;
pub mod error;
pub mod goals;
pub mod habits;
pub mod time_tracking;
pub mod timer;
pub mod types;
pub mod validation;
