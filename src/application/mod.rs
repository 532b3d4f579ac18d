//! Application layer managing state and business workflows.
//!
//! This module coordinates between the domain layer and presentation layer:
//! the wizard lifecycle, the annotation overlay selection, and the dashboard
//! role switcher all live here.

pub mod state;

pub use state::*;
