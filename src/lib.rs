//! TRADEPORT - Terminal Trade Partner Portal Library
//!
//! A terminal front end for a trade partner program, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
