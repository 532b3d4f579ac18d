//! Infrastructure layer providing external collaborators.
//!
//! This module contains the file-backed draft store, the mock submission
//! endpoint, and the order-history CSV exporter.

pub mod persistence;

pub use persistence::*;
