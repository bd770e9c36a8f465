//! MCDA Sherpa - Multi-Criteria Decision Analysis calculators
//!
//! This crate ranks decision alternatives with AHP, SAW, WP, and TOPSIS.
//! The calculators in [`domain::mcda`] are pure functions; the application
//! and HTTP layers wrap them with input limits, logging, and a JSON API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
