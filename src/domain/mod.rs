//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `mcda` - Pure MCDA calculators (AHP, SAW, WP, TOPSIS) and their building blocks

pub mod foundation;
pub mod mcda;
