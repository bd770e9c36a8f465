//! Adapters layer - Implementations of external interfaces.

pub mod http;
