//! Reconciles the addresses reported by several endpoints into one winner.
//!
//! Results are split by family, filtered, tallied per distinct address string
//! and ranked by `(priority, weight, preferred family, address)`, highest
//! first.

pub mod impls;
pub mod traits;
pub mod types;
