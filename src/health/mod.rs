// src/health/mod.rs
mod collector;
mod outcome;

pub use collector::collect;
pub use outcome::{AggregateResult, CheckOutcome};
