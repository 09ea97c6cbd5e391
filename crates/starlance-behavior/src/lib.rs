//! Decision logic for STARLANCE.
//!
//! Enemy pursuit steering and the player damage state machine, written as
//! pure functions over plain data so they can be tested without a world.

pub mod pursuit;
pub mod vitals;

pub use starlance_core as core;

#[cfg(test)]
mod tests;
