//! Order resolution.
//!
//! Resolves a set of simultaneous orders into outcomes (succeeds, fails,
//! dislodged) using the Kruijswijk algorithm, and drives the phase
//! machine (movement → retreat → adjustment → movement) across a
//! [`crate::game::Game`]'s history.

pub mod build;
pub mod kruijswijk;
pub mod phase;
pub mod retreat;
