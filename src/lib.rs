//! Diplomacy engine library.
//!
//! Exposes the map representation, game/order model, and phase-machine
//! resolver for use by a hosting application (HTTP server, bot, etc.)
//! that owns storage and transport.

pub mod config;
pub mod error;
pub mod game;
pub mod map;
pub mod resolve;
