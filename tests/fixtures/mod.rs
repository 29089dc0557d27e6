//! Test fixtures for postman-route.
//!
//! Provides named grid layouts covering:
//! - The textbook scenarios (single drop point, forced refuel)
//! - Layouts that trigger the depot-as-delivery behaviour of the heuristic
//! - A crowded 9x9 board like the ones drawn in the editor

pub mod layouts;

pub use layouts::*;
