//! Simulation core and terminal front end for a snake that wakes up.
//!
//! The playable binary lives in `main.rs`; everything here is the library
//! surface so the deterministic simulation can be driven from tests.

pub mod awareness;
pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod input;
pub mod movement;
pub mod narrative;
pub mod progression;
pub mod renderer;
pub mod rng;
pub mod score;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
