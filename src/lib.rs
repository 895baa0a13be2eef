//! Last Warrior library crate. Re-exports all modules for integration testing.
//!
//! The binary crate (`main.rs`) is the actual game entry point.
//! This library crate exposes the same modules so that `tests/` integration
//! tests can drive the simulation headless, without a window or GPU.

pub mod shared;
pub mod input;
pub mod player;
pub mod combat;
pub mod crafting;
pub mod quests;
pub mod encounter;
pub mod session;
pub mod deferred;
pub mod ui;
pub mod data;
