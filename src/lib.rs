//! Square Strike core crate.
//!
//! Steer a square around the arena and touch the enemy square before the level
//! clock runs out. Five timed levels raise the score goal and player speed;
//! clearing level five wins the run.
//!
//! Gameplay logic (`geometry`, `entity`, `timer`, `game`) is plain Rust and
//! runs natively for tests. The `web` module is the wasm-bindgen bridge the
//! page talks to; rendering, sound and key wiring stay in JS.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod entity;
pub mod game;
pub mod geometry;
pub mod timer;
pub mod web;

pub use config::{ConfigError, GameConfig};
pub use entity::{Direction, Enemy, Entity, Tint};
pub use game::{Game, GameEvent, LevelSpec, LevelTable, Outcome, Phase};
pub use geometry::{Boundaries, CollisionBox, Position, Size};
pub use timer::{Clock, Countdown, TimerState};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second init (e.g. hot reload) only reports that a logger exists.
    let _ = console_log::init_with_level(log::Level::Info);
}
