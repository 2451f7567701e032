//! # Conway
//!
//! Conway's Game of Life on a fixed 40x40 grid with finite edges.
//!
//! - [`Grid`]: the cell matrix, the B3/S23 transition and its persisted form
//! - [`SimulationController`]: play/pause state machine, input dispatch and
//!   the 200 ms generation ticker
//! - [`GridStore`]: atomic save/load of a grid at a fixed path
//! - [`patterns`]: preset starting patterns

pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod store;

pub use config::{SimulationConfig, DEFAULT_SAVE_FILE, TICK_INTERVAL};
pub use controller::{
    Action, Effect, PlayState, Renderer, SimulationController, Snapshot, TickOutcome, Ticker,
};
pub use error::{LifeError, Result};
pub use grid::{Grid, GRID_HEIGHT, GRID_SIZE, GRID_WIDTH};
pub use patterns::{Pattern, PATTERNS};
pub use store::GridStore;
