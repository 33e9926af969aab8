//////////////////////////
// lib.rs
//////////////////////////

pub mod types;
pub mod error;
pub mod game;
pub mod position;
pub mod render;
pub mod input;
pub mod config;
pub mod session;

pub use types::*;
pub use error::{ConfigError, InputError, MoveError, PositionError, SessionError};
pub use game::{GameState, PromotionSource};
pub use config::SessionConfig;
