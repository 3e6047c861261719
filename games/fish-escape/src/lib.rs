//! Fish Escape: a fish dodges a hungry hamster and collects respawning stars.

use wasm_bindgen::prelude::*;

pub mod audio;
pub mod controls;
pub mod entities;
pub mod game;
pub mod hamster;
pub mod kinematics;
pub mod level;
pub mod movement;
pub mod proximity;
pub mod state;
pub mod tuning;

pub use game::FishEscape;

tidepool_web::export_game!(FishEscape, "fish-escape");
