pub mod controllers;
pub mod game;
pub mod hands;
pub mod input_context;
pub mod input_events;
pub mod options;
pub mod physics;
pub mod teleport;
pub mod time;
pub mod vr_config;
pub mod world;

pub use game::{FrameReport, Game};
pub use options::{GameOptions, OptionsError};
