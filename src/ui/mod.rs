pub mod app_implementation;
pub mod app_state;
pub mod components;

pub use app_state::*;
pub use components::*;
