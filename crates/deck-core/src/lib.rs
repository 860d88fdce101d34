pub mod constants;
pub mod deck;
pub mod hand;
pub mod state;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use constants::*;
pub use deck::*;
pub use hand::*;
pub use state::*;
