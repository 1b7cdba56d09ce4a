mod vector;
pub use vector::*;
mod region;
pub use region::*;
mod body;
pub use body::*;
mod broad_phase;
pub use broad_phase::*;
mod narrow_phase;
pub use narrow_phase::*;
mod spawner;
pub use spawner::*;
mod render;
pub use render::*;
mod config;
pub use config::*;
mod world;
pub use world::*;
