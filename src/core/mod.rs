pub mod config;
pub mod constants;
pub mod field;
pub mod particle;
pub mod render;
pub mod scheduler;
pub mod surface;

pub use config::*;
pub use field::*;
pub use particle::*;
pub use render::*;
pub use scheduler::*;
pub use surface::*;
