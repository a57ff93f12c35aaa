pub mod app;
pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod geometry;
pub mod orbit;
pub mod palette;
pub mod panel;
pub mod scene;
pub mod ticker;
pub mod transition;
pub mod tween;
pub mod uniforms;
pub mod viewport;

pub static GRADIENT_WGSL: &str = include_str!("../shaders/gradient.wgsl");

pub use app::*;
pub use camera::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use cursor::*;
pub use error::SceneError;
pub use geometry::*;
pub use orbit::*;
pub use palette::*;
pub use panel::*;
pub use scene::*;
pub use ticker::*;
pub use transition::*;
pub use tween::*;
pub use uniforms::*;
pub use viewport::*;
