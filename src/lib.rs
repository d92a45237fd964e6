pub use math;

pub mod camera;
pub mod geometry;
pub mod hittable;
pub mod parsing;
pub mod prelude;
pub mod profile;
pub mod renderer;
pub mod selfcheck;
pub mod shader;
