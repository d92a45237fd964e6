pub use crate::camera::{Camera, CameraSettings, VerticalSampling};
pub use crate::geometry::{hits_sphere, Sphere};
pub use crate::hittable::Hittable;
pub use crate::parsing::config::{Config, Resolution};
pub use crate::profile::Profile;
pub use crate::renderer::{render, Progress, RenderError, Renderer};
pub use crate::shader::{Shader, SkySphereShader};

pub use math::prelude::*;
