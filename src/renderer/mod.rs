mod naive;
pub mod ppm;
pub mod progress;
mod row_parallel;

pub use naive::NaiveRenderer;
pub use progress::{construct_progress, Progress, ProgressKind};
pub use row_parallel::RowParallelRenderer;

use crate::camera::{Camera, CameraSettings};
use crate::parsing::config::{Config, RendererType};
use crate::profile::Profile;
use crate::shader::Shader;

use std::io::Write;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("image must be at least 2x2 pixels, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("failed to write image data: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Checks the raster size and builds the camera for it.
///
/// Nothing may be written to the sink before this succeeds.
pub fn prepare_camera(
    width: usize,
    height: usize,
    settings: CameraSettings,
) -> Result<Camera, RenderError> {
    if width < 2 || height < 2 {
        return Err(RenderError::InvalidDimension { width, height });
    }
    Ok(Camera::new(settings, width, height))
}

pub trait Renderer {
    /// Writes a complete `P3` image to `sink`.
    ///
    /// Rows go out top to bottom (row index `height - 1` first), pixels left to
    /// right. `progress` is called once per row. Any write failure aborts the rest
    /// of the raster.
    fn render(
        &self,
        width: usize,
        height: usize,
        camera: CameraSettings,
        shader: &dyn Shader,
        sink: &mut dyn Write,
        progress: &mut dyn Progress,
    ) -> Result<Profile, RenderError>;

    fn threads(&self) -> usize {
        1
    }
}

pub fn construct_renderer(config: &Config) -> Box<dyn Renderer> {
    match config.renderer {
        RendererType::Naive => Box::new(NaiveRenderer::new()),
        RendererType::RowParallel { threads } => Box::new(RowParallelRenderer::new(threads)),
    }
}

/// Single threaded render with no progress reporting.
pub fn render(
    width: usize,
    height: usize,
    camera: CameraSettings,
    shader: &dyn Shader,
    sink: &mut dyn Write,
) -> Result<Profile, RenderError> {
    NaiveRenderer::new().render(
        width,
        height,
        camera,
        shader,
        sink,
        &mut progress::SilentProgress,
    )
}
