use super::ppm::{quantize_color, PpmWriter};
use super::{prepare_camera, Progress, RenderError, Renderer};

use crate::camera::CameraSettings;
use crate::profile::Profile;
use crate::shader::Shader;

use std::io::Write;
use std::time::Instant;

use tracing::info;

/// Shades and writes one pixel at a time on the calling thread.
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }
}

impl Default for NaiveRenderer {
    fn default() -> Self {
        NaiveRenderer::new()
    }
}

impl Renderer for NaiveRenderer {
    fn render(
        &self,
        width: usize,
        height: usize,
        camera: CameraSettings,
        shader: &dyn Shader,
        sink: &mut dyn Write,
        progress: &mut dyn Progress,
    ) -> Result<Profile, RenderError> {
        let camera = prepare_camera(width, height, camera)?;
        info!("starting render with film resolution {}x{}", width, height);
        let now = Instant::now();

        let mut writer = PpmWriter::new(sink);
        writer.write_header(width, height)?;

        let mut profile = Profile::default();
        for j in (0..height).rev() {
            for i in 0..width {
                let color = shader.color(camera.get_ray(i, j));
                debug_assert!(color.is_finite(), "{:?} at ({}, {})", color, i, j);
                writer.write_pixel(quantize_color(color))?;
                profile.camera_rays += 1;
                profile.pixels_written += 1;
            }
            profile.rows_written += 1;
            progress.row_finished(j, height);
        }
        writer.flush()?;
        progress.finish();

        info!("took {:?}", now.elapsed());
        Ok(profile)
    }
}
