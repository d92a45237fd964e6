use super::ppm::{quantize_color, PpmWriter};
use super::{prepare_camera, Progress, RenderError, Renderer};

use crate::camera::CameraSettings;
use crate::profile::Profile;
use crate::shader::Shader;

use std::io::Write;
use std::time::Instant;

use rayon::prelude::*;
use tracing::info;

/// Shades the pixels of each scanline on a rayon pool, then writes the row in
/// column order. Output is byte-identical to `NaiveRenderer`; at most one row of
/// quantized pixels is held in memory.
pub struct RowParallelRenderer {
    threads: usize,
}

impl RowParallelRenderer {
    pub fn new(threads: usize) -> RowParallelRenderer {
        RowParallelRenderer {
            threads: threads.max(1),
        }
    }
}

impl Renderer for RowParallelRenderer {
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
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()?;
        info!(
            "starting render with film resolution {}x{} on {} threads",
            width, height, self.threads
        );
        let now = Instant::now();

        let mut writer = PpmWriter::new(sink);
        writer.write_header(width, height)?;

        let mut profile = Profile::default();
        let mut row: Vec<[u8; 3]> = Vec::with_capacity(width);
        for j in (0..height).rev() {
            pool.install(|| {
                (0..width)
                    .into_par_iter()
                    .map(|i| quantize_color(shader.color(camera.get_ray(i, j))))
                    .collect_into_vec(&mut row)
            });
            writer.write_row(&row)?;
            profile = profile.combine(Profile::new(width, width, 1));
            progress.row_finished(j, height);
        }
        writer.flush()?;
        progress.finish();

        info!("took {:?}", now.elapsed());
        Ok(profile)
    }

    fn threads(&self) -> usize {
        self.threads
    }
}
