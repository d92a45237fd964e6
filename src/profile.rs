use tracing::info;

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize, // one per pixel
    pub pixels_written: usize,
    pub rows_written: usize,
}

impl Profile {
    pub fn new(camera_rays: usize, pixels_written: usize, rows_written: usize) -> Self {
        Profile {
            camera_rays,
            pixels_written,
            rows_written,
        }
    }
    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.pixels_written + other.pixels_written,
            self.rows_written + other.rows_written,
        )
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            camera_rays,
            pixels_written,
            rows_written,
        } = self;
        info!(
            "{} total camera rays at {} per second and {} per second per thread",
            camera_rays,
            camera_rays as f32 / elapsed,
            camera_rays as f32 / elapsed / (threads as f32)
        );
        info!(
            "{} pixels in {} rows written in {}s",
            pixels_written, rows_written, elapsed
        );
    }
}
