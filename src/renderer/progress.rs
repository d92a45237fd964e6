use serde::Deserialize;
use tracing::{debug, info};

/// Receives a callback after every finished scanline.
pub trait Progress {
    /// `remaining` scanlines are still to be written out of `total`.
    fn row_finished(&mut self, remaining: usize, total: usize);
    fn finish(&mut self) {}
}

#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProgressKind {
    Silent,
    #[default]
    Log,
}

pub fn construct_progress(kind: ProgressKind) -> Box<dyn Progress> {
    match kind {
        ProgressKind::Silent => Box::new(SilentProgress),
        ProgressKind::Log => Box::new(LogProgress::new()),
    }
}

pub struct SilentProgress;

impl Progress for SilentProgress {
    fn row_finished(&mut self, _remaining: usize, _total: usize) {}
}

#[derive(Default)]
pub struct LogProgress {
    rows_seen: usize,
}

impl LogProgress {
    pub fn new() -> Self {
        LogProgress::default()
    }
}

impl Progress for LogProgress {
    fn row_finished(&mut self, remaining: usize, total: usize) {
        self.rows_seen += 1;
        debug!("scanlines remaining: {} of {}", remaining, total);
    }
    fn finish(&mut self) {
        info!("done, {} scanlines", self.rows_seen);
    }
}

/// Records every callback, used to check the renderer's reporting order.
#[derive(Default, Debug)]
pub struct RecordingProgress {
    pub remaining: Vec<usize>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn row_finished(&mut self, remaining: usize, _total: usize) {
        self.remaining.push(remaining);
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}
