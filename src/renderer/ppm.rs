use crate::math::Vector3;

use std::io::{self, Write};

pub const MAX_CHANNEL: u8 = 255;

/// `floor(255.999 * channel)`, computed in double precision and clamped to [0, 255].
pub fn quantize(channel: f32) -> u8 {
    let scaled = (255.999f64 * channel as f64).floor();
    scaled.clamp(0.0, MAX_CHANNEL as f64) as u8
}

pub fn quantize_color(color: Vector3) -> [u8; 3] {
    [
        quantize(color.x()),
        quantize(color.y()),
        quantize(color.z()),
    ]
}

/// Streams an ASCII (`P3`) portable pixmap, one `R G B` line per pixel.
pub struct PpmWriter<W: Write> {
    sink: W,
}

impl<W: Write> PpmWriter<W> {
    pub fn new(sink: W) -> Self {
        PpmWriter { sink }
    }

    pub fn write_header(&mut self, width: usize, height: usize) -> io::Result<()> {
        write!(self.sink, "P3\n{} {}\n{}\n", width, height, MAX_CHANNEL)
    }

    pub fn write_pixel(&mut self, [r, g, b]: [u8; 3]) -> io::Result<()> {
        writeln!(self.sink, "{} {} {}", r, g, b)
    }

    pub fn write_row(&mut self, row: &[[u8; 3]]) -> io::Result<()> {
        for pixel in row {
            self.write_pixel(*pixel)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}
