use crate::math::*;

use serde::Deserialize;

/// Which pixel index drives the vertical viewport fraction `v`.
#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VerticalSampling {
    /// `v = i / (height - 1)`, the column index, as the reference renderer does.
    /// Every row of the resulting image is identical.
    #[default]
    Column,
    /// `v = j / (height - 1)`, the row index.
    Row,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraSettings {
    pub viewport_height: f32,
    pub focal_length: f32,
    pub vertical_sampling: VerticalSampling,
}

impl Default for CameraSettings {
    fn default() -> Self {
        CameraSettings {
            viewport_height: 2.0,
            focal_length: 1.0,
            vertical_sampling: VerticalSampling::Column,
        }
    }
}

/// Pinhole camera at the origin looking down -z with a flat viewport.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub origin: Vector3,
    pub horizontal: Vector3,
    pub vertical: Vector3,
    pub lower_left_corner: Vector3,
    width: usize,
    height: usize,
    vertical_sampling: VerticalSampling,
}

impl Camera {
    /// Builds the viewport for a `width` x `height` image.
    ///
    /// `width` and `height` must both be at least 2, the renderer checks this
    /// before constructing a camera.
    pub fn new(settings: CameraSettings, width: usize, height: usize) -> Camera {
        debug_assert!(width >= 2 && height >= 2);
        let aspect_ratio = width as f32 / height as f32;
        let viewport_height = settings.viewport_height;
        let viewport_width = aspect_ratio * viewport_height;
        let focal_length = settings.focal_length;

        let origin = Vector3::ZERO;
        let horizontal = Vector3::from_x(viewport_width);
        let vertical = Vector3::from_xy(0.0, viewport_height);
        let lower_left_corner = origin
            - horizontal / 2.0
            - vertical / 2.0
            - Vector3::new(0.0, 0.0, focal_length);

        Camera {
            origin,
            horizontal,
            vertical,
            lower_left_corner,
            width,
            height,
            vertical_sampling: settings.vertical_sampling,
        }
    }

    /// Viewport fractions `(u, v)` for pixel column `i` and row `j`.
    pub fn pixel_uv(&self, i: usize, j: usize) -> (f32, f32) {
        let u = i as f32 / (self.width - 1) as f32;
        let v = match self.vertical_sampling {
            VerticalSampling::Column => i as f32 / (self.height - 1) as f32,
            VerticalSampling::Row => j as f32 / (self.height - 1) as f32,
        };
        (u, v)
    }

    pub fn get_ray(&self, i: usize, j: usize) -> Ray {
        let (u, v) = self.pixel_uv(i, j);
        Ray::new(
            self.origin,
            self.lower_left_corner + self.horizontal * u + self.vertical * v - self.origin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_geometry() {
        let camera = Camera::new(CameraSettings::default(), 400, 225);
        let aspect_ratio = 400.0f32 / 225.0;
        assert_eq!(camera.origin, Vector3::ZERO);
        assert_eq!(camera.horizontal, Vector3::new(aspect_ratio * 2.0, 0.0, 0.0));
        assert_eq!(camera.vertical, Vector3::new(0.0, 2.0, 0.0));
        assert_eq!(
            camera.lower_left_corner,
            Vector3::new(-aspect_ratio, -1.0, -1.0)
        );
    }

    #[test]
    fn test_column_sampling_ignores_row() {
        let camera = Camera::new(CameraSettings::default(), 11, 5);
        for i in 0..11 {
            assert_eq!(camera.get_ray(i, 0), camera.get_ray(i, 4));
        }
        assert_eq!(camera.pixel_uv(4, 2), (0.4, 1.0));
    }

    #[test]
    fn test_row_sampling() {
        let settings = CameraSettings {
            vertical_sampling: VerticalSampling::Row,
            ..CameraSettings::default()
        };
        let camera = Camera::new(settings, 11, 5);
        assert_eq!(camera.pixel_uv(0, 0), (0.0, 0.0));
        assert_eq!(camera.pixel_uv(10, 4), (1.0, 1.0));
        assert_eq!(camera.pixel_uv(5, 2), (0.5, 0.5));
        // bottom left corner and top right corner of the viewport
        assert_eq!(camera.get_ray(0, 0).direction(), camera.lower_left_corner);
        assert_eq!(
            camera.get_ray(10, 4).direction(),
            camera.lower_left_corner + camera.horizontal + camera.vertical
        );
    }

    #[test]
    fn test_focal_length_moves_viewport() {
        let settings = CameraSettings {
            focal_length: 3.0,
            ..CameraSettings::default()
        };
        let camera = Camera::new(settings, 4, 4);
        assert_eq!(camera.lower_left_corner.z(), -3.0);
        assert_eq!(camera.get_ray(2, 2).origin(), Vector3::ZERO);
    }
}
