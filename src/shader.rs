use crate::geometry::Sphere;
use crate::hittable::Hittable;
use crate::math::*;

pub const HIT_COLOR: Vector3 = Vector3::new(1.0, 0.0, 0.0);
pub const HORIZON_COLOR: Vector3 = Vector3::ONE;
pub const SKY_COLOR: Vector3 = Vector3::new(0.5, 0.7, 1.0);

/// Maps a camera ray to a linear color with every channel in [0, 1].
pub trait Shader: Send + Sync {
    fn color(&self, r: Ray) -> Vector3;
}

/// Flat red disc wherever the sphere projects, vertical white to sky-blue
/// gradient everywhere else.
#[derive(Copy, Clone, Debug, Default)]
pub struct SkySphereShader {
    pub sphere: Sphere,
}

impl SkySphereShader {
    pub const fn new(sphere: Sphere) -> Self {
        SkySphereShader { sphere }
    }

    pub fn background(r: Ray) -> Vector3 {
        let direction = r.direction();
        let length = (direction.x() * direction.x()
            + direction.y() * direction.y()
            + direction.z() * direction.z())
        .sqrt();
        let unit_direction = direction / length;
        // unit y is in [-1, 1] so t stays in [0, 1]
        let t = (unit_direction.y() + 1.0) * 0.5;
        HORIZON_COLOR * (1.0 - t) + SKY_COLOR * t
    }
}

impl Shader for SkySphereShader {
    fn color(&self, r: Ray) -> Vector3 {
        if self.sphere.hit(r) {
            return HIT_COLOR;
        }
        SkySphereShader::background(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vector3, b: Vector3) -> bool {
        (a - b).as_array().iter().all(|c| c.abs() < 1e-6)
    }

    #[test]
    fn test_hit_is_red() {
        let shader = SkySphereShader::default();
        let ray = Ray::new(Vector3::ZERO, Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(shader.color(ray), HIT_COLOR);
    }

    #[test]
    fn test_gradient_endpoints() {
        let shader = SkySphereShader::default();
        // straight up, t == 1
        let up = shader.color(Ray::new(Vector3::ZERO, Vector3::Y * 3.0));
        assert!(close(up, SKY_COLOR), "{:?}", up);
        // straight down, t == 0
        let down = shader.color(Ray::new(Vector3::ZERO, Vector3::Y * -0.5));
        assert!(close(down, HORIZON_COLOR), "{:?}", down);
        // horizontal, t == 0.5
        let side = shader.color(Ray::new(Vector3::ZERO, Vector3::X));
        assert!(close(side, Vector3::new(0.75, 0.85, 1.0)), "{:?}", side);
    }

    #[test]
    fn test_channels_stay_in_unit_range() {
        let shader = SkySphereShader::default();
        for i in -4..=4 {
            for j in -4..=4 {
                let direction = Vector3::new(i as f32 * 0.5, j as f32 * 0.5, -1.0);
                let color = shader.color(Ray::new(Vector3::ZERO, direction));
                for c in color.as_array() {
                    assert!((0.0..=1.0).contains(&c), "{:?} -> {:?}", direction, color);
                }
            }
        }
    }

    #[test]
    fn test_custom_sphere() {
        let shader = SkySphereShader::new(Sphere::new(1.0, Vector3::new(5.0, 0.0, 0.0)));
        assert_eq!(shader.color(Ray::new(Vector3::ZERO, Vector3::X)), HIT_COLOR);
        assert_ne!(
            shader.color(Ray::new(Vector3::ZERO, Vector3::new(0.0, 0.0, -1.0))),
            HIT_COLOR
        );
    }
}
