use super::Vector3;

/// Parametric ray, r(t) = origin + direction * t.
///
/// The direction is stored exactly as given and is never normalized.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    origin: Vector3,
    direction: Vector3,
}

impl Ray {
    pub const fn new(origin: Vector3, direction: Vector3) -> Self {
        Ray { origin, direction }
    }
    pub fn origin(&self) -> Vector3 {
        self.origin
    }
    pub fn direction(&self) -> Vector3 {
        self.direction
    }
    // t is unrestricted, negative values land behind the origin
    pub fn at(&self, t: f32) -> Vector3 {
        self.origin + self.direction * t
    }
}

impl Default for Ray {
    fn default() -> Self {
        Ray::new(Vector3::ZERO, Vector3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_return_copies() {
        let ray = Ray::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(0.0, 0.0, -2.0));
        let mut origin = ray.origin();
        origin[0] = 10.0;
        assert_eq!(ray.origin(), Vector3::new(1.0, 2.0, 3.0));
        // not normalized
        assert_eq!(ray.direction(), Vector3::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn test_at() {
        let ray = Ray::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(0.0, 0.0, -2.0));
        assert_eq!(ray.at(0.0), ray.origin());
        assert_eq!(ray.at(1.5), Vector3::new(1.0, 2.0, 0.0));
        assert_eq!(ray.at(-1.0), Vector3::new(1.0, 2.0, 5.0));
    }
}
