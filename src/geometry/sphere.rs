use crate::hittable::Hittable;
use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    pub origin: Vector3,
}

impl Sphere {
    pub const fn new(radius: f32, origin: Vector3) -> Sphere {
        Sphere { radius, origin }
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Sphere::new(0.5, Vector3::new(0.0, 0.0, -1.0))
    }
}

/// Ray/sphere test using the full quadratic discriminant.
///
/// The direction does not need to be unit length. Only `discriminant > 0` counts
/// as a hit, so a ray that just grazes the sphere (discriminant == 0) misses.
pub fn hits_sphere(center: Vector3, radius: f32, r: Ray) -> bool {
    let oc = r.origin() - center;
    let a = r.direction().dot(r.direction());
    let b = 2.0 * oc.dot(r.direction());
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;
    discriminant > 0.0
}

impl Hittable for Sphere {
    fn hit(&self, r: Ray) -> bool {
        hits_sphere(self.origin, self.radius, r)
    }
}
