use crate::math::Ray;

/// Binary visibility test. Implementors report whether a ray meets them at all,
/// no hit point, normal or distance is produced.
pub trait Hittable: Send + Sync {
    fn hit(&self, r: Ray) -> bool;
}
