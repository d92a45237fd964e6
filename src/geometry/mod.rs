mod sphere;

pub use sphere::{hits_sphere, Sphere};
