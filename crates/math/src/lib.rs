mod ray;
mod vec;

pub use ray::*;
pub use vec::*;

pub mod prelude {
    pub use crate::{Ray, Vector3};
}
