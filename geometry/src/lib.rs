//! Geometry primitives and the ray / bounds intercept.

mod bounds;
mod intercept;
mod line;
mod point;
mod ray;
mod size;

pub use bounds::*;
pub use intercept::*;
pub use line::*;
pub use point::*;
pub use ray::*;
pub use size::*;

pub trait Contains<Other> {
    fn contains(&self, other: Other) -> bool;
}
