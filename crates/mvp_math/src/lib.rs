//! Homogeneous 4x4 matrices and 4-vectors for model, view and projection
//! transforms.

#[macro_use]
mod macros;

pub mod element;
pub mod matrix;
pub mod vector;

pub use element::ElementName;
pub use matrix::{Matrix4, Operand, Product};
pub use vector::Vector4;
