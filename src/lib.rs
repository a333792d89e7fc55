//! Model, view and projection transforms prepared for GPU uniform upload.

pub mod config;
pub mod demo;
pub mod io;
pub mod uniform;

pub use mvp_math as math;
