//! Vectors.

use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 4-dimensional homogeneous vector.
///
/// The components are stored as a single contiguous column (4x1), in the
/// order x, y, z, w. This is the layout a [`Matrix4`](crate::matrix::Matrix4)
/// multiplies from the right.
///
/// The default vector is `(0, 0, 0, 1)`, the origin as a homogeneous point.
/// The w-component is never renormalized by any operation; perspective
/// division is left to the caller.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    components: [f32; 4],
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            components: [x, y, z, w],
        }
    }

    /// Creates a homogeneous point (w = 1) with the given coordinates.
    #[inline]
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Creates a homogeneous direction (w = 0) with the given components.
    /// Directions are unaffected by the translation part of a transform.
    #[inline]
    pub const fn direction(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    /// The w-axis unit vector.
    #[inline]
    pub const fn unit_w() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.components[1]
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.components[2]
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.components[3]
    }

    /// Sets the x-component.
    #[inline]
    pub const fn set_x(&mut self, x: f32) {
        self.components[0] = x;
    }

    /// Sets the y-component.
    #[inline]
    pub const fn set_y(&mut self, y: f32) {
        self.components[1] = y;
    }

    /// Sets the z-component.
    #[inline]
    pub const fn set_z(&mut self, z: f32) {
        self.components[2] = z;
    }

    /// Sets the w-component.
    #[inline]
    pub const fn set_w(&mut self, w: f32) {
        self.components[3] = w;
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.components[0]
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.components[1]
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.components[2]
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut f32 {
        &mut self.components[3]
    }

    /// The components as a contiguous column, in the order x, y, z, w.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 4] {
        &self.components
    }

    /// The components as a mutable contiguous column.
    #[inline]
    pub const fn as_array_mut(&mut self) -> &mut [f32; 4] {
        &mut self.components
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z() + self.w() * other.w()
    }
}

impl Default for Vector4 {
    #[inline]
    fn default() -> Self {
        Self::unit_w()
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from(components: [f32; 4]) -> Self {
        Self { components }
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        vector.components
    }
}

impl Index<usize> for Vector4 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.components[index]
    }
}

impl_abs_diff_eq!(Vector4, |a, b, epsilon| {
    a.components
        .iter()
        .zip(&b.components)
        .all(|(a, b)| a.abs_diff_eq(b, epsilon))
});

impl_relative_eq!(Vector4, |a, b, epsilon, max_relative| {
    a.components
        .iter()
        .zip(&b.components)
        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
});

impl fmt::Debug for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector4")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .field("w", &self.w())
            .finish()
    }
}

/// Prints the vector as a column, one component per line.
impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        for (idx, component) in self.components.iter().enumerate() {
            let open = if idx == 0 { "[[" } else { " [" };
            let close = if idx == 3 { "]]" } else { "]\n" };
            match precision {
                Some(precision) => write!(f, "{open}{component:.precision$}{close}")?,
                None => write!(f, "{open}{component:?}{close}")?,
            }
        }
        Ok(())
    }
}
