//! Matrices.

use crate::{element::ElementName, vector::Vector4};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A 4x4 matrix for homogeneous transforms.
///
/// The elements are stored in column-major order: the element at row `r` and
/// column `c` lives at `columns[c][r]`, and [`Self::as_column_major`] exposes
/// the 16 floats in exactly that order. A column-major uniform upload can
/// take the buffer as is; an API expecting row-major input needs
/// [`Self::to_row_major_array`] (or its own transpose flag) instead.
///
/// Elements can be addressed by name, using a row letter (`x`, `y`, `z`,
/// `w`) followed by a column digit (`1` to `4`). See [`ElementName`].
///
/// ```
/// # use mvp_math::{matrix::Matrix4, vector::Vector4};
/// let mut translation = Matrix4::identity();
/// translation.set_x4(2.0);
/// translation.set_y4(1.0);
///
/// let moved = translation * Vector4::new(1.0, 0.5, 0.0, 1.0);
/// assert_eq!(moved, Vector4::new(3.0, 1.5, 0.0, 1.0));
/// ```
///
/// Only matrices and vectors can be multiplied onto a matrix:
///
/// ```compile_fail
/// # use mvp_math::matrix::Matrix4;
/// let _ = Matrix4::identity() * 2.0_f32;
/// ```
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    columns: [Vector4; 4],
}

/// The right-hand side of a matrix multiplication chosen at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    Matrix(Matrix4),
    Vector(Vector4),
}

/// The result of multiplying a matrix with an [`Operand`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Product {
    Matrix(Matrix4),
    Vector(Vector4),
}

impl Matrix4 {
    /// Creates a new matrix, initialized to the identity.
    #[inline]
    pub const fn new() -> Self {
        Self::identity()
    }

    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_columns(
            Vector4::unit_x(),
            Vector4::unit_y(),
            Vector4::unit_z(),
            Vector4::unit_w(),
        )
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_columns(
            Vector4::zeros(),
            Vector4::zeros(),
            Vector4::zeros(),
            Vector4::zeros(),
        )
    }

    /// Creates a diagonal matrix with the given vector as the diagonal.
    #[inline]
    pub const fn from_diagonal(diagonal: &Vector4) -> Self {
        let mut m = Self::zeros();
        m.set_x1(diagonal.x());
        m.set_y2(diagonal.y());
        m.set_z3(diagonal.z());
        m.set_w4(diagonal.w());
        m
    }

    /// Creates the homogeneous transform translating points by the given
    /// displacement, i.e. the identity with `x4`, `y4` and `z4` set.
    #[inline]
    pub const fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::identity();
        m.set_x4(x);
        m.set_y4(y);
        m.set_z4(z);
        m
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub const fn from_columns(
        column_1: Vector4,
        column_2: Vector4,
        column_3: Vector4,
        column_4: Vector4,
    ) -> Self {
        Self {
            columns: [column_1, column_2, column_3, column_4],
        }
    }

    /// Creates a matrix with the given rows.
    #[inline]
    pub const fn from_rows(row_1: Vector4, row_2: Vector4, row_3: Vector4, row_4: Vector4) -> Self {
        Self::from_columns(row_1, row_2, row_3, row_4).transposed()
    }

    /// Creates a matrix from 16 elements in column-major order.
    #[inline]
    pub fn from_column_major(elements: &[f32; 16]) -> Self {
        *bytemuck::cast_ref::<_, Self>(elements)
    }

    /// Creates a matrix from 16 elements in row-major order.
    #[inline]
    pub fn from_row_major(elements: &[f32; 16]) -> Self {
        Self::from_column_major(elements).transposed()
    }

    /// Returns the element at row `row` and column `column`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, row: usize, column: usize) -> f32 {
        self.columns[column][row]
    }

    /// Returns a mutable reference to the element at row `row` and column
    /// `column`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element_mut(&mut self, row: usize, column: usize) -> &mut f32 {
        &mut self.columns[column][row]
    }

    /// Returns the element with the given name.
    #[inline]
    pub fn get(&self, name: ElementName) -> f32 {
        self.element(name.row(), name.column())
    }

    /// Sets the element with the given name. Any value is accepted,
    /// including non-finite ones.
    #[inline]
    pub fn set(&mut self, name: ElementName, value: f32) {
        *self.element_mut(name.row(), name.column()) = value;
    }

    /// The column with the given index.
    ///
    /// # Panics
    /// If the index is outside the matrix.
    #[inline]
    pub fn column(&self, column: usize) -> &Vector4 {
        &self.columns[column]
    }

    /// Replaces the column with the given index.
    ///
    /// # Panics
    /// If the index is outside the matrix.
    #[inline]
    pub fn set_column(&mut self, column: usize, values: Vector4) {
        self.columns[column] = values;
    }

    /// The row with the given index, gathered from the four columns.
    ///
    /// # Panics
    /// If the index is outside the matrix.
    #[inline]
    pub fn row(&self, row: usize) -> Vector4 {
        Vector4::new(
            self.columns[0][row],
            self.columns[1][row],
            self.columns[2][row],
            self.columns[3][row],
        )
    }

    /// Returns the diagonal of this matrix as a vector.
    #[inline]
    pub fn diagonal(&self) -> Vector4 {
        Vector4::new(self.x1(), self.y2(), self.z3(), self.w4())
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub const fn transposed(&self) -> Self {
        let c = &self.columns;
        Self::from_columns(
            Vector4::new(c[0].x(), c[1].x(), c[2].x(), c[3].x()),
            Vector4::new(c[0].y(), c[1].y(), c[2].y(), c[3].y()),
            Vector4::new(c[0].z(), c[1].z(), c[2].z(), c[3].z()),
            Vector4::new(c[0].w(), c[1].w(), c[2].w(), c[3].w()),
        )
    }

    /// The 16 elements in column-major order, borrowed without copying.
    #[inline]
    pub fn as_column_major(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    /// The 16 elements in column-major order.
    #[inline]
    pub fn to_column_major_array(&self) -> [f32; 16] {
        *self.as_column_major()
    }

    /// The 16 elements in row-major order.
    #[inline]
    pub fn to_row_major_array(&self) -> [f32; 16] {
        self.transposed().to_column_major_array()
    }

    /// Returns a matrix with the given closure applied to each element.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self {
            columns: self
                .columns
                .map(|column| column.as_array().map(&mut f).into()),
        }
    }

    /// Multiplies this matrix with a right-hand side that is either a matrix
    /// or a vector.
    #[inline]
    pub fn multiply(&self, operand: impl Into<Operand>) -> Product {
        match operand.into() {
            Operand::Matrix(matrix) => Product::Matrix(self * matrix),
            Operand::Vector(vector) => Product::Vector(self * vector),
        }
    }

    #[inline]
    fn zip_map(&self, other: &Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
        let mut result = *self;
        for (a, b) in result
            .columns
            .iter_mut()
            .flat_map(Vector4::as_array_mut)
            .zip(other.as_column_major())
        {
            *a = f(*a, *b);
        }
        result
    }
}

impl_element_accessors!(
    Matrix4,
    x1 => (0, 0), y1 => (1, 0), z1 => (2, 0), w1 => (3, 0),
    x2 => (0, 1), y2 => (1, 1), z2 => (2, 1), w2 => (3, 1),
    x3 => (0, 2), y3 => (1, 2), z3 => (2, 2), w3 => (3, 2),
    x4 => (0, 3), y4 => (1, 3), z4 => (2, 3), w4 => (3, 3),
);

impl Default for Matrix4 {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[[f32; 4]; 4]> for Matrix4 {
    /// Interprets the outer array as the list of columns.
    #[inline]
    fn from(columns: [[f32; 4]; 4]) -> Self {
        Self {
            columns: columns.map(Vector4::from),
        }
    }
}

impl From<Matrix4> for [[f32; 4]; 4] {
    #[inline]
    fn from(matrix: Matrix4) -> Self {
        matrix.columns.map(Into::into)
    }
}

impl_binop!(Add, add, Matrix4, Matrix4, Matrix4, |a, b| {
    a.zip_map(b, |a, b| a + b)
});

impl_binop!(Sub, sub, Matrix4, Matrix4, Matrix4, |a, b| {
    a.zip_map(b, |a, b| a - b)
});

impl_binop!(Mul, mul, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4 {
        columns: b.columns.map(|column| a * column),
    }
});

impl_binop!(Mul, mul, Matrix4, Vector4, Vector4, |a, b| {
    let mut result = [0.0; 4];
    for (column, &factor) in a.columns.iter().zip(b.as_array()) {
        for (sum, &element) in result.iter_mut().zip(column.as_array()) {
            *sum += element * factor;
        }
    }
    Vector4::from(result)
});

impl_binop_assign!(AddAssign, add_assign, Matrix4, Matrix4, |a, b| {
    *a = *a + b;
});

impl_binop_assign!(SubAssign, sub_assign, Matrix4, Matrix4, |a, b| {
    *a = *a - b;
});

impl_binop_assign!(MulAssign, mul_assign, Matrix4, Matrix4, |a, b| {
    *a = *a * b;
});

impl_abs_diff_eq!(Matrix4, |a, b, epsilon| {
    a.columns
        .iter()
        .zip(&b.columns)
        .all(|(a, b)| a.abs_diff_eq(b, epsilon))
});

impl_relative_eq!(Matrix4, |a, b, epsilon, max_relative| {
    a.columns
        .iter()
        .zip(&b.columns)
        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
});

impl fmt::Debug for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Matrix4");
        for name in ElementName::ALL {
            s.field(name.name(), &self.get(name));
        }
        s.finish()
    }
}

/// Prints the matrix row by row.
impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        for row in 0..4 {
            f.write_str(if row == 0 { "[[" } else { " [" })?;
            for column in 0..4 {
                if column > 0 {
                    f.write_str(", ")?;
                }
                let element = self.element(row, column);
                match precision {
                    Some(precision) => write!(f, "{element:.precision$}")?,
                    None => write!(f, "{element:?}")?,
                }
            }
            f.write_str(if row == 3 { "]]" } else { "]\n" })?;
        }
        Ok(())
    }
}

impl From<Matrix4> for Operand {
    #[inline]
    fn from(matrix: Matrix4) -> Self {
        Self::Matrix(matrix)
    }
}

impl From<Vector4> for Operand {
    #[inline]
    fn from(vector: Vector4) -> Self {
        Self::Vector(vector)
    }
}

impl Product {
    /// Returns the matrix if the product is a matrix.
    #[inline]
    pub fn matrix(self) -> Option<Matrix4> {
        match self {
            Self::Matrix(matrix) => Some(matrix),
            Self::Vector(_) => None,
        }
    }

    /// Returns the vector if the product is a vector.
    #[inline]
    pub fn vector(self) -> Option<Vector4> {
        match self {
            Self::Vector(vector) => Some(vector),
            Self::Matrix(_) => None,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matrix(matrix) => fmt::Display::fmt(matrix, f),
            Self::Vector(vector) => fmt::Display::fmt(vector, f),
        }
    }
}
