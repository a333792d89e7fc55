//! Transform matrices prepared for upload as shader uniforms.
//!
//! The vertex shader consuming these uniforms declares three `mat4`
//! uniforms named `model`, `view` and `projection`, and computes the clip
//! space position as `projection * view * model * position`.

use bytemuck::{Pod, Zeroable};
use mvp_math::{Matrix4, Vector4};
use std::fmt;

/// Names of the transform uniforms in the order they are stored in
/// [`TransformUniforms`].
pub const UNIFORM_NAMES: [&str; 3] = ["model", "view", "projection"];

/// The model, view and projection matrices of a draw call.
///
/// The struct is laid out as three consecutive column-major 4x4 `f32`
/// matrices, so [`Self::as_bytes`] can be copied directly into a uniform
/// buffer holding `mat4 model, view, projection` in that order.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct TransformUniforms {
    pub model: Matrix4,
    pub view: Matrix4,
    pub projection: Matrix4,
}

/// The element order of a matrix buffer handed to the GPU.
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UploadOrder {
    /// Elements in column-major order, as stored by [`Matrix4`].
    #[default]
    ColumnMajor,
    /// Elements in row-major order, i.e. the transposed storage.
    RowMajor,
}

/// A single matrix uniform ready for upload, together with the value of the
/// `transpose` argument an OpenGL-style `UniformMatrix4fv` call needs for
/// the buffer to be interpreted as the original matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatrixUpload {
    pub name: &'static str,
    pub elements: [f32; 16],
    pub transpose: bool,
}

impl TransformUniforms {
    /// Creates a new set of transform uniforms.
    pub fn new(model: Matrix4, view: Matrix4, projection: Matrix4) -> Self {
        Self {
            model,
            view,
            projection,
        }
    }

    /// The combined transform `projection * view * model`.
    pub fn combined(&self) -> Matrix4 {
        self.projection * self.view * self.model
    }

    /// Transforms the given homogeneous position to clip space with the
    /// combined transform. No perspective division is performed.
    pub fn transform_position(&self, position: &Vector4) -> Vector4 {
        self.combined() * position
    }

    /// The matrices paired with their uniform names, in storage order.
    pub fn named_matrices(&self) -> [(&'static str, &Matrix4); 3] {
        [
            (UNIFORM_NAMES[0], &self.model),
            (UNIFORM_NAMES[1], &self.view),
            (UNIFORM_NAMES[2], &self.projection),
        ]
    }

    /// Prepares all three matrices for upload with the given element order.
    pub fn uploads(&self, order: UploadOrder) -> [MatrixUpload; 3] {
        self.named_matrices()
            .map(|(name, matrix)| MatrixUpload::new(name, matrix, order))
    }

    /// The raw bytes of the three matrices, each in column-major order.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl UploadOrder {
    /// The `transpose` flag telling a column-major API how to read a buffer
    /// in this order.
    pub const fn transpose_flag(self) -> bool {
        match self {
            Self::ColumnMajor => false,
            Self::RowMajor => true,
        }
    }

    /// Flattens the given matrix in this order.
    pub fn flatten(self, matrix: &Matrix4) -> [f32; 16] {
        match self {
            Self::ColumnMajor => matrix.to_column_major_array(),
            Self::RowMajor => matrix.to_row_major_array(),
        }
    }
}

impl MatrixUpload {
    /// Prepares the given matrix for upload to the uniform with the given
    /// name.
    pub fn new(name: &'static str, matrix: &Matrix4, order: UploadOrder) -> Self {
        log::trace!("Flattening uniform `{name}` in {order:?} order");
        Self {
            name,
            elements: order.flatten(matrix),
            transpose: order.transpose_flag(),
        }
    }

    /// Reconstructs the matrix the uploaded buffer represents.
    pub fn matrix(&self) -> Matrix4 {
        if self.transpose {
            Matrix4::from_row_major(&self.elements)
        } else {
            Matrix4::from_column_major(&self.elements)
        }
    }
}

impl fmt::Display for MatrixUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (transpose = {}): [", self.name, self.transpose)?;
        for (idx, element) in self.elements.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            match f.precision() {
                Some(precision) => write!(f, "{element:.precision$}")?,
                None => write!(f, "{element:?}")?,
            }
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn sample_uniforms() -> TransformUniforms {
        TransformUniforms::new(
            Matrix4::translation(1.0, 0.0, 0.0),
            Matrix4::translation(0.0, 0.0, -5.0),
            Matrix4::from_diagonal(&Vector4::new(2.0, 2.0, 1.0, 1.0)),
        )
    }

    prop_compose! {
        fn matrix_strategy(max_element: f32)(
            elements in prop::array::uniform16(-max_element..max_element)
        ) -> Matrix4 {
            Matrix4::from_column_major(&elements)
        }
    }

    #[test]
    fn default_uniforms_are_identities() {
        let uniforms = TransformUniforms::default();
        assert_eq!(uniforms.model, Matrix4::identity());
        assert_eq!(uniforms.view, Matrix4::identity());
        assert_eq!(uniforms.projection, Matrix4::identity());
        assert_eq!(uniforms.combined(), Matrix4::identity());
    }

    #[test]
    fn combined_transform_applies_model_first() {
        let uniforms = sample_uniforms();
        let position = Vector4::point(0.5, 0.5, 0.0);
        assert_eq!(
            uniforms.transform_position(&position),
            Vector4::new(3.0, 1.0, -5.0, 1.0)
        );
        assert_eq!(
            uniforms.combined(),
            uniforms.projection * (uniforms.view * uniforms.model)
        );
        assert_ne!(
            uniforms.combined(),
            uniforms.model * uniforms.view * uniforms.projection
        );
    }

    #[test]
    fn uniform_bytes_are_three_column_major_matrices() {
        let uniforms = sample_uniforms();
        let bytes = uniforms.as_bytes();
        assert_eq!(bytes.len(), 3 * 16 * 4);

        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(&floats[..16], uniforms.model.as_column_major());
        assert_eq!(&floats[16..32], uniforms.view.as_column_major());
        assert_eq!(&floats[32..], uniforms.projection.as_column_major());
        // Model translation sits in the last column.
        assert_eq!(floats[12], 1.0);
        assert_eq!(floats[16 + 14], -5.0);
    }

    #[test]
    fn uploads_are_named_in_storage_order() {
        let uploads = sample_uniforms().uploads(UploadOrder::ColumnMajor);
        let names: Vec<_> = uploads.iter().map(|upload| upload.name).collect();
        assert_eq!(names, UNIFORM_NAMES);
    }

    #[test]
    fn upload_orders_flatten_with_matching_transpose_flag() {
        let matrix = Matrix4::translation(2.0, 1.0, 0.0);
        assert!(!UploadOrder::ColumnMajor.transpose_flag());
        assert!(UploadOrder::RowMajor.transpose_flag());
        assert_eq!(
            UploadOrder::ColumnMajor.flatten(&matrix),
            matrix.to_column_major_array()
        );
        assert_eq!(
            UploadOrder::RowMajor.flatten(&matrix),
            matrix.to_row_major_array()
        );
    }

    #[test]
    fn column_major_upload_is_not_transposed() {
        let matrix = Matrix4::translation(2.0, 1.0, 0.0);
        let upload = MatrixUpload::new("model", &matrix, UploadOrder::ColumnMajor);
        assert!(!upload.transpose);
        assert_eq!(&upload.elements, matrix.as_column_major());
        assert_eq!(upload.elements[12], 2.0);
        assert_eq!(upload.elements[13], 1.0);
    }

    #[test]
    fn row_major_upload_is_transposed() {
        let matrix = Matrix4::translation(2.0, 1.0, 0.0);
        let upload = MatrixUpload::new("model", &matrix, UploadOrder::RowMajor);
        assert!(upload.transpose);
        assert_eq!(upload.elements[3], 2.0);
        assert_eq!(upload.elements[7], 1.0);
        assert_eq!(upload.elements, matrix.transposed().to_column_major_array());
    }

    #[test]
    fn displaying_upload_lists_flag_and_elements() {
        let upload = MatrixUpload::new("view", &Matrix4::identity(), UploadOrder::ColumnMajor);
        let text = upload.to_string();
        assert!(text.starts_with("view (transpose = false): [1.0, 0.0, 0.0, 0.0, 0.0, 1.0"));
        assert!(text.ends_with("1.0]"));
    }

    proptest! {
        #[test]
        fn uploads_reconstruct_original_matrix(matrix in matrix_strategy(1e3)) {
            for order in [UploadOrder::ColumnMajor, UploadOrder::RowMajor] {
                prop_assert_eq!(MatrixUpload::new("model", &matrix, order).matrix(), matrix);
            }
        }
    }

    proptest! {
        #[test]
        fn combined_transform_matches_sequential_application(
            model in matrix_strategy(2.0),
            view in matrix_strategy(2.0),
            projection in matrix_strategy(2.0),
        ) {
            let uniforms = TransformUniforms::new(model, view, projection);
            let position = Vector4::point(0.25, -0.5, 1.0);
            let sequential = projection * (view * (model * position));
            let combined = uniforms.transform_position(&position);
            prop_assert!(approx::abs_diff_eq!(combined, sequential, epsilon = 1e-3));
        }
    }

    #[test]
    fn transforming_with_identities_leaves_position_unchanged() {
        let position = Vector4::new(1.0, 0.5, 0.0, 1.0);
        assert_abs_diff_eq!(
            TransformUniforms::default().transform_position(&position),
            position
        );
    }
}
