//! Configuration of transforms through RON files.

use crate::{io, uniform::TransformUniforms};
use anyhow::{Result, bail};
use mvp_math::{ElementName, Matrix4, Vector4};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};

/// A matrix described by the elements that differ from the identity.
///
/// In RON, a translation by `(2, 1, 0)` reads
/// `(elements: {x4: 2.0, y4: 1.0})`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixSpec {
    /// Element values overriding the identity, keyed by element name.
    pub elements: BTreeMap<ElementName, f32>,
}

/// A transform configuration: the model, view and projection matrices and
/// the homogeneous points to push through their combination.
///
/// Omitted matrices are the identity and omitted points are an empty list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub model: MatrixSpec,
    pub view: MatrixSpec,
    pub projection: MatrixSpec,
    /// Points as `(x, y, z, w)` tuples.
    pub points: Vec<Vector4>,
}

impl MatrixSpec {
    /// Builds the matrix by applying the element overrides to the identity.
    pub fn to_matrix(&self) -> Matrix4 {
        let mut matrix = Matrix4::identity();
        for (&name, &value) in &self.elements {
            matrix.set(name, value);
        }
        matrix
    }

    /// Describes the given matrix by its elements that differ from the
    /// identity.
    pub fn from_matrix(matrix: &Matrix4) -> Self {
        let identity = Matrix4::identity();
        let elements = ElementName::ALL
            .into_iter()
            .filter(|&name| matrix.get(name).to_bits() != identity.get(name).to_bits())
            .map(|name| (name, matrix.get(name)))
            .collect();
        Self { elements }
    }
}

impl TransformConfig {
    /// Parses the configuration from the RON file at the given path.
    pub fn from_ron_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = io::parse_ron_file(file_path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses the configuration from a RON string.
    pub fn from_ron_str(text: &str) -> Result<Self> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to pretty-printed RON.
    pub fn to_ron_string(&self) -> Result<String> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// The uniforms described by the configuration.
    pub fn uniforms(&self) -> TransformUniforms {
        TransformUniforms::new(
            self.model.to_matrix(),
            self.view.to_matrix(),
            self.projection.to_matrix(),
        )
    }

    /// Every configured point transformed by `projection * view * model`.
    pub fn transformed_points(&self) -> Vec<Vector4> {
        let combined = self.uniforms().combined();
        self.points.iter().map(|point| combined * point).collect()
    }

    /// Rejects non-finite element values and point components.
    fn validate(&self) -> Result<()> {
        for (label, spec) in [
            ("model", &self.model),
            ("view", &self.view),
            ("projection", &self.projection),
        ] {
            for (name, value) in &spec.elements {
                if !value.is_finite() {
                    bail!(
                        "Element `{name}` of the {label} matrix is not finite: {value}"
                    );
                }
            }
        }
        for (idx, point) in self.points.iter().enumerate() {
            if !point.as_array().iter().all(|c| c.is_finite()) {
                bail!("Point {idx} has non-finite components: {point:?}");
            }
        }
        log::debug!(
            "Validated transform configuration with {} points",
            self.points.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSLATIONS: &str = r"
        (
            model: (elements: {x4: 2.0, y4: 1.0}),
            view: (elements: {x4: 1.0, y4: 2.0}),
            points: [(1.0, 0.5, 0.0, 1.0)],
        )
    ";

    #[test]
    fn empty_configuration_is_identity_without_points() {
        let config = TransformConfig::from_ron_str("()").unwrap();
        assert_eq!(config, TransformConfig::default());
        assert_eq!(config.uniforms(), TransformUniforms::default());
        assert!(config.transformed_points().is_empty());
    }

    #[test]
    fn parsing_named_elements_sets_matrix_cells() {
        let config = TransformConfig::from_ron_str(TRANSLATIONS).unwrap();
        let model = config.model.to_matrix();
        assert_eq!(model.x4(), 2.0);
        assert_eq!(model.y4(), 1.0);
        assert_eq!(model.element(0, 3), 2.0);
        assert_eq!(model.element(1, 3), 1.0);
        assert_eq!(config.projection.to_matrix(), Matrix4::identity());
        assert_eq!(config.points, vec![Vector4::new(1.0, 0.5, 0.0, 1.0)]);
    }

    #[test]
    fn transforming_configured_points_applies_all_matrices() {
        let config = TransformConfig::from_ron_str(TRANSLATIONS).unwrap();
        assert_eq!(
            config.transformed_points(),
            vec![Vector4::new(4.0, 3.5, 0.0, 1.0)]
        );
    }

    #[test]
    fn unknown_element_names_are_rejected() {
        let result = TransformConfig::from_ron_str("(model: (elements: {v4: 1.0}))");
        assert!(result.is_err());
    }

    #[test]
    fn non_finite_elements_are_rejected() {
        let error = TransformConfig::from_ron_str("(view: (elements: {z3: inf}))").unwrap_err();
        assert!(error.to_string().contains("z3"));
        assert!(error.to_string().contains("view"));
    }

    #[test]
    fn non_finite_points_are_rejected() {
        let error = TransformConfig::from_ron_str("(points: [(1.0, NaN, 0.0, 1.0)])").unwrap_err();
        assert!(error.to_string().starts_with("Point 0"));
    }

    #[test]
    fn matrix_spec_lists_only_non_identity_elements() {
        let mut matrix = Matrix4::translation(3.0, 0.0, -1.0);
        matrix.set_w4(2.0);
        let spec = MatrixSpec::from_matrix(&matrix);
        let names: Vec<_> = spec.elements.keys().copied().collect();
        assert_eq!(names, [ElementName::X4, ElementName::Z4, ElementName::W4]);
        assert_eq!(spec.to_matrix(), matrix);
    }

    #[test]
    fn configuration_survives_ron_round_trip() {
        let config = TransformConfig::from_ron_str(TRANSLATIONS).unwrap();
        let text = config.to_ron_string().unwrap();
        assert_eq!(TransformConfig::from_ron_str(&text).unwrap(), config);
    }
}
