//! A small self-check of the matrix conventions, printing two
//! translation-like matrices, their product and a transformed point.

use mvp_math::{Matrix4, Vector4};
use std::fmt;

/// The matrices and point of the self-check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Demo {
    pub a: Matrix4,
    pub b: Matrix4,
    pub point: Vector4,
}

impl Demo {
    /// Sets up `a` as a translation by `(2, 1)` and `b` as a translation by
    /// `(1, 2)`, both through the named elements `x4` and `y4`, and `point`
    /// as the homogeneous point `(1, 0.5, 0)`.
    pub fn new() -> Self {
        let mut a = Matrix4::new();
        a.set_x4(2.0);
        a.set_y4(1.0);

        let mut b = Matrix4::new();
        b.set_x4(1.0);
        b.set_y4(2.0);

        let point = Vector4::new(1.0, 0.5, 0.0, 1.0);

        Self { a, b, point }
    }

    /// The product `a * b`.
    pub fn product(&self) -> Matrix4 {
        self.a * self.b
    }

    /// The point transformed by `a`.
    pub fn transformed_point(&self) -> Vector4 {
        self.a * self.point
    }
}

impl Default for Demo {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints every stage of the self-check. A precision given in the format
/// string applies to all printed values.
impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_stage(f, "a", &self.a)?;
        f.write_str("\n\n")?;
        write_stage(f, "b", &self.b)?;
        f.write_str("\n\n")?;
        write_stage(f, "a * b", &self.product())?;
        f.write_str("\n\n")?;
        write_stage(f, "v", &self.point)?;
        f.write_str("\n\n")?;
        write_stage(f, "a * v", &self.transformed_point())
    }
}

fn write_stage(f: &mut fmt::Formatter<'_>, label: &str, value: &impl fmt::Display) -> fmt::Result {
    match f.precision() {
        Some(precision) => write!(f, "{label} =\n{value:.precision$}"),
        None => write!(f, "{label} =\n{value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_product_combines_translations() {
        let demo = Demo::new();
        assert_eq!(demo.product(), Matrix4::translation(3.0, 3.0, 0.0));
    }

    #[test]
    fn demo_point_is_translated() {
        assert_eq!(
            Demo::new().transformed_point(),
            Vector4::new(3.0, 1.5, 0.0, 1.0)
        );
    }

    #[test]
    fn displaying_demo_prints_every_stage() {
        let text = Demo::new().to_string();
        assert!(text.starts_with("a =\n[[1.0, 0.0, 0.0, 2.0]"));
        assert!(text.contains("a * b =\n[[1.0, 0.0, 0.0, 3.0]\n [0.0, 1.0, 0.0, 3.0]"));
        assert!(text.ends_with("a * v =\n[[3.0]\n [1.5]\n [0.0]\n [1.0]]"));
    }

    #[test]
    fn displaying_demo_forwards_precision() {
        let text = format!("{:.1}", Demo::new());
        assert!(text.contains("v =\n[[1.0]\n [0.5]"));
        assert!(text.contains("a * b =\n[[1.0, 0.0, 0.0, 3.0]"));
    }
}
