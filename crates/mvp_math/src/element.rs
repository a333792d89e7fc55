//! Names of individual matrix elements.

use std::fmt;

/// The name of an element of a [`Matrix4`](crate::matrix::Matrix4).
///
/// A name is a row letter followed by a column digit. The letters `x`, `y`,
/// `z`, `w` select rows 0 to 3 and the digits `1` to `4` select columns 0 to
/// 3. So `x4` is row 0 of the last column, which holds the x-translation of
/// an affine transform acting on column vectors.
///
/// The variants are declared in column-major order, so the discriminant of a
/// name equals the position of its element in the flat column-major buffer.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementName {
    X1,
    Y1,
    Z1,
    W1,
    X2,
    Y2,
    Z2,
    W2,
    X3,
    Y3,
    Z3,
    W3,
    X4,
    Y4,
    Z4,
    W4,
}

impl ElementName {
    /// All element names in column-major order.
    pub const ALL: [Self; 16] = [
        Self::X1,
        Self::Y1,
        Self::Z1,
        Self::W1,
        Self::X2,
        Self::Y2,
        Self::Z2,
        Self::W2,
        Self::X3,
        Self::Y3,
        Self::Z3,
        Self::W3,
        Self::X4,
        Self::Y4,
        Self::Z4,
        Self::W4,
    ];

    const NAMES: [&'static str; 16] = [
        "x1", "y1", "z1", "w1", "x2", "y2", "z2", "w2", "x3", "y3", "z3", "w3", "x4", "y4", "z4",
        "w4",
    ];

    /// Returns the name of the element at the given row and column, or
    /// [`None`] if either index is outside the matrix.
    #[inline]
    pub const fn from_row_and_column(row: usize, column: usize) -> Option<Self> {
        if row < 4 && column < 4 {
            Some(Self::ALL[4 * column + row])
        } else {
            None
        }
    }

    /// Parses an element name like `"y4"`. Only the lower-case form is
    /// accepted.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .position(|&candidate| candidate == name)
            .map(|idx| Self::ALL[idx])
    }

    /// The row index (0 for `x`, 3 for `w`).
    #[inline]
    pub const fn row(self) -> usize {
        self.column_major_index() % 4
    }

    /// The column index (0 for `1`, 3 for `4`).
    #[inline]
    pub const fn column(self) -> usize {
        self.column_major_index() / 4
    }

    /// The position of the element in a flat column-major buffer.
    #[inline]
    pub const fn column_major_index(self) -> usize {
        self as usize
    }

    /// The position of the element in a flat row-major buffer.
    #[inline]
    pub const fn row_major_index(self) -> usize {
        4 * self.row() + self.column()
    }

    /// The lower-case name, e.g. `"x4"`.
    #[inline]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self.column_major_index()]
    }
}

impl fmt::Display for ElementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_letters_and_column_digits_map_to_indices() {
        assert_eq!((ElementName::X1.row(), ElementName::X1.column()), (0, 0));
        assert_eq!((ElementName::Y2.row(), ElementName::Y2.column()), (1, 1));
        assert_eq!((ElementName::X4.row(), ElementName::X4.column()), (0, 3));
        assert_eq!((ElementName::Y4.row(), ElementName::Y4.column()), (1, 3));
        assert_eq!((ElementName::W1.row(), ElementName::W1.column()), (3, 0));
        assert_eq!((ElementName::Z3.row(), ElementName::Z3.column()), (2, 2));
    }

    #[test]
    fn every_name_is_consistent_with_its_letter_and_digit() {
        for name in ElementName::ALL {
            let text = name.name();
            let mut chars = text.chars();
            let row = match chars.next() {
                Some('x') => 0,
                Some('y') => 1,
                Some('z') => 2,
                Some('w') => 3,
                other => panic!("unexpected row letter {other:?}"),
            };
            let column = chars.next().and_then(|c| c.to_digit(10)).unwrap() as usize - 1;
            assert_eq!(name.row(), row, "{name}");
            assert_eq!(name.column(), column, "{name}");
        }
    }

    #[test]
    fn names_round_trip_through_text() {
        for name in ElementName::ALL {
            assert_eq!(ElementName::from_name(name.name()), Some(name));
            assert_eq!(name.to_string(), name.name());
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(ElementName::from_name("x5"), None);
        assert_eq!(ElementName::from_name("X1"), None);
        assert_eq!(ElementName::from_name("a1"), None);
        assert_eq!(ElementName::from_name(""), None);
    }

    #[test]
    fn names_are_found_from_row_and_column() {
        for name in ElementName::ALL {
            assert_eq!(
                ElementName::from_row_and_column(name.row(), name.column()),
                Some(name)
            );
        }
        assert_eq!(ElementName::from_row_and_column(4, 0), None);
        assert_eq!(ElementName::from_row_and_column(0, 4), None);
    }

    #[test]
    fn buffer_indices_follow_layout() {
        assert_eq!(ElementName::X4.column_major_index(), 12);
        assert_eq!(ElementName::X4.row_major_index(), 3);
        assert_eq!(ElementName::W1.column_major_index(), 3);
        assert_eq!(ElementName::W1.row_major_index(), 12);
    }
}
