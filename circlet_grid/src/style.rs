// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface-wide sizing configuration.

/// Logical (unscaled) sizes shared by every cell of a [`Surface`](crate::Surface).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Diameter of a body cell's base circle.
    pub cell_size: f64,
    /// Gap added to `cell_size` to form the pitch between cell centers.
    pub cell_margin: f64,
    /// Base border width that [`BorderWidth::Scaled`](crate::BorderWidth::Scaled) multiplies.
    pub border_width: f64,
    /// Height of the header band; also the diameter of header cells.
    pub header_height: f64,
    /// Text size handed to the painter.
    pub text_size: f64,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            cell_margin: 4.0,
            border_width: 1.0,
            header_height: 24.0,
            text_size: 14.0,
        }
    }
}

/// Reasons a [`GridStyle`] is rejected.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum StyleError {
    /// A field is NaN or infinite.
    #[error("`{field}` must be finite, got {value}")]
    NotFinite {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A size that must be strictly positive is not.
    #[error("`{field}` must be greater than zero, got {value}")]
    NotPositive {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A size that must not be negative is.
    #[error("`{field}` must not be negative, got {value}")]
    Negative {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
}

impl GridStyle {
    /// Pitch between neighboring cell centers: `cell_size + cell_margin`.
    pub fn full_cell_size(&self) -> f64 {
        self.cell_size + self.cell_margin
    }

    /// Check every field, reporting the first problem found.
    pub fn validate(&self) -> Result<(), StyleError> {
        let fields = [
            ("cell_size", self.cell_size, true),
            ("cell_margin", self.cell_margin, false),
            ("border_width", self.border_width, false),
            ("header_height", self.header_height, true),
            ("text_size", self.text_size, true),
        ];
        for (field, value, strictly_positive) in fields {
            if !value.is_finite() {
                return Err(StyleError::NotFinite { field, value });
            }
            if strictly_positive && value <= 0.0 {
                return Err(StyleError::NotPositive { field, value });
            }
            if value < 0.0 {
                return Err(StyleError::Negative { field, value });
            }
        }
        Ok(())
    }
}
