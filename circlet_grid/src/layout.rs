// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scaled grid layout.
//!
//! ## Algorithm
//!
//! The grid has a natural (logical) content size derived from the cell pitch
//! (`cell_size + cell_margin`), the number of rows and columns, and the header band.
//! Each axis is then measured against its [`Constraint`]:
//!
//! - [`Constraint::Exact`] scales content to the target.
//! - [`Constraint::AtMost`] shrinks content that does not fit and leaves it alone otherwise.
//! - [`Constraint::Unspecified`] keeps the natural size.
//!
//! The larger of the two per-axis factors becomes the uniform scale, so cells stay circular.
//! Exact axes keep their target size and the scaled content is centered inside it.

use kurbo::{Affine, Point, Size, Vec2};

use crate::style::GridStyle;

/// Host constraint for one axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Constraint {
    /// No preference; the grid keeps its natural size on this axis.
    Unspecified,
    /// The grid must be exactly this large.
    Exact(f64),
    /// The grid may be at most this large.
    AtMost(f64),
}

impl Constraint {
    /// Scale factor this constraint asks for, given the natural content extent.
    ///
    /// Empty content never asks for a scale.
    pub fn scale_for(self, content: f64) -> f64 {
        if content <= 0.0 {
            return 1.0;
        }
        match self {
            Self::Unspecified => 1.0,
            Self::Exact(target) => target / content,
            Self::AtMost(max) => {
                if max > content {
                    1.0
                } else {
                    max / content
                }
            }
        }
    }

    /// Final extent on this axis once content has been scaled to `scaled_content`.
    pub fn resolve(self, scaled_content: f64) -> f64 {
        match self {
            Self::Exact(target) => target,
            Self::Unspecified | Self::AtMost(_) => scaled_content,
        }
    }

    /// Extent a host would use with nothing to show.
    pub fn default_extent(self) -> f64 {
        match self {
            Self::Unspecified => 0.0,
            Self::Exact(target) | Self::AtMost(target) => target,
        }
    }
}

/// The adapter-driven shape of a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    /// Number of cells.
    pub count: usize,
    /// Cells per row; never zero.
    pub column_count: usize,
    /// Whether the first row is a header band.
    pub first_row_is_header: bool,
}

impl GridShape {
    /// Create a shape.
    ///
    /// # Panics
    ///
    /// Panics if `column_count` is zero.
    pub fn new(count: usize, column_count: usize, first_row_is_header: bool) -> Self {
        assert!(column_count > 0, "a grid needs at least one column");
        Self {
            count,
            column_count,
            first_row_is_header,
        }
    }

    /// Number of rows, counting a trailing partial row.
    pub fn row_count(&self) -> usize {
        self.count.div_ceil(self.column_count)
    }

    /// True if `index` sits in the header band.
    pub fn is_header(&self, index: usize) -> bool {
        self.first_row_is_header && index < self.column_count
    }
}

/// Result of measuring a grid: scale, centering offset and final size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridLayout {
    pub(crate) style: GridStyle,
    pub(crate) shape: GridShape,
    /// Uniform logical-to-device scale.
    pub scale: f64,
    /// Device-space offset of the logical origin.
    pub offset: Vec2,
    /// Final device-space size.
    pub size: Size,
    /// Natural (unscaled) content size.
    pub content: Size,
}

impl GridLayout {
    /// Measure `shape` under the given per-axis constraints.
    pub fn measure(
        style: &GridStyle,
        shape: GridShape,
        width: Constraint,
        height: Constraint,
    ) -> Self {
        let content = content_size(style, shape);
        let scale_x = width.scale_for(content.width);
        let scale_y = height.scale_for(content.height);
        let scale = if scale_x > scale_y { scale_x } else { scale_y };
        let scaled = content * scale;
        let size = Size::new(width.resolve(scaled.width), height.resolve(scaled.height));
        let offset = Vec2::new(
            (size.width - scaled.width) / 2.0,
            (size.height - scaled.height) / 2.0,
        );
        tracing::trace!(
            count = shape.count,
            columns = shape.column_count,
            scale,
            width = size.width,
            height = size.height,
            "measured grid"
        );
        Self {
            style: *style,
            shape,
            scale,
            offset,
            size,
            content,
        }
    }

    /// Layout with no constraints: natural size, scale 1, no offset.
    pub fn natural(style: &GridStyle, shape: GridShape) -> Self {
        Self::measure(style, shape, Constraint::Unspecified, Constraint::Unspecified)
    }

    /// Style the layout was measured with.
    pub fn style(&self) -> &GridStyle {
        &self.style
    }

    /// Shape the layout was measured with.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Logical-to-device transform: scale first, then offset.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Map a device-space point into logical grid space.
    pub fn to_logical(&self, pt: Point) -> Point {
        ((pt - self.offset).to_vec2() / self.scale).to_point()
    }

    /// Logical y of the top edge of `row`.
    pub fn row_top(&self, row: usize) -> f64 {
        let full = self.style.full_cell_size();
        if self.shape.first_row_is_header && row > 0 {
            self.style.header_height + (row - 1) as f64 * full
        } else {
            row as f64 * full
        }
    }

    /// Logical height of `row`.
    pub fn row_height(&self, row: usize) -> f64 {
        if self.shape.first_row_is_header && row == 0 {
            self.style.header_height
        } else {
            self.style.full_cell_size()
        }
    }

    /// Radius of the base circle that a cell's border stack is built around.
    pub fn base_radius(&self, index: usize) -> f64 {
        if self.shape.is_header(index) {
            self.style.header_height / 2.0
        } else {
            self.style.cell_size / 2.0
        }
    }
}

fn content_size(style: &GridStyle, shape: GridShape) -> Size {
    let full = style.full_cell_size();
    let rows = shape.row_count();
    let width = shape.column_count as f64 * full;
    let height = match (rows, shape.first_row_is_header) {
        (0, _) => 0.0,
        (rows, true) => style.header_height + (rows - 1) as f64 * full,
        (rows, false) => rows as f64 * full,
    };
    Size::new(width, height)
}
