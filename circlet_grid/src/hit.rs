// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-to-cell hit testing and its inverse, cell bounds.
//!
//! Both directions share one convention: a cell's bounds span a full pitch horizontally and
//! its row height vertically, so the center of [`GridLayout::cell_bounds`] always hit-tests
//! back to the same index.

use kurbo::{Point, Rect};

use crate::layout::GridLayout;

impl GridLayout {
    /// Map a device-space point to the index of the cell under it.
    ///
    /// Returns `None` for points left of or above the grid, past the last row or column,
    /// or in the unused tail of a partial last row.
    pub fn hit_test(&self, pt: Point) -> Option<usize> {
        let local = self.to_logical(pt);
        let full = self.style.full_cell_size();
        let header = self.style.header_height;
        if !local.x.is_finite() || !local.y.is_finite() || local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "Coordinates are finite and non-negative; truncation is the floor."
        )]
        let (cell_x, cell_y) = {
            let cell_x = (local.x / full) as usize;
            let cell_y = if !self.shape.first_row_is_header {
                (local.y / full) as usize
            } else if local.y < header {
                0
            } else {
                // Shift body rows so every row has the same pitch for the division.
                ((local.y + full - header) / full) as usize
            };
            (cell_x, cell_y)
        };
        if cell_x >= self.shape.column_count || cell_y >= self.shape.row_count() {
            return None;
        }
        let index = cell_y * self.shape.column_count + cell_x;
        (index < self.shape.count).then_some(index)
    }

    /// Logical-space bounds of the cell at `index`, or `None` past the end.
    pub fn logical_cell_bounds(&self, index: usize) -> Option<Rect> {
        if index >= self.shape.count {
            return None;
        }
        let columns = self.shape.column_count;
        let (row, column) = (index / columns, index % columns);
        let full = self.style.full_cell_size();
        let x0 = column as f64 * full;
        let y0 = self.row_top(row);
        Some(Rect::new(x0, y0, x0 + full, y0 + self.row_height(row)))
    }

    /// Device-space bounds of the cell at `index`, or `None` past the end.
    pub fn cell_bounds(&self, index: usize) -> Option<Rect> {
        self.logical_cell_bounds(index)
            .map(|r| self.transform().transform_rect_bbox(r))
    }

    /// Logical-space center of the cell at `index`, or `None` past the end.
    pub fn cell_center(&self, index: usize) -> Option<Point> {
        self.logical_cell_bounds(index).map(|r| r.center())
    }
}
