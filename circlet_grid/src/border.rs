// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Border stacks: the concentric decorations drawn around a cell.
//!
//! ## Ring geometry
//!
//! A cell's borders are laid out around its base radius. The first pass walks the stack
//! forward and grows the radius by every border's effective width, giving the radius of
//! the whole shape. The second pass walks the stack in reverse, shrinking the running
//! radius by each ring's width before emitting it. The result, in paint order, is:
//!
//! - the last border occupies the outermost band and is painted first;
//! - the first border hugs the base circle and is painted last, directly around the text.
//!
//! Painting back to front lets a [`BorderStyle::Fill`] disk cover everything inside it
//! without hiding the rings outside it.

use alloc::vec::Vec;

use crate::color::Rgba;

/// How a ring is rendered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    /// An outlined circle; the area inside it is first cleared to the background.
    Stroke,
    /// A filled disk reaching the ring's outer edge.
    Fill,
}

/// Width of a single border.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BorderWidth {
    /// The ring is skipped entirely; it neither paints nor takes up room.
    None,
    /// Absolute width in logical units.
    Absolute(f64),
    /// Multiple of the surface-wide base border width.
    Scaled(f64),
}

impl BorderWidth {
    /// Marker value meaning "no ring" in the packed encoding used by [`BorderWidth::from_raw`].
    ///
    /// This is the smallest positive subnormal `f64`.
    pub const NONE_MARKER: f64 = f64::from_bits(1);

    /// Decode the packed single-number form.
    ///
    /// [`NONE_MARKER`](Self::NONE_MARKER) and non-finite values decode to [`BorderWidth::None`],
    /// non-negative values are absolute widths and negative values are multipliers of the base
    /// width (`-3.0` is three base widths).
    pub fn from_raw(raw: f64) -> Self {
        if raw.to_bits() == Self::NONE_MARKER.to_bits() || !raw.is_finite() {
            Self::None
        } else if raw >= 0.0 {
            Self::Absolute(raw)
        } else {
            Self::Scaled(-raw)
        }
    }

    /// Effective width in logical units, or `None` when the ring is omitted.
    pub fn resolve(self, base_width: f64) -> Option<f64> {
        match self {
            Self::None => None,
            Self::Absolute(width) => Some(width),
            Self::Scaled(factor) => Some(factor * base_width),
        }
    }
}

/// One decoration in a cell's border stack.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Border {
    /// Stroke or fill.
    pub style: BorderStyle,
    /// Width of the ring.
    pub width: BorderWidth,
    /// Ring color; composited over the ambient background when painted.
    pub color: Rgba,
}

impl Border {
    /// A stroked ring.
    pub const fn stroke(width: BorderWidth, color: Rgba) -> Self {
        Self {
            style: BorderStyle::Stroke,
            width,
            color,
        }
    }

    /// A filled disk.
    pub const fn fill(width: BorderWidth, color: Rgba) -> Self {
        Self {
            style: BorderStyle::Fill,
            width,
            color,
        }
    }

    /// A border that occupies no room and paints nothing.
    ///
    /// It still counts as the cell's first border when picking the text color.
    pub const fn hidden(color: Rgba) -> Self {
        Self::stroke(BorderWidth::None, color)
    }
}

/// A resolved ring ready to paint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ring {
    /// Position of the border this ring was produced from.
    pub border: usize,
    /// Stroke or fill.
    pub style: BorderStyle,
    /// Inner edge radius.
    pub inner_radius: f64,
    /// Band width.
    pub width: f64,
    /// Uncomposited ring color.
    pub color: Rgba,
}

impl Ring {
    /// Outer edge radius.
    pub fn outer_radius(&self) -> f64 {
        self.inner_radius + self.width
    }

    /// Radius of the band's center line; strokes of [`Ring::width`] centered here cover the band.
    pub fn center_radius(&self) -> f64 {
        self.inner_radius + self.width / 2.0
    }
}

/// Total radius of a border stack around `base_radius`.
pub fn stack_radius(borders: &[Border], base_radius: f64, base_width: f64) -> f64 {
    borders
        .iter()
        .filter_map(|b| b.width.resolve(base_width))
        .fold(base_radius, |r, w| r + w)
}

/// Resolve a border stack into rings, in paint order (outermost first).
///
/// Omitted borders are skipped before any radius arithmetic.
pub fn ring_stack(borders: &[Border], base_radius: f64, base_width: f64) -> Vec<Ring> {
    let mut r = stack_radius(borders, base_radius, base_width);
    let mut rings = Vec::with_capacity(borders.len());
    for (i, border) in borders.iter().enumerate().rev() {
        let Some(width) = border.width.resolve(base_width) else {
            continue;
        };
        r -= width;
        rings.push(Ring {
            border: i,
            style: border.style,
            inner_radius: r,
            width,
            color: border.color,
        });
    }
    rings
}

/// Text color for a cell drawn over `background`.
///
/// With no borders this is the contrast foreground of the background. Otherwise it follows
/// the first border: the background itself on a fill, the composited border color on a stroke.
pub fn text_color(borders: &[Border], background: Rgba) -> Rgba {
    match borders.first() {
        None => background.contrast_foreground(),
        Some(b) => match b.style {
            BorderStyle::Fill => background,
            BorderStyle::Stroke => b.color.over(background),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_width_decoding() {
        assert_eq!(BorderWidth::from_raw(BorderWidth::NONE_MARKER), BorderWidth::None);
        assert_eq!(BorderWidth::from_raw(f64::NAN), BorderWidth::None);
        assert_eq!(BorderWidth::from_raw(f64::NEG_INFINITY), BorderWidth::None);
        assert_eq!(BorderWidth::from_raw(0.0), BorderWidth::Absolute(0.0));
        assert_eq!(BorderWidth::from_raw(2.5), BorderWidth::Absolute(2.5));
        assert_eq!(BorderWidth::from_raw(-3.0), BorderWidth::Scaled(3.0));
    }

    #[test]
    fn resolve_scales_by_base() {
        assert_eq!(BorderWidth::Scaled(3.0).resolve(2.0), Some(6.0));
        assert_eq!(BorderWidth::Absolute(3.0).resolve(2.0), Some(3.0));
        assert_eq!(BorderWidth::None.resolve(2.0), None);
    }

    #[test]
    fn two_stroke_stack_radii() {
        let borders = [
            Border::stroke(BorderWidth::Scaled(1.0), Rgba::BLACK),
            Border::stroke(BorderWidth::Scaled(3.0), Rgba::GRAY),
        ];
        let base = 20.0;
        assert_eq!(stack_radius(&borders, base, 2.0), 28.0);

        let rings = ring_stack(&borders, base, 2.0);
        assert_eq!(rings.len(), 2);

        // Gray band is outermost and painted first: [22, 28].
        assert_eq!(rings[0].border, 1);
        assert_eq!(rings[0].color, Rgba::GRAY);
        assert_eq!(rings[0].inner_radius, 22.0);
        assert_eq!(rings[0].outer_radius(), 28.0);
        assert_eq!(rings[0].center_radius(), 25.0);

        // Black band hugs the base circle and is painted last: [20, 22].
        assert_eq!(rings[1].border, 0);
        assert_eq!(rings[1].color, Rgba::BLACK);
        assert_eq!(rings[1].inner_radius, 20.0);
        assert_eq!(rings[1].outer_radius(), 22.0);
    }

    #[test]
    fn omitted_borders_take_no_room() {
        let borders = [
            Border::fill(BorderWidth::Absolute(1.0), Rgba::BLACK),
            Border::hidden(Rgba::GRAY),
            Border::stroke(BorderWidth::Absolute(4.0), Rgba::WHITE),
        ];
        let rings = ring_stack(&borders, 10.0, 1.0);
        assert_eq!(rings.len(), 2);
        assert_eq!(rings[0].border, 2);
        assert_eq!(rings[0].inner_radius, 11.0);
        assert_eq!(rings[1].border, 0);
        assert_eq!(rings[1].inner_radius, 10.0);
    }

    #[test]
    fn empty_stack_is_base_radius() {
        assert_eq!(stack_radius(&[], 7.0, 1.0), 7.0);
        assert!(ring_stack(&[], 7.0, 1.0).is_empty());
    }

    #[test]
    fn text_color_follows_first_border() {
        let bg = Rgba::WHITE;
        assert_eq!(text_color(&[], bg), Rgba::BLACK);
        assert_eq!(text_color(&[], Rgba::BLACK), Rgba::WHITE);
        let fill = [Border::fill(BorderWidth::Scaled(1.0), Rgba::BLACK)];
        assert_eq!(text_color(&fill, bg), bg);
        let stroke = [Border::stroke(
            BorderWidth::Scaled(1.0),
            Rgba::BLACK.with_alpha(128),
        )];
        assert_eq!(text_color(&stroke, bg), Rgba::rgb(127, 127, 127));
        // Hidden borders still drive the text color.
        let hidden = [Border::hidden(Rgba::GRAY)];
        assert_eq!(text_color(&hidden, bg), Rgba::GRAY);
    }
}
