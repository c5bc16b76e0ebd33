// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing: the painter capability and the per-cell ring renderer.
//!
//! Rendering is expressed against [`Painter`], a minimal immediate-mode capability that a
//! host backs with its own canvas. Text measurement and glyph layout stay on the host side:
//! the renderer only asks for a string to be centered on a point.
//!
//! [`DisplayList`] records draw calls instead of rasterizing them, which is handy for tests,
//! snapshots and forwarding to a retained renderer.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, Circle, Point};

use crate::adapter::GridAdapter;
use crate::border::{BorderStyle, ring_stack, text_color};
use crate::color::Rgba;
use crate::layout::GridLayout;

/// A drawing target.
///
/// Coordinates passed to the shape and text methods are logical; the renderer sets the
/// logical-to-device transform once per frame with [`Painter::set_transform`].
pub trait Painter {
    /// Replace the current transform.
    fn set_transform(&mut self, transform: Affine);
    /// Fill a disk.
    fn fill_circle(&mut self, circle: Circle, color: Rgba);
    /// Stroke a circle outline of the given width, centered on the circle's radius.
    fn stroke_circle(&mut self, circle: Circle, width: f64, color: Rgba);
    /// Draw `text` visually centered on `center`.
    fn draw_text(&mut self, text: &str, center: Point, size: f64, color: Rgba);
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// See [`Painter::set_transform`].
    SetTransform(Affine),
    /// See [`Painter::fill_circle`].
    FillCircle {
        /// Disk to fill.
        circle: Circle,
        /// Fill color.
        color: Rgba,
    },
    /// See [`Painter::stroke_circle`].
    StrokeCircle {
        /// Circle whose radius is the stroke's center line.
        circle: Circle,
        /// Stroke width.
        width: f64,
        /// Stroke color.
        color: Rgba,
    },
    /// See [`Painter::draw_text`].
    Text {
        /// Text content.
        text: String,
        /// Visual center.
        center: Point,
        /// Text size.
        size: f64,
        /// Text color.
        color: Rgba,
    },
}

/// A [`Painter`] that records every call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    /// Recorded commands in call order.
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded text commands, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Painter for DisplayList {
    fn set_transform(&mut self, transform: Affine) {
        self.commands.push(DrawCommand::SetTransform(transform));
    }

    fn fill_circle(&mut self, circle: Circle, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle { circle, color });
    }

    fn stroke_circle(&mut self, circle: Circle, width: f64, color: Rgba) {
        self.commands
            .push(DrawCommand::StrokeCircle { circle, width, color });
    }

    fn draw_text(&mut self, text: &str, center: Point, size: f64, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            text: String::from(text),
            center,
            size,
            color,
        });
    }
}

/// Paint every cell of `adapter` with `layout` over an opaque `background`.
pub fn paint_cells<A, P>(layout: &GridLayout, adapter: &A, background: Rgba, painter: &mut P)
where
    A: GridAdapter + ?Sized,
    P: Painter + ?Sized,
{
    painter.set_transform(layout.transform());
    let base_width = layout.style.border_width;
    let text_size = layout.style.text_size;
    let count = adapter.count().min(layout.shape.count);
    for index in 0..count {
        let Some(center) = layout.cell_center(index) else {
            continue;
        };
        let borders = adapter.borders(index);
        for ring in ring_stack(borders, layout.base_radius(index), base_width) {
            let circle = Circle::new(center, ring.center_radius());
            match ring.style {
                BorderStyle::Stroke => {
                    // Clear the inside so this ring separates cleanly from the ones outside it.
                    painter.fill_circle(circle, background);
                    painter.stroke_circle(circle, ring.width, ring.color.over(background));
                }
                BorderStyle::Fill => {
                    painter.fill_circle(
                        Circle::new(center, ring.outer_radius()),
                        ring.color.over(background),
                    );
                }
            }
        }
        painter.draw_text(
            adapter.text(index),
            center,
            text_size,
            text_color(borders, background),
        );
    }
}
