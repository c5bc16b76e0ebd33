// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the runnable demos: logging setup and a text-mode painter.

use std::fmt::Write as _;
use std::sync::OnceLock;

use circlet_grid::{Painter, Rgba};
use kurbo::{Affine, Circle, Point};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_FILTER: &str = "info,circlet_grid=debug,circlet_calendar=debug";

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize a process-wide tracing subscriber for the demos.
///
/// If `RUST_LOG` is set, it takes precedence.
pub fn init_logging() {
    LOGGING_INITIALIZED.get_or_init(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = fmt().with_env_filter(env_filter).try_init();
    });
}

#[derive(Clone, Debug, Default, PartialEq)]
struct TextCell {
    text: String,
    center: Point,
    strokes: usize,
    filled: bool,
}

/// A [`Painter`] that turns a painted grid into lines of text.
///
/// Each cell prints as its label wrapped in one bracket pair per ring: `(..)` for a stroke,
/// `[..]` when the innermost ring is a fill.
#[derive(Clone, Debug, Default)]
pub struct TextCanvas {
    cells: Vec<TextCell>,
    pending: TextCell,
}

impl TextCanvas {
    /// Create an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the recorded cells, one line per row.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut row_y = None;
        for cell in &self.cells {
            if row_y.is_some_and(|y| y != cell.center.y) {
                out.push('\n');
            }
            row_y = Some(cell.center.y);
            let _ = write!(out, "{:>9}", decorate(cell));
        }
        out.push('\n');
        out
    }
}

fn decorate(cell: &TextCell) -> String {
    let mut label = format!("{:>2}", cell.text);
    let mut strokes = cell.strokes;
    if cell.filled {
        label = format!("[{label}]");
    } else if strokes > 0 {
        label = format!("({label})");
        strokes -= 1;
    }
    for _ in 0..strokes {
        label = format!("({label})");
    }
    label
}

impl Painter for TextCanvas {
    fn set_transform(&mut self, _transform: Affine) {}

    fn fill_circle(&mut self, _circle: Circle, color: Rgba) {
        // Stroke rings punch their inside with the background before stroking; only a
        // fill that is not followed by a stroke is a real fill.
        self.pending.filled = !color.is_transparent();
    }

    fn stroke_circle(&mut self, _circle: Circle, width: f64, _color: Rgba) {
        if width > 0.0 {
            self.pending.strokes += 1;
        }
        self.pending.filled = false;
    }

    fn draw_text(&mut self, text: &str, center: Point, _size: f64, _color: Rgba) {
        let mut cell = std::mem::take(&mut self.pending);
        cell.text = text.to_owned();
        cell.center = center;
        self.cells.push(cell);
    }
}
