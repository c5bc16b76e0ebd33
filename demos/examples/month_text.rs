// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Month grid rendered as text.
//!
//! Shows the current month with today ringed twice and a few highlighted days filled.
//! Neighboring-month days print bare.
//!
//! Run:
//! - `cargo run -p circlet_demos --example month_text`
//! - `RUST_LOG=trace cargo run -p circlet_demos --example month_text`

use std::rc::Rc;

use chrono::{Datelike, Weekday};
use circlet_calendar::{DateHighlighter, MonthGrid, MonthView, SimpleDateHighlighter};
use circlet_demos::{TextCanvas, init_logging};
use circlet_grid::{Constraint, GridStyle, StyleError};

fn main() -> Result<(), StyleError> {
    init_logging();

    let mut view = MonthView::new(MonthGrid::current(Weekday::Mon), GridStyle::default())?;
    let highlights = Rc::new(SimpleDateHighlighter::new());
    {
        let grid = view.grid().borrow();
        if let Some(first) = grid.date_at(grid.month_start_index()) {
            for date in first.iter_days().step_by(5).take(4) {
                highlights.insert(date);
            }
        }
    }
    view.grid()
        .borrow_mut()
        .set_highlighter(Some(highlights.clone()));

    let size = view
        .surface_mut()
        .measure(Constraint::AtMost(640.0), Constraint::Unspecified);
    tracing::info!(width = size.width, height = size.height, "measured");

    let mut canvas = TextCanvas::new();
    view.surface().paint(&mut canvas, &[]);
    let date = view.grid().borrow().date();
    println!("{} {}", date.format("%B"), date.year());
    print!("{}", canvas.render());

    highlights.clear();
    highlights.notify_data_set_changed();
    tracing::info!(
        redraws = view.surface().redraw_requests(),
        "highlights cleared"
    );
    Ok(())
}
