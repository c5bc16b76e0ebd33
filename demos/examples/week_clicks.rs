// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Week bar driven by simulated pointer input.
//!
//! A click-toggling highlighter flips each clicked weekday before the listener hears
//! about it. A press that slides onto another cell is abandoned.
//!
//! Run:
//! - `cargo run -p circlet_demos --example week_clicks`

use std::rc::Rc;

use chrono::Weekday;
use circlet_calendar::{SimpleWeekdayHighlighter, WeekGrid, WeekView, from_sunday_number};
use circlet_demos::{TextCanvas, init_logging};
use circlet_grid::{Constraint, GridStyle, PointerEvent, StyleError};

fn main() -> Result<(), StyleError> {
    init_logging();

    // Locale databases often number weekdays from Sunday; 2 is Monday.
    let first_day = from_sunday_number(2).unwrap_or(Weekday::Mon);
    let mut view = WeekView::new(WeekGrid::with_system_clock(first_day), GridStyle::default())?;
    let highlights = Rc::new(SimpleWeekdayHighlighter::new().with_change_state_by_clicks(true));
    view.set_highlighter(Some(highlights.clone()));
    view.set_on_weekday_clicked(Some(Box::new(|weekday: Weekday| {
        println!("clicked {weekday} (#{})", weekday.number_from_monday());
    })));
    let _ = view
        .surface_mut()
        .measure(Constraint::Exact(420.0), Constraint::Unspecified);

    let center = |view: &WeekView, index| {
        view.surface()
            .cell_bounds(index)
            .map(|r| r.center())
            .unwrap_or_default()
    };

    for index in [2, 4] {
        let p = center(&view, index);
        let _ = view.pointer_event(PointerEvent::Down(p));
        let outcome = view.pointer_event(PointerEvent::Up(p));
        tracing::info!(?outcome, "tap");
    }

    // Slide from Monday to Tuesday: no click.
    let (a, b) = (center(&view, 0), center(&view, 1));
    let _ = view.pointer_event(PointerEvent::Down(a));
    let _ = view.pointer_event(PointerEvent::Move(b));
    let outcome = view.pointer_event(PointerEvent::Up(b));
    tracing::info!(?outcome, "slide");

    let mut canvas = TextCanvas::new();
    view.surface().paint(&mut canvas, &[]);
    print!("{}", canvas.render());
    Ok(())
}
