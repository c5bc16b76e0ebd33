// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved rings and draw calls for one decorated cell.
//!
//! Prints each ring's band in paint order, then the recorded display list.
//!
//! Run:
//! - `cargo run -p circlet_demos --example ring_stack`

use std::cell::RefCell;
use std::rc::Rc;

use circlet_demos::init_logging;
use circlet_grid::{
    Border, BorderWidth, Constraint, DisplayList, GridStyle, Rgba, StaticGrid, StyleError,
    Surface, ring_stack,
};

fn main() -> Result<(), StyleError> {
    init_logging();

    let style = GridStyle {
        border_width: 2.0,
        ..GridStyle::default()
    };
    let borders = vec![
        Border::stroke(BorderWidth::from_raw(-1.0), Rgba::BLACK),
        Border::stroke(BorderWidth::from_raw(-3.0), Rgba::GRAY),
        Border::stroke(BorderWidth::from_raw(BorderWidth::NONE_MARKER), Rgba::WHITE),
    ];
    for ring in ring_stack(&borders, style.cell_size / 2.0, style.border_width) {
        println!(
            "border {} {:?}: [{}, {}]",
            ring.border,
            ring.style,
            ring.inner_radius,
            ring.outer_radius()
        );
    }

    let grid = Rc::new(RefCell::new(StaticGrid::new(
        1,
        vec!["7".to_owned()],
        vec![borders],
    )));
    let mut surface = Surface::new(style)?;
    surface.set_adapter(Some(grid));
    let _ = surface.measure(Constraint::Exact(88.0), Constraint::Exact(88.0));
    let mut list = DisplayList::new();
    surface.paint(&mut list, &[Rgba::TRANSPARENT, Rgba::rgb(0xf0, 0xf0, 0xf0)]);
    for command in &list.commands {
        println!("{command:?}");
    }
    Ok(())
}
