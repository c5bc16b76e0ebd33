// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circlet Grid: a Kurbo-native surface that draws a grid of text cells, each wrapped in a
//! stack of concentric rings.
//!
//! - Cells come from a [`GridAdapter`]: a count, a column count, an optional header row and,
//!   per cell, a text and an ordered list of [`Border`]s.
//! - [`GridLayout`] sizes the grid from a [`GridStyle`] and the host's [`Constraint`]s and
//!   scales the content uniformly to fit.
//! - [`GridLayout::hit_test`] maps a pointer to a cell and [`GridLayout::cell_bounds`] maps a
//!   cell back to its box; the two agree.
//! - [`paint_cells`] renders rings and text against a small [`Painter`] capability.
//! - [`Surface`] ties these together with an adapter binding, invalidation tracking and
//!   press-to-click handling ([`PressTracker`]).
//!
//! ## Rings
//!
//! A cell's base circle has a radius of half the cell size (half the header height for header
//! cells). Borders stack outward from it in list order: the first border hugs the base circle
//! and each later one wraps the previous. Widths are either absolute or multiples of
//! [`GridStyle::border_width`]; see [`BorderWidth`]. Rings are painted outermost first so
//! inner rings stay on top, and the text color follows the first border: its own color for a
//! stroke, the background for a fill, and a black or white contrast color for bare cells.
//!
//! ## Adapter binding
//!
//! The surface owns its adapter handle. The adapter reaches back through a
//! [`ChangeNotifier`], a non-owning single slot that the surface fills when it binds and
//! clears when it unbinds. [`GridAdapter::notify_data_set_changed`] requests exactly one
//! redraw from a bound surface and does nothing otherwise.
//!
//! ## Not a widget toolkit
//!
//! The crate does not own a window, a canvas or a text shaper. Hosts provide measurement
//! constraints, a [`Painter`], and pointer events in device coordinates, and poll
//! [`Surface::take_invalidation`] to schedule work.
//!
//! ## Minimal usage
//!
//! ```
//! use circlet_grid::{
//!     Border, BorderWidth, Constraint, DisplayList, GridAdapter, Invalidation, PointerEvent,
//!     PointerOutcome, Rgba, StaticGrid, Surface,
//! };
//! use core::cell::RefCell;
//! use std::rc::Rc;
//!
//! let texts = (1..=14).map(|d| d.to_string()).collect();
//! let grid = Rc::new(RefCell::new(StaticGrid::new(7, texts, Vec::new())));
//! grid.borrow_mut()
//!     .set_borders(3, vec![Border::stroke(BorderWidth::Scaled(1.0), Rgba::BLACK)]);
//!
//! let mut surface = Surface::default();
//! surface.set_adapter(Some(grid.clone()));
//! assert!(surface.take_invalidation().contains(Invalidation::LAYOUT));
//!
//! let size = surface.measure(Constraint::Exact(616.0), Constraint::Unspecified);
//! assert_eq!(size.width, 616.0);
//!
//! let mut list = DisplayList::new();
//! surface.paint(&mut list, &[]);
//! assert_eq!(list.texts().count(), 14);
//!
//! let p = surface.cell_bounds(3).unwrap().center();
//! let _ = surface.pointer_event(PointerEvent::Down(p));
//! assert_eq!(surface.pointer_event(PointerEvent::Up(p)), PointerOutcome::Clicked(3));
//!
//! grid.borrow().notify_data_set_changed();
//! assert!(surface.take_invalidation().contains(Invalidation::PAINT));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod border;
mod color;
mod gesture;
mod hit;
mod layout;
mod paint;
mod style;
mod surface;

pub use adapter::{ChangeNotifier, ChangeObserver, GridAdapter, StaticGrid};
pub use border::{Border, BorderStyle, BorderWidth, Ring, ring_stack, stack_radius, text_color};
pub use color::{Rgba, resolve_background};
pub use gesture::{PointerEvent, PointerOutcome, PressFeedback, PressTracker};
pub use layout::{Constraint, GridLayout, GridShape};
pub use paint::{DisplayList, DrawCommand, Painter, paint_cells};
pub use style::{GridStyle, StyleError};
pub use surface::{Invalidation, SharedAdapter, Surface};
