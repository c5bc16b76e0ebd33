// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar colors and the border stacks derived from them.

use alloc::vec;
use alloc::vec::Vec;

use bitflags::bitflags;
use circlet_grid::{Border, BorderWidth, Rgba};

/// Alpha of the secondary ring drawn around today's cell.
pub const TODAY_HALO_ALPHA: u8 = 128;

/// Colors used by the calendar grids.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CalendarPalette {
    /// Days outside the displayed month.
    pub inactive: Rgba,
    /// Plain days.
    pub regular: Rgba,
    /// Highlighted days; falls back to `regular` when unset.
    pub active: Option<Rgba>,
    /// Today, and at reduced alpha its outer halo.
    pub today: Rgba,
}

impl Default for CalendarPalette {
    fn default() -> Self {
        Self {
            inactive: Rgba::GRAY,
            regular: Rgba::GRAY,
            active: None,
            today: Rgba::BLACK,
        }
    }
}

impl CalendarPalette {
    /// Effective highlight color.
    pub fn active_color(&self) -> Rgba {
        self.active.unwrap_or(self.regular)
    }
}

bitflags! {
    /// Per-cell state that picks a border stack.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CellFlags: u8 {
        /// The cell is a day of the displayed month (always set for week cells).
        const IN_SPAN     = 0b0000_0001;
        /// The cell is today.
        const TODAY       = 0b0000_0010;
        /// The cell is highlighted.
        const HIGHLIGHTED = 0b0000_0100;
    }
}

/// The five border stacks a calendar cell can take.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderPresets {
    /// Outside the displayed month: a hidden ring that only sets the text color.
    pub empty: Vec<Border>,
    /// Plain day.
    pub regular: Vec<Border>,
    /// Today: a ring plus a wider half-transparent halo.
    pub today: Vec<Border>,
    /// Highlighted day: a filled disk.
    pub active: Vec<Border>,
    /// Highlighted today: a filled disk plus the halo.
    pub active_today: Vec<Border>,
}

impl Default for BorderPresets {
    fn default() -> Self {
        Self::from_palette(&CalendarPalette::default())
    }
}

impl BorderPresets {
    /// Build the stacks for `palette`.
    pub fn from_palette(palette: &CalendarPalette) -> Self {
        let base = BorderWidth::Scaled(1.0);
        let halo = Border::stroke(
            BorderWidth::Scaled(3.0),
            palette.today.with_alpha(TODAY_HALO_ALPHA),
        );
        Self {
            empty: vec![Border::hidden(palette.inactive)],
            regular: vec![Border::stroke(base, palette.regular)],
            today: vec![Border::stroke(base, palette.today), halo],
            active: vec![Border::fill(base, palette.active_color())],
            active_today: vec![Border::fill(base, palette.today), halo],
        }
    }

    /// Stack for a cell in state `flags`.
    ///
    /// Cells outside the span are always `empty`; otherwise today and highlight combine.
    pub fn select(&self, flags: CellFlags) -> &[Border] {
        if !flags.contains(CellFlags::IN_SPAN) {
            return &self.empty;
        }
        let today = flags.contains(CellFlags::TODAY);
        let highlighted = flags.contains(CellFlags::HIGHLIGHTED);
        match (today, highlighted) {
            (true, true) => &self.active_today,
            (true, false) => &self.today,
            (false, true) => &self.active,
            (false, false) => &self.regular,
        }
    }
}
