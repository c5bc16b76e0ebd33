// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 8-bit RGBA colors and the compositing rules used when painting rings.

/// Sum of squared channels for pure white (`255² · 3`).
const MAX_BRIGHTNESS: u32 = 255 * 255 * 3;

/// A straight (non-premultiplied) 8-bit RGBA color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; `0` is fully transparent, `255` fully opaque.
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque mid gray (`#888888`).
    pub const GRAY: Self = Self::rgb(0x88, 0x88, 0x88);

    /// Create a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Decode a packed `0xAARRGGBB` value.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Each channel is an intentional byte extraction."
    )]
    pub const fn from_argb(argb: u32) -> Self {
        Self::new(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    /// Same color with its alpha replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// True if the color contributes nothing when drawn.
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Sum of squared RGB channels, in `0..=255² · 3`.
    pub const fn brightness(self) -> u32 {
        let (r, g, b) = (self.r as u32, self.g as u32, self.b as u32);
        r * r + g * g + b * b
    }

    /// Black or white, whichever reads better on top of `self`.
    pub const fn contrast_foreground(self) -> Self {
        if self.brightness() > MAX_BRIGHTNESS / 2 {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }

    /// Composite `self` over `background` using `self`'s alpha.
    ///
    /// Each channel is `fg * a / 255 + bg * (255 - a) / 255` in integer arithmetic, so an
    /// opaque foreground is returned unchanged and a transparent one yields `background`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Alpha coverage is `a1 + a2 * bg / 255`, which stays within 255."
    )]
    pub const fn over(self, background: Self) -> Self {
        let a1 = self.a as u32;
        let a2 = 255 - a1;
        Self::new(
            blend(self.r, background.r, a1, a2),
            blend(self.g, background.g, a1, a2),
            blend(self.b, background.b, a1, a2),
            (a1 + background.a as u32 * a2 / 255) as u8,
        )
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Both terms are weighted by complementary alphas, so the sum never exceeds 255."
)]
const fn blend(fg: u8, bg: u8, a1: u32, a2: u32) -> u8 {
    (fg as u32 * a1 / 255 + bg as u32 * a2 / 255) as u8
}

/// Resolve the ambient background from a container chain ordered innermost first.
///
/// Returns the first non-transparent color, or [`Rgba::WHITE`] when every layer is transparent.
pub fn resolve_background<I>(chain: I) -> Rgba
where
    I: IntoIterator<Item = Rgba>,
{
    chain
        .into_iter()
        .find(|c| !c.is_transparent())
        .unwrap_or(Rgba::WHITE)
}
