// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spacing constants and colors shared by sizing, layout, and painting.

use peniko::Color;

/// A base color and the color used while the pointer hovers the box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorPair {
    /// Fill when not hovered.
    pub base: Color,
    /// Fill when the hovered label equals this box's label.
    pub highlighted: Color,
}

impl ColorPair {
    /// Pick the fill for the given hover state.
    pub fn select(&self, highlighted: bool) -> Color {
        if highlighted {
            self.highlighted
        } else {
            self.base
        }
    }
}

/// Layout and paint configuration.
///
/// All lengths are in natural (unscaled) layout units. The default values
/// reproduce the stock look: 10-unit margins, a 30-unit gap between rows,
/// and a small inset from the canvas edges when fitting.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    /// Inner padding of boxes. Horizontal margins are twice this.
    pub padding: f64,
    /// Vertical gap between stacked rows, also used as the top offset.
    pub row_gap: f64,
    /// Fraction of the canvas width the layout may use.
    pub fit_width: f64,
    /// Fraction of the canvas height the layout may use.
    pub fit_height: f64,
    /// Corner radius of containers and pills.
    pub corner_radius: f64,
    /// Fill colors of [`Named`](crate::VisObject::Named) containers.
    pub named: ColorPair,
    /// Fill colors of [`Link`](crate::VisObject::Link) pills.
    pub link: ColorPair,
    /// Fill colors of [`Function`](crate::VisObject::Function) pills.
    pub function: ColorPair,
    /// Outline and divider color.
    pub outline: Color,
    /// Text color.
    pub text: Color,
}

impl Style {
    /// Horizontal margin added to every measured width.
    pub fn margin(&self) -> f64 {
        2.0 * self.padding
    }

    /// Extra height a container adds above its children for the label band.
    pub fn header(&self) -> f64 {
        3.0 * self.padding
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            padding: 5.0,
            row_gap: 30.0,
            fit_width: 0.97,
            fit_height: 0.99,
            corner_radius: 5.0,
            named: ColorPair {
                base: Color::from_rgb8(0x80, 0xff, 0x80),
                highlighted: Color::from_rgb8(0x40, 0xbf, 0x40),
            },
            link: ColorPair {
                base: Color::from_rgb8(0x80, 0x80, 0xff),
                highlighted: Color::from_rgb8(0x40, 0x40, 0xbf),
            },
            function: ColorPair {
                base: Color::from_rgb8(0xff, 0x80, 0x80),
                highlighted: Color::from_rgb8(0xbf, 0x40, 0x40),
            },
            outline: Color::BLACK,
            text: Color::BLACK,
        }
    }
}
