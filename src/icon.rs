// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Gradient stop colors, from the top-left corner to the bottom-right one.
pub const GRADIENT_STOPS: [&str; 2] = ["#3b82f6", "#8b5cf6"];

/// Opacity shared by all glyph elements.
pub const GLYPH_OPACITY: f64 = 0.9;

const ICON_192: &str = r##"
<svg width="192" height="192" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#3b82f6;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#8b5cf6;stop-opacity:1" />
    </linearGradient>
  </defs>
  <rect width="192" height="192" rx="40" fill="url(#grad)"/>
  <circle cx="96" cy="70" r="25" fill="white" opacity="0.9"/>
  <path d="M 96 100 L 96 150" stroke="white" stroke-width="6" stroke-linecap="round" opacity="0.9"/>
  <circle cx="96" cy="155" r="5" fill="white" opacity="0.9"/>
</svg>
"##;

const ICON_512: &str = r##"
<svg width="512" height="512" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#3b82f6;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#8b5cf6;stop-opacity:1" />
    </linearGradient>
  </defs>
  <rect width="512" height="512" rx="110" fill="url(#grad)"/>
  <circle cx="256" cy="190" r="70" fill="white" opacity="0.9"/>
  <path d="M 256 270 L 256 400" stroke="white" stroke-width="18" stroke-linecap="round" opacity="0.9"/>
  <circle cx="256" cy="420" r="15" fill="white" opacity="0.9"/>
</svg>
"##;

/// A placeholder application icon.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    /// A 192x192 icon.
    Small,
    /// A 512x512 icon.
    Large,
}

impl Icon {
    /// All icons, in the order they are written.
    pub const ALL: [Icon; 2] = [Icon::Small, Icon::Large];

    /// Returns the icon width and height in pixels.
    pub fn size(self) -> u32 {
        match self {
            Icon::Small => 192,
            Icon::Large => 512,
        }
    }

    /// Returns the name of the SVG file inside the output directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Icon::Small => "icon-192.svg",
            Icon::Large => "icon-512.svg",
        }
    }

    /// Returns the name a rasterized copy is expected to have.
    ///
    /// Nothing in this crate produces it.
    pub fn png_file_name(self) -> &'static str {
        match self {
            Icon::Small => "icon-192.png",
            Icon::Large => "icon-512.png",
        }
    }

    /// Returns the SVG markup.
    ///
    /// This is exactly what gets written to disk.
    pub fn svg(self) -> &'static str {
        match self {
            Icon::Small => ICON_192,
            Icon::Large => ICON_512,
        }
    }

    /// Returns the geometry baked into the markup.
    pub fn geometry(self) -> Geometry {
        match self {
            Icon::Small => Geometry {
                size: 192.0,
                corner_radius: 40.0,
                head: Circle { cx: 96.0, cy: 70.0, r: 25.0 },
                neck: Line { x: 96.0, y1: 100.0, y2: 150.0, stroke_width: 6.0 },
                base: Circle { cx: 96.0, cy: 155.0, r: 5.0 },
            },
            Icon::Large => Geometry {
                size: 512.0,
                corner_radius: 110.0,
                head: Circle { cx: 256.0, cy: 190.0, r: 70.0 },
                neck: Line { x: 256.0, y1: 270.0, y2: 400.0, stroke_width: 18.0 },
                base: Circle { cx: 256.0, cy: 420.0, r: 15.0 },
            },
        }
    }
}

/// Icon geometry.
///
/// The background is a rounded square filled with a diagonal gradient.
/// The glyph on top of it is a pin: a head circle, a vertical neck and a base dot.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Geometry {
    pub size: f64,
    pub corner_radius: f64,
    pub head: Circle,
    pub neck: Line,
    pub base: Circle,
}

/// A filled circle.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

/// A vertical line with a round cap.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Line {
    pub x: f64,
    pub y1: f64,
    pub y2: f64,
    pub stroke_width: f64,
}
