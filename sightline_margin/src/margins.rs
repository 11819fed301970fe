// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The inferred margin value and its sensor-facing serialization.

use alloc::format;
use alloc::string::String;

/// Vertical root-margin expansion, in CSS pixels.
///
/// Horizontal expansion is always zero: reveal travel is vertical, so only
/// the top and bottom edges of the detection box ever widen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeMargins {
    /// Expansion above the viewport.
    pub top: f64,
    /// Expansion below the viewport.
    pub bottom: f64,
}

impl EdgeMargins {
    /// No expansion.
    pub const ZERO: Self = Self {
        top: 0.0,
        bottom: 0.0,
    };

    /// The same expansion on both edges.
    #[must_use]
    pub const fn symmetric(px: f64) -> Self {
        Self {
            top: px,
            bottom: px,
        }
    }

    /// True when neither edge expands.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.top <= 0.0 && self.bottom <= 0.0
    }

    /// Margin string for sensor options: `"{top}px 0px {bottom}px 0px"`, or
    /// the canonical `"0px"` when nothing expands.
    ///
    /// ```
    /// use sightline_margin::EdgeMargins;
    ///
    /// let margins = EdgeMargins { top: 0.0, bottom: 42.0 };
    /// assert_eq!(margins.to_margin(), "0px 0px 42px 0px");
    /// assert_eq!(EdgeMargins::ZERO.to_margin(), "0px");
    /// ```
    #[must_use]
    pub fn to_margin(&self) -> String {
        if self.is_zero() {
            String::from("0px")
        } else {
            format!("{}px 0px {}px 0px", self.top, self.bottom)
        }
    }
}
