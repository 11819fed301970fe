// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll direction from successive scroll offsets.

use sightline_observer::ScrollDirection;

/// Classifies scroll direction by comparing each offset to the previous one.
///
/// Reveal styling distinguishes entries from above and below, but platform
/// sensors report only geometry. The host feeds its scroll offset here and
/// pairs the resulting direction with each delivered record batch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollWatcher {
    last_offset: f64,
}

impl ScrollWatcher {
    /// Starts at offset zero, the top of the document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts at a known offset, for hosts restoring scroll position.
    pub fn with_offset(offset: f64) -> Self {
        Self {
            last_offset: offset,
        }
    }

    /// Classifies the move to `offset` and remembers it for the next call.
    ///
    /// An unchanged offset reads as [`ScrollDirection::Down`]; the first
    /// record batch often arrives before any scrolling, and treating it as
    /// downward matches how a page is entered.
    pub fn classify(&mut self, offset: f64) -> ScrollDirection {
        let direction = if offset >= self.last_offset {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        self.last_offset = offset;
        direction
    }

    /// The offset most recently passed to [`ScrollWatcher::classify`].
    #[must_use]
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }
}
