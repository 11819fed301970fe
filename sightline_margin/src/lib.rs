// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sightline_margin --heading-base-level=0

//! Sightline Margin: detection-box expansion for elements that animate into
//! place.
//!
//! A reveal animation usually starts an element offset from its resting
//! position. A visibility sensor watching the resting box would fire while
//! the element is still mid-travel, so the detection box has to grow by the
//! travel distance. This crate infers that growth, [`EdgeMargins`], from
//! whatever the host can tell it about the element's style.
//!
//! [`infer_margins`] is a pure waterfall; the first stage that yields any
//! expansion wins:
//!
//! 1. offset utilities declared in the class list (`translate-y-[24px]`,
//!    `below:translate-y-8`), padded by [`SAFETY_PAD_PX`],
//! 2. movement-intent presets (`slide-*`, directional `fade-*`, `scale-*`)
//!    reading the [`DISTANCE_PROPERTY`] custom property,
//! 3. the element's current transform translation,
//! 4. zero.
//!
//! Style is read through the [`StyleSource`] trait, so inference runs the
//! same against a live style system or a test fixture. Unreadable style
//! never fails inference; it falls through to the next stage.
//!
//! ## Example
//!
//! ```
//! use sightline_margin::{EdgeMargins, StyleSource, infer_margins};
//!
//! struct Classes(&'static str);
//!
//! impl StyleSource<()> for Classes {
//!     fn classes(&self, _element: ()) -> Option<&str> {
//!         Some(self.0)
//!     }
//!
//!     fn custom_property(&self, _element: (), _name: &str) -> Option<String> {
//!         None
//!     }
//!
//!     fn transform(&self, _element: ()) -> Option<kurbo::Affine> {
//!         None
//!     }
//! }
//!
//! // 24 px of travel plus the 10 px safety pad, on both edges.
//! let margins = infer_margins(&Classes("translate-y-[24px] opacity-0"), (), None);
//! assert_eq!(margins, EdgeMargins::symmetric(34.0));
//! assert_eq!(margins.to_margin(), "34px 0px 34px 0px");
//!
//! // An edge qualifier expands only the edge the element travels from.
//! let margins = infer_margins(&Classes("below:translate-y-8"), (), None);
//! assert_eq!(margins.to_margin(), "0px 0px 42px 0px");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod infer;
pub mod margins;
pub mod style;

pub use infer::{
    DISTANCE_PROPERTY, REM_PX, SAFETY_PAD_PX, STEP_PX, declared_offsets, infer_margins,
    parse_px_length, parse_transform_matrix,
};
pub use margins::EdgeMargins;
pub use style::StyleSource;
