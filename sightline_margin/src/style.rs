// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between inference and however the host reads style.

use alloc::string::String;

use kurbo::Affine;

/// Read access to an element's declared and rendered style.
///
/// Every reader returns `None` when the value is unavailable (detached
/// element, sandboxed context, missing property). Inference treats `None` as
/// a zero contribution and moves on; nothing here can fail loudly.
pub trait StyleSource<E> {
    /// Whitespace-separated class list declared on the element.
    fn classes(&self, element: E) -> Option<&str>;

    /// Resolved value of a CSS custom property on the element, with
    /// inheritance applied, e.g. `--viewport-distance` set on the root.
    fn custom_property(&self, element: E, name: &str) -> Option<String>;

    /// The element's current resolved 2D transform.
    ///
    /// Hosts whose computed style is a string can parse it with
    /// [`parse_transform_matrix`](crate::parse_transform_matrix).
    fn transform(&self, element: E) -> Option<Affine>;
}
