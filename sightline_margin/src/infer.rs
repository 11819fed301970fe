// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The inference waterfall and its parsers.

use kurbo::Affine;

use crate::margins::EdgeMargins;
use crate::style::StyleSource;

/// Extra pixels added around declared offsets so an animation's start
/// position sits fully outside the detection box.
pub const SAFETY_PAD_PX: f64 = 10.0;

/// Pixel size of one step in numeric offset utilities (`translate-y-8` is
/// eight steps, 32 px).
pub const STEP_PX: f64 = 4.0;

/// Pixels per `rem` when converting lengths.
pub const REM_PX: f64 = 16.0;

/// Global custom property naming the travel distance of movement presets.
pub const DISTANCE_PROPERTY: &str = "--viewport-distance";

const OFFSET_UTILITY: &str = "translate-y-";

/// Infers how far the sensor's detection box should expand for `element`.
///
/// Pure waterfall; the first stage that yields any expansion wins:
///
/// 1. declared offset utilities in the element's class list,
/// 2. the movement-intent heuristic over [`DISTANCE_PROPERTY`],
/// 3. the element's current transform translation,
/// 4. [`EdgeMargins::ZERO`].
///
/// Unreadable style and malformed values contribute zero and fall through;
/// this function cannot fail.
pub fn infer_margins<E: Copy, S: StyleSource<E>>(
    style: &S,
    element: E,
    intent: Option<&str>,
) -> EdgeMargins {
    let declared = declared_offsets(style.classes(element).unwrap_or(""));
    if !declared.is_zero() {
        return declared;
    }
    let heuristic = intent_distance(style, element, intent);
    if !heuristic.is_zero() {
        return heuristic;
    }
    let fallback = transform_shift(style, element);
    if !fallback.is_zero() {
        return fallback;
    }
    EdgeMargins::ZERO
}

/// Scans a class list for vertical offset utilities and routes each match to
/// its edges.
///
/// A match is `translate-y-` followed by a bracketed length (`[24px]`,
/// `[2rem]`) or a bare step count, optionally negated, optionally behind a
/// `prefix:` chain. A chain segment containing `below` routes to the bottom
/// edge only, `above` to the top; anything else expands both. Overlapping
/// matches keep the maximum per edge.
pub fn declared_offsets(classes: &str) -> EdgeMargins {
    let mut margins = EdgeMargins::ZERO;
    for token in classes.split_whitespace() {
        for (at, _) in token.match_indices(OFFSET_UTILITY) {
            let value = &token[at + OFFSET_UTILITY.len()..];
            let Some(px) = utility_px(value) else {
                continue;
            };
            if px <= 0.0 {
                continue;
            }
            let margin = ceil_px(px + SAFETY_PAD_PX);

            // The negation sign only flips travel direction; the margin uses
            // the magnitude. A qualifier must sit directly before the
            // utility, separated by a colon.
            let head = &token[..at];
            let head = head.strip_suffix('-').unwrap_or(head);
            let qualifier = head.strip_suffix(':').unwrap_or("");

            if qualifier.contains("below") {
                margins.bottom = margins.bottom.max(margin);
            } else if qualifier.contains("above") {
                margins.top = margins.top.max(margin);
            } else {
                margins.top = margins.top.max(margin);
                margins.bottom = margins.bottom.max(margin);
            }
        }
    }
    margins
}

/// Stage 2: movement presets read the global distance property.
fn intent_distance<E: Copy, S: StyleSource<E>>(
    style: &S,
    element: E,
    intent: Option<&str>,
) -> EdgeMargins {
    let Some(name) = intent else {
        return EdgeMargins::ZERO;
    };
    let movement = name.contains("slide")
        || (name.contains("fade-") && !name.contains("fade-in"))
        || name.contains("scale");
    if !movement {
        return EdgeMargins::ZERO;
    }
    let Some(value) = style.custom_property(element, DISTANCE_PROPERTY) else {
        return EdgeMargins::ZERO;
    };
    let margin = ceil_px(parse_px_length(&value).unwrap_or(0.0));
    if margin > 0.0 {
        EdgeMargins::symmetric(margin)
    } else {
        EdgeMargins::ZERO
    }
}

/// Stage 3: any current translation implies the element animates into place.
fn transform_shift<E: Copy, S: StyleSource<E>>(style: &S, element: E) -> EdgeMargins {
    let Some(transform) = style.transform(element) else {
        return EdgeMargins::ZERO;
    };
    let shift = transform.translation();
    let max_shift = abs(shift.x).max(abs(shift.y));
    if max_shift > 0.0 {
        EdgeMargins::symmetric(ceil_px(max_shift))
    } else {
        EdgeMargins::ZERO
    }
}

/// Parses the value part of an offset utility into pixels.
fn utility_px(value: &str) -> Option<f64> {
    if let Some(rest) = value.strip_prefix('[') {
        let inner = &rest[..rest.find(']')?];
        parse_px_length(inner)
    } else {
        let digits = value
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(value.len());
        if digits == 0 {
            return None;
        }
        let steps: f64 = value[..digits].parse().ok()?;
        Some(steps * STEP_PX)
    }
}

/// Parses a CSS length in `px` or `rem` (1 rem = [`REM_PX`]) into pixels.
///
/// Other units are not lengths this crate can relate to the viewport and
/// yield `None`.
#[must_use]
pub fn parse_px_length(value: &str) -> Option<f64> {
    let value = value.trim();
    if let Some(number) = value.strip_suffix("px") {
        number.trim().parse().ok()
    } else if let Some(number) = value.strip_suffix("rem") {
        number.trim().parse::<f64>().ok().map(|n| n * REM_PX)
    } else {
        None
    }
}

/// Parses a CSS `matrix(a, b, c, d, tx, ty)` string into an affine
/// transform.
///
/// Returns `None` for `none`, 3D matrices, and malformed input, mirroring
/// how unreadable transforms contribute nothing to inference.
///
/// ```
/// use sightline_margin::parse_transform_matrix;
///
/// let affine = parse_transform_matrix("matrix(1, 0, 0, 1, 0, -24)").unwrap();
/// assert_eq!(affine.translation().y, -24.0);
/// assert!(parse_transform_matrix("none").is_none());
/// ```
#[must_use]
pub fn parse_transform_matrix(value: &str) -> Option<Affine> {
    let inner = value.trim().strip_prefix("matrix(")?.strip_suffix(')')?;
    let mut coefficients = [0.0_f64; 6];
    let mut parts = inner.split(',');
    for c in &mut coefficients {
        *c = parts.next()?.trim().parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(Affine::new(coefficients))
}

// Core-only float helpers so the crate stays no_std without libm. Inputs are
// finite pixel magnitudes.

/// Rounds up to a whole pixel; negative inputs clamp to zero, since margins
/// never contract.
fn ceil_px(v: f64) -> f64 {
    let truncated = v as u64 as f64;
    if truncated < v {
        truncated + 1.0
    } else {
        truncated
    }
}

fn abs(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    #[derive(Default)]
    struct Style {
        classes: Option<&'static str>,
        distance: Option<&'static str>,
        transform: Option<Affine>,
    }

    impl StyleSource<u32> for Style {
        fn classes(&self, _element: u32) -> Option<&str> {
            self.classes
        }

        fn custom_property(&self, _element: u32, name: &str) -> Option<String> {
            assert_eq!(name, DISTANCE_PROPERTY, "only the distance property is read");
            self.distance.map(|v| v.to_string())
        }

        fn transform(&self, _element: u32) -> Option<Affine> {
            self.transform
        }
    }

    #[test]
    fn arbitrary_px_offset_gets_padded_and_rounded() {
        let style = Style {
            classes: Some("translate-y-[24px] opacity-0"),
            ..Style::default()
        };
        let margins = infer_margins(&style, 0, None);
        assert_eq!(margins, EdgeMargins::symmetric(34.0));
    }

    #[test]
    fn below_qualifier_routes_to_bottom_only() {
        let style = Style {
            classes: Some("below:translate-y-8"),
            ..Style::default()
        };
        let margins = infer_margins(&style, 0, None);
        assert_eq!(
            margins,
            EdgeMargins {
                top: 0.0,
                bottom: 42.0
            }
        );
    }

    #[test]
    fn above_qualifier_routes_to_top_only() {
        let margins = declared_offsets("above:translate-y-[2rem]");
        assert_eq!(
            margins,
            EdgeMargins {
                top: 42.0,
                bottom: 0.0
            }
        );
    }

    #[test]
    fn qualifier_chains_keep_the_edge_word() {
        // Responsive chains still route by the edge word anywhere in the
        // chain directly before the utility.
        let margins = declared_offsets("md:below:translate-y-4");
        assert_eq!(margins.bottom, 26.0);
        assert_eq!(margins.top, 0.0);
    }

    #[test]
    fn negated_offsets_use_the_magnitude() {
        let margins = declared_offsets("-translate-y-8");
        assert_eq!(margins, EdgeMargins::symmetric(42.0));
    }

    #[test]
    fn multiple_offsets_keep_the_maximum_per_edge() {
        let margins = declared_offsets("translate-y-4 below:translate-y-[60px] translate-y-2");
        assert_eq!(margins.top, 26.0, "unqualified maximum");
        assert_eq!(margins.bottom, 70.0, "below beats the unqualified ones");
    }

    #[test]
    fn fractional_rem_rounds_up() {
        // 0.6 rem = 9.6 px, plus the pad, rounded up.
        let margins = declared_offsets("translate-y-[0.6rem]");
        assert_eq!(margins, EdgeMargins::symmetric(20.0));
    }

    #[test]
    fn malformed_offsets_contribute_nothing() {
        assert_eq!(declared_offsets("translate-y-[24vh]"), EdgeMargins::ZERO);
        assert_eq!(declared_offsets("translate-y-[]"), EdgeMargins::ZERO);
        assert_eq!(declared_offsets("translate-y-full"), EdgeMargins::ZERO);
        assert_eq!(declared_offsets("translate-y-[-24px]"), EdgeMargins::ZERO);
        assert_eq!(declared_offsets("translate-x-8 rotate-3"), EdgeMargins::ZERO);
    }

    #[test]
    fn movement_intent_reads_the_distance_property() {
        let style = Style {
            distance: Some("2rem"),
            ..Style::default()
        };
        let margins = infer_margins(&style, 0, Some("slide-up"));
        assert_eq!(margins, EdgeMargins::symmetric(32.0));
    }

    #[test]
    fn fade_in_is_not_a_movement_intent() {
        let style = Style {
            distance: Some("2rem"),
            ..Style::default()
        };
        assert_eq!(infer_margins(&style, 0, Some("fade-in")), EdgeMargins::ZERO);
        assert_eq!(
            infer_margins(&style, 0, Some("fade-up")),
            EdgeMargins::symmetric(32.0)
        );
    }

    #[test]
    fn unreadable_distance_falls_through() {
        let style = Style {
            distance: None,
            transform: Some(Affine::translate((0.0, -24.0))),
            ..Style::default()
        };
        // Stage 2 applies to scale intents too, but the missing property
        // drops it to the transform stage.
        let margins = infer_margins(&style, 0, Some("scale-up"));
        assert_eq!(margins, EdgeMargins::symmetric(24.0));
    }

    #[test]
    fn declared_offsets_beat_the_heuristic() {
        let style = Style {
            classes: Some("translate-y-[24px]"),
            distance: Some("100px"),
            transform: Some(Affine::translate((0.0, 200.0))),
        };
        let margins = infer_margins(&style, 0, Some("slide-up"));
        assert_eq!(margins, EdgeMargins::symmetric(34.0), "stage 1 wins");
    }

    #[test]
    fn heuristic_beats_the_transform_fallback() {
        let style = Style {
            distance: Some("100px"),
            transform: Some(Affine::translate((0.0, 200.0))),
            ..Style::default()
        };
        let margins = infer_margins(&style, 0, Some("slide-up"));
        assert_eq!(margins, EdgeMargins::symmetric(100.0), "stage 2 wins");
    }

    #[test]
    fn transform_translation_takes_the_larger_axis() {
        let style = Style {
            transform: Some(Affine::translate((-40.0, 12.5))),
            ..Style::default()
        };
        let margins = infer_margins(&style, 0, None);
        assert_eq!(margins, EdgeMargins::symmetric(40.0));
    }

    #[test]
    fn identity_transform_yields_zero() {
        let style = Style {
            transform: Some(Affine::IDENTITY),
            ..Style::default()
        };
        assert_eq!(infer_margins(&style, 0, None), EdgeMargins::ZERO);
    }

    #[test]
    fn nothing_readable_yields_zero() {
        let style = Style::default();
        let margins = infer_margins(&style, 0, Some("slide-up"));
        assert_eq!(margins, EdgeMargins::ZERO);
        assert_eq!(margins.to_margin(), "0px");
    }

    #[test]
    fn px_length_parsing() {
        assert_eq!(parse_px_length("24px"), Some(24.0));
        assert_eq!(parse_px_length(" 2rem "), Some(32.0));
        assert_eq!(parse_px_length("1.5rem"), Some(24.0));
        assert_eq!(parse_px_length("-24px"), Some(-24.0));
        assert_eq!(parse_px_length("24"), None);
        assert_eq!(parse_px_length("24vh"), None);
        assert_eq!(parse_px_length(""), None);
    }

    #[test]
    fn matrix_parsing() {
        let affine = parse_transform_matrix("matrix(1, 0, 0, 1, 12, -24)").unwrap();
        assert_eq!(affine.translation().x, 12.0);
        assert_eq!(affine.translation().y, -24.0);

        assert!(parse_transform_matrix("none").is_none());
        assert!(parse_transform_matrix("matrix(1, 0, 0, 1, 12)").is_none());
        assert!(parse_transform_matrix("matrix(1, 0, 0, 1, 12, 3, 9)").is_none());
        assert!(
            parse_transform_matrix("matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1)")
                .is_none()
        );
    }

    #[test]
    fn ceil_px_rounds_up_and_clamps() {
        assert_eq!(ceil_px(9.6), 10.0);
        assert_eq!(ceil_px(34.0), 34.0);
        assert_eq!(ceil_px(0.0), 0.0);
        assert_eq!(ceil_px(-3.2), 0.0);
    }
}
