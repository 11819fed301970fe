// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Margin inference basics.
//!
//! Run a handful of class lists, intents, and transforms through the
//! inference waterfall and print what each stage contributes.
//!
//! Run:
//! - `cargo run -p sightline_demos --example margin_probe`

use kurbo::Affine;
use sightline_margin::{StyleSource, infer_margins, parse_transform_matrix};

struct Probe {
    classes: &'static str,
    distance: Option<&'static str>,
    transform: &'static str,
}

impl StyleSource<()> for Probe {
    fn classes(&self, _element: ()) -> Option<&str> {
        Some(self.classes)
    }

    fn custom_property(&self, _element: (), _name: &str) -> Option<String> {
        self.distance.map(str::to_owned)
    }

    fn transform(&self, _element: ()) -> Option<Affine> {
        parse_transform_matrix(self.transform)
    }
}

fn main() {
    let cases: &[(&str, Probe, Option<&str>)] = &[
        (
            "declared arbitrary offset",
            Probe {
                classes: "opacity-0 translate-y-[24px] duration-500",
                distance: None,
                transform: "none",
            },
            None,
        ),
        (
            "declared step offset, bottom edge only",
            Probe {
                classes: "below:translate-y-8 opacity-0",
                distance: None,
                transform: "none",
            },
            None,
        ),
        (
            "movement intent reads --viewport-distance",
            Probe {
                classes: "card shadow-md",
                distance: Some("2rem"),
                transform: "none",
            },
            Some("slide-up"),
        ),
        (
            "fade-in is not movement, falls to the transform",
            Probe {
                classes: "card shadow-md",
                distance: Some("2rem"),
                transform: "matrix(1, 0, 0, 1, 0, -48)",
            },
            Some("fade-in"),
        ),
        (
            "nothing readable stays at zero",
            Probe {
                classes: "card shadow-md",
                distance: None,
                transform: "none",
            },
            None,
        ),
    ];

    for (label, probe, intent) in cases {
        let margins = infer_margins(probe, (), *intent);
        println!("{label}:");
        println!("  classes   = {:?}", probe.classes);
        println!("  intent    = {:?}", intent);
        println!("  margins   = top {}px / bottom {}px", margins.top, margins.bottom);
        println!("  sensor    = {:?}", margins.to_margin());
        println!();
    }
}
