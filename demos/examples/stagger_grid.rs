// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagger timing for a grid of tiles.
//!
//! Two rows of tiles enter the viewport moments apart. Each row debounces
//! its own window, a straggler rearms its row, and every flush hands out
//! document-order delays. A tiny host clock drives the scheduler off
//! `next_deadline`.
//!
//! Run:
//! - `cargo run -p sightline_demos --example stagger_grid`

use std::cell::Cell;
use std::rc::Rc;

use sightline_stagger::{
    Millis, STAGGER_PROPERTY, SiblingOrder, StaggerScheduler, StaggerSpec, StaggerTask,
};

/// Tiles are named `a0..a4` and `b0..b3`; the leading letter is the row.
struct Grid;

impl SiblingOrder<&'static str> for Grid {
    fn parent_of(&self, element: &'static str) -> Option<&'static str> {
        match &element[..1] {
            "a" => Some("row-a"),
            "b" => Some("row-b"),
            _ => None,
        }
    }

    fn index_in_parent(&self, element: &'static str) -> usize {
        element[1..].parse().unwrap_or(0)
    }
}

fn main() {
    // How authors spell the per-item delay. The property-backed form falls
    // back to 100 ms when the property is unset.
    let css = StaggerSpec::from("75ms");
    let themed = StaggerSpec::from(true);
    let per_item = css.resolve(|_| None);
    println!("stagger \"75ms\"                 -> {:?}", per_item);
    println!(
        "stagger true, property set     -> {:?}",
        themed.resolve(|name| (name == STAGGER_PROPERTY).then(|| String::from("120ms")))
    );
    println!(
        "stagger true, property unset   -> {:?}",
        themed.resolve(|_| None)
    );

    let scheduler = StaggerScheduler::new(Grid);
    let clock: Rc<Cell<f64>> = Rc::new(Cell::new(0.0));

    let begin = || {
        let clock = Rc::clone(&clock);
        move |task: StaggerTask<&'static str>, delay: Millis| {
            println!(
                "    t={:>3}  {} starts its transition after {} ms",
                clock.get(),
                task.element,
                delay.0
            );
        }
    };

    // Row A enters in reverse document order at t=0.
    println!("\nt=  0  row A notifications arrive (reverse document order)");
    for tile in ["a3", "a2", "a1", "a0"] {
        scheduler.schedule(
            StaggerTask {
                element: tile,
                payload: (),
            },
            per_item,
            Millis(0.0),
            begin(),
        );
    }

    // Row B follows at t=30, inside its own window.
    println!("t= 30  row B notifications arrive");
    for tile in ["b1", "b0", "b3", "b2"] {
        scheduler.schedule(
            StaggerTask {
                element: tile,
                payload: (),
            },
            per_item,
            Millis(30.0),
            begin(),
        );
    }

    // A straggler joins row A at t=40, pushing its whole batch back.
    println!("t= 40  a4 straggles into row A, rearming that window");
    scheduler.schedule(
        StaggerTask {
            element: "a4",
            payload: (),
        },
        per_item,
        Millis(40.0),
        begin(),
    );

    // An element with no parent cannot be staggered and runs at once.
    println!("t= 40  the headline has no parent and runs immediately:");
    scheduler.schedule(
        StaggerTask {
            element: "headline",
            payload: (),
        },
        per_item,
        Millis(40.0),
        begin(),
    );

    // The host clock: jump to each deadline and flush it.
    while let Some(deadline) = scheduler.next_deadline() {
        clock.set(deadline.0);
        println!("t={:>3}  window closed, flushing:", deadline.0);
        scheduler.flush_due(deadline);
    }
    assert_eq!(scheduler.pending(), 0);
}
