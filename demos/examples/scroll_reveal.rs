// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal-on-scroll over a simulated page.
//!
//! Infers detection margins from card styling, registers every card with a
//! shared sensor pool, then scrolls a fake viewport up and down the page
//! and prints the enter/leave events as they happen.
//!
//! Run:
//! - `cargo run -p sightline_demos --example scroll_reveal`

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use kurbo::Rect;
use sightline_margin::{EdgeMargins, StyleSource, infer_margins};
use sightline_observer::{
    IntersectionRecord, ObserverPool, RecordingBackend, ScrollDirection, SensorId, SensorOptions,
    Threshold,
};
use sightline_reveal::{RevealEvent, RevealState, ScrollWatcher};

const VIEWPORT: f64 = 600.0;
const THRESHOLD: f64 = 0.2;

struct Card {
    id: u32,
    label: &'static str,
    classes: &'static str,
    intent: Option<&'static str>,
    once: bool,
    top: f64,
    height: f64,
}

/// Style reads for the fake page. The distance property is set once at the
/// root, as a stylesheet would.
struct PageStyle {
    cards: &'static [Card],
}

impl StyleSource<u32> for PageStyle {
    fn classes(&self, element: u32) -> Option<&str> {
        self.cards
            .iter()
            .find(|card| card.id == element)
            .map(|card| card.classes)
    }

    fn custom_property(&self, _element: u32, _name: &str) -> Option<String> {
        Some(String::from("1.5rem"))
    }

    fn transform(&self, _element: u32) -> Option<kurbo::Affine> {
        None
    }
}

static CARDS: &[Card] = &[
    Card {
        id: 1,
        label: "hero",
        classes: "opacity-0 translate-y-[24px]",
        intent: None,
        once: true,
        top: 80.0,
        height: 320.0,
    },
    Card {
        id: 2,
        label: "feature-a",
        classes: "opacity-0 below:translate-y-8",
        intent: None,
        once: false,
        top: 640.0,
        height: 200.0,
    },
    Card {
        id: 3,
        label: "feature-b",
        classes: "opacity-0 below:translate-y-8",
        intent: None,
        once: false,
        top: 880.0,
        height: 200.0,
    },
    Card {
        id: 4,
        label: "footnote",
        classes: "text-sm",
        intent: Some("slide-up"),
        once: false,
        top: 1220.0,
        height: 120.0,
    },
];

fn main() {
    let style = PageStyle { cards: CARDS };

    // Stage one: margins from styling. Cards sharing a margin string will
    // also share a platform sensor below.
    println!("Inferred margins:");
    let margins: Vec<EdgeMargins> = CARDS
        .iter()
        .map(|card| {
            let m = infer_margins(&style, card.id, card.intent);
            println!(
                "  {:<10} classes={:?} intent={:?}  ->  {:?}",
                card.label,
                card.classes,
                card.intent,
                m.to_margin()
            );
            m
        })
        .collect();

    // Stage two: one pool, shared where options agree.
    let backend = RecordingBackend::new();
    let pool = ObserverPool::new(backend.clone());
    let state = Rc::new(RefCell::new(RevealState::new()));
    let events: Rc<RefCell<Vec<RevealEvent<u32>>>> = Rc::default();
    let direction: Rc<Cell<ScrollDirection>> = Rc::default();
    let ids: Rc<RefCell<HashMap<u32, SensorId>>> = Rc::default();

    for (card, m) in CARDS.iter().zip(&margins) {
        state.borrow_mut().track(card.id, card.once);
        let options = SensorOptions {
            root: None,
            margin: m.to_margin(),
            thresholds: Threshold::One(THRESHOLD),
        };
        let id = {
            let reentrant = pool.clone();
            let state = Rc::clone(&state);
            let events = Rc::clone(&events);
            let direction = Rc::clone(&direction);
            let ids = Rc::clone(&ids);
            pool.acquire(card.id, &options, move |record| {
                let event = state
                    .borrow_mut()
                    .on_record(record, direction.get(), VIEWPORT);
                if let Some(event) = event {
                    events.borrow_mut().push(event);
                    // Once-only reveals are finished after their enter; drop
                    // the registration from inside the callback.
                    if let RevealEvent::Enter { element, done: true, .. } = event
                        && let Some(id) = ids.borrow().get(&element)
                    {
                        reentrant.release(*id, element);
                    }
                }
            })
        };
        ids.borrow_mut().insert(card.id, id);
    }
    println!(
        "\n{} cards registered across {} platform sensors ({} distinct margin/threshold keys)",
        CARDS.len(),
        backend.created(),
        pool.sensor_count()
    );

    // Stage three: scroll the fake viewport and deliver what the platform
    // sensors would report.
    let mut watcher = ScrollWatcher::new();
    for offset in [0.0, 260.0, 700.0, 260.0, 0.0] {
        println!("\n-- scroll to {offset} --");
        direction.set(watcher.classify(offset));

        for (id, records) in batches(&ids.borrow(), &margins, offset) {
            pool.deliver(id, &records);
        }

        for event in events.borrow_mut().drain(..) {
            match event {
                RevealEvent::Enter { element, direction, done } => println!(
                    "  enter  {:<10} (scrolling {:?}{})",
                    label(element),
                    direction,
                    if done { ", once: sensor released" } else { "" }
                ),
                RevealEvent::Leave { element, direction, edge } => println!(
                    "  leave  {:<10} (scrolling {:?}, off {:?})",
                    label(element),
                    direction,
                    edge
                ),
            }
        }

        let painted = state.borrow_mut().settle_pending();
        if !painted.is_empty() {
            let labels: Vec<&str> = painted.iter().map(|id| label(*id)).collect();
            println!("  next paint flips: {labels:?}");
        }
    }

    println!(
        "\nLive sensors at the end: {} (backend disconnects so far: {})",
        pool.sensor_count(),
        backend.disconnected()
    );
}

/// What each sensor would report at this scroll offset, grouped per sensor
/// in card order.
fn batches(
    ids: &HashMap<u32, SensorId>,
    margins: &[EdgeMargins],
    offset: f64,
) -> Vec<(SensorId, Vec<IntersectionRecord<u32>>)> {
    let mut out: Vec<(SensorId, Vec<IntersectionRecord<u32>>)> = Vec::new();
    for (card, m) in CARDS.iter().zip(margins) {
        let Some(&id) = ids.get(&card.id) else {
            continue;
        };
        let record = observe(card, m, offset);
        match out.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, records)) => records.push(record),
            None => out.push((id, vec![record])),
        }
    }
    out
}

/// Simulates the platform sensor: the viewport expanded by the inferred
/// margins, with a visibility-ratio threshold.
fn observe(card: &Card, margins: &EdgeMargins, offset: f64) -> IntersectionRecord<u32> {
    let top = card.top - offset;
    let bottom = top + card.height;
    let detect_top = -margins.top;
    let detect_bottom = VIEWPORT + margins.bottom;
    let overlap = (bottom.min(detect_bottom) - top.max(detect_top)).max(0.0);
    let ratio = overlap / card.height;
    IntersectionRecord {
        target: card.id,
        is_intersecting: ratio >= THRESHOLD,
        bounds: Rect::new(0.0, top, 400.0, bottom),
        ratio,
    }
}

fn label(id: u32) -> &'static str {
    CARDS
        .iter()
        .find(|card| card.id == id)
        .map(|card| card.label)
        .unwrap_or("?")
}
