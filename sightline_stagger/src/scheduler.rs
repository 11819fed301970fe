// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-parent debounce queue and its document-order flush.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::value::Millis;

/// Debounce window armed on every enqueue.
///
/// Coalesces sensor notifications that arrive across nearly simultaneous
/// platform callback rounds, so siblings entering together stagger relative
/// to each other instead of each starting its own delay sequence. Kept
/// independent of the per-item delay; the two are unrelated quantities.
pub const DEBOUNCE_WINDOW: Millis = Millis(50.0);

/// Sibling structure as the host document sees it.
///
/// Document order is a total order over distinct elements, so two siblings
/// never share an index.
pub trait SiblingOrder<E> {
    /// The element's immediate container, or `None` at the document root.
    fn parent_of(&self, element: E) -> Option<E>;

    /// The element's document-order position among its siblings.
    fn index_in_parent(&self, element: E) -> usize;
}

/// One entry awaiting a stagger flush.
///
/// `payload` carries whatever the host needs back at flush time, an
/// intersection record and its reveal options in practice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaggerTask<E, M = ()> {
    /// The element that entered the viewport.
    pub element: E,
    /// Host data returned untouched to the flush handler.
    pub payload: M,
}

type FlushFn<E, M> = Box<dyn FnOnce(StaggerTask<E, M>, Millis)>;

struct QueuedTask<E, M> {
    task: StaggerTask<E, M>,
    per_item: Millis,
    flush: FlushFn<E, M>,
}

struct ParentQueue<E, M> {
    due: Millis,
    queue: Vec<QueuedTask<E, M>>,
}

struct SchedulerInner<E, O, M> {
    order: O,
    window: Millis,
    pending: HashMap<E, ParentQueue<E, M>>,
}

impl<E: Copy + Eq + Hash, O, M> SchedulerInner<E, O, M> {
    /// Drops any queued task for `element`, pruning emptied parent queues.
    fn remove_task(&mut self, element: E) -> usize {
        let mut removed = 0;
        self.pending.retain(|_, slot| {
            let before = slot.queue.len();
            slot.queue.retain(|entry| entry.task.element != element);
            removed += before - slot.queue.len();
            !slot.queue.is_empty()
        });
        removed
    }
}

/// Groups near-simultaneous entries by parent and assigns each a
/// document-order delay.
///
/// A cloneable handle; clones share one queue map. Tasks are keyed by their
/// parent element: every enqueue (re)arms that parent's debounce deadline,
/// and a queue whose deadline passes uninterrupted is flushed in document
/// order with delays `0, d, 2d, ...` where `d` is each task's own per-item
/// delay.
///
/// The scheduler never sleeps. The host drives it with its own clock:
/// [`StaggerScheduler::next_deadline`] says when to wake,
/// [`StaggerScheduler::flush_due`] runs everything whose window has closed.
/// Flush handlers run with no internal borrow held, so they may re-enter
/// the scheduler.
pub struct StaggerScheduler<E, O, M = ()> {
    inner: Rc<RefCell<SchedulerInner<E, O, M>>>,
}

impl<E, O, M> Clone for StaggerScheduler<E, O, M> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E: Copy + Eq + Hash, O: SiblingOrder<E>, M> StaggerScheduler<E, O, M> {
    /// Creates an empty scheduler with the standard [`DEBOUNCE_WINDOW`].
    pub fn new(order: O) -> Self {
        Self::with_window(order, DEBOUNCE_WINDOW)
    }

    /// Creates an empty scheduler with a custom debounce window.
    pub fn with_window(order: O, window: Millis) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SchedulerInner {
                order,
                window,
                pending: HashMap::new(),
            })),
        }
    }

    /// Schedules `task` behind its parent's debounce window, or runs it now.
    ///
    /// The task runs immediately with zero delay when `per_item` is not
    /// positive (no stagger requested) or the element has no parent (nothing
    /// to stagger against); `true` is returned in that case. Otherwise the
    /// task joins its parent's queue, replacing any queued task for the same
    /// element, and the parent's deadline is rearmed to `now` plus the
    /// window.
    pub fn schedule(
        &self,
        task: StaggerTask<E, M>,
        per_item: Millis,
        now: Millis,
        flush: impl FnOnce(StaggerTask<E, M>, Millis) + 'static,
    ) -> bool {
        let parent = if per_item.0 > 0.0 {
            self.inner.borrow().order.parent_of(task.element)
        } else {
            None
        };
        let Some(parent) = parent else {
            // No internal borrow is held here, so the handler may re-enter.
            flush(task, Millis::ZERO);
            return true;
        };
        let mut inner = self.inner.borrow_mut();
        // One pending task per element; a re-schedule replaces the old one
        // even if the element moved to a different parent in between.
        inner.remove_task(task.element);
        let window = inner.window;
        let slot = inner.pending.entry(parent).or_insert_with(|| ParentQueue {
            due: Millis::ZERO,
            queue: Vec::new(),
        });
        slot.queue.push(QueuedTask {
            task,
            per_item,
            flush: Box::new(flush),
        });
        slot.due = now + window;
        false
    }

    /// Flushes every parent queue whose deadline is at or before `now`.
    ///
    /// Each flushed queue is sorted by [`SiblingOrder::index_in_parent`] and
    /// its handlers run with delay `index * per_item`, earliest in document
    /// order first. Returns how many tasks ran.
    pub fn flush_due(&self, now: Millis) -> usize {
        let mut work = Vec::new();
        {
            let mut inner = self.inner.borrow_mut();
            let due: Vec<E> = inner
                .pending
                .iter()
                .filter(|(_, slot)| slot.due.0 <= now.0)
                .map(|(parent, _)| *parent)
                .collect();
            for parent in due {
                let Some(mut slot) = inner.pending.remove(&parent) else {
                    continue;
                };
                slot.queue
                    .sort_by_key(|entry| inner.order.index_in_parent(entry.task.element));
                for (index, entry) in slot.queue.into_iter().enumerate() {
                    let delay = Millis(entry.per_item.0 * index as f64);
                    work.push((entry.task, delay, entry.flush));
                }
            }
        }
        let count = work.len();
        for (task, delay, flush) in work {
            flush(task, delay);
        }
        count
    }

    /// Drops the queued task for `element`, if any. Returns how many were
    /// removed.
    ///
    /// Only queued tasks can be cancelled; once [`StaggerScheduler::flush_due`]
    /// picks a queue up, all of its tasks are committed.
    pub fn cancel(&self, element: E) -> usize {
        self.inner.borrow_mut().remove_task(element)
    }

    /// Earliest pending deadline, if any queue is waiting.
    ///
    /// Hosts with a single timer re-arm it to this after every call that may
    /// have changed the queues.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.inner
            .borrow()
            .pending
            .values()
            .map(|slot| slot.due)
            .reduce(|a, b| if b.0 < a.0 { b } else { a })
    }

    /// Number of tasks waiting across all parents.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner
            .borrow()
            .pending
            .values()
            .map(|slot| slot.queue.len())
            .sum()
    }
}

impl<E: Copy + Eq + Hash, O, M> fmt::Debug for StaggerScheduler<E, O, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        let tasks: usize = inner.pending.values().map(|slot| slot.queue.len()).sum();
        f.debug_struct("StaggerScheduler")
            .field("window", &inner.window)
            .field("parents", &inner.pending.len())
            .field("tasks", &tasks)
            .finish_non_exhaustive()
    }
}
