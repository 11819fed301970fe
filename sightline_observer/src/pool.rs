// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sensor pool: shared platform sensors behind generational handles.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::backend::SensorBackend;
use crate::config::SensorOptions;
use crate::record::IntersectionRecord;

/// Identifier for a pooled sensor (generational).
///
/// Returned by [`ObserverPool::acquire`]; doubles as the name the backend and
/// the platform glue use for the sensor. Ids from disposed sensors go stale:
/// every pool operation on a stale id is a silent no-op.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SensorId(u32, u32);

impl SensorId {
    fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    fn idx(self) -> usize {
        self.0 as usize
    }

    fn generation(self) -> u32 {
        self.1
    }
}

type Callback<E> = Rc<dyn Fn(&IntersectionRecord<E>)>;

struct SensorInstance<E> {
    root: Option<E>,
    key: String,
    elements: HashMap<E, Callback<E>>,
}

struct PoolInner<E, B> {
    backend: B,
    slots: Vec<Option<SensorInstance<E>>>,
    // Slot generations outlive disposal so stale ids never alias a reused slot.
    generations: Vec<u32>,
    free_list: Vec<usize>,
    roots: HashMap<Option<E>, HashMap<String, SensorId>>,
}

impl<E: Copy + Eq + Hash, B: SensorBackend<E>> PoolInner<E, B> {
    fn is_alive(&self, id: SensorId) -> bool {
        match self.slots.get(id.idx()) {
            Some(Some(_)) => self.generations[id.idx()] == id.generation(),
            _ => false,
        }
    }

    fn instance(&self, id: SensorId) -> &SensorInstance<E> {
        self.slots[id.idx()].as_ref().expect("dangling SensorId")
    }

    fn instance_mut(&mut self, id: SensorId) -> &mut SensorInstance<E> {
        self.slots[id.idx()].as_mut().expect("dangling SensorId")
    }

    fn instance_opt(&self, id: SensorId) -> Option<&SensorInstance<E>> {
        if !self.is_alive(id) {
            return None;
        }
        self.slots[id.idx()].as_ref()
    }

    fn allocate(&mut self, root: Option<E>, key: String) -> SensorId {
        let instance = SensorInstance {
            root,
            key,
            elements: HashMap::new(),
        };
        if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].wrapping_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(instance);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "SensorId uses 32-bit indices by design."
            )]
            let id = SensorId::new(idx as u32, generation);
            id
        } else {
            self.slots.push(Some(instance));
            self.generations.push(1);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "SensorId uses 32-bit indices by design."
            )]
            let id = SensorId::new((self.slots.len() - 1) as u32, 1);
            id
        }
    }

    /// Frees the slot and removes the instance's root-group entries.
    fn dispose(&mut self, id: SensorId) {
        let Some(instance) = self.slots[id.idx()].take() else {
            return;
        };
        self.free_list.push(id.idx());
        if let Some(keys) = self.roots.get_mut(&instance.root) {
            keys.remove(&instance.key);
            if keys.is_empty() {
                self.roots.remove(&instance.root);
            }
        }
    }
}

/// Shared registry of pooled visibility sensors.
///
/// Registrations with the same root and the same
/// [canonical options key](SensorOptions::canonical_key) share one backend
/// sensor; the pool tracks which elements each sensor watches and routes
/// delivered records to per-element callbacks.
///
/// The pool is a cloneable handle over shared single-threaded state, so
/// callbacks registered with it may re-enter it: a callback can release its
/// own registration (the usual "reveal once" flow) or acquire new ones while
/// a batch is still being delivered.
pub struct ObserverPool<E, B: SensorBackend<E>> {
    inner: Rc<RefCell<PoolInner<E, B>>>,
}

impl<E, B: SensorBackend<E>> Clone for ObserverPool<E, B> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E: Copy + Eq + Hash, B: SensorBackend<E>> ObserverPool<E, B> {
    /// Creates an empty pool over the given backend.
    pub fn new(backend: B) -> Self {
        Self {
            inner: Rc::new(RefCell::new(PoolInner {
                backend,
                slots: Vec::new(),
                generations: Vec::new(),
                free_list: Vec::new(),
                roots: HashMap::new(),
            })),
        }
    }

    /// Registers `element` under the given options and starts observing it.
    ///
    /// Reuses a live sensor when one exists for (root, canonical key), else
    /// creates one through the backend. Re-acquiring an element already
    /// watched by that sensor replaces its callback without a second
    /// backend `observe`.
    ///
    /// The returned id refers to the shared sensor instance; pass it to
    /// [`release`](Self::release) together with the element.
    pub fn acquire(
        &self,
        element: E,
        options: &SensorOptions<E>,
        on_change: impl Fn(&IntersectionRecord<E>) + 'static,
    ) -> SensorId {
        let mut inner = self.inner.borrow_mut();
        let mut options = options.clone();
        if options.margin.is_empty() {
            options.margin = String::from("0px");
        }
        let key = options.canonical_key();

        let existing = inner
            .roots
            .get(&options.root)
            .and_then(|keys| keys.get(&key))
            .copied();
        let id = match existing {
            Some(id) if inner.is_alive(id) => id,
            _ => {
                let id = inner.allocate(options.root, key.clone());
                inner.backend.create(id, &options);
                inner.roots.entry(options.root).or_default().insert(key, id);
                id
            }
        };

        let instance = inner.instance_mut(id);
        let fresh = instance
            .elements
            .insert(element, Rc::new(on_change))
            .is_none();
        if fresh {
            inner.backend.observe(id, element);
        }
        id
    }

    /// Stops observing `element` on the sensor behind `id`.
    ///
    /// Releasing the last element disposes the sensor: the backend is
    /// disconnected, the slot is freed, and the (root, key) entry is removed,
    /// dropping the root group when it empties. Stale ids and elements that
    /// were never (or are no longer) registered are silent no-ops, so double
    /// release is harmless.
    pub fn release(&self, id: SensorId, element: E) {
        let mut inner = self.inner.borrow_mut();
        if !inner.is_alive(id) {
            return;
        }
        if inner.instance_mut(id).elements.remove(&element).is_none() {
            return;
        }
        inner.backend.unobserve(id, element);
        if inner.instance(id).elements.is_empty() {
            inner.backend.disconnect(id);
            inner.dispose(id);
        }
    }

    /// Routes a batch of records from the platform to registered callbacks.
    ///
    /// Liveness is re-checked per record: if `id` is stale when a record is
    /// examined (including a disposal caused by an earlier callback in this
    /// very batch), the rest of the batch is dropped. A record whose target
    /// has no registered callback is skipped. Callbacks run with no pool
    /// borrow held and may acquire or release freely.
    pub fn deliver(&self, id: SensorId, records: &[IntersectionRecord<E>]) {
        for record in records {
            let callback = {
                let inner = self.inner.borrow();
                let Some(instance) = inner.instance_opt(id) else {
                    return;
                };
                let Some(callback) = instance.elements.get(&record.target) else {
                    continue;
                };
                Rc::clone(callback)
            };
            callback(record);
        }
    }

    /// Number of live sensor instances.
    #[must_use]
    pub fn sensor_count(&self) -> usize {
        let inner = self.inner.borrow();
        inner.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Number of root groups with at least one live sensor.
    #[must_use]
    pub fn root_count(&self) -> usize {
        self.inner.borrow().roots.len()
    }

    /// Number of elements watched by the sensor behind `id`, or zero for a
    /// stale id.
    #[must_use]
    pub fn observed_count(&self, id: SensorId) -> usize {
        let inner = self.inner.borrow();
        inner.instance_opt(id).map_or(0, |i| i.elements.len())
    }
}

impl<E: Copy + Eq + Hash, B: SensorBackend<E>> fmt::Debug for ObserverPool<E, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        let total = inner.slots.len();
        let alive = inner.slots.iter().filter(|slot| slot.is_some()).count();
        f.debug_struct("ObserverPool")
            .field("sensors_total", &total)
            .field("sensors_alive", &alive)
            .field("free_list", &inner.free_list.len())
            .field("roots", &inner.roots.len())
            .finish_non_exhaustive()
    }
}
