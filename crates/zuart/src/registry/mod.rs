// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Per-device mutex registry.
//!
//! A fixed-capacity table with one slot per device id. A slot is either
//! empty or holds a live `DeviceMutex`; slots are filled on first init of
//! their id and cleared on remove. Descriptors hold their own reference to
//! the mutex, so clearing a slot never frees a lock that is still in use.
//!
//! The table itself sits behind one coarse lock so init and remove from
//! different contexts cannot corrupt it, even though the adapters leave
//! init/remove ordering to the caller.


use alloc::sync::Arc;

use spin::{Mutex, MutexGuard};
use zuart_abi::DeviceId;

/// Lock serializing transfers on one device id.
pub struct DeviceMutex {
    id: DeviceId,
    lock: Mutex<()>,
}

/// Guard held for the duration of one transfer.
pub type DeviceGuard<'a> = MutexGuard<'a, ()>;

impl DeviceMutex {
    /// Create an unlocked mutex for `id`.
    #[must_use]
    pub const fn new(id: DeviceId) -> Self {
        Self {
            id,
            lock: Mutex::new(()),
        }
    }

    /// The device id this mutex serializes.
    #[inline]
    #[must_use]
    pub const fn device_id(&self) -> DeviceId {
        self.id
    }

    /// Acquire the lock, spinning until it is free.
    ///
    /// There is no timeout; the lock is released when the guard drops.
    pub fn lock(&self) -> DeviceGuard<'_> {
        self.lock.lock()
    }

    /// Returns true if some context currently holds the lock.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }
}

/// Fixed-capacity table of device mutexes indexed by device id.
pub struct MutexRegistry {
    slots: Mutex<[Option<Arc<DeviceMutex>>; DeviceId::COUNT]>,
}

impl MutexRegistry {
    /// Create a registry with every slot empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Mutex::new([const { None }; DeviceId::COUNT]),
        }
    }

    /// Return the mutex for `id`, creating it if the slot is empty.
    ///
    /// Calling this again for a live slot returns the same mutex.
    pub fn get_or_create(&self, id: DeviceId) -> Arc<DeviceMutex> {
        let mut slots = self.slots.lock();
        Arc::clone(slots[id.as_index()].get_or_insert_with(|| Arc::new(DeviceMutex::new(id))))
    }

    /// Return the mutex for `id` without creating one.
    #[must_use]
    pub fn get(&self, id: DeviceId) -> Option<Arc<DeviceMutex>> {
        self.slots.lock()[id.as_index()].clone()
    }

    /// Clear the slot for `id`.
    ///
    /// Returns true if the slot held a mutex. Descriptors still holding the
    /// old mutex keep it alive; the next `get_or_create` makes a fresh one.
    pub fn invalidate(&self, id: DeviceId) -> bool {
        self.slots.lock()[id.as_index()].take().is_some()
    }

    /// Clear the slot for `id` only if it still holds `mutex`.
    ///
    /// `mutex` is compared by address (see [`Arc::as_ptr`]), so the caller
    /// may drop its own handle first. A slot that was cleared and refilled
    /// by a later init is left alone. Returns true if the slot was cleared.
    pub fn release(&self, id: DeviceId, mutex: *const DeviceMutex) -> bool {
        let mut slots = self.slots.lock();
        let slot = &mut slots[id.as_index()];
        if slot.as_ref().is_some_and(|live| Arc::as_ptr(live) == mutex) {
            *slot = None;
            true
        } else {
            false
        }
    }

    /// Returns true if the slot for `id` holds a mutex.
    #[must_use]
    pub fn is_live(&self, id: DeviceId) -> bool {
        self.slots.lock()[id.as_index()].is_some()
    }

    /// Number of populated slots.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.slots.lock().iter().filter(|slot| slot.is_some()).count()
    }
}

impl Default for MutexRegistry {
    fn default() -> Self {
        Self::new()
    }
}
