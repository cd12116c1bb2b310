// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Framework block allocator.
//!
//! Descriptors and extension blocks are charged against a fixed block
//! budget, the way the framework's allocator hands out blocks from a
//! bounded heap. Running out is reported as `None`, which the adapters
//! turn into `OutOfMemory`. Blocks return to the budget when their lease
//! is dropped, so early returns during init release everything they took.


use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

/// Budgeted block allocator.
pub struct BlockAllocator {
    /// Blocks currently leased.
    in_use: AtomicUsize,
    /// Maximum number of blocks leased at once.
    limit: usize,
}

impl BlockAllocator {
    /// Creates an allocator that hands out at most `limit` blocks at once.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self {
            in_use: AtomicUsize::new(0),
            limit,
        }
    }

    /// Creates an allocator that never runs out.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    /// Allocates a block of `size` bytes.
    ///
    /// # Returns
    ///
    /// A lease on the block, or `None` if the budget is exhausted.
    pub fn alloc(&'static self, size: usize) -> Option<BlockLease> {
        self.in_use
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < self.limit).then_some(n + 1)
            })
            .ok()?;
        Some(BlockLease { pool: self, size })
    }

    /// Returns the number of blocks currently leased.
    #[must_use]
    pub fn in_use(&self) -> usize {
        self.in_use.load(Ordering::Acquire)
    }

    /// Returns the number of blocks that can still be leased.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.in_use())
    }

    /// Returns the configured block limit.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    fn free(&self) {
        self.in_use.fetch_sub(1, Ordering::AcqRel);
    }
}

impl Default for BlockAllocator {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// A leased block. Dropping it frees the block.
pub struct BlockLease {
    pool: &'static BlockAllocator,
    size: usize,
}

impl BlockLease {
    /// Size in bytes requested for this block.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }
}

impl Drop for BlockLease {
    fn drop(&mut self) {
        self.pool.free();
    }
}

impl fmt::Debug for BlockLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockLease({} bytes)", self.size)
    }
}
