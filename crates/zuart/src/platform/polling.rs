// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Operation table backed by the RTOS polling driver.

use alloc::boxed::Box;
use alloc::sync::Arc;
use core::mem::size_of;

use tracing::{debug, trace, warn};
use zuart_abi::{DeviceId, ErrorFlags, UartError};

use super::{Extension, InitParam, PollingExtension, UartDescriptor, UartOps};
use crate::block::BlockAllocator;
use crate::driver::{UartDriver, read_polled, write_polled};
use crate::registry::MutexRegistry;
use crate::translate::Translation;

/// Unified adapter over a polling UART driver.
///
/// Owns the driver handle, the mutex table for its device ids, and the
/// block budget its descriptors are charged to. Place it in a `static`
/// (or leak it) and bind `&ADAPTER` as the descriptor's operation table.
pub struct PollingUart<D> {
    driver: D,
    registry: MutexRegistry,
    blocks: BlockAllocator,
}

impl<D: UartDriver + 'static> PollingUart<D> {
    /// Create an adapter whose allocator never runs out.
    #[must_use]
    pub const fn new(driver: D) -> Self {
        Self::with_block_limit(driver, usize::MAX)
    }

    /// Create an adapter that holds at most `limit` blocks at once.
    ///
    /// Each live descriptor takes two blocks (descriptor and extension).
    #[must_use]
    pub const fn with_block_limit(driver: D, limit: usize) -> Self {
        Self {
            driver,
            registry: MutexRegistry::new(),
            blocks: BlockAllocator::new(limit),
        }
    }

    /// The bound driver.
    #[inline]
    #[must_use]
    pub const fn driver(&self) -> &D {
        &self.driver
    }

    /// The mutex table.
    #[inline]
    #[must_use]
    pub const fn registry(&self) -> &MutexRegistry {
        &self.registry
    }

    /// The block allocator.
    #[inline]
    #[must_use]
    pub const fn blocks(&self) -> &BlockAllocator {
        &self.blocks
    }

    /// Shared body of `read` and `read_nonblocking`.
    fn read_locked(desc: Option<&UartDescriptor>, data: &mut [u8]) -> Result<usize, UartError> {
        let desc = desc.ok_or(UartError::InvalidArgument)?;
        let ext = desc.polling().ok_or(UartError::InvalidArgument)?;

        let _guard = desc.lock();
        let count = read_polled(ext.device(), data);
        trace!(device = %desc.device_id(), requested = data.len(), count, "uart read");
        Ok(count)
    }
}

impl<D: UartDriver + 'static> UartOps for PollingUart<D> {
    fn init(&'static self, param: Option<&InitParam>) -> Result<Box<UartDescriptor>, UartError> {
        let param = param.ok_or(UartError::InvalidArgument)?;
        let id = DeviceId::new(param.device_id).ok_or(UartError::InvalidArgument)?;

        // Leases drop on every early return below, so a failed init
        // leaves the budget as it found it.
        let block = self
            .blocks
            .alloc(size_of::<UartDescriptor>())
            .ok_or(UartError::OutOfMemory)?;
        let ext_block = self
            .blocks
            .alloc(size_of::<PollingExtension>())
            .ok_or(UartError::OutOfMemory)?;

        let line = param.line();
        let config = Translation::Fallback.apply(&line);
        if let Err(err) = self.driver.configure(&config) {
            warn!(device = %id, %line, %err, "uart configuration rejected");
            return Err(UartError::IoError);
        }

        if self.registry.is_live(id) {
            warn!(device = %id, "uart init on a live device id, sharing its mutex");
        }
        let mutex = self.registry.get_or_create(id);

        let extension = PollingExtension::new(&self.driver, ext_block);
        let desc = UartDescriptor::new(mutex)
            .with_irq(param.irq_id)
            .with_baud_rate(param.baud_rate)
            .with_ops(param.ops)
            .with_extension(Extension::Polling(extension))
            .with_block(block);

        debug!(device = %id, %line, "uart initialized");
        Ok(Box::new(desc))
    }

    fn read(&self, desc: Option<&UartDescriptor>, data: &mut [u8]) -> Result<usize, UartError> {
        Self::read_locked(desc, data)
    }

    fn write(&self, desc: Option<&UartDescriptor>, data: &[u8]) -> Result<usize, UartError> {
        let desc = desc.ok_or(UartError::InvalidArgument)?;
        let ext = desc.polling().ok_or(UartError::InvalidArgument)?;

        let _guard = desc.lock();
        let count = write_polled(ext.device(), data);
        trace!(device = %desc.device_id(), count, "uart write");
        Ok(count)
    }

    /// The polling primitive never waits for a byte, so this is `read`.
    fn read_nonblocking(
        &self,
        desc: Option<&UartDescriptor>,
        data: &mut [u8],
    ) -> Result<usize, UartError> {
        Self::read_locked(desc, data)
    }

    /// There is no buffered transmit path; this waits like `write`.
    fn write_nonblocking(
        &self,
        desc: Option<&UartDescriptor>,
        data: &[u8],
    ) -> Result<usize, UartError> {
        self.write(desc, data)
    }

    fn remove(&self, desc: Option<Box<UartDescriptor>>) -> Result<(), UartError> {
        let desc = desc.ok_or(UartError::InvalidArgument)?;
        let id = desc.device_id();
        let parts = (*desc).into_parts();

        // extension -> mutex -> registry slot -> descriptor block
        drop(parts.extension);
        let mutex = Arc::as_ptr(&parts.mutex);
        drop(parts.mutex);
        if !self.registry.release(id, mutex) {
            trace!(device = %id, "mutex slot already reassigned, left in place");
        }
        drop(parts.block);

        debug!(device = %id, "uart removed");
        Ok(())
    }

    fn get_errors(&self, desc: Option<&UartDescriptor>) -> ErrorFlags {
        if desc.is_some() {
            ErrorFlags::NONE
        } else {
            ErrorFlags::INVALID
        }
    }
}
