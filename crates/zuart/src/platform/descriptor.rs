// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! UART descriptor and its adapter-specific extension.

use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::Any;
use core::fmt;

use zuart_abi::{DeviceId, IrqId};

use super::UartOps;
use crate::block::BlockLease;
use crate::driver::UartDriver;
use crate::registry::{DeviceGuard, DeviceMutex};

/// One configured UART channel.
///
/// Owned by whoever called `init`; handed back to `remove` to release
/// it. The mutex is shared with every other descriptor created for the
/// same device id while its registry slot was live.
pub struct UartDescriptor {
    mutex: Arc<DeviceMutex>,
    irq_id: IrqId,
    baud_rate: u32,
    ops: Option<&'static dyn UartOps>,
    extension: Option<Extension>,
    /// Block backing the descriptor itself.
    block: Option<BlockLease>,
}

/// The owned pieces of a descriptor, in release order.
pub struct DescriptorParts {
    /// Adapter state; release first.
    pub extension: Option<Extension>,
    /// The device mutex handle; release before clearing the registry slot.
    pub mutex: Arc<DeviceMutex>,
    /// Block backing the descriptor; release last.
    pub block: Option<BlockLease>,
}

impl UartDescriptor {
    /// Create a descriptor bound to `mutex`.
    ///
    /// The device id is taken from the mutex.
    #[must_use]
    pub const fn new(mutex: Arc<DeviceMutex>) -> Self {
        Self {
            mutex,
            irq_id: IrqId::new(0),
            baud_rate: 0,
            ops: None,
            extension: None,
            block: None,
        }
    }

    /// Record the interrupt line.
    #[must_use]
    pub const fn with_irq(mut self, irq_id: IrqId) -> Self {
        self.irq_id = irq_id;
        self
    }

    /// Record the configured baud rate.
    #[must_use]
    pub const fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    /// Bind an operation table.
    #[must_use]
    pub const fn with_ops(mut self, ops: Option<&'static dyn UartOps>) -> Self {
        self.ops = ops;
        self
    }

    /// Attach adapter state.
    #[must_use]
    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.extension = Some(extension);
        self
    }

    /// Charge the descriptor to an allocator block.
    #[must_use]
    pub fn with_block(mut self, block: BlockLease) -> Self {
        self.block = Some(block);
        self
    }

    /// The device id.
    #[inline]
    #[must_use]
    pub fn device_id(&self) -> DeviceId {
        self.mutex.device_id()
    }

    /// The interrupt line.
    #[inline]
    #[must_use]
    pub const fn irq_id(&self) -> IrqId {
        self.irq_id
    }

    /// The baud rate applied at init.
    #[inline]
    #[must_use]
    pub const fn baud_rate(&self) -> u32 {
        self.baud_rate
    }

    /// The bound operation table, if any.
    #[inline]
    #[must_use]
    pub const fn ops(&self) -> Option<&'static dyn UartOps> {
        self.ops
    }

    /// The adapter state, if any.
    #[inline]
    #[must_use]
    pub const fn extension(&self) -> Option<&Extension> {
        self.extension.as_ref()
    }

    /// The polling adapter state, if that is what is attached.
    #[must_use]
    pub fn polling(&self) -> Option<&PollingExtension> {
        self.extension.as_ref().and_then(Extension::as_polling)
    }

    /// The device mutex.
    #[inline]
    #[must_use]
    pub const fn mutex(&self) -> &Arc<DeviceMutex> {
        &self.mutex
    }

    /// Acquire the device mutex for one transfer.
    pub fn lock(&self) -> DeviceGuard<'_> {
        self.mutex.lock()
    }

    /// Take the descriptor apart for an ordered release.
    #[must_use]
    pub fn into_parts(self) -> DescriptorParts {
        DescriptorParts {
            extension: self.extension,
            mutex: self.mutex,
            block: self.block,
        }
    }
}

impl fmt::Debug for UartDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UartDescriptor")
            .field("device_id", &self.device_id())
            .field("irq_id", &self.irq_id)
            .field("baud_rate", &self.baud_rate)
            .field("ops", &self.ops.is_some())
            .field("extension", &self.extension)
            .finish_non_exhaustive()
    }
}

/// Adapter-specific state attached to a descriptor.
pub enum Extension {
    /// State of the polling adapter.
    Polling(PollingExtension),
    /// State of any other adapter, recovered with [`Extension::downcast_ref`].
    Custom(Box<dyn Any + Send + Sync>),
}

impl Extension {
    /// The polling state, if this is one.
    #[must_use]
    pub const fn as_polling(&self) -> Option<&PollingExtension> {
        match self {
            Self::Polling(ext) => Some(ext),
            Self::Custom(_) => None,
        }
    }

    /// Borrow custom state of type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Polling(_) => None,
            Self::Custom(state) => state.downcast_ref(),
        }
    }
}

impl fmt::Debug for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Polling(ext) => f.debug_tuple("Polling").field(ext).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Polling adapter state: the device handle and its initialized flag.
pub struct PollingExtension {
    device: &'static dyn UartDriver,
    initialized: bool,
    /// Block backing the extension.
    _block: BlockLease,
}

impl PollingExtension {
    /// State for an initialized device.
    #[must_use]
    pub const fn new(device: &'static dyn UartDriver, block: BlockLease) -> Self {
        Self {
            device,
            initialized: true,
            _block: block,
        }
    }

    /// The device handle.
    #[inline]
    #[must_use]
    pub const fn device(&self) -> &'static dyn UartDriver {
        self.device
    }

    /// Returns true once the device has been configured.
    #[inline]
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl fmt::Debug for PollingExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PollingExtension")
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}
