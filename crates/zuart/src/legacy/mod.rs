// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Legacy descriptor adapter.
//!
//! The older interface binds one physical UART, configures it at init, and
//! forwards transfers through a caller-supplied table of function
//! pointers ([`LegacyOps`]). Every forwarded call holds the device mutex.
//!
//! Differences from the unified adapter:
//!
//! - Translation is one-to-one (no fallback).
//! - A rejected configuration is only logged unless the adapter was
//!   built with [`LegacyAdapter::strict`].
//! - `remove` frees the descriptor but leaves the mutex slot populated.


mod handle;
mod ops;

pub use handle::LegacyUart;
pub use ops::{LegacyOps, POLLING_LEGACY_OPS, ReadFn, WriteFn};

use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::Any;
use core::fmt;

use tracing::{debug, trace, warn};
use zuart_abi::{DeviceId, ErrorFlags, IrqId, UartError};

use crate::driver::UartDriver;
use crate::platform::InitParam;
use crate::registry::{DeviceMutex, MutexRegistry};
use crate::translate::Translation;

/// Initialization parameters for the legacy adapter.
pub type LegacyInitParam = InitParam<LegacyOps>;

impl InitParam<LegacyOps> {
    /// 8N1 parameters for `device_id` at `baud_rate` with no table bound.
    #[must_use]
    pub const fn legacy(device_id: u8, baud_rate: u32) -> Self {
        Self::blank(device_id, baud_rate)
    }
}

/// What the legacy adapter does when the driver rejects a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigErrorPolicy {
    /// Log the driver status and report success.
    #[default]
    Log,
    /// Report `IoError`.
    Propagate,
}

/// Descriptor of the legacy adapter.
pub struct LegacyDescriptor {
    mutex: Arc<DeviceMutex>,
    irq_id: IrqId,
    baud_rate: u32,
    ops: Option<&'static LegacyOps>,
    device: &'static dyn UartDriver,
    extra: Option<&'static (dyn Any + Send + Sync)>,
}

impl LegacyDescriptor {
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

    /// The bound function table, if any.
    #[inline]
    #[must_use]
    pub const fn ops(&self) -> Option<&'static LegacyOps> {
        self.ops
    }

    /// The physical device this descriptor drives.
    #[inline]
    #[must_use]
    pub const fn device(&self) -> &'static dyn UartDriver {
        self.device
    }

    /// Extra parameters passed at init.
    #[inline]
    #[must_use]
    pub const fn extra(&self) -> Option<&'static (dyn Any + Send + Sync)> {
        self.extra
    }

    /// The device mutex.
    #[inline]
    #[must_use]
    pub const fn mutex(&self) -> &Arc<DeviceMutex> {
        &self.mutex
    }
}

impl fmt::Debug for LegacyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegacyDescriptor")
            .field("device_id", &self.device_id())
            .field("irq_id", &self.irq_id)
            .field("baud_rate", &self.baud_rate)
            .field("ops", &self.ops)
            .finish_non_exhaustive()
    }
}

/// Legacy adapter over a single physical UART.
pub struct LegacyAdapter<D> {
    driver: D,
    registry: MutexRegistry,
    policy: ConfigErrorPolicy,
}

impl<D: UartDriver + 'static> LegacyAdapter<D> {
    /// Create an adapter that logs configuration failures.
    #[must_use]
    pub const fn new(driver: D) -> Self {
        Self {
            driver,
            registry: MutexRegistry::new(),
            policy: ConfigErrorPolicy::Log,
        }
    }

    /// Create an adapter that reports configuration failures as `IoError`.
    #[must_use]
    pub const fn strict(driver: D) -> Self {
        Self {
            driver,
            registry: MutexRegistry::new(),
            policy: ConfigErrorPolicy::Propagate,
        }
    }

    /// The configuration error policy.
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> ConfigErrorPolicy {
        self.policy
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

    /// Configure the device and create a descriptor bound to `param.ops`.
    ///
    /// The configuration applies to the one physical UART regardless of
    /// the device id, so it also affects descriptors already bound to it.
    pub fn init(
        &'static self,
        param: Option<&LegacyInitParam>,
    ) -> Result<Box<LegacyDescriptor>, UartError> {
        let param = param.ok_or(UartError::InvalidArgument)?;
        let id = DeviceId::new(param.device_id).ok_or(UartError::InvalidArgument)?;

        let line = param.line();
        let config = Translation::Faithful.apply(&line);
        if let Err(err) = self.driver.configure(&config) {
            match self.policy {
                ConfigErrorPolicy::Log => {
                    warn!(device = %id, %line, %err, "uart configuration rejected, continuing");
                }
                ConfigErrorPolicy::Propagate => {
                    warn!(device = %id, %line, %err, "uart configuration rejected");
                    return Err(UartError::IoError);
                }
            }
        }

        let desc = LegacyDescriptor {
            mutex: self.registry.get_or_create(id),
            irq_id: param.irq_id,
            baud_rate: param.baud_rate,
            ops: param.ops,
            device: &self.driver,
            extra: param.extra,
        };
        debug!(device = %id, %line, "legacy uart initialized");
        Ok(Box::new(desc))
    }

    /// Free a descriptor.
    ///
    /// The mutex slot stays populated, so a later init on the same id
    /// reuses the same mutex.
    pub fn remove(&self, desc: Option<Box<LegacyDescriptor>>) -> Result<(), UartError> {
        let desc = desc.ok_or(UartError::InvalidArgument)?;
        trace!(device = %desc.device_id(), "legacy uart removed, mutex slot kept");
        drop(desc);
        Ok(())
    }

    /// Forward a blocking read to the bound table.
    pub fn read(&self, desc: Option<&LegacyDescriptor>, data: &mut [u8]) -> Result<usize, UartError> {
        forward_read(desc, data, |ops| ops.read)
    }

    /// Forward a blocking write to the bound table.
    pub fn write(&self, desc: Option<&LegacyDescriptor>, data: &[u8]) -> Result<usize, UartError> {
        forward_write(desc, data, |ops| ops.write)
    }

    /// Forward a non-blocking read to the bound table.
    pub fn read_nonblocking(
        &self,
        desc: Option<&LegacyDescriptor>,
        data: &mut [u8],
    ) -> Result<usize, UartError> {
        forward_read(desc, data, |ops| ops.read_nonblocking)
    }

    /// Forward a non-blocking write to the bound table.
    pub fn write_nonblocking(
        &self,
        desc: Option<&LegacyDescriptor>,
        data: &[u8],
    ) -> Result<usize, UartError> {
        forward_write(desc, data, |ops| ops.write_nonblocking)
    }

    /// Report line errors. No driver error state is collected.
    #[must_use]
    pub fn get_errors(&self, desc: Option<&LegacyDescriptor>) -> ErrorFlags {
        if desc.is_some() {
            ErrorFlags::NONE
        } else {
            ErrorFlags::INVALID
        }
    }
}

/// Look up a read entry and call it under the device mutex.
fn forward_read<F>(desc: Option<&LegacyDescriptor>, data: &mut [u8], pick: F) -> Result<usize, UartError>
where
    F: FnOnce(&LegacyOps) -> Option<ReadFn>,
{
    let desc = desc.ok_or(UartError::InvalidArgument)?;
    let ops = desc.ops.ok_or(UartError::InvalidArgument)?;
    let read = pick(ops).ok_or(UartError::NotSupported)?;

    let _guard = desc.mutex.lock();
    read(desc, data)
}

/// Look up a write entry and call it under the device mutex.
fn forward_write<F>(desc: Option<&LegacyDescriptor>, data: &[u8], pick: F) -> Result<usize, UartError>
where
    F: FnOnce(&LegacyOps) -> Option<WriteFn>,
{
    let desc = desc.ok_or(UartError::InvalidArgument)?;
    let ops = desc.ops.ok_or(UartError::InvalidArgument)?;
    let write = pick(ops).ok_or(UartError::NotSupported)?;

    let _guard = desc.mutex.lock();
    write(desc, data)
}
