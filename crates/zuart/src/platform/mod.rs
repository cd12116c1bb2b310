// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Unified platform-ops adapter.
//!
//! The framework's generic UART front-end talks to every UART through
//! the same seven-operation table, [`UartOps`]. [`PollingUart`] is the
//! table for the RTOS polling driver; test stubs and other backends
//! implement the trait the same way. Tables are `'static` and shared by
//! reference across every descriptor bound to them.

#[cfg(test)]
mod polling_test;

mod descriptor;
mod param;
mod polling;

pub use descriptor::{DescriptorParts, Extension, PollingExtension, UartDescriptor};
pub use param::InitParam;
pub use polling::PollingUart;

use alloc::boxed::Box;

use zuart_abi::{ErrorFlags, UartError};

/// Seven-operation UART contract.
///
/// An operation a table does not override reports `NotSupported`.
/// Descriptors are passed as `Option` because the framework may hand in a
/// missing one; implementations answer that with `InvalidArgument`
/// (or `ErrorFlags::INVALID` for `get_errors`).
pub trait UartOps: Send + Sync + 'static {
    /// Allocate and configure a descriptor.
    ///
    /// Takes `&'static self` so the descriptor can keep references into
    /// the table's own state.
    fn init(&'static self, _param: Option<&InitParam>) -> Result<Box<UartDescriptor>, UartError> {
        Err(UartError::NotSupported)
    }

    /// Blocking read. Returns the number of bytes stored in `data`.
    fn read(&self, _desc: Option<&UartDescriptor>, _data: &mut [u8]) -> Result<usize, UartError> {
        Err(UartError::NotSupported)
    }

    /// Blocking write. Returns the number of bytes sent.
    fn write(&self, _desc: Option<&UartDescriptor>, _data: &[u8]) -> Result<usize, UartError> {
        Err(UartError::NotSupported)
    }

    /// Read whatever is pending without waiting for more.
    fn read_nonblocking(
        &self,
        _desc: Option<&UartDescriptor>,
        _data: &mut [u8],
    ) -> Result<usize, UartError> {
        Err(UartError::NotSupported)
    }

    /// Start a write without waiting for completion.
    fn write_nonblocking(
        &self,
        _desc: Option<&UartDescriptor>,
        _data: &[u8],
    ) -> Result<usize, UartError> {
        Err(UartError::NotSupported)
    }

    /// Release a descriptor and everything it owns.
    fn remove(&self, _desc: Option<Box<UartDescriptor>>) -> Result<(), UartError> {
        Err(UartError::NotSupported)
    }

    /// Report accumulated line errors.
    fn get_errors(&self, desc: Option<&UartDescriptor>) -> ErrorFlags {
        if desc.is_some() {
            ErrorFlags::NONE
        } else {
            ErrorFlags::INVALID
        }
    }
}
