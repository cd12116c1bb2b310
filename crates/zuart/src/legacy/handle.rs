// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Owned handle over a legacy descriptor.

use alloc::boxed::Box;
use core::fmt;

use zuart_abi::{ErrorFlags, UartError};

use super::{LegacyAdapter, LegacyDescriptor, LegacyInitParam};
use crate::driver::UartDriver;
use crate::uart::SerialPort;

/// A legacy descriptor together with the adapter that created it.
pub struct LegacyUart<D: 'static> {
    adapter: &'static LegacyAdapter<D>,
    desc: Box<LegacyDescriptor>,
}

impl<D: UartDriver + 'static> LegacyUart<D> {
    /// Initialize a descriptor through `adapter`.
    pub fn open(
        adapter: &'static LegacyAdapter<D>,
        param: &LegacyInitParam,
    ) -> Result<Self, UartError> {
        let desc = adapter.init(Some(param))?;
        Ok(Self { adapter, desc })
    }

    /// The underlying descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &LegacyDescriptor {
        &self.desc
    }

    /// Free the descriptor.
    pub fn close(self) -> Result<(), UartError> {
        self.adapter.remove(Some(self.desc))
    }
}

impl<D: UartDriver + 'static> SerialPort for LegacyUart<D> {
    fn read(&self, data: &mut [u8]) -> Result<usize, UartError> {
        self.adapter.read(Some(&self.desc), data)
    }

    fn write(&self, data: &[u8]) -> Result<usize, UartError> {
        self.adapter.write(Some(&self.desc), data)
    }

    fn read_nonblocking(&self, data: &mut [u8]) -> Result<usize, UartError> {
        self.adapter.read_nonblocking(Some(&self.desc), data)
    }

    fn write_nonblocking(&self, data: &[u8]) -> Result<usize, UartError> {
        self.adapter.write_nonblocking(Some(&self.desc), data)
    }

    fn get_errors(&self) -> ErrorFlags {
        self.adapter.get_errors(Some(&self.desc))
    }
}

impl<D: 'static> fmt::Debug for LegacyUart<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LegacyUart").field(&self.desc).finish()
    }
}
