// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Function tables for the legacy adapter.

use core::fmt;

use zuart_abi::UartError;

use super::LegacyDescriptor;
use crate::driver::{read_polled, write_polled};

/// Read entry: fill the buffer, return the byte count.
pub type ReadFn = fn(&LegacyDescriptor, &mut [u8]) -> Result<usize, UartError>;

/// Write entry: send the buffer, return the byte count.
pub type WriteFn = fn(&LegacyDescriptor, &[u8]) -> Result<usize, UartError>;

/// Caller-supplied transfer table.
///
/// A `None` entry makes the adapter report `NotSupported` for that call.
/// Entries run with the device mutex already held and must not take it.
#[derive(Clone, Copy, Default)]
pub struct LegacyOps {
    /// Blocking read.
    pub read: Option<ReadFn>,
    /// Blocking write.
    pub write: Option<WriteFn>,
    /// Non-blocking read.
    pub read_nonblocking: Option<ReadFn>,
    /// Non-blocking write.
    pub write_nonblocking: Option<WriteFn>,
}

impl LegacyOps {
    /// A table with no entries.
    pub const EMPTY: Self = Self {
        read: None,
        write: None,
        read_nonblocking: None,
        write_nonblocking: None,
    };
}

impl fmt::Debug for LegacyOps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegacyOps")
            .field("read", &self.read.is_some())
            .field("write", &self.write.is_some())
            .field("read_nonblocking", &self.read_nonblocking.is_some())
            .field("write_nonblocking", &self.write_nonblocking.is_some())
            .finish()
    }
}

/// Polling transfers on the descriptor's device.
///
/// Reads stop at the first empty poll. Writes always send every byte;
/// the non-blocking write is the blocking one.
pub static POLLING_LEGACY_OPS: LegacyOps = LegacyOps {
    read: Some(polling_read),
    write: Some(polling_write),
    read_nonblocking: Some(polling_read),
    write_nonblocking: Some(polling_write),
};

#[allow(
    clippy::unnecessary_wraps,
    reason = "signature fixed by the ReadFn table entry"
)]
fn polling_read(desc: &LegacyDescriptor, data: &mut [u8]) -> Result<usize, UartError> {
    Ok(read_polled(desc.device(), data))
}

#[allow(
    clippy::unnecessary_wraps,
    reason = "signature fixed by the WriteFn table entry"
)]
fn polling_write(desc: &LegacyDescriptor, data: &[u8]) -> Result<usize, UartError> {
    Ok(write_polled(desc.device(), data))
}
