// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Framework-facing UART handle.
//!
//! [`Uart`] owns a descriptor and dispatches every call through the
//! operation table bound into it at init, the way the framework's generic
//! UART layer does. [`SerialPort`] is the byte-level interface shared with
//! the legacy handle; [`UartExt`] adds string and line helpers on top.


use alloc::boxed::Box;
use core::fmt;

use zuart_abi::{ErrorFlags, UartError};

use crate::platform::{InitParam, UartDescriptor, UartOps};

/// Byte-level UART interface.
pub trait SerialPort {
    /// Blocking read. Returns the number of bytes stored.
    fn read(&self, data: &mut [u8]) -> Result<usize, UartError>;

    /// Blocking write. Returns the number of bytes sent.
    fn write(&self, data: &[u8]) -> Result<usize, UartError>;

    /// Read whatever is pending without waiting for more.
    fn read_nonblocking(&self, data: &mut [u8]) -> Result<usize, UartError>;

    /// Start a write without waiting for completion.
    fn write_nonblocking(&self, data: &[u8]) -> Result<usize, UartError>;

    /// Report accumulated line errors.
    fn get_errors(&self) -> ErrorFlags;
}

/// Extension trait providing higher-level string operations.
pub trait UartExt: SerialPort {
    /// Write every byte of `data`.
    ///
    /// A write that makes no progress is reported as `IoError`.
    fn write_all(&self, data: &[u8]) -> Result<(), UartError> {
        let mut rest = data;
        while !rest.is_empty() {
            let sent = self.write(rest)?;
            if sent == 0 {
                return Err(UartError::IoError);
            }
            rest = rest.get(sent..).unwrap_or_default();
        }
        Ok(())
    }

    /// Write a string.
    fn write_text(&self, s: &str) -> Result<(), UartError> {
        self.write_all(s.as_bytes())
    }

    /// Write a string followed by a newline.
    fn write_line(&self, s: &str) -> Result<(), UartError> {
        self.write_text(s)?;
        self.write_all(b"\n")
    }

    /// Read a line into a buffer, returning the number of bytes read.
    ///
    /// Echoes characters back as they're typed.
    /// Handles backspace (0x7F and 0x08).
    /// Returns when CR (0x0D) or LF (0x0A) is received.
    /// Spins while no byte is pending.
    fn read_line(&self, buf: &mut [u8]) -> Result<usize, UartError> {
        let mut pos = 0;
        let mut byte = [0u8; 1];

        loop {
            if self.read_nonblocking(&mut byte)? == 0 {
                core::hint::spin_loop();
                continue;
            }

            match byte[0] {
                // CR - end of line
                b'\r' | b'\n' => {
                    self.write_text("\r\n")?;
                    return Ok(pos);
                }
                // Backspace (DEL or BS)
                0x7F | 0x08 if pos > 0 => {
                    pos -= 1;
                    // Echo backspace: move back, write space, move back
                    self.write_text("\x08 \x08")?;
                }
                // Regular character
                c if pos < buf.len() && (0x20..0x7F).contains(&c) => {
                    buf[pos] = c;
                    pos += 1;
                    self.write_all(&byte)?;
                }
                // Buffer full or non-printable - ignore
                _ => {}
            }
        }
    }
}

// Blanket implementation for all SerialPort types
impl<T: SerialPort + ?Sized> UartExt for T {}

/// A configured UART bound to its operation table.
pub struct Uart {
    desc: Box<UartDescriptor>,
}

impl Uart {
    /// Initialize a UART through `param.ops`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if no table is bound, otherwise whatever the
    /// table's `init` reports.
    pub fn init(param: &InitParam) -> Result<Self, UartError> {
        let ops = param.ops.ok_or(UartError::InvalidArgument)?;
        let desc = ops.init(Some(param))?;
        Ok(Self { desc })
    }

    /// Wrap a descriptor created elsewhere.
    #[must_use]
    pub const fn from_descriptor(desc: Box<UartDescriptor>) -> Self {
        Self { desc }
    }

    /// The underlying descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &UartDescriptor {
        &self.desc
    }

    /// Release the UART through its table.
    ///
    /// With no table bound this returns `InvalidArgument` and the handle
    /// is still consumed: the descriptor is dropped without any table
    /// cleanup, so a registry slot its mutex came from stays populated.
    pub fn remove(self) -> Result<(), UartError> {
        let ops = self.ops()?;
        ops.remove(Some(self.desc))
    }

    fn ops(&self) -> Result<&'static dyn UartOps, UartError> {
        self.desc.ops().ok_or(UartError::InvalidArgument)
    }
}

impl SerialPort for Uart {
    fn read(&self, data: &mut [u8]) -> Result<usize, UartError> {
        self.ops()?.read(Some(self.descriptor()), data)
    }

    fn write(&self, data: &[u8]) -> Result<usize, UartError> {
        self.ops()?.write(Some(self.descriptor()), data)
    }

    fn read_nonblocking(&self, data: &mut [u8]) -> Result<usize, UartError> {
        self.ops()?.read_nonblocking(Some(self.descriptor()), data)
    }

    fn write_nonblocking(&self, data: &[u8]) -> Result<usize, UartError> {
        self.ops()?.write_nonblocking(Some(self.descriptor()), data)
    }

    fn get_errors(&self) -> ErrorFlags {
        match self.ops() {
            Ok(ops) => ops.get_errors(Some(self.descriptor())),
            Err(_) => ErrorFlags::INVALID,
        }
    }
}

impl fmt::Write for Uart {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_text(s).map_err(|_| fmt::Error)
    }
}

impl fmt::Debug for Uart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Uart").field(&self.desc).finish()
    }
}
