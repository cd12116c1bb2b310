// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! RTOS UART driver seam.
//!
//! The adapters never touch hardware themselves. They configure the line
//! and move bytes one at a time through a `UartDriver`, which is either
//! the Zephyr polling driver or a mock for host tests.


#[cfg(any(test, feature = "std"))]
mod mock;
#[cfg(feature = "zephyr")]
mod zephyr;

#[cfg(any(test, feature = "std"))]
pub use mock::MockDriver;
#[cfg(feature = "zephyr")]
pub use zephyr::ZephyrUart;

use core::fmt;

/// Polling UART driver interface.
///
/// Implementations are shared by every descriptor bound to the device,
/// so all methods take `&self`.
pub trait UartDriver: Send + Sync {
    /// Apply a line configuration.
    ///
    /// # Errors
    ///
    /// Returns the driver's status code if it rejects the configuration.
    fn configure(&self, config: &DriverConfig) -> Result<(), DriverError>;

    /// Receive one byte if one is pending.
    ///
    /// Must not block: `None` means no byte is ready (or a receive error).
    fn poll_in(&self) -> Option<u8>;

    /// Transmit one byte, waiting for the transmitter if necessary.
    fn poll_out(&self, byte: u8);
}

/// Raw status code returned by a driver that refused an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverError(pub i32);

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "driver status {}", self.0)
    }
}

/// Parity as the RTOS driver enumerates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CfgParity {
    None = 0,
    Odd = 1,
    Even = 2,
    Mark = 3,
    Space = 4,
}

/// Stop bits as the RTOS driver enumerates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CfgStopBits {
    Half = 0,
    One = 1,
    OneAndHalf = 2,
    Two = 3,
}

/// Data bits as the RTOS driver enumerates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CfgDataBits {
    Five = 0,
    Six = 1,
    Seven = 2,
    Eight = 3,
    Nine = 4,
}

/// Flow control as the RTOS driver enumerates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum FlowControl {
    #[default]
    None = 0,
    RtsCts = 1,
    DtrDsr = 2,
    Rs485 = 3,
}

/// Line configuration record handed to the driver.
///
/// Layout matches the RTOS `struct uart_config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct DriverConfig {
    /// Baud rate in bits per second.
    pub baudrate: u32,
    /// Parity mode.
    pub parity: CfgParity,
    /// Stop bits.
    pub stop_bits: CfgStopBits,
    /// Data bits.
    pub data_bits: CfgDataBits,
    /// Flow control; the adapters always use `None`.
    pub flow_ctrl: FlowControl,
}

impl<T: UartDriver + ?Sized> UartDriver for &T {
    fn configure(&self, config: &DriverConfig) -> Result<(), DriverError> {
        (**self).configure(config)
    }

    fn poll_in(&self) -> Option<u8> {
        (**self).poll_in()
    }

    fn poll_out(&self, byte: u8) {
        (**self).poll_out(byte);
    }
}

/// Fill `data` from the driver until it reports no pending byte.
///
/// Returns the number of bytes received; bytes past that count are left
/// untouched.
pub fn read_polled(device: &dyn UartDriver, data: &mut [u8]) -> usize {
    let mut count = 0;
    for slot in data.iter_mut() {
        let Some(byte) = device.poll_in() else {
            break;
        };
        *slot = byte;
        count += 1;
    }
    count
}

/// Transmit every byte of `data`.
pub fn write_polled(device: &dyn UartDriver, data: &[u8]) -> usize {
    for &byte in data {
        device.poll_out(byte);
    }
    data.len()
}
