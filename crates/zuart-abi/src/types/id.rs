// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! ID types for UART devices and their interrupts.

use core::fmt;

use super::UART_MAX_NUMBER;

/// Logical UART device identifier.
///
/// Device ids index the per-device mutex table, so they are bounded to
/// `0..=UART_MAX_NUMBER`. The id does not select the physical UART: every
/// adapter in this workspace fronts a single bound device.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct DeviceId(u8);

impl DeviceId {
    /// The first device id.
    pub const FIRST: Self = Self(0);

    /// Number of distinct device ids (and mutex table slots).
    pub const COUNT: usize = UART_MAX_NUMBER as usize + 1;

    /// Creates a new device id.
    ///
    /// Returns `None` if the id exceeds `UART_MAX_NUMBER`.
    #[inline]
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        if id <= UART_MAX_NUMBER {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Returns the raw ID value.
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Returns the mutex table index for this device.
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeviceId({})", self.0)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "uart{}", self.0)
    }
}

/// Interrupt line of a UART.
///
/// Recorded in the descriptor for the framework; the polling adapters
/// never touch it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct IrqId(u32);

impl IrqId {
    /// Creates a new IRQ id.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for IrqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IrqId({})", self.0)
    }
}

impl fmt::Display for IrqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "irq:{}", self.0)
    }
}
