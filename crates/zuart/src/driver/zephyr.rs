// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Zephyr polling UART binding.
//!
//! Zephyr's `uart_configure`, `uart_poll_in` and `uart_poll_out` are
//! static inline syscall wrappers, so the application links a small C
//! glue file that re-exports them for the chosen shell UART
//! (`DT_CHOSEN(zephyr_shell_uart)`) under the `zuart_*` names below.

use super::{DriverConfig, DriverError, UartDriver};

/// Opaque Zephyr `struct device`.
#[repr(C)]
struct Device {
    _private: [u8; 0],
}

unsafe extern "C" {
    /// `DEVICE_DT_GET(DT_CHOSEN(zephyr_shell_uart))`.
    fn zuart_chosen_device() -> *const Device;

    /// `uart_configure(dev, cfg)`.
    fn zuart_configure(dev: *const Device, cfg: *const DriverConfig) -> i32;

    /// `uart_poll_in(dev, c)`: 0 on success, -1 when no byte is pending.
    fn zuart_poll_in(dev: *const Device, c: *mut u8) -> i32;

    /// `uart_poll_out(dev, c)`.
    fn zuart_poll_out(dev: *const Device, c: u8);
}

/// Handle to the chosen shell UART.
///
/// This is a zero-sized type; the device itself is a devicetree constant
/// owned by Zephyr.
pub struct ZephyrUart;

impl ZephyrUart {
    /// Create a handle to the chosen shell UART.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn device() -> *const Device {
        // SAFETY: the glue returns the address of a statically allocated device
        unsafe { zuart_chosen_device() }
    }
}

impl Default for ZephyrUart {
    fn default() -> Self {
        Self::new()
    }
}

impl UartDriver for ZephyrUart {
    fn configure(&self, config: &DriverConfig) -> Result<(), DriverError> {
        // SAFETY: config is a valid repr(C) uart_config for the duration of the call
        let ret = unsafe { zuart_configure(Self::device(), config) };
        if ret == 0 { Ok(()) } else { Err(DriverError(ret)) }
    }

    fn poll_in(&self) -> Option<u8> {
        let mut byte = 0u8;
        // SAFETY: byte outlives the call; poll_in never blocks
        let ret = unsafe { zuart_poll_in(Self::device(), &raw mut byte) };
        (ret == 0).then_some(byte)
    }

    fn poll_out(&self, byte: u8) {
        // SAFETY: device is a live devicetree instance
        unsafe { zuart_poll_out(Self::device(), byte) }
    }
}
