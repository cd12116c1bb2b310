// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! # zuart
//!
//! Descriptor-based UART adapters for the portable driver framework,
//! backed by the Zephyr polling UART driver.
//!
//! This crate provides:
//! - The RTOS driver seam (`UartDriver`) with a mock and a Zephyr binding
//! - The per-device mutex registry and the framework block allocator
//! - The legacy descriptor adapter (caller-supplied operation table)
//! - The unified platform-ops adapter (seven-operation contract)
//! - A framework front-end handle and stdio redirection
//!
//! All operations are synchronous. Reads and writes on one device id are
//! serialized by that id's mutex; init and remove must be serialized by
//! the caller.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub mod block;
pub mod driver;
pub mod legacy;
pub mod platform;
pub mod registry;
pub mod stdio;
pub mod translate;
pub mod uart;

// Re-export commonly used types at crate root
pub use legacy::{LegacyAdapter, LegacyInitParam, LegacyOps, LegacyUart};
pub use platform::{InitParam, PollingUart, UartDescriptor, UartOps};
pub use uart::{SerialPort, Uart, UartExt};
pub use zuart_abi::{
    DataBits, DeviceId, ErrorFlags, IrqId, Parity, Status, StopBits, UART_MAX_NUMBER, UartError,
};

/// Crate version.
pub const VERSION: &str = match option_env!("ZUART_VERSION") {
    Some(v) => v,
    None => "unknown",
};
