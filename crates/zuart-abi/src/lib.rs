// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Framework-level UART vocabulary for the zuart adapters.
//!
//! This crate defines the contract between the portable driver framework
//! and the RTOS-backed adapters:
//! - Identifier types for devices and interrupts
//! - Line configuration enumerations as the framework spells them
//! - The error taxonomy and its integer status encoding
//!
//! # Design Principles
//!
//! - **No dependencies**: Pure data types, 100% host-testable
//! - **Stable layout**: Enumerations use `#[repr(u8)]` matching the framework's ordinals
//!
//! # Modules
//!
//! - [`types`]: `DeviceId`, `IrqId` and the device table bound
//! - [`config`]: `DataBits`, `Parity`, `StopBits`
//! - [`error`]: `UartError`, `Status`, `ErrorFlags`

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use config::{DataBits, Parity, StopBits};
pub use error::{ErrorFlags, Status, UartError};
pub use types::{DeviceId, IrqId, UART_MAX_NUMBER};
