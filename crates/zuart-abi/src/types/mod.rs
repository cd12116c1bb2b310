// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Core identifier types.

mod id;


pub use id::{DeviceId, IrqId};

/// Highest valid UART device id.
///
/// The mutex table carries one slot per id in `0..=UART_MAX_NUMBER`.
pub const UART_MAX_NUMBER: u8 = 10;
