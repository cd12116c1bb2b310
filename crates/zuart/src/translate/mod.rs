// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Translation from framework line settings to the driver's record.
//!
//! The two adapters translate differently:
//!
//! - [`Translation::Faithful`] (legacy adapter): every framework value has
//!   a driver counterpart with the same ordinal, so the mapping is 1:1.
//! - [`Translation::Fallback`] (unified adapter): only the common settings
//!   are mapped; anything else falls back to a default. Mark and space
//!   parity become odd, half a stop bit becomes two, and every character
//!   size other than eight becomes seven.
//!
//! Flow control is always off. Translation happens once, at init.


use core::fmt;

use zuart_abi::{DataBits, Parity, StopBits};

use crate::driver::{CfgDataBits, CfgParity, CfgStopBits, DriverConfig, FlowControl};

/// Line settings as the framework describes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineConfig {
    /// Baud rate in bits per second.
    pub baud_rate: u32,
    /// Character size.
    pub data_bits: DataBits,
    /// Parity mode.
    pub parity: Parity,
    /// Stop bits.
    pub stop_bits: StopBits,
}

impl LineConfig {
    /// 8N1 at the given baud rate.
    #[must_use]
    pub const fn new_8n1(baud_rate: u32) -> Self {
        Self {
            baud_rate,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

impl fmt::Display for LineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{}{}",
            self.baud_rate, self.data_bits, self.parity, self.stop_bits
        )
    }
}

/// Translation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Translation {
    /// One-to-one mapping of every value.
    Faithful,
    /// Map the common values, fall back for the rest.
    Fallback,
}

impl Translation {
    /// Build the driver record for `line`.
    #[must_use]
    pub const fn apply(self, line: &LineConfig) -> DriverConfig {
        let (parity, stop_bits, data_bits) = match self {
            Self::Faithful => (
                faithful_parity(line.parity),
                faithful_stop_bits(line.stop_bits),
                faithful_data_bits(line.data_bits),
            ),
            Self::Fallback => (
                fallback_parity(line.parity),
                fallback_stop_bits(line.stop_bits),
                fallback_data_bits(line.data_bits),
            ),
        };
        DriverConfig {
            baudrate: line.baud_rate,
            parity,
            stop_bits,
            data_bits,
            flow_ctrl: FlowControl::None,
        }
    }
}

const fn faithful_parity(parity: Parity) -> CfgParity {
    match parity {
        Parity::None => CfgParity::None,
        Parity::Odd => CfgParity::Odd,
        Parity::Even => CfgParity::Even,
        Parity::Mark => CfgParity::Mark,
        Parity::Space => CfgParity::Space,
    }
}

const fn faithful_stop_bits(stop: StopBits) -> CfgStopBits {
    match stop {
        StopBits::Half => CfgStopBits::Half,
        StopBits::One => CfgStopBits::One,
    }
}

const fn faithful_data_bits(size: DataBits) -> CfgDataBits {
    match size {
        DataBits::Five => CfgDataBits::Five,
        DataBits::Six => CfgDataBits::Six,
        DataBits::Seven => CfgDataBits::Seven,
        DataBits::Eight => CfgDataBits::Eight,
        DataBits::Nine => CfgDataBits::Nine,
    }
}

const fn fallback_parity(parity: Parity) -> CfgParity {
    match parity {
        Parity::None => CfgParity::None,
        Parity::Even => CfgParity::Even,
        Parity::Odd | Parity::Mark | Parity::Space => CfgParity::Odd,
    }
}

const fn fallback_stop_bits(stop: StopBits) -> CfgStopBits {
    match stop {
        StopBits::One => CfgStopBits::One,
        StopBits::Half => CfgStopBits::Two,
    }
}

const fn fallback_data_bits(size: DataBits) -> CfgDataBits {
    match size {
        DataBits::Eight => CfgDataBits::Eight,
        DataBits::Five | DataBits::Six | DataBits::Seven | DataBits::Nine => CfgDataBits::Seven,
    }
}
