// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Serial line configuration as the framework enumerates it.
//!
//! Ordinals match the framework's C enumerations so raw values coming
//! across an FFI boundary can be decoded with `from_raw`.


use core::fmt;

/// Character size (number of data bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum DataBits {
    /// 5 data bits.
    Five = 0,
    /// 6 data bits.
    Six = 1,
    /// 7 data bits.
    Seven = 2,
    /// 8 data bits.
    #[default]
    Eight = 3,
    /// 9 data bits.
    Nine = 4,
}

impl DataBits {
    /// All character sizes, in ordinal order.
    pub const ALL: [Self; 5] = [Self::Five, Self::Six, Self::Seven, Self::Eight, Self::Nine];

    /// Decode a framework ordinal.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Five),
            1 => Some(Self::Six),
            2 => Some(Self::Seven),
            3 => Some(Self::Eight),
            4 => Some(Self::Nine),
            _ => None,
        }
    }

    /// The framework ordinal.
    #[inline]
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Number of data bits per character.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8 + 5
    }
}

/// Parity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Parity {
    /// No parity bit.
    #[default]
    None = 0,
    /// Odd parity.
    Odd = 1,
    /// Even parity.
    Even = 2,
    /// Parity bit always 1.
    Mark = 3,
    /// Parity bit always 0.
    Space = 4,
}

impl Parity {
    /// All parity modes, in ordinal order.
    pub const ALL: [Self; 5] = [Self::None, Self::Odd, Self::Even, Self::Mark, Self::Space];

    /// Decode a framework ordinal.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::None),
            1 => Some(Self::Odd),
            2 => Some(Self::Even),
            3 => Some(Self::Mark),
            4 => Some(Self::Space),
            _ => None,
        }
    }

    /// The framework ordinal.
    #[inline]
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }
}

/// Number of stop bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum StopBits {
    /// Half a stop bit.
    Half = 0,
    /// One stop bit.
    #[default]
    One = 1,
}

impl StopBits {
    /// All stop-bit settings, in ordinal order.
    pub const ALL: [Self; 2] = [Self::Half, Self::One];

    /// Decode a framework ordinal.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Half),
            1 => Some(Self::One),
            _ => None,
        }
    }

    /// The framework ordinal.
    #[inline]
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for DataBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::None => 'N',
            Self::Odd => 'O',
            Self::Even => 'E',
            Self::Mark => 'M',
            Self::Space => 'S',
        };
        write!(f, "{c}")
    }
}

impl fmt::Display for StopBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Half => write!(f, "0.5"),
            Self::One => write!(f, "1"),
        }
    }
}
