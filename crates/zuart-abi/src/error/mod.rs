// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Error taxonomy and integer status encoding.
//!
//! Framework callers see a signed status: non-negative values are byte
//! counts (or zero for init/remove), negative values are `-errno`.

#[cfg(test)]
mod error_test;

use core::fmt;

/// `EIO` as used by the framework.
pub const EIO: i32 = 5;
/// `ENOMEM` as used by the framework.
pub const ENOMEM: i32 = 12;
/// `EINVAL` as used by the framework.
pub const EINVAL: i32 = 22;
/// `ENOSYS` as used by the framework.
pub const ENOSYS: i32 = 38;

/// Errors reported by the UART adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UartError {
    /// Missing descriptor, parameter or extension, or an out-of-range id.
    InvalidArgument,
    /// A descriptor or extension block could not be allocated.
    OutOfMemory,
    /// The driver rejected the configuration or a transfer made no progress.
    IoError,
    /// The bound operation table lacks the requested operation.
    NotSupported,
}

impl UartError {
    /// The positive errno value for this error.
    #[must_use]
    pub const fn errno(self) -> i32 {
        match self {
            Self::InvalidArgument => EINVAL,
            Self::OutOfMemory => ENOMEM,
            Self::IoError => EIO,
            Self::NotSupported => ENOSYS,
        }
    }

    /// Map a positive errno back to an error.
    #[must_use]
    pub const fn from_errno(errno: i32) -> Option<Self> {
        match errno {
            EINVAL => Some(Self::InvalidArgument),
            ENOMEM => Some(Self::OutOfMemory),
            EIO => Some(Self::IoError),
            ENOSYS => Some(Self::NotSupported),
            _ => None,
        }
    }
}

impl fmt::Display for UartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::OutOfMemory => write!(f, "out of memory"),
            Self::IoError => write!(f, "I/O error"),
            Self::NotSupported => write!(f, "operation not supported"),
        }
    }
}

impl core::error::Error for UartError {}

/// Signed status as returned across the framework boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Status(i32);

impl Status {
    /// Success without a byte count.
    pub const OK: Self = Self(0);

    /// Wrap a raw status value.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw status value.
    #[inline]
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Encode a transfer result.
    ///
    /// Byte counts beyond `i32::MAX` saturate; the framework's count
    /// parameter is 32 bits wide so this does not occur in practice.
    #[must_use]
    pub fn from_count(result: Result<usize, UartError>) -> Self {
        match result {
            Ok(count) => Self(i32::try_from(count).unwrap_or(i32::MAX)),
            Err(err) => Self(-err.errno()),
        }
    }

    /// Encode an init/remove result.
    #[must_use]
    pub const fn from_unit(result: Result<(), UartError>) -> Self {
        match result {
            Ok(()) => Self::OK,
            Err(err) => Self(-err.errno()),
        }
    }

    /// Returns true for non-negative statuses.
    #[inline]
    #[must_use]
    pub const fn is_ok(self) -> bool {
        self.0 >= 0
    }

    /// Decode back into a result.
    ///
    /// Negative values outside the known errno set decode as `IoError`.
    pub fn into_result(self) -> Result<usize, UartError> {
        match usize::try_from(self.0) {
            Ok(count) => Ok(count),
            Err(_) => Err(UartError::from_errno(self.0.saturating_neg()).unwrap_or(UartError::IoError)),
        }
    }
}

/// Error flags reported by `get_errors`.
///
/// The polling adapters collect no driver error state, so a live
/// descriptor always reports `NONE`. A missing descriptor reports
/// `INVALID`, which is `-EINVAL` reinterpreted as unsigned.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct ErrorFlags(u32);

impl ErrorFlags {
    /// No error flags set.
    pub const NONE: Self = Self(0);

    /// Sentinel for a missing descriptor.
    #[expect(
        clippy::cast_sign_loss,
        reason = "the framework reinterprets -EINVAL as its unsigned error sentinel"
    )]
    pub const INVALID: Self = Self(-EINVAL as u32);

    /// Wrap raw flag bits.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw flag bits.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if no flag is set.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true for the missing-descriptor sentinel.
    #[inline]
    #[must_use]
    pub const fn is_invalid(self) -> bool {
        self.0 == Self::INVALID.0
    }
}

impl fmt::Debug for ErrorFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invalid() {
            write!(f, "ErrorFlags(INVALID)")
        } else {
            write!(f, "ErrorFlags({:#x})", self.0)
        }
    }
}
