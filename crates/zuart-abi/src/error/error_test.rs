// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for the error taxonomy and status encoding.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::{EINVAL, ENOSYS, ErrorFlags, Status, UartError};

const ALL_ERRORS: [UartError; 4] = [
    UartError::InvalidArgument,
    UartError::OutOfMemory,
    UartError::IoError,
    UartError::NotSupported,
];

#[test]
fn errno_values_match_the_framework() {
    assert_eq!(UartError::InvalidArgument.errno(), 22);
    assert_eq!(UartError::OutOfMemory.errno(), 12);
    assert_eq!(UartError::IoError.errno(), 5);
    assert_eq!(UartError::NotSupported.errno(), 38);
}

#[test]
fn errno_maps_back() {
    for err in ALL_ERRORS {
        assert_eq!(UartError::from_errno(err.errno()), Some(err));
    }
    assert_eq!(UartError::from_errno(1), None);
}

#[test]
fn status_encodes_counts_and_errors() {
    assert_eq!(Status::from_count(Ok(5)).as_i32(), 5);
    assert_eq!(Status::from_count(Ok(0)), Status::OK);
    assert_eq!(
        Status::from_count(Err(UartError::NotSupported)).as_i32(),
        -ENOSYS
    );
    assert_eq!(
        Status::from_unit(Err(UartError::InvalidArgument)).as_i32(),
        -EINVAL
    );
    assert_eq!(Status::from_unit(Ok(())), Status::OK);
}

#[test]
fn status_saturates_huge_counts() {
    assert_eq!(Status::from_count(Ok(usize::MAX)).as_i32(), i32::MAX);
}

#[test]
fn status_decodes() {
    assert_eq!(Status::from_raw(7).into_result(), Ok(7));
    assert!(Status::from_raw(7).is_ok());
    assert_eq!(
        Status::from_raw(-12).into_result(),
        Err(UartError::OutOfMemory)
    );
    assert!(!Status::from_raw(-12).is_ok());
    // Unknown errno collapses to IoError
    assert_eq!(Status::from_raw(-99).into_result(), Err(UartError::IoError));
    assert_eq!(
        Status::from_raw(i32::MIN).into_result(),
        Err(UartError::IoError)
    );
}

#[test]
fn error_flags_sentinel() {
    assert!(ErrorFlags::NONE.is_empty());
    assert!(!ErrorFlags::NONE.is_invalid());
    assert!(ErrorFlags::INVALID.is_invalid());
    assert_eq!(ErrorFlags::INVALID.bits(), 0xFFFF_FFEA);
    assert_eq!(format!("{:?}", ErrorFlags::INVALID), "ErrorFlags(INVALID)");
    assert_eq!(format!("{:?}", ErrorFlags::from_bits(3)), "ErrorFlags(0x3)");
}

#[test]
fn error_display() {
    assert_eq!(format!("{}", UartError::OutOfMemory), "out of memory");
    assert_eq!(
        format!("{}", UartError::NotSupported),
        "operation not supported"
    );
    assert_eq!(format!("{}", UartError::IoError), "I/O error");
}
