// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Shared test infrastructure for integration tests.
//!
//! This module provides:
//! - [`init_tracing`] - Route adapter logs to the test harness
//! - [`mock_unified`] / [`mock_legacy`] - Leaked adapters over a fresh mock
//! - [`contiguous_runs`] - Count runs of identical bytes in a transcript
//!
//! This module is **not** a test file, so it must comply with full clippy rules.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use zuart::driver::MockDriver;
use zuart::{LegacyAdapter, PollingUart};

/// Install a test-writer subscriber once per binary.
///
/// Filter with `RUST_LOG`, e.g. `RUST_LOG=zuart=trace`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Leak a value so adapters can hand out `'static` borrows.
pub fn leak<T>(value: T) -> &'static T {
    Box::leak(Box::new(value))
}

/// A unified adapter over `driver`.
pub fn mock_unified(
    driver: MockDriver,
) -> (&'static PollingUart<&'static MockDriver>, &'static MockDriver) {
    let driver = leak(driver);
    (leak(PollingUart::new(driver)), driver)
}

/// A legacy adapter over `driver`.
pub fn mock_legacy(
    driver: MockDriver,
) -> (&'static LegacyAdapter<&'static MockDriver>, &'static MockDriver) {
    let driver = leak(driver);
    (leak(LegacyAdapter::new(driver)), driver)
}

/// Number of maximal runs of equal bytes in `bytes`.
pub fn contiguous_runs(bytes: &[u8]) -> usize {
    if bytes.is_empty() {
        return 0;
    }
    1 + bytes.windows(2).filter(|w| w[0] != w[1]).count()
}
