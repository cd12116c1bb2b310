// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Mock UART driver for testing.
//!
//! This provides a driver backed by in-memory buffers, allowing the
//! adapters to be tested without hardware. It records every applied
//! configuration and every transmitted byte in call order.

use std::collections::VecDeque;
use std::vec::Vec;

use spin::Mutex;

use super::{DriverConfig, DriverError, UartDriver};

struct MockState {
    /// Bytes waiting to be received.
    input: VecDeque<u8>,
    /// Bytes transmitted so far.
    output: Vec<u8>,
    /// Every configuration applied, oldest first.
    configs: Vec<DriverConfig>,
    /// Status returned by `configure` when set.
    reject: Option<i32>,
    /// Number of `configure` calls that were refused.
    rejected: usize,
    /// Number of `poll_in` calls.
    polls: usize,
}

/// Mock driver backed by in-memory buffers.
pub struct MockDriver {
    state: Mutex<MockState>,
    /// Yield the thread after each transmitted byte.
    yield_on_output: bool,
}

impl MockDriver {
    /// Create an empty mock driver.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                input: VecDeque::new(),
                output: Vec::new(),
                configs: Vec::new(),
                reject: None,
                rejected: 0,
                polls: 0,
            }),
            yield_on_output: false,
        }
    }

    /// Create a mock driver with pre-loaded receive data.
    #[must_use]
    pub fn with_input(input: &[u8]) -> Self {
        let driver = Self::new();
        driver.push_input(input);
        driver
    }

    /// Create a mock driver that rejects every configuration with `status`.
    #[must_use]
    pub fn rejecting(status: i32) -> Self {
        let driver = Self::new();
        driver.state.lock().reject = Some(status);
        driver
    }

    /// Yield the current thread after every transmitted byte.
    ///
    /// Gives concurrent writers a chance to interleave if nothing
    /// serializes them.
    #[must_use]
    pub fn yielding(mut self) -> Self {
        self.yield_on_output = true;
        self
    }

    /// Queue more receive data.
    pub fn push_input(&self, data: &[u8]) {
        self.state.lock().input.extend(data);
    }

    /// Number of received bytes still queued.
    #[must_use]
    pub fn pending_input(&self) -> usize {
        self.state.lock().input.len()
    }

    /// Get a copy of everything transmitted so far.
    #[must_use]
    pub fn output(&self) -> Vec<u8> {
        self.state.lock().output.clone()
    }

    /// Clear the transmit record.
    pub fn clear_output(&self) {
        self.state.lock().output.clear();
    }

    /// The configurations applied so far, oldest first.
    ///
    /// Refused configurations are not recorded; see [`Self::rejections`].
    #[must_use]
    pub fn configs(&self) -> Vec<DriverConfig> {
        self.state.lock().configs.clone()
    }

    /// The most recently applied configuration.
    #[must_use]
    pub fn last_config(&self) -> Option<DriverConfig> {
        self.state.lock().configs.last().copied()
    }

    /// Number of `configure` calls refused so far.
    #[must_use]
    pub fn rejections(&self) -> usize {
        self.state.lock().rejected
    }

    /// Number of times `poll_in` was called.
    #[must_use]
    pub fn polls(&self) -> usize {
        self.state.lock().polls
    }

    /// Make subsequent `configure` calls fail (`Some`) or succeed (`None`).
    pub fn set_reject(&self, status: Option<i32>) {
        self.state.lock().reject = status;
    }
}

impl Default for MockDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl UartDriver for MockDriver {
    fn configure(&self, config: &DriverConfig) -> Result<(), DriverError> {
        let mut state = self.state.lock();
        if let Some(status) = state.reject {
            state.rejected += 1;
            return Err(DriverError(status));
        }
        state.configs.push(*config);
        Ok(())
    }

    fn poll_in(&self) -> Option<u8> {
        let mut state = self.state.lock();
        state.polls += 1;
        state.input.pop_front()
    }

    fn poll_out(&self, byte: u8) {
        self.state.lock().output.push(byte);
        if self.yield_on_output {
            std::thread::yield_now();
        }
    }
}
