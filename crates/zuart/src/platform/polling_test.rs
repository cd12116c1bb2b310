// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for the polling operation table.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::boxed::Box;

use proptest::prelude::*;
use zuart_abi::{DataBits, DeviceId, ErrorFlags, IrqId, Parity, StopBits, UART_MAX_NUMBER, UartError};

use super::{InitParam, PollingUart, UartOps};
use crate::driver::{CfgDataBits, CfgParity, CfgStopBits, MockDriver};

type MockUart = PollingUart<&'static MockDriver>;

/// A fresh adapter over a fresh mock, both leaked so they are `'static`.
fn setup_with(driver: MockDriver, limit: usize) -> (&'static MockUart, &'static MockDriver) {
    let driver: &'static MockDriver = Box::leak(Box::new(driver));
    let uart: &'static MockUart = Box::leak(Box::new(PollingUart::with_block_limit(driver, limit)));
    (uart, driver)
}

fn setup() -> (&'static MockUart, &'static MockDriver) {
    setup_with(MockDriver::new(), usize::MAX)
}

fn param(uart: &'static MockUart, device_id: u8) -> InitParam {
    InitParam::new(device_id, 115_200).with_ops(uart)
}

// =============================================================================
// init
// =============================================================================

#[test]
fn init_records_parameters() {
    let (uart, driver) = setup();
    let p = param(uart, 0).with_irq(IrqId::new(33));

    let desc = uart.init(Some(&p)).unwrap();
    assert_eq!(desc.device_id(), DeviceId::FIRST);
    assert_eq!(desc.irq_id(), IrqId::new(33));
    assert_eq!(desc.baud_rate(), 115_200);
    assert!(desc.ops().is_some());
    assert!(desc.polling().unwrap().is_initialized());
    assert!(uart.registry().is_live(DeviceId::FIRST));

    let cfg = driver.last_config().unwrap();
    assert_eq!(cfg.baudrate, 115_200);
    assert_eq!(cfg.parity, CfgParity::None);
    assert_eq!(cfg.stop_bits, CfgStopBits::One);
    assert_eq!(cfg.data_bits, CfgDataBits::Eight);
}

#[test]
fn init_without_param_is_invalid() {
    let (uart, driver) = setup();
    assert_eq!(uart.init(None).unwrap_err(), UartError::InvalidArgument);
    assert!(driver.configs().is_empty());
}

#[test]
fn init_rejects_out_of_range_device_id() {
    let (uart, driver) = setup();
    let p = param(uart, UART_MAX_NUMBER + 1);
    assert_eq!(uart.init(Some(&p)).unwrap_err(), UartError::InvalidArgument);
    assert!(driver.configs().is_empty());
    assert_eq!(uart.blocks().in_use(), 0);
}

#[test]
fn init_applies_fallback_translation() {
    let (uart, driver) = setup();
    let p = param(uart, 1).with_format(DataBits::Nine, Parity::Mark, StopBits::Half);

    let desc = uart.init(Some(&p)).unwrap();
    let cfg = driver.last_config().unwrap();
    assert_eq!(cfg.parity, CfgParity::Odd);
    assert_eq!(cfg.stop_bits, CfgStopBits::Two);
    assert_eq!(cfg.data_bits, CfgDataBits::Seven);
    uart.remove(Some(desc)).unwrap();
}

#[test]
fn init_out_of_memory_for_descriptor() {
    let (uart, driver) = setup_with(MockDriver::new(), 0);
    let p = param(uart, 0);
    assert_eq!(uart.init(Some(&p)).unwrap_err(), UartError::OutOfMemory);
    assert!(driver.configs().is_empty());
    assert!(!uart.registry().is_live(DeviceId::FIRST));
}

#[test]
fn init_out_of_memory_for_extension_releases_descriptor_block() {
    let (uart, driver) = setup_with(MockDriver::new(), 1);
    let p = param(uart, 0);
    assert_eq!(uart.init(Some(&p)).unwrap_err(), UartError::OutOfMemory);
    assert_eq!(uart.blocks().in_use(), 0);
    assert!(driver.configs().is_empty());
}

#[test]
fn init_io_error_releases_both_blocks() {
    let (uart, driver) = setup_with(MockDriver::rejecting(-5), 2);
    let p = param(uart, 0);
    assert_eq!(uart.init(Some(&p)).unwrap_err(), UartError::IoError);
    assert_eq!(driver.rejections(), 1);
    assert_eq!(uart.blocks().in_use(), 0);
    assert!(!uart.registry().is_live(DeviceId::FIRST));
}

#[test]
fn live_descriptor_holds_two_blocks() {
    let (uart, _driver) = setup_with(MockDriver::new(), 2);
    let desc = uart.init(Some(&param(uart, 0))).unwrap();
    assert_eq!(uart.blocks().in_use(), 2);
    // Budget exhausted for a second descriptor
    assert_eq!(
        uart.init(Some(&param(uart, 1))).unwrap_err(),
        UartError::OutOfMemory
    );
    uart.remove(Some(desc)).unwrap();
    assert_eq!(uart.blocks().in_use(), 0);
}

// =============================================================================
// read / write
// =============================================================================

#[test]
fn hello_round_trip() {
    let (uart, driver) = setup();
    let desc = uart.init(Some(&param(uart, 0))).unwrap();

    assert_eq!(uart.write(Some(&desc), b"hello"), Ok(5));
    assert_eq!(driver.output(), b"hello");

    driver.push_input(b"hello");
    let mut buf = [0u8; 5];
    assert_eq!(uart.read(Some(&desc), &mut buf), Ok(5));
    assert_eq!(&buf, b"hello");

    assert_eq!(uart.remove(Some(desc)), Ok(()));
}

#[test]
fn write_zero_bytes_does_nothing() {
    let (uart, driver) = setup();
    let desc = uart.init(Some(&param(uart, 0))).unwrap();
    assert_eq!(uart.write(Some(&desc), &[]), Ok(0));
    assert_eq!(uart.write_nonblocking(Some(&desc), &[]), Ok(0));
    assert!(driver.output().is_empty());
    uart.remove(Some(desc)).unwrap();
}

#[test]
fn short_read_fills_prefix_only() {
    let (uart, driver) = setup();
    let desc = uart.init(Some(&param(uart, 0))).unwrap();

    driver.push_input(b"ab");
    let mut buf = [0xEEu8; 6];
    assert_eq!(uart.read(Some(&desc), &mut buf), Ok(2));
    assert_eq!(buf, [b'a', b'b', 0xEE, 0xEE, 0xEE, 0xEE]);
    uart.remove(Some(desc)).unwrap();
}

#[test]
fn read_nonblocking_returns_zero_when_idle() {
    let (uart, driver) = setup();
    let desc = uart.init(Some(&param(uart, 0))).unwrap();

    let mut buf = [0u8; 4];
    assert_eq!(uart.read_nonblocking(Some(&desc), &mut buf), Ok(0));
    assert_eq!(driver.polls(), 1);

    driver.push_input(b"xyz");
    assert_eq!(uart.read_nonblocking(Some(&desc), &mut buf), Ok(3));
    assert_eq!(&buf[..3], b"xyz");
    uart.remove(Some(desc)).unwrap();
}

#[test]
fn write_nonblocking_writes_everything() {
    let (uart, driver) = setup();
    let desc = uart.init(Some(&param(uart, 0))).unwrap();
    assert_eq!(uart.write_nonblocking(Some(&desc), b"0123456789"), Ok(10));
    assert_eq!(driver.output(), b"0123456789");
    uart.remove(Some(desc)).unwrap();
}

#[test]
fn transfers_without_descriptor_are_invalid() {
    let (uart, driver) = setup();
    let mut buf = [0u8; 1];
    assert_eq!(uart.read(None, &mut buf), Err(UartError::InvalidArgument));
    assert_eq!(uart.write(None, b"x"), Err(UartError::InvalidArgument));
    assert_eq!(
        uart.read_nonblocking(None, &mut buf),
        Err(UartError::InvalidArgument)
    );
    assert_eq!(
        uart.write_nonblocking(None, b"x"),
        Err(UartError::InvalidArgument)
    );
    assert!(driver.output().is_empty());
}

#[test]
fn transfers_without_extension_are_invalid() {
    let (uart, driver) = setup();
    let mutex = uart.registry().get_or_create(DeviceId::FIRST);
    let bare = super::UartDescriptor::new(mutex);

    let mut buf = [0u8; 1];
    assert_eq!(uart.read(Some(&bare), &mut buf), Err(UartError::InvalidArgument));
    assert_eq!(uart.write(Some(&bare), b"x"), Err(UartError::InvalidArgument));
    assert!(driver.output().is_empty());
}

#[test]
fn transfers_release_the_mutex() {
    let (uart, driver) = setup();
    let desc = uart.init(Some(&param(uart, 0))).unwrap();
    driver.push_input(b"q");

    uart.write(Some(&desc), b"x").unwrap();
    assert!(!desc.mutex().is_locked());
    let mut buf = [0u8; 2];
    uart.read(Some(&desc), &mut buf).unwrap();
    assert!(!desc.mutex().is_locked());
    uart.remove(Some(desc)).unwrap();
}

// =============================================================================
// remove / lifecycle
// =============================================================================

#[test]
fn remove_without_descriptor_is_invalid() {
    let (uart, _driver) = setup();
    assert_eq!(uart.remove(None), Err(UartError::InvalidArgument));
}

#[test]
fn remove_clears_slot_and_allows_reinit() {
    let (uart, driver) = setup();
    let desc = uart.init(Some(&param(uart, 3))).unwrap();
    let id = desc.device_id();

    uart.remove(Some(desc)).unwrap();
    assert!(!uart.registry().is_live(id));
    assert_eq!(uart.blocks().in_use(), 0);

    let again = uart.init(Some(&param(uart, 3))).unwrap();
    assert_eq!(uart.write(Some(&again), b"ok"), Ok(2));
    assert_eq!(driver.output(), b"ok");
    uart.remove(Some(again)).unwrap();
}

#[test]
fn double_init_shares_mutex_and_does_not_deadlock() {
    let (uart, driver) = setup();
    let first = uart.init(Some(&param(uart, 5))).unwrap();
    let second = uart.init(Some(&param(uart, 5))).unwrap();
    assert!(alloc::sync::Arc::ptr_eq(first.mutex(), second.mutex()));

    assert_eq!(uart.write(Some(&first), b"a"), Ok(1));
    assert_eq!(uart.write(Some(&second), b"b"), Ok(1));

    // Removing one clears the slot; the other still works
    uart.remove(Some(first)).unwrap();
    assert_eq!(uart.write(Some(&second), b"c"), Ok(1));

    // Re-init now gets a fresh mutex; both remain usable
    let third = uart.init(Some(&param(uart, 5))).unwrap();
    assert!(!alloc::sync::Arc::ptr_eq(second.mutex(), third.mutex()));
    assert_eq!(uart.write(Some(&third), b"d"), Ok(1));
    assert_eq!(uart.write(Some(&second), b"e"), Ok(1));
    assert_eq!(driver.output(), b"abcde");

    uart.remove(Some(second)).unwrap();
    uart.remove(Some(third)).unwrap();
}

#[test]
fn stale_remove_keeps_reassigned_slot() {
    let (uart, driver) = setup();
    let a = uart.init(Some(&param(uart, 8))).unwrap();
    let b = uart.init(Some(&param(uart, 8))).unwrap();
    let id = a.device_id();

    // Clears the slot shared by a and b
    uart.remove(Some(a)).unwrap();
    let c = uart.init(Some(&param(uart, 8))).unwrap();

    // b's mutex is no longer the one in the slot, so c's entry survives
    uart.remove(Some(b)).unwrap();
    assert!(uart.registry().is_live(id));

    let d = uart.init(Some(&param(uart, 8))).unwrap();
    assert!(alloc::sync::Arc::ptr_eq(c.mutex(), d.mutex()));
    assert_eq!(uart.write(Some(&d), b"d"), Ok(1));
    assert_eq!(driver.output(), b"d");

    uart.remove(Some(c)).unwrap();
    assert!(!uart.registry().is_live(id));
    uart.remove(Some(d)).unwrap();
}

// =============================================================================
// get_errors
// =============================================================================

#[test]
fn get_errors_reports_nothing_for_live_descriptor() {
    let (uart, _driver) = setup();
    let desc = uart.init(Some(&param(uart, 0))).unwrap();
    assert_eq!(uart.get_errors(Some(&desc)), ErrorFlags::NONE);
    uart.remove(Some(desc)).unwrap();
}

#[test]
fn get_errors_without_descriptor_is_sentinel() {
    let (uart, _driver) = setup();
    assert!(uart.get_errors(None).is_invalid());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn read_never_exceeds_request(
        queued in proptest::collection::vec(any::<u8>(), 0..32),
        len in 0usize..32,
    ) {
        let (uart, driver) = setup();
        let desc = uart.init(Some(&param(uart, 0))).unwrap();
        driver.push_input(&queued);

        let mut buf = std::vec![0xA5u8; len];
        let count = uart.read(Some(&desc), &mut buf).unwrap();

        prop_assert_eq!(count, len.min(queued.len()));
        prop_assert_eq!(&buf[..count], &queued[..count]);
        prop_assert!(buf[count..].iter().all(|&b| b == 0xA5));
        uart.remove(Some(desc)).unwrap();
    }

    #[test]
    fn write_always_sends_everything(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        let (uart, driver) = setup();
        let desc = uart.init(Some(&param(uart, 0))).unwrap();
        prop_assert_eq!(uart.write(Some(&desc), &data), Ok(data.len()));
        prop_assert_eq!(driver.output(), data);
        uart.remove(Some(desc)).unwrap();
    }

    #[test]
    fn every_valid_id_survives_double_init(raw in 0..=UART_MAX_NUMBER) {
        let (uart, _driver) = setup();
        let a = uart.init(Some(&param(uart, raw))).unwrap();
        let b = uart.init(Some(&param(uart, raw))).unwrap();
        prop_assert_eq!(uart.write(Some(&a), b"1"), Ok(1));
        prop_assert_eq!(uart.write(Some(&b), b"2"), Ok(1));
        uart.remove(Some(a)).unwrap();
        uart.remove(Some(b)).unwrap();
        prop_assert!(!uart.registry().is_live(DeviceId::new(raw).unwrap()));
    }
}
