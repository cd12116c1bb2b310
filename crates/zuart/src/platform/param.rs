// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Initialization parameters.

use core::any::Any;
use core::fmt;

use zuart_abi::{DataBits, IrqId, Parity, StopBits};

use super::UartOps;
use crate::translate::LineConfig;

/// Parameters for UART initialization.
///
/// Generic over the operation table type so the legacy adapter can reuse
/// it with its own table; the default is the unified [`UartOps`] table.
pub struct InitParam<T: ?Sized + 'static = dyn UartOps> {
    /// Device id; must not exceed `UART_MAX_NUMBER`.
    pub device_id: u8,
    /// Interrupt line, recorded but unused by polling adapters.
    pub irq_id: IrqId,
    /// Interrupt-driven reception requested. Polling adapters ignore it.
    pub asynchronous_rx: bool,
    /// Baud rate in bits per second.
    pub baud_rate: u32,
    /// Character size.
    pub size: DataBits,
    /// Parity mode.
    pub parity: Parity,
    /// Stop bits.
    pub stop: StopBits,
    /// Operation table to bind into the descriptor.
    pub ops: Option<&'static T>,
    /// Device specific extra parameters.
    pub extra: Option<&'static (dyn Any + Send + Sync)>,
}

impl InitParam {
    /// 8N1 parameters for `device_id` at `baud_rate` with no table bound.
    #[must_use]
    pub const fn new(device_id: u8, baud_rate: u32) -> Self {
        Self::blank(device_id, baud_rate)
    }
}

impl<T: ?Sized + 'static> InitParam<T> {
    /// 8N1 parameters with no table bound, for any table type.
    #[must_use]
    pub(crate) const fn blank(device_id: u8, baud_rate: u32) -> Self {
        Self {
            device_id,
            irq_id: IrqId::new(0),
            asynchronous_rx: false,
            baud_rate,
            size: DataBits::Eight,
            parity: Parity::None,
            stop: StopBits::One,
            ops: None,
            extra: None,
        }
    }

    /// Bind an operation table.
    #[must_use]
    pub const fn with_ops(mut self, ops: &'static T) -> Self {
        self.ops = Some(ops);
        self
    }

    /// Set the interrupt line.
    #[must_use]
    pub const fn with_irq(mut self, irq_id: IrqId) -> Self {
        self.irq_id = irq_id;
        self
    }

    /// Set character size, parity and stop bits.
    #[must_use]
    pub const fn with_format(mut self, size: DataBits, parity: Parity, stop: StopBits) -> Self {
        self.size = size;
        self.parity = parity;
        self.stop = stop;
        self
    }

    /// Attach device specific extra parameters.
    #[must_use]
    pub const fn with_extra(mut self, extra: &'static (dyn Any + Send + Sync)) -> Self {
        self.extra = Some(extra);
        self
    }

    /// The line settings to translate for the driver.
    #[must_use]
    pub const fn line(&self) -> LineConfig {
        LineConfig {
            baud_rate: self.baud_rate,
            data_bits: self.size,
            parity: self.parity,
            stop_bits: self.stop,
        }
    }
}

impl<T: ?Sized + 'static> Clone for InitParam<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized + 'static> Copy for InitParam<T> {}

impl<T: ?Sized + 'static> fmt::Debug for InitParam<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitParam")
            .field("device_id", &self.device_id)
            .field("irq_id", &self.irq_id)
            .field("asynchronous_rx", &self.asynchronous_rx)
            .field("line", &self.line())
            .field("ops", &self.ops.is_some())
            .field("extra", &self.extra.is_some())
            .finish()
    }
}
