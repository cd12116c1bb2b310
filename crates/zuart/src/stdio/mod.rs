// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Standard output redirection onto a UART.
//!
//! A [`Console`] holds at most one [`Uart`]. Text printed while no UART
//! is installed is dropped. The crate-wide console backs the
//! [`uart_print!`](crate::uart_print) and
//! [`uart_println!`](crate::uart_println) macros.


use core::fmt::{self, Write};

use spin::Mutex;

use crate::uart::Uart;

/// A slot for the UART that receives printed text.
pub struct Console {
    slot: Mutex<Option<Uart>>,
}

impl Console {
    /// An empty console.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Route output to `uart`, returning the UART it replaces.
    pub fn install(&self, uart: Uart) -> Option<Uart> {
        self.slot.lock().replace(uart)
    }

    /// Detach the installed UART.
    pub fn take(&self) -> Option<Uart> {
        self.slot.lock().take()
    }

    /// Whether a UART is installed.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.slot.lock().is_some()
    }

    /// Format `args` onto the installed UART.
    ///
    /// Returns `false` if nothing is installed or the UART failed.
    pub fn print(&self, args: fmt::Arguments<'_>) -> bool {
        match self.slot.lock().as_mut() {
            Some(uart) => uart.write_fmt(args).is_ok(),
            None => false,
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

static CONSOLE: Console = Console::new();

/// Route the crate-wide console to `uart`.
pub fn install(uart: Uart) -> Option<Uart> {
    CONSOLE.install(uart)
}

/// Detach the crate-wide console's UART.
pub fn take() -> Option<Uart> {
    CONSOLE.take()
}

/// Print onto the crate-wide console. Used by the print macros.
#[doc(hidden)]
pub fn print(args: fmt::Arguments<'_>) {
    CONSOLE.print(args);
}

/// Print to the installed console UART.
#[macro_export]
macro_rules! uart_print {
    ($($arg:tt)*) => {
        $crate::stdio::print(format_args!($($arg)*))
    };
}

/// Print to the installed console UART, with a newline.
#[macro_export]
macro_rules! uart_println {
    () => {
        $crate::stdio::print(format_args!("\n"))
    };
    ($($arg:tt)*) => {
        $crate::stdio::print(format_args!("{}\n", format_args!($($arg)*)))
    };
}
