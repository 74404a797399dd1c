//! Recording collaborators for unit tests.
//!
//! Every mock appends to one shared [`EventLog`] so tests can check the exact
//! interleaving of bus traffic, reset line activity and delays.

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, ErrorKind, Operation, SpiDevice};

use crate::lcd::{BusTransport, ResetLine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Command(u8, Vec<u8>),
    Pixels(u8, Vec<u8>),
    ResetConfigure,
    ResetLevel(bool),
    ResetRelease,
    DelayMs(u32),
    SpiWrite(Vec<u8>),
    PinLevel(bool),
}

#[derive(Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<Event>>>);

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, ev: Event) {
        self.0.borrow_mut().push(ev);
    }

    /// Drain everything recorded so far.
    pub fn take(&self) -> Vec<Event> {
        core::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn commands(&self) -> Vec<(u8, Vec<u8>)> {
        self.0
            .borrow()
            .iter()
            .filter_map(|ev| match ev {
                Event::Command(cmd, data) => Some((*cmd, data.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.0.borrow().iter().filter(|ev| pred(*ev)).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockBusError;

/// Bus that records every successful command. `fail_at(n)` makes the n-th
/// command (0-based) fail, and every command after it.
pub struct MockBus {
    log: EventLog,
    sent: usize,
    fail_at: Option<usize>,
}

impl MockBus {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            sent: 0,
            fail_at: None,
        }
    }

    pub fn fail_at(&mut self, n: usize) {
        self.fail_at = Some(n);
    }

    pub fn recover(&mut self) {
        self.fail_at = None;
    }
}

impl BusTransport for MockBus {
    type Error = MockBusError;

    fn send_command(&mut self, cmd: u8, params: &[u8]) -> Result<(), Self::Error> {
        let idx = self.sent;
        self.sent += 1;
        if matches!(self.fail_at, Some(n) if idx >= n) {
            return Err(MockBusError);
        }
        self.log.push(Event::Command(cmd, params.to_vec()));
        Ok(())
    }

    fn send_pixels(&mut self, cmd: u8, data: &[u8]) {
        self.log.push(Event::Pixels(cmd, data.to_vec()));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockGpioError;

pub struct MockReset {
    log: EventLog,
    fail_configure: bool,
}

impl MockReset {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            fail_configure: false,
        }
    }

    pub fn failing(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            fail_configure: true,
        }
    }
}

impl ResetLine for MockReset {
    type Error = MockGpioError;

    fn configure_output(&mut self) -> Result<(), Self::Error> {
        if self.fail_configure {
            return Err(MockGpioError);
        }
        self.log.push(Event::ResetConfigure);
        Ok(())
    }

    fn set_level(&mut self, high: bool) {
        self.log.push(Event::ResetLevel(high));
    }

    fn release(&mut self) {
        self.log.push(Event::ResetRelease);
    }
}

pub struct MockDelay {
    log: EventLog,
}

impl MockDelay {
    pub fn new(log: &EventLog) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.push(Event::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::DelayMs(ms));
    }
}

pub struct MockSpi {
    log: EventLog,
    fail: bool,
}

impl MockSpi {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            fail: false,
        }
    }

    pub fn fail_writes(&mut self) {
        self.fail = true;
    }
}

impl spi::ErrorType for MockSpi {
    type Error = ErrorKind;
}

impl SpiDevice for MockSpi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        for op in operations {
            if let Operation::Write(buf) = op {
                self.log.push(Event::SpiWrite(buf.to_vec()));
            }
        }
        Ok(())
    }
}

pub struct MockPin {
    log: EventLog,
}

impl MockPin {
    pub fn new(log: &EventLog) -> Self {
        Self { log: log.clone() }
    }
}

impl digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::PinLevel(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::PinLevel(true));
        Ok(())
    }
}
