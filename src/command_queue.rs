//! Bounded byte queue between a serial interrupt and the frame loop.
//!
//! Built on `critical-section` and `heapless::Deque`, so the writer can live
//! in an ISR while the reader is polled from the main loop.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::command::CommandSource;

/// Returned by a write into a full queue; carries the rejected byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub u8);

/// Fixed-capacity FIFO of raw command bytes.
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<u8, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for the producing side (UART RX interrupt, USB task, ...)
    pub const fn writer(&self) -> CommandWriter<'_, SIZE> {
        CommandWriter { queue: self }
    }

    /// Handle for the frame loop
    pub const fn reader(&self) -> CommandReader<'_, SIZE> {
        CommandReader { queue: self }
    }

    /// Append a byte. Fails without touching the queue when full.
    pub fn push(&self, byte: u8) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(byte).map_err(QueueFull)
        })
    }

    /// Remove the oldest byte
    pub fn pop(&self) -> Option<u8> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of bytes waiting
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct CommandWriter<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandWriter<'_, SIZE> {
    pub fn push(&self, byte: u8) -> Result<(), QueueFull> {
        self.queue.push(byte)
    }
}

#[derive(Clone, Copy)]
pub struct CommandReader<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSource for CommandReader<'_, SIZE> {
    fn try_read(&mut self) -> Option<u8> {
        self.queue.pop()
    }
}
