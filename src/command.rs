//! Single-byte serial command protocol

use crate::error::UnknownCommand;

const COMMAND_IDLE: u8 = 0;
const COMMAND_SHOW: u8 = 1;

/// Decoded serial command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// Return to the ambient idle animation
    Idle = COMMAND_IDLE,
    /// Fade out and start the show
    Show = COMMAND_SHOW,
}

impl TryFrom<u8> for Command {
    type Error = UnknownCommand;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            COMMAND_IDLE => Ok(Self::Idle),
            COMMAND_SHOW => Ok(Self::Show),
            other => Err(UnknownCommand(other)),
        }
    }
}

impl From<Command> for u8 {
    fn from(command: Command) -> Self {
        command as u8
    }
}

/// Source of raw command bytes, polled once per frame.
///
/// Implement this over a UART, USB CDC or any other byte stream.
pub trait CommandSource {
    /// Take the next pending byte, if any. Must not block.
    fn try_read(&mut self) -> Option<u8>;
}

/// A source that never produces commands
impl CommandSource for () {
    fn try_read(&mut self) -> Option<u8> {
        None
    }
}
