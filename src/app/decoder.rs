//! Decodes raw, unbuffered terminal bytes into logical key events.
//!
//! Escape handling reads ahead without a timeout: after `ESC` exactly one more
//! byte is read, and after `ESC [` one further byte. A sequence that stalls
//! halfway blocks the decoder until the next byte arrives.

use std::io::{self, Read};

const ESC: u8 = 0x1b;
const CTRL_C: u8 = 0x03;
const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7f;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Left,
    Right,
    Confirm,
    Cancel,
    Interrupt,
    Backspace,
    Char(char),
    /// An ASCII digit. Callers decide whether it selects or is typed.
    Digit(u8),
    /// A recognised byte or sequence with no meaning here, e.g. `ESC [ A`.
    Unsupported,
}

impl KeyInput {
    /// The typed character, for both printable characters and digits.
    #[must_use]
    pub fn as_char(self) -> Option<char> {
        match self {
            KeyInput::Char(c) => Some(c),
            KeyInput::Digit(n) => char::from_digit(u32::from(n), 10),
            _ => None,
        }
    }

    pub(crate) fn from_char(c: char) -> Self {
        match c.to_digit(10) {
            Some(n) if c.is_ascii_digit() => KeyInput::Digit(n as u8),
            _ => KeyInput::Char(c),
        }
    }
}

pub struct InputDecoder<R> {
    reader: R,
    /// A byte read ahead that ended a malformed sequence.
    pending: Option<u8>,
}

impl<R: Read> InputDecoder<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
        }
    }

    /// Blocks until one complete event has been read.
    pub fn next_key(&mut self) -> io::Result<KeyInput> {
        let byte = self.read_byte()?;
        let key = match byte {
            ESC => self.decode_escape()?,
            CTRL_C => KeyInput::Interrupt,
            b'\r' | b'\n' => KeyInput::Confirm,
            BACKSPACE | DELETE => KeyInput::Backspace,
            0x20..=0x7e => KeyInput::from_char(char::from(byte)),
            0xc0..=0xf7 => self.decode_utf8(byte)?,
            _ => KeyInput::Unsupported,
        };
        Ok(key)
    }

    fn decode_escape(&mut self) -> io::Result<KeyInput> {
        if self.read_byte()? != b'[' {
            return Ok(KeyInput::Cancel);
        }
        Ok(match self.read_byte()? {
            b'D' => KeyInput::Left,
            b'C' => KeyInput::Right,
            _ => KeyInput::Unsupported,
        })
    }

    fn decode_utf8(&mut self, lead: u8) -> io::Result<KeyInput> {
        let width = match lead {
            0xc0..=0xdf => 2,
            0xe0..=0xef => 3,
            _ => 4,
        };
        let mut buf = [lead, 0, 0, 0];
        for slot in &mut buf[1..width] {
            let byte = self.read_byte()?;
            if !(0x80..=0xbf).contains(&byte) {
                // Not a continuation byte: keep it as the start of the next key.
                self.pending = Some(byte);
                return Ok(KeyInput::Unsupported);
            }
            *slot = byte;
        }
        Ok(std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .filter(|c| !c.is_control())
            .map_or(KeyInput::Unsupported, KeyInput::Char))
    }

    fn read_byte(&mut self) -> io::Result<u8> {
        if let Some(byte) = self.pending.take() {
            return Ok(byte);
        }
        let mut buf = [0u8; 1];
        self.reader.read_exact(&mut buf)?;
        Ok(buf[0])
    }
}
