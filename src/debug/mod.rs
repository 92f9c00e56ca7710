//! Fire-and-forget debug text output.
//!
//! Readings and diagnostic event codes go out as fixed-width uppercase hex
//! lines (2/4/8 digits for byte/word/double-word) over whatever console
//! the platform provides. Purely observational: the node behaves
//! identically with [`NullDebugLink`].

use heapless::String;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// A text-line console, typically a UART. Must not block for long and may
/// drop lines; the core never depends on the outcome.
pub trait DebugLink {
    fn put_line(&mut self, line: &str);
}

/// Disabled console.
pub struct NullDebugLink;

impl DebugLink for NullDebugLink {
    fn put_line(&mut self, _line: &str) {}
}

fn push_hex<const N: usize>(line: &mut String<N>, value: u32, digits: u32) {
    for i in (0..digits).rev() {
        let nibble = ((value >> (i * 4)) & 0xf) as usize;
        let _ = line.push(HEX_DIGITS[nibble] as char);
    }
}

pub fn hex8_line(value: u8) -> String<3> {
    let mut line = String::new();
    push_hex(&mut line, value as u32, 2);
    let _ = line.push('\n');
    line
}

pub fn hex16_line(value: u16) -> String<5> {
    let mut line = String::new();
    push_hex(&mut line, value as u32, 4);
    let _ = line.push('\n');
    line
}

pub fn hex32_line(value: u32) -> String<9> {
    let mut line = String::new();
    push_hex(&mut line, value, 8);
    let _ = line.push('\n');
    line
}
