//! Line-delimited JSON output.
//!
//! Every record is written as one self-contained JSON object followed by a
//! newline. Lines are laid out as `{"artist": "A, B", "name": "Song", ...}`
//! with all characters outside printable ASCII escaped, so the output is
//! plain 7-bit text regardless of the terminal or pipe on the other end.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::Formatter;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// `", "` between members, `": "` after keys, `\uXXXX` for anything that is
/// not printable ASCII.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiLineFormatter;

impl Formatter for AsciiLineFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write_unicode_escape(writer, *unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

fn write_unicode_escape<W>(writer: &mut W, unit: u16) -> io::Result<()>
where
    W: ?Sized + Write,
{
    let buf = [
        b'\\',
        b'u',
        HEX_DIGITS[(unit >> 12) as usize & 0xf],
        HEX_DIGITS[(unit >> 8) as usize & 0xf],
        HEX_DIGITS[(unit >> 4) as usize & 0xf],
        HEX_DIGITS[unit as usize & 0xf],
    ];
    writer.write_all(&buf)
}

/// Writes one JSON line per record, in order.
pub fn write_json_lines<W, T>(writer: &mut W, records: &[T]) -> io::Result<()>
where
    W: Write,
    T: Serialize,
{
    for record in records {
        let mut ser = serde_json::Serializer::with_formatter(&mut *writer, AsciiLineFormatter);
        record.serialize(&mut ser)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
