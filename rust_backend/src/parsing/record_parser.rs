//! Line parser for `name x y type created` records.

use bstr::{BString, ByteSlice};
use log::debug;

use crate::core::domain::ObjectRecord;

/// Sequential field reader over one input line.
///
/// Words end at whitespace; numbers end where the numeric syntax ends, so the
/// remainder of a token such as `3abc` is left for the next read.
struct FieldStream<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> FieldStream<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.bytes.len() && is_field_space(self.bytes[self.pos]) {
            self.pos += 1;
        }
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn next_word(&mut self) -> Option<&'a [u8]> {
        self.skip_whitespace();
        let start = self.pos;
        while self.pos < self.bytes.len() && !is_field_space(self.bytes[self.pos]) {
            self.pos += 1;
        }
        let bytes = self.bytes;
        (self.pos > start).then_some(&bytes[start..self.pos])
    }

    /// Read the longest decimal number at the cursor: optional sign, digits
    /// with an optional fraction, and an exponent only when digits follow it.
    fn next_number(&mut self) -> Option<f64> {
        self.skip_whitespace();
        let start = self.pos;
        let mut len = 0;

        if matches!(self.peek(len), Some(b'+' | b'-')) {
            len += 1;
        }
        let int_digits = self.count_digits(len);
        len += int_digits;

        let mut frac_digits = 0;
        if self.peek(len) == Some(b'.') {
            frac_digits = self.count_digits(len + 1);
            len += 1 + frac_digits;
        }
        if int_digits + frac_digits == 0 {
            return None;
        }

        if matches!(self.peek(len), Some(b'e' | b'E')) {
            let sign = usize::from(matches!(self.peek(len + 1), Some(b'+' | b'-')));
            let exp_digits = self.count_digits(len + 1 + sign);
            if exp_digits > 0 {
                len += 1 + sign + exp_digits;
            }
        }

        let text = std::str::from_utf8(&self.bytes[start..start + len]).ok()?;
        let value = text.parse::<f64>().ok().filter(|value| value.is_finite())?;
        self.pos = start + len;
        Some(value)
    }

    fn count_digits(&self, offset: usize) -> usize {
        self.bytes[(self.pos + offset).min(self.bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    }
}

/// Whitespace in the C locale, vertical tab and form feed included.
fn is_field_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Parse one input line of the form `name x y type created`.
///
/// Fields are extracted in order, the way a formatted input stream reads them:
/// a coordinate takes the longest numeric prefix at the cursor and leaves the
/// rest of its token for the next field. Once a coordinate cannot be read (or
/// is not finite), that field and every later one keep their default (`0.0`
/// or empty text). Extra tokens after the date are ignored. Text fields keep
/// their bytes verbatim.
///
/// Returns `None` for empty or whitespace-only lines.
pub fn parse_line<L: AsRef<[u8]>>(line: L) -> Option<ObjectRecord> {
    let mut stream = FieldStream::new(line.as_ref());
    let name = stream.next_word()?;

    let mut record = ObjectRecord {
        name: BString::from(name),
        ..ObjectRecord::default()
    };

    let Some(x) = stream.next_number() else {
        return Some(record);
    };
    record.x = x;

    let Some(y) = stream.next_number() else {
        return Some(record);
    };
    record.y = y;

    let Some(object_type) = stream.next_word() else {
        return Some(record);
    };
    record.object_type = BString::from(object_type);

    if let Some(created) = stream.next_word() {
        record.created = BString::from(created);
    }

    Some(record)
}

/// Parse every non-blank line of a raw document, preserving order.
pub fn parse_records_bytes(input: &[u8]) -> Vec<ObjectRecord> {
    let mut records = Vec::new();

    for (index, line) in input.lines().enumerate() {
        match parse_line(line) {
            Some(record) => records.push(record),
            None => debug!("Skipping blank line {}", index + 1),
        }
    }

    records
}

/// Parse every non-blank line of `input` into a record, preserving order.
pub fn parse_records_str(input: &str) -> Vec<ObjectRecord> {
    parse_records_bytes(input.as_bytes())
}
