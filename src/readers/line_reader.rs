use memchr::memchr;

use crate::utils::constants::{FIELD_DELIMITER, LINE_TERMINATOR};

/// Iterator over `(absolute_offset, line)` pairs of a buffer, without the
/// terminating newline. A final line lacking `\n` is still yielded.
pub struct RecordLines<'a> {
    data: &'a [u8],
    pos: usize,
    base_offset: usize,
}

impl<'a> RecordLines<'a> {
    /// `base_offset` is the position of `data` within the whole input, so
    /// reported offsets stay meaningful for sub-ranges.
    pub fn new(data: &'a [u8], base_offset: usize) -> Self {
        Self {
            data,
            pos: 0,
            base_offset,
        }
    }
}

impl<'a> Iterator for RecordLines<'a> {
    type Item = (usize, &'a [u8]);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.data.len() {
            return None;
        }

        let rest = &self.data[self.pos..];
        let (line, advance) = match memchr(LINE_TERMINATOR, rest) {
            Some(newline) => (&rest[..newline], newline + 1),
            None => (rest, rest.len()),
        };

        let offset = self.base_offset + self.pos;
        self.pos += advance;
        Some((offset, line))
    }
}

/// Split a line at its first delimiter into `(station, reading)`
#[inline]
pub fn split_record(line: &[u8]) -> Option<(&[u8], &[u8])> {
    let delimiter = memchr(FIELD_DELIMITER, line)?;
    Some((&line[..delimiter], &line[delimiter + 1..]))
}

/// Smallest line start at or after `pos`, clamped to the buffer length
pub fn next_line_start(data: &[u8], pos: usize) -> usize {
    if pos == 0 || pos >= data.len() {
        return pos.min(data.len());
    }
    if data[pos - 1] == LINE_TERMINATOR {
        return pos;
    }
    match memchr(LINE_TERMINATOR, &data[pos..]) {
        Some(newline) => pos + newline + 1,
        None => data.len(),
    }
}
