use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Ascending addresses, the order every multi-byte field in the save uses.
    Forward,
    /// Bytes ending at the requested offset, handed back high address first.
    Reversed,
}

/// A bounds-checked view into the raw save buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ByteRegion {
    pub start: usize,
    pub len: usize,
    pub direction: Direction,
}

impl ByteRegion {
    /// Resolves `(offset, size)` against a buffer of `buffer_len` bytes.
    ///
    /// A positive `size` covers `offset..offset + size`. A negative `size` covers the
    /// `|size|` bytes ending at `offset` (inclusive) and marks the region as reversed.
    pub fn resolve(
        field: &'static str,
        offset: usize,
        size: isize,
        buffer_len: usize,
    ) -> Result<Self> {
        let out_of_bounds = || Error::OutOfBounds {
            field,
            offset,
            size,
            len: buffer_len,
        };

        let len = size.unsigned_abs();
        if len == 0 {
            return Err(out_of_bounds());
        }

        let (start, direction) = if size > 0 {
            (offset, Direction::Forward)
        } else {
            let start = offset
                .checked_add(1)
                .and_then(|end| end.checked_sub(len))
                .ok_or_else(out_of_bounds)?;
            (start, Direction::Reversed)
        };

        match start.checked_add(len) {
            Some(end) if end <= buffer_len => Ok(ByteRegion {
                start,
                len,
                direction,
            }),
            _ => Err(out_of_bounds()),
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Copies the region out of `buffer` in logical order. The region must have been
    /// resolved against this buffer.
    pub fn bytes(&self, buffer: &[u8]) -> Vec<u8> {
        let mut bytes = buffer[self.start..self.end()].to_vec();
        if self.direction == Direction::Reversed {
            bytes.reverse();
        }
        bytes
    }
}

/// Reads `size` bytes at `offset`; see [`ByteRegion::resolve`] for negative sizes.
pub fn read(buffer: &[u8], field: &'static str, offset: usize, size: isize) -> Result<Vec<u8>> {
    Ok(ByteRegion::resolve(field, offset, size, buffer.len())?.bytes(buffer))
}

/// Borrows `len` bytes starting at `offset` without copying.
pub fn slice<'a>(
    buffer: &'a [u8],
    field: &'static str,
    offset: usize,
    len: usize,
) -> Result<&'a [u8]> {
    let region = ByteRegion::resolve(field, offset, len as isize, buffer.len())?;
    Ok(&buffer[region.start..region.end()])
}

pub fn read_u8(buffer: &[u8], field: &'static str, offset: usize) -> Result<u8> {
    Ok(slice(buffer, field, offset, 1)?[0])
}

/// Parses an offset written in hexadecimal, with or without a `0x` prefix.
pub fn parse_offset(text: &str) -> Result<usize> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    usize::from_str_radix(digits, 16).map_err(|_| Error::InvalidOffset(text.to_owned()))
}
