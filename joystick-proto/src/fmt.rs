//! No-std number formatting and parsing for the JSON line format.
//!
//! These functions work directly on byte buffers without requiring heap
//! allocation or the standard library.

/// Longest decimal rendering of an `i32`: `-2147483648`.
pub const MAX_I32_LEN: usize = 11;

/// Write an i32 as a signed decimal string.
///
/// Returns the number of bytes written (1-11 bytes).
///
/// # Panics
///
/// Panics if `buf` is shorter than the rendered number.
#[inline]
pub fn write_i32(buf: &mut [u8], value: i32) -> usize {
    if value == 0 {
        buf[0] = b'0';
        return 1;
    }

    let mut pos = 0;
    if value < 0 {
        buf[0] = b'-';
        pos = 1;
    }

    // unsigned_abs handles i32::MIN without overflow
    let mut n = value.unsigned_abs();
    let mut temp = [0u8; 10];
    let mut len = 0;
    while n > 0 {
        temp[len] = b'0' + (n % 10) as u8;
        n /= 10;
        len += 1;
    }

    for i in (0..len).rev() {
        buf[pos] = temp[i];
        pos += 1;
    }

    pos
}

/// Parse a signed decimal integer with an optional leading `-`.
///
/// Returns `None` on empty input, stray characters, or overflow.
#[inline]
pub fn parse_i32(s: &[u8]) -> Option<i32> {
    let (negative, digits) = match s.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, s),
    };

    if digits.is_empty() {
        return None;
    }

    // Accumulate as negative so i32::MIN parses
    let mut value: i32 = 0;
    for &b in digits {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_sub(i32::from(b - b'0')))?;
    }

    if negative {
        Some(value)
    } else {
        value.checked_neg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_i32() {
        let mut buf = [0u8; MAX_I32_LEN];

        let len = write_i32(&mut buf, 0);
        assert_eq!(&buf[..len], b"0");

        let len = write_i32(&mut buf, -1);
        assert_eq!(&buf[..len], b"-1");

        let len = write_i32(&mut buf, 102);
        assert_eq!(&buf[..len], b"102");

        let len = write_i32(&mut buf, -102);
        assert_eq!(&buf[..len], b"-102");

        let len = write_i32(&mut buf, i32::MAX);
        assert_eq!(&buf[..len], b"2147483647");

        let len = write_i32(&mut buf, i32::MIN);
        assert_eq!(&buf[..len], b"-2147483648");
    }

    #[test]
    fn test_parse_i32() {
        assert_eq!(parse_i32(b"0"), Some(0));
        assert_eq!(parse_i32(b"-102"), Some(-102));
        assert_eq!(parse_i32(b"102"), Some(102));
        assert_eq!(parse_i32(b"-2147483648"), Some(i32::MIN));
        assert_eq!(parse_i32(b"2147483647"), Some(i32::MAX));
    }

    #[test]
    fn test_parse_i32_rejects_garbage() {
        assert_eq!(parse_i32(b""), None);
        assert_eq!(parse_i32(b"-"), None);
        assert_eq!(parse_i32(b"+5"), None);
        assert_eq!(parse_i32(b"1.5"), None);
        assert_eq!(parse_i32(b" 1"), None);
        assert_eq!(parse_i32(b"2147483648"), None);
    }
}
