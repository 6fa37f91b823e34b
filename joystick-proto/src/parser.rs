//! Parser for emitted record lines.
//!
//! Reads the exact format produced by [`Serialize`](crate::Serialize): the
//! six keys in wire order, no whitespace, optional trailing CR/LF.

use crate::fmt::parse_i32;
use crate::types::{JoystickReading, Key, SampleRecord};

/// Error type for parsing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Line is not a `{...}` object or a separator is missing.
    Syntax,
    /// A key is missing, misspelled, or out of order.
    UnexpectedKey(Key),
    /// Value is not an integer, or a switch value is not `0`/`1`.
    InvalidValue(Key),
    /// Extra content after the sixth field.
    TrailingData,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Syntax => write!(f, "malformed record"),
            Self::UnexpectedKey(k) => write!(f, "expected key {}", k.as_str()),
            Self::InvalidValue(k) => write!(f, "invalid value for {}", k.as_str()),
            Self::TrailingData => write!(f, "trailing data after record"),
        }
    }
}

/// Parse one record line.
///
/// # Example
///
/// ```
/// use joystick_proto::parse;
///
/// let record = parse(br#"{"S1":1,"H1":1,"V1":-1,"S2":0,"H2":0,"V2":102}"#).unwrap();
/// assert!(record.joystick1.switch);
/// assert_eq!(record.joystick2.vertical, 102);
/// ```
pub fn parse(line: &[u8]) -> Result<SampleRecord, ParseError> {
    let line = strip_line_ending(line);

    let body = line
        .strip_prefix(b"{")
        .and_then(|rest| rest.strip_suffix(b"}"))
        .ok_or(ParseError::Syntax)?;

    let mut values = [0i32; 6];
    let mut rest = body;

    for (i, key) in Key::ALL.into_iter().enumerate() {
        if i > 0 {
            rest = rest.strip_prefix(b",").ok_or(ParseError::Syntax)?;
        }
        rest = strip_key(rest, key)?;

        let end = rest.iter().position(|&b| b == b',').unwrap_or(rest.len());
        let value = parse_i32(&rest[..end]).ok_or(ParseError::InvalidValue(key))?;
        if key.is_switch() && !(0..=1).contains(&value) {
            return Err(ParseError::InvalidValue(key));
        }
        values[i] = value;
        rest = &rest[end..];
    }

    if !rest.is_empty() {
        return Err(ParseError::TrailingData);
    }

    let [s1, h1, v1, s2, h2, v2] = values;
    Ok(SampleRecord::new(
        JoystickReading::new(s1 == 1, h1, v1),
        JoystickReading::new(s2 == 1, h2, v2),
    ))
}

/// Strip `"<key>":` from the front of `input`.
#[inline]
fn strip_key(input: &[u8], key: Key) -> Result<&[u8], ParseError> {
    input
        .strip_prefix(b"\"")
        .and_then(|rest| rest.strip_prefix(key.as_str().as_bytes()))
        .and_then(|rest| rest.strip_prefix(b"\":"))
        .ok_or(ParseError::UnexpectedKey(key))
}

/// Strip trailing CR and/or LF from a line.
#[inline]
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let mut end = line.len();
    if end > 0 && line[end - 1] == b'\n' {
        end -= 1;
    }
    if end > 0 && line[end - 1] == b'\r' {
        end -= 1;
    }
    &line[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::{Serialize, MAX_LINE_SIZE};

    #[test]
    fn test_parse_emitted_line() {
        let record = parse(b"{\"S1\":1,\"H1\":1,\"V1\":-1,\"S2\":0,\"H2\":0,\"V2\":102}\r\n").unwrap();
        assert_eq!(
            record,
            SampleRecord::new(
                JoystickReading::new(true, 1, -1),
                JoystickReading::new(false, 0, 102),
            )
        );
    }

    #[test]
    fn test_parse_reads_serializer_output() {
        let record = SampleRecord::new(
            JoystickReading::new(false, -102, 57),
            JoystickReading::new(true, 3, -88),
        );
        let mut buf = [0u8; MAX_LINE_SIZE];
        let len = record.serialize_line(&mut buf).unwrap();
        assert_eq!(parse(&buf[..len]), Ok(record));
    }

    #[test]
    fn test_parse_bare_newline() {
        assert!(parse(br#"{"S1":0,"H1":0,"V1":0,"S2":0,"H2":0,"V2":0}"#).is_ok());
        assert!(parse(b"{\"S1\":0,\"H1\":0,\"V1\":0,\"S2\":0,\"H2\":0,\"V2\":0}\n").is_ok());
    }

    #[test]
    fn test_parse_rejects_reordered_keys() {
        let result = parse(br#"{"H1":0,"S1":0,"V1":0,"S2":0,"H2":0,"V2":0}"#);
        assert_eq!(result, Err(ParseError::UnexpectedKey(Key::S1)));
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let result = parse(br#"{"S1":0,"H1":0,"V1":0,"S2":0,"H2":0}"#);
        assert_eq!(result, Err(ParseError::Syntax));
    }

    #[test]
    fn test_parse_rejects_switch_out_of_range() {
        let result = parse(br#"{"S1":2,"H1":0,"V1":0,"S2":0,"H2":0,"V2":0}"#);
        assert_eq!(result, Err(ParseError::InvalidValue(Key::S1)));
    }

    #[test]
    fn test_parse_rejects_non_integer() {
        let result = parse(br#"{"S1":0,"H1":0.5,"V1":0,"S2":0,"H2":0,"V2":0}"#);
        assert_eq!(result, Err(ParseError::InvalidValue(Key::H1)));
    }

    #[test]
    fn test_parse_rejects_extra_field() {
        let result = parse(br#"{"S1":0,"H1":0,"V1":0,"S2":0,"H2":0,"V2":0,"X":1}"#);
        assert_eq!(result, Err(ParseError::TrailingData));
    }

    #[test]
    fn test_parse_rejects_missing_braces() {
        assert_eq!(parse(b""), Err(ParseError::Syntax));
        assert_eq!(parse(br#""S1":0"#), Err(ParseError::Syntax));
    }
}
