//! Digit accumulation for numeric fields and identifiers

/// Why a string is not a canonical non-negative integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumericError {
    Empty,
    NotADigit,
    LeadingZero,
    Overflow,
}

/// Parses an ASCII decimal without sign and without leading zeroes ("0" itself is fine).
pub(crate) fn parse_non_negative(text: &str) -> Result<u64, NumericError> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return Err(NumericError::Empty);
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return Err(NumericError::NotADigit);
    }
    if bytes[0] == b'0' && bytes.len() > 1 {
        return Err(NumericError::LeadingZero);
    }

    let mut value: u64 = 0;
    for &b in bytes {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
            .ok_or(NumericError::Overflow)?;
    }
    Ok(value)
}
