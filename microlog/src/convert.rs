//! Numeric-to-text conversion shared by the default [`Sink`][crate::Sink]
//! write methods and the format interpreter.
//!
//! Conversion is allocation-free: digits are assembled least-significant first
//! into the tail of a caller-provided stack buffer and handed back as a
//! borrowed `&str`.

/// Binary base.
pub(crate) const BIN: u8 = 2;
/// Decimal base.
pub(crate) const DEC: u8 = 10;
/// Hexadecimal base.
pub(crate) const HEX: u8 = 16;

/// Longest possible rendering: 64 binary digits.
pub(crate) const MAX_DIGITS: usize = 64;

/// Digit buffer sized for the worst case.
pub(crate) type DigitBuffer = [u8; MAX_DIGITS];

/// Maps unsupported bases to decimal rather than failing.
pub(crate) fn normalize_base(base: u8) -> u8 {
    match base {
        BIN | HEX => base,
        _ => DEC,
    }
}

/// Renders `value` in `base` into `buf`, returning the digits.
///
/// Hex digits are lowercase. Zero yields a single `0`; there is no leading
/// zero padding. Bases other than 2, 10 and 16 fall back to decimal.
pub(crate) fn unsigned_digits(value: u64, base: u8, buf: &mut DigitBuffer) -> &str {
    let base = normalize_base(base) as u64;
    let mut value = value;
    let mut pos = MAX_DIGITS;
    loop {
        pos -= 1;
        let digit = (value % base) as u8;
        buf[pos] = if digit < 10 {
            b'0' + digit
        } else {
            b'a' + (digit - 10)
        };
        value /= base;
        if value == 0 {
            break;
        }
    }
    core::str::from_utf8(&buf[pos..]).expect("digit buffer holds only ASCII")
}

/// Number of digits `value` occupies in `base`, as used for fixed-width
/// zero padding. Zero occupies one digit.
pub(crate) fn digit_count(value: u64, base: u8) -> usize {
    let base = normalize_base(base) as u64;
    let mut value = value;
    let mut count = 1;
    while value >= base {
        value /= base;
        count += 1;
    }
    count
}
