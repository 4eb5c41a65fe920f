//! The format-string interpreter.
//!
//! A single left-to-right scan over a printf-style format string. Literal
//! text is forwarded to the sink verbatim; each `%` introduces a conversion
//! specifier that consumes one argument from the slice and renders it. There
//! is no width/precision mini-syntax: the specifier set instead offers
//! compact and fixed-width forms side by side (`%x` vs `%X`, `%b` vs `%B`),
//! keeping the scanner a two-character window.
//!
//! Malformed input never errors. An unrecognized specifier is forwarded
//! unmodified without consuming an argument, an exhausted argument slice
//! renders nothing for the remaining specifiers, and a trailing lone `%` is
//! consumed silently. Losing a diagnostic line to a typo in its own format
//! string would defeat the point of having it.

use core::slice;

use crate::convert;
use crate::sink::Sink;
use crate::value::Value;

/// Writes `format` to `sink`, rendering each conversion specifier with the
/// next argument from `args`.
///
/// # Supported specifiers
///
/// | Specifier | Output |
/// |---|---|
/// | `%s` | string verbatim |
/// | `%c` | single character |
/// | `%C` | character, or `0x` + two hex digits if not printable ASCII |
/// | `%d`, `%i` | signed decimal (32-bit) |
/// | `%l` | signed decimal (64-bit) |
/// | `%u` | unsigned decimal |
/// | `%x` | lowercase hex, no prefix, no padding |
/// | `%X` | `0x` + hex, zero-padded to 8 digits |
/// | `%b` | binary, no prefix, no padding |
/// | `%B` | `0b` + binary |
/// | `%t` | `t` or `f` |
/// | `%T` | `true` or `false` |
/// | `%D`, `%F` | double at 2 decimal places |
/// | `%p` | `0x` + hex of the address |
/// | `%%` | literal `%` |
///
/// # Examples
///
/// ```rust
/// use microlog::sink::CaptureSink;
/// use microlog::{Value, format};
///
/// let sink = CaptureSink::new();
/// format(&sink, "addr %X ok %T", &[Value::from(0xDEADu32), Value::from(true)]);
/// assert_eq!(sink.take(), "addr 0x0000dead ok true");
/// ```
pub fn format(sink: &dyn Sink, format: &str, args: &[Value<'_>]) {
    let mut args = args.iter();
    let mut rest = format;

    while let Some(percent) = rest.find('%') {
        if percent > 0 {
            sink.write_str(&rest[..percent]);
        }
        let mut tail = rest[percent + 1..].chars();
        let Some(specifier) = tail.next() else {
            // A trailing lone `%` is consumed without output.
            return;
        };
        write_specifier(sink, specifier, &mut args);
        rest = tail.as_str();
    }

    if !rest.is_empty() {
        sink.write_str(rest);
    }
}

fn write_specifier(sink: &dyn Sink, specifier: char, args: &mut slice::Iter<'_, Value<'_>>) {
    // `%%` and unrecognized specifiers do not consume an argument; everything
    // else renders nothing when the arguments have run out.
    match specifier {
        '%' => {
            sink.write_char('%');
        }
        's' => {
            if let Some(s) = args.next().and_then(Value::as_str) {
                sink.write_str(s);
            }
        }
        'c' => {
            if let Some(value) = args.next() {
                sink.write_char(value.as_char());
            }
        }
        'C' => {
            if let Some(value) = args.next() {
                write_readable_char(sink, value.as_u32());
            }
        }
        'd' | 'i' => {
            if let Some(value) = args.next() {
                sink.write_int(value.as_i32(), convert::DEC);
            }
        }
        'l' => {
            if let Some(value) = args.next() {
                sink.write_long(value.as_i64(), convert::DEC);
            }
        }
        'u' => {
            if let Some(value) = args.next() {
                sink.write_ulong(value.as_u64(), convert::DEC);
            }
        }
        'x' => {
            if let Some(value) = args.next() {
                sink.write_uint(value.as_u32(), convert::HEX);
            }
        }
        'X' => {
            if let Some(value) = args.next() {
                let value = value.as_u64();
                sink.write_str("0x");
                // Zero-pad 32-bit values to 8 hex digits.
                for _ in convert::digit_count(value, convert::HEX)..8 {
                    sink.write_char('0');
                }
                sink.write_ulong(value, convert::HEX);
            }
        }
        'b' => {
            if let Some(value) = args.next() {
                sink.write_uint(value.as_u32(), convert::BIN);
            }
        }
        'B' => {
            if let Some(value) = args.next() {
                sink.write_str("0b");
                sink.write_uint(value.as_u32(), convert::BIN);
            }
        }
        't' => {
            if let Some(value) = args.next() {
                sink.write_str(if value.is_truthy() { "t" } else { "f" });
            }
        }
        'T' => {
            if let Some(value) = args.next() {
                sink.write_str(if value.is_truthy() { "true" } else { "false" });
            }
        }
        'D' | 'F' => {
            if let Some(value) = args.next() {
                sink.write_double(value.as_f64());
            }
        }
        'p' => {
            if let Some(value) = args.next() {
                sink.write_str("0x");
                sink.write_ulong(value.as_u64(), convert::HEX);
            }
        }
        other => {
            // Fail-open: forward the raw character rather than erroring.
            sink.write_char(other);
        }
    }
}

/// `%C`: the character itself when printable ASCII, otherwise `0x` plus
/// exactly two lowercase hex digits of the low byte.
fn write_readable_char(sink: &dyn Sink, c: u32) {
    if (0x20..0x7F).contains(&c) {
        sink.write_char(c as u8 as char);
    } else {
        let byte = c & 0xFF;
        sink.write_str("0x");
        if byte < 0x10 {
            sink.write_char('0');
        }
        sink.write_uint(byte, convert::HEX);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::format;
    use crate::sink::CaptureSink;
    use crate::value::Value;

    fn render(fmt: &str, args: &[Value<'_>]) -> std::string::String {
        let sink = CaptureSink::new();
        format(&sink, fmt, args);
        sink.take()
    }

    #[test]
    fn literal_text_passes_through() {
        assert_eq!(render("plain text", &[]), "plain text");
        assert_eq!(render("", &[]), "");
    }

    #[test]
    fn percent_escape() {
        assert_eq!(render("100%% done", &[]), "100% done");
    }

    #[test]
    fn strings() {
        assert_eq!(render("hello %s!", &["world".into()]), "hello world!");
        // A non-string argument degrades to no output, not a fault.
        assert_eq!(render("hello %s!", &[5i32.into()]), "hello !");
    }

    #[test]
    fn characters() {
        assert_eq!(render("%c", &['A'.into()]), "A");
        assert_eq!(render("%c", &[0x42i32.into()]), "B");
    }

    #[test_case('A' as i32, "A"; "printable")]
    #[test_case(0x07, "0x07"; "bell")]
    #[test_case(0x00, "0x00"; "nul")]
    #[test_case(0x7F, "0x7f"; "delete")]
    #[test_case(0x20, " "; "space is printable")]
    #[test_case(0x7E, "~"; "tilde is printable")]
    #[test_case(0x1FF, "0xff"; "low byte only")]
    fn readable_characters(c: i32, expected: &str) {
        assert_eq!(render("%C", &[c.into()]), expected);
    }

    #[test]
    fn signed_decimals() {
        assert_eq!(render("%d", &[(-42i32).into()]), "-42");
        assert_eq!(render("%i", &[(-42i32).into()]), "-42");
        assert_eq!(render("%l", &[(-5_000_000_000i64).into()]), "-5000000000");
    }

    #[test]
    fn unsigned_decimal() {
        assert_eq!(render("%u", &[4_294_967_295u32.into()]), "4294967295");
    }

    #[test]
    fn hex_compact() {
        assert_eq!(render("%x", &[0xBEEFu32.into()]), "beef");
        // Signed inputs render their two's-complement bit pattern.
        assert_eq!(render("%x", &[(-1i32).into()]), "ffffffff");
    }

    #[test_case(0xDEADu32, "0x0000dead"; "padded")]
    #[test_case(0u32, "0x00000000"; "zero pads fully")]
    #[test_case(0xDEADBEEFu32, "0xdeadbeef"; "full width")]
    fn hex_fixed_width(value: u32, expected: &str) {
        let rendered = render("%X", &[value.into()]);
        assert_eq!(rendered, expected);
        assert_eq!(rendered.len(), 10);
    }

    #[test]
    fn binary() {
        assert_eq!(render("%b", &[10u32.into()]), "1010");
        assert_eq!(render("%B", &[10u32.into()]), "0b1010");
        assert_eq!(render("%b", &[0u32.into()]), "0");
        assert_eq!(render("%B", &[0u32.into()]), "0b0");
    }

    #[test]
    fn booleans() {
        assert_eq!(render("%t %T", &[true.into(), 1i32.into()]), "t true");
        assert_eq!(render("%t %T", &[false.into(), 0i32.into()]), "f false");
    }

    #[test]
    fn doubles() {
        assert_eq!(render("%D", &[3.14159f64.into()]), "3.14");
        assert_eq!(render("%F", &[(-2.5f64).into()]), "-2.50");
    }

    #[test]
    fn pointers() {
        assert_eq!(render("%p", &[Value::Pointer(0x1000)]), "0x1000");
        assert_eq!(render("%p", &[Value::Pointer(0)]), "0x0");
    }

    #[test]
    fn unrecognized_specifier_is_forwarded_without_consuming() {
        // `%q` forwards `q` and leaves the argument for the `%d`.
        assert_eq!(render("%q%d", &[7i32.into()]), "q7");
    }

    #[test]
    fn trailing_percent_is_swallowed() {
        assert_eq!(render("50%", &[]), "50");
    }

    #[test]
    fn exhausted_arguments_render_nothing_but_keep_literals() {
        assert_eq!(render("a=%d b=%d", &[1i32.into()]), "a=1 b=");
    }

    #[test]
    fn mixed_line() {
        assert_eq!(
            render(
                "%s: %d events, mask %X, ok %T",
                &["rx".into(), 17i32.into(), 0xFFu32.into(), true.into()],
            ),
            "rx: 17 events, mask 0x000000ff, ok true",
        );
    }
}
