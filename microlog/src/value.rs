//! Format argument values.
//!
//! [`Value`] is a closed tagged union standing in for the type-unsafe C
//! varargs of classic printf-style loggers: each conversion specifier in a
//! format string consumes one `Value` from the argument slice, and the
//! variant records the argument's real type so a specifier/argument mismatch
//! degrades to a defined rendering instead of undefined behavior.
//!
//! Values are normally constructed implicitly through the `From` impls, either
//! at a call site or via the [`args!`][crate::args] macro:
//!
//! ```rust
//! use microlog::Value;
//!
//! let args = [Value::from(42), Value::from("sensor"), Value::from(true)];
//! ```

/// A single format argument.
///
/// The numeric accessors follow two's-complement semantics: a signed value
/// rendered in a non-decimal base is reinterpreted as its unsigned bit
/// pattern, never printed with a minus sign.
#[derive(Copy, Clone, Debug)]
pub enum Value<'a> {
    /// A single character (`%c`, `%C`).
    Char(char),

    /// A signed 32-bit integer (`%d`, `%i`).
    Int(i32),

    /// An unsigned 32-bit integer (`%x`, `%b`).
    Uint(u32),

    /// A signed 64-bit integer (`%l`).
    Long(i64),

    /// An unsigned 64-bit integer (`%u`, `%X`).
    Ulong(u64),

    /// A double-precision float (`%D`, `%F`).
    Double(f64),

    /// A borrowed string (`%s`).
    Str(&'a str),

    /// A pointer address (`%p`).
    Pointer(usize),

    /// A boolean (`%t`, `%T`).
    Bool(bool),
}

impl Value<'_> {
    /// The value as a signed 64-bit integer. Unsigned 64-bit values are
    /// reinterpreted through their bit pattern; strings count as zero.
    pub(crate) fn as_i64(&self) -> i64 {
        match *self {
            Value::Char(c) => c as i64,
            Value::Int(v) => v as i64,
            Value::Uint(v) => v as i64,
            Value::Long(v) => v,
            Value::Ulong(v) => v as i64,
            Value::Double(v) => v as i64,
            Value::Str(_) => 0,
            Value::Pointer(p) => p as i64,
            Value::Bool(b) => b as i64,
        }
    }

    /// The value as an unsigned 64-bit bit pattern. `Int` keeps its native
    /// 32-bit width so negative ints render as 8 hex digits, not 16.
    pub(crate) fn as_u64(&self) -> u64 {
        match *self {
            Value::Char(c) => c as u64,
            Value::Int(v) => v as u32 as u64,
            Value::Uint(v) => v as u64,
            Value::Long(v) => v as u64,
            Value::Ulong(v) => v,
            Value::Double(v) => v as u64,
            Value::Str(_) => 0,
            Value::Pointer(p) => p as u64,
            Value::Bool(b) => b as u64,
        }
    }

    pub(crate) fn as_i32(&self) -> i32 {
        self.as_i64() as i32
    }

    pub(crate) fn as_u32(&self) -> u32 {
        self.as_u64() as u32
    }

    pub(crate) fn as_f64(&self) -> f64 {
        match *self {
            Value::Char(c) => c as u32 as f64,
            Value::Int(v) => v as f64,
            Value::Uint(v) => v as f64,
            Value::Long(v) => v as f64,
            Value::Ulong(v) => v as f64,
            Value::Double(v) => v,
            Value::Str(_) => 0.0,
            Value::Pointer(p) => p as f64,
            Value::Bool(b) => b as u8 as f64,
        }
    }

    /// Narrows the value to a single character; numeric values keep their low
    /// byte, mirroring the `char` cast of the C API this replaces.
    pub(crate) fn as_char(&self) -> char {
        match *self {
            Value::Char(c) => c,
            _ => (self.as_u32() & 0xFF) as u8 as char,
        }
    }

    /// The borrowed string, if this is a string value.
    pub(crate) fn as_str(&self) -> Option<&str> {
        match *self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// C-style truthiness: non-zero numbers, non-empty strings and non-null
    /// pointers are true.
    pub(crate) fn is_truthy(&self) -> bool {
        match *self {
            Value::Char(c) => c != '\0',
            Value::Int(v) => v != 0,
            Value::Uint(v) => v != 0,
            Value::Long(v) => v != 0,
            Value::Ulong(v) => v != 0,
            Value::Double(v) => v != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::Pointer(p) => p != 0,
            Value::Bool(b) => b,
        }
    }
}

impl From<char> for Value<'_> {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value<'_> {
    fn from(value: i8) -> Self {
        Value::Int(value as i32)
    }
}

impl From<i16> for Value<'_> {
    fn from(value: i16) -> Self {
        Value::Int(value as i32)
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value<'_> {
    fn from(value: i64) -> Self {
        Value::Long(value)
    }
}

impl From<isize> for Value<'_> {
    fn from(value: isize) -> Self {
        Value::Long(value as i64)
    }
}

impl From<u8> for Value<'_> {
    fn from(value: u8) -> Self {
        Value::Uint(value as u32)
    }
}

impl From<u16> for Value<'_> {
    fn from(value: u16) -> Self {
        Value::Uint(value as u32)
    }
}

impl From<u32> for Value<'_> {
    fn from(value: u32) -> Self {
        Value::Uint(value)
    }
}

impl From<u64> for Value<'_> {
    fn from(value: u64) -> Self {
        Value::Ulong(value)
    }
}

impl From<usize> for Value<'_> {
    fn from(value: usize) -> Self {
        Value::Ulong(value as u64)
    }
}

impl From<f32> for Value<'_> {
    fn from(value: f32) -> Self {
        Value::Double(value as f64)
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Str(value)
    }
}

impl<T> From<*const T> for Value<'_> {
    fn from(value: *const T) -> Self {
        Value::Pointer(value as usize)
    }
}

impl<T> From<*mut T> for Value<'_> {
    fn from(value: *mut T) -> Self {
        Value::Pointer(value as usize)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Value;

    #[test]
    fn signed_values_reinterpret_as_bit_patterns() {
        // Native int keeps its 32-bit width.
        assert_eq!(Value::Int(-1).as_u64(), 0xFFFF_FFFF);
        assert_eq!(Value::Long(-1).as_u64(), u64::MAX);
        assert_eq!(Value::Ulong(u64::MAX).as_i64(), -1);
    }

    #[test]
    fn char_narrowing() {
        assert_eq!(Value::Char('A').as_char(), 'A');
        assert_eq!(Value::Int(0x141).as_char(), 'A');
        assert_eq!(Value::Uint(0x07).as_char(), '\x07');
    }

    #[test]
    fn truthiness() {
        assert!(Value::Int(-3).is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(Value::Str("x").is_truthy());
        assert!(!Value::Str("").is_truthy());
        assert!(!Value::Pointer(0).is_truthy());
        assert!(Value::Double(0.5).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
    }

    #[test]
    fn strings_degrade_to_zero_in_numeric_contexts() {
        assert_eq!(Value::Str("12").as_i64(), 0);
        assert_eq!(Value::Str("12").as_u64(), 0);
    }

    #[test]
    fn pointer_conversion() {
        let x = 0u8;
        let value = Value::from(&x as *const u8);
        assert!(matches!(value, Value::Pointer(_)));
    }
}
