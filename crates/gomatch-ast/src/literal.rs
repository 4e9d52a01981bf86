//! Basic literal kinds and their parsed values.
//!
//! Literals are compared by value rather than by spelling: `16`, `0x10`,
//! `0o20` and `0b1_0000` all denote the same integer. Text that does not
//! parse as its declared kind has no value and never equals anything.

/// The lexical category of a basic literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LitKind {
    /// Integer literal.
    #[default]
    Int,
    /// Floating-point literal.
    Float,
    /// Imaginary literal.
    Imag,
    /// Rune literal.
    Char,
    /// Interpreted or raw string literal.
    String,
}

impl LitKind {
    /// Returns `true` for the kinds that denote numbers.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::String)
    }
}

/// The value denoted by a basic literal.
#[derive(Debug, Clone, PartialEq)]
pub enum LitValue {
    /// Integer or rune value.
    Int(u128),
    /// Floating-point value.
    Float(f64),
    /// Imaginary part of an imaginary literal.
    Imag(f64),
    /// Unquoted string contents as raw bytes.
    ///
    /// `\xNN` and octal escapes contribute single bytes; `\u` and `\U`
    /// escapes contribute the UTF-8 encoding of their code point.
    String(Vec<u8>),
}

impl LitValue {
    /// Parses literal text of the given kind.
    #[must_use]
    pub fn parse(kind: LitKind, text: &str) -> Option<Self> {
        match kind {
            LitKind::Int => parse_int(text).map(Self::Int),
            LitKind::Float => parse_float(text).map(Self::Float),
            LitKind::Imag => text
                .strip_suffix('i')
                .and_then(|body| parse_float(body).or_else(|| parse_int_as_float(body)))
                .map(Self::Imag),
            LitKind::Char => unquote_char(text).map(|c| Self::Int(u128::from(u32::from(c)))),
            LitKind::String => unquote_string(text).map(Self::String),
        }
    }

    /// Compares two values the way constant expressions compare.
    ///
    /// Integers, runes and floats compare numerically with each other;
    /// strings only compare with strings; imaginary values only with
    /// imaginary values.
    #[must_use]
    pub fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Int(i), Self::Float(f)) | (Self::Float(f), Self::Int(i)) => int_equals_float(*i, *f),
            (Self::Float(a), Self::Float(b)) | (Self::Imag(a), Self::Imag(b)) => float_equals(*a, *b),
            (Self::String(a), Self::String(b)) => a == b,
            _ => false,
        }
    }

    /// Returns string contents that are valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(bytes) => std::str::from_utf8(bytes).ok(),
            Self::Int(_) | Self::Float(_) | Self::Imag(_) => None,
        }
    }
}

#[expect(clippy::float_cmp, reason = "literal values compare exactly")]
fn float_equals(a: f64, b: f64) -> bool {
    a == b
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_cmp,
    reason = "an integer equals a float only when the float is that exact integer"
)]
fn int_equals_float(int: u128, float: f64) -> bool {
    float.fract() == 0.0 && int as f64 == float
}

fn parse_int(text: &str) -> Option<u128> {
    let digits: String = text.chars().filter(|c| *c != '_').collect();
    let lower = digits.to_ascii_lowercase();
    if let Some(hex) = lower.strip_prefix("0x") {
        return u128::from_str_radix(hex, 16).ok();
    }
    if let Some(bin) = lower.strip_prefix("0b") {
        return u128::from_str_radix(bin, 2).ok();
    }
    if let Some(oct) = lower.strip_prefix("0o") {
        return u128::from_str_radix(oct, 8).ok();
    }
    if let Some(oct) = lower.strip_prefix('0').filter(|rest| !rest.is_empty()) {
        return u128::from_str_radix(oct, 8).ok();
    }
    lower.parse().ok()
}

fn parse_int_as_float(text: &str) -> Option<f64> {
    parse_int(text).and_then(|value| value.to_string().parse().ok())
}

fn parse_float(text: &str) -> Option<f64> {
    let digits: String = text.chars().filter(|c| *c != '_').collect();
    if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        return parse_hex_float(hex);
    }
    if digits.is_empty() || !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    digits.parse().ok()
}

/// Parses the part of a hexadecimal float after `0x`: a hex mantissa with
/// an optional point, then a mandatory binary exponent.
fn parse_hex_float(text: &str) -> Option<f64> {
    let (mantissa, exponent) = text.split_once(['p', 'P'])?;
    let exponent: i32 = exponent.parse().ok()?;
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    let mut value: u128 = 0;
    for c in whole.chars().chain(fraction.chars()) {
        let digit = c.to_digit(16)?;
        value = value.checked_mul(16)?.checked_add(u128::from(digit))?;
    }
    let shift = i32::try_from(fraction.len()).ok()?.checked_mul(4)?;
    Some(scale_by_two(value, exponent.checked_sub(shift)?))
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "hex float mantissas round to the nearest f64 like the compiler does"
)]
fn scale_by_two(mantissa: u128, exponent: i32) -> f64 {
    mantissa as f64 * 2f64.powi(exponent)
}

fn unquote_char(text: &str) -> Option<char> {
    let body = text.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut chars = body.chars().peekable();
    let value = if body.starts_with('\\') {
        chars.next();
        match unescape(&mut chars, '\'')? {
            Escape::Byte(byte) => char::from(byte),
            Escape::Char(c) => c,
        }
    } else {
        chars.next()?
    };
    chars.next().is_none().then_some(value)
}

fn unquote_string(text: &str) -> Option<Vec<u8>> {
    if let Some(raw) = text.strip_prefix('`').and_then(|rest| rest.strip_suffix('`')) {
        return Some(raw.bytes().filter(|b| *b != b'\r').collect());
    }
    let body = text.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = Vec::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    let mut buf = [0; 4];
    while let Some(c) = chars.next() {
        match c {
            '\\' => match unescape(&mut chars, '"')? {
                Escape::Byte(byte) => out.push(byte),
                Escape::Char(decoded) => {
                    out.extend_from_slice(decoded.encode_utf8(&mut buf).as_bytes());
                }
            },
            '"' | '\n' => return None,
            other => out.extend_from_slice(other.encode_utf8(&mut buf).as_bytes()),
        }
    }
    Some(out)
}

/// One decoded escape sequence.
enum Escape {
    /// `\xNN` or `\NNN`: a single byte.
    Byte(u8),
    /// Any other escape: a code point.
    Char(char),
}

/// Decodes one escape sequence after its leading backslash.
fn unescape(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, quote: char) -> Option<Escape> {
    let c = chars.next()?;
    let simple = match c {
        'a' => Some('\u{7}'),
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\u{b}'),
        '\\' => Some('\\'),
        q if q == quote => Some(q),
        _ => None,
    };
    if let Some(decoded) = simple {
        return Some(Escape::Char(decoded));
    }
    let (radix, width) = match c {
        'x' => (16, 2),
        'u' => (16, 4),
        'U' => (16, 8),
        '0'..='7' => (8, 2),
        _ => return None,
    };
    let mut digits = String::new();
    if radix == 8 {
        digits.push(c);
    }
    for _ in 0..width {
        digits.push(chars.next()?);
    }
    let code = u32::from_str_radix(&digits, radix).ok()?;
    match c {
        'u' | 'U' => char::from_u32(code).map(Escape::Char),
        _ => u8::try_from(code).ok().map(Escape::Byte),
    }
}
