// Copyright (C) 2025 Ryan Daum <ryan.daum@gmail.com> This program is free
// software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, version
// 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

//! Conversions the language applies implicitly, spelled out as functions: string
//! conversion for `+` with a string operand, number conversion, and `==`.

use crate::variant::Variant;
use crate::{Var, v_string};

/// Display string of a value, as `String(value)` would produce it.
pub fn to_display_string(v: &Var) -> String {
    match v.variant() {
        Variant::Undefined => "undefined".to_string(),
        Variant::Null => "null".to_string(),
        Variant::Bool(b) => format!("{b}"),
        Variant::Number(n) => number_to_string(*n),
        Variant::Str(s) => s.to_string(),
        Variant::Object(_) => "[object Object]".to_string(),
        Variant::Function(l) => {
            format!("function {}() {{ [native code] }}", l.name().unwrap_or(""))
        }
    }
}

/// Radix-10 rendering of a number: integral values carry no fraction, and magnitudes of
/// 1e21 and above or below 1e-6 switch to exponent form.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        // Covers -0 as well.
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if n < 0.0 { "-" } else { "" };

    // `{:e}` yields the shortest round-tripping digits, e.g. "1.2345e-7".
    let sci = format!("{:e}", n.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the start of `digits`.
    let n_pos = exponent + 1;

    let body = if k <= n_pos && n_pos <= 21 {
        format!("{digits}{}", "0".repeat((n_pos - k) as usize))
    } else if 0 < n_pos && n_pos <= 21 {
        let (int_part, frac_part) = digits.split_at(n_pos as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n_pos && n_pos <= 0 {
        format!("0.{}{digits}", "0".repeat((-n_pos) as usize))
    } else {
        let exp_sign = if n_pos - 1 < 0 { '-' } else { '+' };
        let exp = (n_pos - 1).abs();
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{exp_sign}{exp}")
        } else {
            format!("{first}.{rest}e{exp_sign}{exp}")
        }
    };
    format!("{sign}{body}")
}

/// Numeric value of a value, as `Number(value)` would produce it.
pub fn to_number(v: &Var) -> f64 {
    match v.variant() {
        Variant::Undefined => f64::NAN,
        Variant::Null => 0.0,
        Variant::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Variant::Number(n) => *n,
        Variant::Str(s) => string_to_number(s),
        Variant::Object(_) | Variant::Function(_) => string_to_number(&to_display_string(v)),
    }
}

/// WhiteSpace and LineTerminator code points. Narrower than `char::is_whitespace`, which
/// also accepts U+0085 (NEL) and U+001C..U+001F.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}' | '\u{000B}' | '\u{000C}' | '\u{0020}' | '\u{00A0}' | '\u{FEFF}'
    ) || matches!(c, '\u{000A}' | '\u{000D}' | '\u{2028}' | '\u{2029}')
        || matches!(
            c,
            '\u{1680}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}'
        )
}

/// Parse a string as a numeric literal. Anything that is not entirely a numeric literal
/// (after trimming whitespace) is NaN; the empty string is 0.
pub fn string_to_number(s: &str) -> f64 {
    let s = s.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    let (sign, unsigned) = match s.as_bytes()[0] {
        b'+' => (1.0, &s[1..]),
        b'-' => (-1.0, &s[1..]),
        _ => (1.0, s),
    };
    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }
    if !is_decimal_literal(unsigned) {
        return f64::NAN;
    }
    unsigned.parse::<f64>().map(|n| sign * n).unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut acc = 0.0f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    acc
}

/// `digits [. digits] [(e|E) [+|-] digits]` or `. digits [exponent]`.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }
    if mantissa_digits == 0 {
        return false;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == bytes.len()
}

/// Reduce objects and functions to a primitive. Plain records carry no conversion hooks
/// here, so both become their display string.
pub fn to_primitive(v: &Var) -> Var {
    match v.variant() {
        Variant::Object(_) | Variant::Function(_) => v_string(to_display_string(v)),
        _ => v.clone(),
    }
}

/// One `acc += value` step where `acc` is already a string. Appends in place.
pub fn concat(acc: &mut String, v: &Var) {
    acc.push_str(&to_display_string(&to_primitive(v)));
}

fn is_object_like(v: &Variant) -> bool {
    matches!(v, Variant::Object(_) | Variant::Function(_))
}

/// The `==` operator.
pub fn loose_eq(a: &Var, b: &Var) -> bool {
    match (a.variant(), b.variant()) {
        (Variant::Undefined | Variant::Null, Variant::Undefined | Variant::Null) => true,
        (Variant::Undefined | Variant::Null, _) | (_, Variant::Undefined | Variant::Null) => false,
        (Variant::Number(x), Variant::Str(_)) => *x == to_number(b),
        (Variant::Str(_), Variant::Number(y)) => to_number(a) == *y,
        (Variant::Bool(_), _) => loose_eq(&Var::mk_number(to_number(a)), b),
        (_, Variant::Bool(_)) => loose_eq(a, &Var::mk_number(to_number(b))),
        (l, r) if is_object_like(l) && !is_object_like(r) => loose_eq(&to_primitive(a), b),
        (l, r) if !is_object_like(l) && is_object_like(r) => loose_eq(a, &to_primitive(b)),
        _ => a.strict_eq(b),
    }
}
