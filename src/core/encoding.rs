//! 檔名的位元組層級檢視。
//!
//! 螢幕上看起來相同的檔名，位元組可能不同：`café` 可以是預組合 (`c3 a9`)
//! 或分解形式 (`65 cc 81`)，取決於檔案建立的方式。

use crate::utils::error::{InspectError, Result};
use std::ffi::OsString;
use std::fmt::Write;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Lowercase hex digits of `bytes`, two per byte, no separators.
pub fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        // 寫入 String 不會失敗
        let _ = write!(out, "{:02x}", byte);
    }
    out
}

/// Inverse of [`hex_encode`]. Accepts upper- or lowercase digits.
pub fn decode_hex(hex: &str) -> Result<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return Err(InspectError::InvalidHex {
            value: hex.to_string(),
            reason: "odd number of digits".to_string(),
        });
    }

    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(InspectError::InvalidHex {
            value: hex.to_string(),
            reason: "contains non-hex characters".to_string(),
        });
    }

    Ok(hex
        .as_bytes()
        .chunks(2)
        .map(|pair| (hex_value(pair[0]) << 4) | hex_value(pair[1]))
        .collect())
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

/// Converts a raw directory entry name to UTF-8, failing on names the OS
/// stored as arbitrary bytes.
pub fn entry_name_to_utf8(name: OsString) -> Result<String> {
    name.into_string().map_err(|raw| InspectError::Encoding {
        name: raw.to_string_lossy().into_owned(),
    })
}

/// Quoted representation that makes every character visible.
///
/// Single quotes are used unless the name contains `'` and no `"`. Control,
/// format, surrogate, private-use and unassigned code points and separators
/// other than the plain space are escaped. Everything else, combining marks
/// included, is printed as is.
pub fn quoted_repr(name: &str) -> String {
    let quote = if name.contains('\'') && !name.contains('"') { '"' } else { '\'' };

    let mut out = String::with_capacity(name.len() + 2);
    out.push(quote);
    for ch in name.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if is_printable(c) => out.push(c),
            c => push_escape(&mut out, c),
        }
    }
    out.push(quote);
    out
}

fn push_escape(out: &mut String, ch: char) {
    let code = u32::from(ch);
    let _ = if code <= 0xff {
        write!(out, "\\x{:02x}", code)
    } else if code <= 0xffff {
        write!(out, "\\u{:04x}", code)
    } else {
        write!(out, "\\U{:08x}", code)
    };
}

fn is_printable(ch: char) -> bool {
    if ch == ' ' {
        return true;
    }
    !matches!(
        get_general_category(ch),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}
