//! Default-value coercion into target literal syntax.
//!
//! Coercion is pure: the same type, raw text and mode always yield the same
//! literal.

use spgen_core::ItemType;

/// Long-literal suffix.
pub const LONG_SUFFIX: char = 'L';
/// Float-literal suffix.
pub const FLOAT_SUFFIX: char = 'F';

/// How Long and Float defaults gain their literal suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuffixMode {
    /// Always append the suffix, even when the raw value already ends with
    /// one ("5L" -> "5LL").
    #[default]
    Append,
    /// Strip any existing suffix (either case) and append exactly one
    /// upper-case suffix ("5l" -> "5L").
    Normalize,
}

/// Coerce a raw default value into a literal for `item_type`.
///
/// - `None`: empty text, no literal is emitted
/// - `Int`: truncated at the decimal point, `"0"` when empty
/// - `Long`: truncated at the decimal point, suffixed with `L`, `"0L"` when empty
/// - `Float`: suffixed with `F`, `"0F"` when empty
/// - `String`: wrapped in double quotes verbatim, no escaping
///
/// Numeric defaults are trimmed of surrounding whitespace first. Truncation
/// never rounds: `"3.7"` becomes `"3"`.
pub fn coerce_default(item_type: ItemType, raw: &str, mode: SuffixMode) -> String {
    match item_type {
        ItemType::None => String::new(),
        ItemType::Int => {
            let value = truncate_at_point(raw.trim());
            if value.is_empty() {
                "0".to_string()
            } else {
                value.to_string()
            }
        }
        ItemType::Long => with_suffix(truncate_at_point(raw.trim()), LONG_SUFFIX, mode),
        ItemType::Float => with_suffix(raw.trim(), FLOAT_SUFFIX, mode),
        ItemType::String => format!("\"{}\"", raw),
    }
}

fn truncate_at_point(value: &str) -> &str {
    match value.find('.') {
        Some(pos) => &value[..pos],
        None => value,
    }
}

fn with_suffix(value: &str, suffix: char, mode: SuffixMode) -> String {
    let value = match mode {
        SuffixMode::Append => value,
        SuffixMode::Normalize => value.trim_end_matches(|c: char| c.eq_ignore_ascii_case(&suffix)),
    };

    if value.is_empty() {
        format!("0{}", suffix)
    } else {
        format!("{}{}", value, suffix)
    }
}
