//! Shared string utilities for code generation.

/// Derive a property accessor name from a raw item name.
///
/// Every character that is not an ASCII letter is dropped, and the letter
/// following each dropped run is upper-cased. The first kept letter keeps its
/// original case unless a separator precedes it
/// (e.g., "user_id" -> "userId", "User-id" -> "UserId", "_id" -> "Id").
pub fn to_accessor_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut upper_next = false;

    for c in name.trim().chars() {
        if c.is_ascii_alphabetic() {
            if upper_next {
                result.push(c.to_ascii_uppercase());
                upper_next = false;
            } else {
                result.push(c);
            }
        } else {
            upper_next = true;
        }
    }

    result
}

/// Convert a TOML value to its string representation
pub fn toml_value_to_string(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        _ => String::new(),
    }
}
