use calamine::Data;

/// Tokens read as "present", compared trimmed and lower-cased.
pub const TRUTHY_TOKENS: [&str; 6] = ["hadir", "ya", "yes", "true", "1", "y"];

pub fn is_truthy(s: &str) -> bool {
    let normalized = s.trim().to_lowercase();
    TRUTHY_TOKENS.contains(&normalized.as_str())
}

/// Coerce a presence cell into a flag: booleans pass through, everything
/// else goes through [`is_truthy`].
pub fn parse_presence(cell: &Data) -> bool {
    match cell {
        Data::Bool(b) => *b,
        Data::Int(i) => *i == 1,
        Data::Float(f) => *f == 1.0,
        Data::String(s) => is_truthy(s),
        _ => false,
    }
}
