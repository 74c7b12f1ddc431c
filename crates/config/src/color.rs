//! Hex color parsing

/// Errors that can occur while interpreting configuration values.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Color must start with '#': {0}")]
    MissingHash(String),

    #[error("Color must have 3, 6 or 8 hex digits: {0}")]
    InvalidLength(String),

    #[error("Invalid hex digit in color: {0}")]
    InvalidDigit(String),
}

/// Parse a CSS-style hex color (`#rgb`, `#rrggbb` or `#rrggbbaa`) into RGBA 0.0-1.0
pub fn parse_hex_color(value: &str) -> Result<[f32; 4], ConfigError> {
    let digits = value
        .strip_prefix('#')
        .ok_or_else(|| ConfigError::MissingHash(value.to_string()))?;

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).chain("ff".chars()).collect(),
        6 => format!("{digits}ff"),
        8 => digits.to_string(),
        _ => return Err(ConfigError::InvalidLength(value.to_string())),
    };

    let mut rgba = [0.0; 4];
    for (i, channel) in rgba.iter_mut().enumerate() {
        let byte = expanded
            .get(i * 2..i * 2 + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(|| ConfigError::InvalidDigit(value.to_string()))?;
        *channel = byte as f32 / 255.0;
    }

    Ok(rgba)
}
