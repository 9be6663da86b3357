use card_core::Msg;

use super::error::InputError;

/// Parses one stdin line into a [`Msg::SetCardImage`].
///
/// Blank lines yield `Ok(None)`. The two tokens are passed through as-is.
pub fn parse_card_line(line: &str) -> Result<Option<Msg>, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Ok(None),
        [value, suit] => Ok(Some(Msg::set_card_image(*value, *suit))),
        other => Err(InputError::TokenCount { found: other.len() }),
    }
}

/// Same as [`parse_card_line`] for a raw stdin line. A line that is not
/// UTF-8 is rejected on its own so the caller can skip it.
pub fn parse_card_bytes(line: &[u8]) -> Result<Option<Msg>, InputError> {
    let line = std::str::from_utf8(line).map_err(|_| InputError::NotUtf8)?;
    parse_card_line(line)
}
