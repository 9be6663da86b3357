use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read card codes: {0}")]
    ReadInput(#[source] std::io::Error),
    #[error("failed to render card image: {0}")]
    Render(#[source] std::io::Error),
}

/// A stdin line that cannot be read as `<value> <suit>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected `<value> <suit>`, got {found} token(s)")]
    TokenCount { found: usize },
    #[error("line is not valid UTF-8")]
    NotUtf8,
}
