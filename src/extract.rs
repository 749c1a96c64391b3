use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("marker {0:?} does not appear in the page")]
    MarkerNotFound(String),
    #[error("resource path after the marker is never closed by a quote")]
    Unterminated,
    #[error("resource path after the marker is empty")]
    Empty,
}

/// Returns the resource fragment between the first `marker` in `text` and the next `"`.
///
/// For the marker `//archives.bulbagarden.net/media/upload/` and a page containing
/// `src="//archives.bulbagarden.net/media/upload/3/37/ChestoTreeTaller.png"`, this
/// yields `3/37/ChestoTreeTaller.png`.
pub fn fragment<'a>(text: &'a str, marker: &str) -> Result<&'a str, ExtractError> {
    let (_, rest) = text
        .split_once(marker)
        .ok_or_else(|| ExtractError::MarkerNotFound(marker.to_string()))?;
    let (fragment, _) = rest.split_once('"').ok_or(ExtractError::Unterminated)?;
    if fragment.is_empty() {
        return Err(ExtractError::Empty);
    }
    Ok(fragment)
}
