use super::PlaceholderError;

/// Why a background source could not be used.
///
/// Never reaches the caller of the resolver: every variant is logged and
/// turned into the next rung of the fallback ladder.
#[derive(thiserror::Error, Debug)]
pub enum MediaError {
    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("failed to decode image from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("unsupported media source {0}")]
    Unsupported(String),

    #[error(transparent)]
    Placeholder(#[from] PlaceholderError),
}

impl MediaError {
    pub fn fetch(url: &str, message: impl ToString) -> Self {
        Self::Fetch { url: url.to_string(), message: message.to_string() }
    }

    pub fn decode(url: &str, message: impl ToString) -> Self {
        Self::Decode { url: url.to_string(), message: message.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_source() {
        let err = MediaError::fetch("https://example.com/bg.png", "404 Not Found");
        assert_eq!(err.to_string(), "failed to fetch https://example.com/bg.png: 404 Not Found");
        assert!(MediaError::Unsupported("ftp://x".into()).to_string().contains("ftp://x"));
    }

    #[test]
    fn placeholder_errors_are_transparent() {
        let err = MediaError::from(PlaceholderError::TooShort(3));
        assert_eq!(err.to_string(), PlaceholderError::TooShort(3).to_string());
    }
}
