/// Errors that can occur while running the tablet showcase
#[derive(Debug, Clone, PartialEq)]
pub enum ShowcaseError {
    /// Writing to the output sink failed
    Output(String),
    /// No tablet exists at the requested catalog position
    TabletNotFound(usize),
    /// The showcase configuration cannot be used
    InvalidConfig(String),
}

impl std::fmt::Display for ShowcaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShowcaseError::Output(msg) => write!(f, "Output error: {}", msg),
            ShowcaseError::TabletNotFound(index) => write!(f, "Tablet not found at index {}", index),
            ShowcaseError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ShowcaseError {}

impl From<std::io::Error> for ShowcaseError {
    fn from(err: std::io::Error) -> Self {
        ShowcaseError::Output(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ShowcaseError::TabletNotFound(7).to_string(),
            "Tablet not found at index 7"
        );
        assert_eq!(
            ShowcaseError::InvalidConfig("empty separator".to_string()).to_string(),
            "Invalid configuration: empty separator"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ShowcaseError = io_err.into();
        assert_eq!(err, ShowcaseError::Output("pipe closed".to_string()));
    }
}
