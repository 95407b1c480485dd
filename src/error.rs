/// Error raised while assembling the book at start-up.
///
/// Runtime operations (search, scroll tracking, navigation) never fail; they
/// degrade to no-ops instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A chapter was declared with an empty id.
    EmptyId { index: usize },
    /// Two chapters share the same id.
    DuplicateId { id: String },
    /// The parsed markup does not line up with the chapter registry.
    ContentMismatch { expected: Vec<String>, found: Vec<String> },
    /// The markup is missing a required element.
    MissingElement { selector: &'static str },
}

impl std::fmt::Display for BookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookError::EmptyId { index } => write!(f, "chapter #{} has an empty id", index),
            BookError::DuplicateId { id } => write!(f, "duplicate chapter id: {}", id),
            BookError::ContentMismatch { expected, found } => write!(
                f,
                "content sections [{}] do not match chapters [{}]",
                found.join(", "),
                expected.join(", ")
            ),
            BookError::MissingElement { selector } => {
                write!(f, "markup is missing `{}`", selector)
            }
        }
    }
}

impl std::error::Error for BookError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_id() {
        let err = BookError::DuplicateId { id: "ch3".into() };
        assert_eq!(err.to_string(), "duplicate chapter id: ch3");
    }

    #[test]
    fn display_lists_both_orders() {
        let err = BookError::ContentMismatch {
            expected: vec!["ch1".into(), "ch2".into()],
            found: vec!["ch2".into(), "ch1".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("[ch2, ch1]"));
        assert!(msg.contains("[ch1, ch2]"));
    }
}
