//! Error types for loading and validating scenes

use thiserror::Error;

/// Errors that can occur when loading or validating a scene
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two elements share an id
    #[error("duplicate element id '{0}'")]
    DuplicateElement(String),

    /// Element geometry that cannot be drawn
    #[error("invalid element '{element}': {reason}")]
    InvalidElement { element: String, reason: String },

    /// A container or relation style value out of range
    #[error("invalid style for {owner}: {reason}")]
    InvalidStyle { owner: String, reason: String },
}

impl SceneError {
    pub fn invalid_element(element: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidElement {
            element: element.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_style(owner: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidStyle {
            owner: owner.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_element_display() {
        let err = SceneError::DuplicateElement("a".to_string());
        assert_eq!(err.to_string(), "duplicate element id 'a'");
    }

    #[test]
    fn test_invalid_element_display() {
        let err = SceneError::invalid_element("box", "negative width");
        assert!(err.to_string().contains("box"));
        assert!(err.to_string().contains("negative width"));
    }

    #[test]
    fn test_invalid_style_display() {
        let err = SceneError::invalid_style("container", "stroke width must be positive");
        assert!(err.to_string().starts_with("invalid style for container"));
    }
}
