pub type ToonstripResult<T> = Result<T, ToonstripError>;

#[derive(thiserror::Error, Debug)]
pub enum ToonstripError {
    #[error("malformed strip: {0}")]
    MalformedInput(String),

    #[error("fetch error for panel {panel}: {message}")]
    Fetch { panel: usize, message: String },

    #[error("layout error: {0}")]
    LayoutNonConvergence(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ToonstripError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    pub fn fetch(panel: usize, msg: impl Into<String>) -> Self {
        Self::Fetch {
            panel,
            message: msg.into(),
        }
    }

    pub fn layout(msg: impl Into<String>) -> Self {
        Self::LayoutNonConvergence(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            ToonstripError::malformed("x")
                .to_string()
                .contains("malformed strip:")
        );
        assert!(
            ToonstripError::fetch(2, "x")
                .to_string()
                .contains("fetch error for panel 2:")
        );
        assert!(
            ToonstripError::layout("x")
                .to_string()
                .contains("layout error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = ToonstripError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
