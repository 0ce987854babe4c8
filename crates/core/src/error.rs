use crate::store::StoreError;

/// Errors produced by the record service.
///
/// [`CoreError::DogNotFound`] is the sentinel callers branch on. Every other
/// store outcome is folded into [`CoreError::Store`] with the operation name
/// and the id or filter that was used.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("dog not found: {id}")]
    DogNotFound { id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{operation}({target:?}): {source}")]
    Store {
        operation: &'static str,
        target: String,
        #[source]
        source: StoreError,
    },
}

impl CoreError {
    /// Whether this is the by-id lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::DogNotFound { .. })
    }

    pub(crate) fn store(
        operation: &'static str,
        target: impl Into<String>,
    ) -> impl FnOnce(StoreError) -> Self {
        let target = target.into();
        move |source| CoreError::Store {
            operation,
            target,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinguishable() {
        let err = CoreError::DogNotFound { id: "999".into() };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "dog not found: 999");
    }

    #[test]
    fn store_error_carries_operation_and_target() {
        let err = CoreError::store("find_dog_by_type", "Poodle")(StoreError::backend(
            std::io::Error::other("connection reset"),
        ));
        assert!(!err.is_not_found());
        let text = err.to_string();
        assert!(text.starts_with("find_dog_by_type(\"Poodle\")"), "got: {text}");
        assert!(text.contains("connection reset"), "got: {text}");
    }
}
