/// Domain errors shared by the persistence layer and the seed tool.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced row is absent. `key` is whatever identified it: a
    /// natural key, an id, or the violated constraint name.
    #[error("Entity not found: {entity} '{key}'")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Duplicate natural key, or a row that is still referenced.
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_entity_and_key() {
        let err = CoreError::not_found("job category", "Construction");
        assert_eq!(
            err.to_string(),
            "Entity not found: job category 'Construction'"
        );

        let err = CoreError::not_found("job", 42);
        assert_eq!(err.to_string(), "Entity not found: job '42'");
    }
}
