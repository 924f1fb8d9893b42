/// Contract violations in caller-supplied data. The display text is what the
/// caller gets back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field")]
    MissingField,

    #[error("invalid email format")]
    InvalidEmail,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("email delivery failed")]
    Delivery(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let missing = errors
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .any(|error| error.code == "required");

        if missing {
            ValidationError::MissingField
        } else {
            ValidationError::InvalidEmail
        }
    }
}
