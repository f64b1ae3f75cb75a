use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("First name and last name are required")]
    EmptyRequiredField,

    #[error("Email address contains neither '@' nor '.'")]
    InvalidEmailShape,

    #[error("Applicant is under 21")]
    UnderageApplicant,

    #[error("No client with the given id")]
    ClientNotFound,

    #[error("Credit limit below the minimum of 500")]
    CreditLimitTooLow,

    #[error("Credit service unavailable: {0}")]
    CreditServiceUnavailable(String),
}

impl DomainError {
    /// Rule rejections are expected outcomes; everything else is a
    /// collaborator fault.
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            Self::Repository(_) | Self::CreditServiceUnavailable(_)
        )
    }
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
