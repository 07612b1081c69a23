use thiserror::Error;

use crate::domain::plan::PlanId;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("quiz needs {expected} answers before scoring, got {actual}")]
    IncompleteQuiz { expected: usize, actual: usize },
    #[error("`{option}` is not an option of quiz question {question}")]
    UnknownQuizOption { question: usize, option: String },
    #[error("quiz is already complete; reset it before answering again")]
    QuizAlreadyComplete,
    #[error("unknown plan tier `{0}` (expected free|pro|business|enterprise)")]
    UnknownTier(String),
    #[error("unknown feature category `{0}` (expected all|basic|analytics|security|support)")]
    UnknownCategory(String),
    #[error("unknown comparison view mode `{0}` (expected all|differences)")]
    UnknownViewMode(String),
    #[error("feature `{feature}` has {actual} values but the catalog defines {expected} plans")]
    FeatureArity { feature: String, expected: usize, actual: usize },
    #[error("plan id `{0}` is defined more than once")]
    DuplicatePlan(PlanId),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("bad request: {message}")]
    BadRequest { message: String, correlation_id: String },
    #[error("internal error: {message}")]
    Internal { message: String, correlation_id: String },
}

impl InterfaceError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => {
                "The request could not be processed. Check inputs and try again."
            }
            Self::Internal { .. } => "An unexpected internal error occurred.",
        }
    }

    pub fn error_class(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "invalid_input",
            Self::Internal { .. } => "internal",
        }
    }
}

impl ApplicationError {
    pub fn into_interface(self, correlation_id: impl Into<String>) -> InterfaceError {
        let correlation_id = correlation_id.into();
        let mut mapped = InterfaceError::from(self);
        match &mut mapped {
            InterfaceError::BadRequest { correlation_id: id, .. }
            | InterfaceError::Internal { correlation_id: id, .. } => *id = correlation_id,
        }
        mapped
    }
}

impl From<ApplicationError> for InterfaceError {
    fn from(value: ApplicationError) -> Self {
        match value {
            ApplicationError::Domain(
                error @ (DomainError::IncompleteQuiz { .. }
                | DomainError::UnknownQuizOption { .. }
                | DomainError::QuizAlreadyComplete
                | DomainError::UnknownTier(_)
                | DomainError::UnknownCategory(_)
                | DomainError::UnknownViewMode(_)),
            ) => Self::BadRequest {
                message: error.to_string(),
                correlation_id: "unassigned".to_owned(),
            },
            ApplicationError::Domain(
                error @ (DomainError::FeatureArity { .. } | DomainError::DuplicatePlan(_)),
            ) => Self::Internal {
                message: error.to_string(),
                correlation_id: "unassigned".to_owned(),
            },
            ApplicationError::Configuration(message) => {
                Self::Internal { message, correlation_id: "unassigned".to_owned() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::plan::PlanId;
    use crate::errors::{ApplicationError, DomainError, InterfaceError};

    #[test]
    fn incomplete_quiz_maps_to_bad_request_with_correlation_id() {
        let interface =
            ApplicationError::from(DomainError::IncompleteQuiz { expected: 3, actual: 1 })
                .into_interface("req-1");

        assert!(matches!(
            interface,
            InterfaceError::BadRequest {
                ref correlation_id,
                ..
            } if correlation_id == "req-1"
        ));
        assert_eq!(interface.error_class(), "invalid_input");
    }

    #[test]
    fn bad_request_has_user_safe_message() {
        let interface = ApplicationError::from(DomainError::UnknownCategory("billing".to_owned()))
            .into_interface("req-2");

        assert_eq!(
            interface.user_message(),
            "The request could not be processed. Check inputs and try again."
        );
    }

    #[test]
    fn broken_catalog_maps_to_internal() {
        let interface =
            ApplicationError::from(DomainError::DuplicatePlan(PlanId("pro".to_owned())))
                .into_interface("req-3");

        assert!(matches!(interface, InterfaceError::Internal { .. }));
        assert_eq!(interface.user_message(), "An unexpected internal error occurred.");
    }

    #[test]
    fn configuration_error_maps_to_internal() {
        let interface = ApplicationError::Configuration("invalid reply delay".to_owned())
            .into_interface("req-4");

        assert!(matches!(
            interface,
            InterfaceError::Internal { ref message, .. } if message == "invalid reply delay"
        ));
    }
}
