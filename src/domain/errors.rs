#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    AnnotationNotFound(u64),
    DragInProgress,
    EditInProgress,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::AnnotationNotFound(id) => {
                write!(f, "No annotation with id {}", id)
            }
            DomainError::DragInProgress => {
                write!(f, "Another drag is already in progress")
            }
            DomainError::EditInProgress => {
                write!(f, "Annotation is being edited")
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
