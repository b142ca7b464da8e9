use thiserror::Error;

/// Errors reported by the recognition engine.
///
/// A below-threshold best match is not an error; `recognize` reports it
/// as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecognizerError {
    #[error("stroke has too few points or zero extent")]
    DegenerateStroke,

    #[error("no templates loaded")]
    EmptyTemplateSet,

    #[error("recognize called before construct_stroke")]
    NoCandidateStaged,

    #[error("point buffer holds {actual} values but {expected} are required")]
    BufferTooShort { expected: usize, actual: usize },
}
