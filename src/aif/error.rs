//! AIF model error types

use thiserror::Error;

/// Errors that can occur when evaluating an AIF model
#[derive(Error, Debug, Clone)]
pub enum AifError {
    /// The requested model has no published formula wired in
    ///
    /// Placeholder models fail with this error rather than returning an
    /// empty curve, so callers cannot mistake a missing formula for a
    /// zero-valued AIF.
    #[error("AIF model `{model}` is not implemented")]
    UnimplementedModel { model: &'static str },
}
