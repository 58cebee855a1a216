use thiserror::Error;

use crate::aif::AifError;

#[derive(Error, Debug)]
pub enum AifSolError {
    #[error("Error in the AIF model: {0}")]
    AifError(#[from] AifError),
}
