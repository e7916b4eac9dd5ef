//! Synthesis Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthesisRuleError {
    #[error("Text cannot be empty")]
    EmptyText,

    #[error("Both ref_audio and ref_text must be provided for voice cloning")]
    IncompleteCloneReference,
}
