use thiserror::Error;

use crate::modifiers::Modifiers;

/// An illegal modifier combination, reported by [`crate::validate`].
///
/// Each variant carries the offending bits so callers can show what the
/// metadata claimed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModifierError {
    #[error("Invalid accessibility combination: {0:?}")]
    InvalidAccessibilityCombination(Modifiers),

    #[error("Conflicting modality combination: {0:?}")]
    ConflictingModalityCombination(Modifiers),
}

pub type Result<T> = std::result::Result<T, ModifierError>;
