//! Member modifier model for documenting CIL metadata members.
//!
//! Reconstructs the visibility and modality keywords of an invokable member
//! (method, property accessor, indexer, or event) from the raw attribute
//! bits the metadata extraction layer produces, without loading or running
//! the originating binary.

pub mod error;
pub mod modifiers;
pub mod query;
pub mod render;
pub mod validate;

pub use error::{ModifierError, Result};
pub use modifiers::Modifiers;
pub use render::{keywords, render};
pub use validate::{ValidationOptions, validate, validate_with};
