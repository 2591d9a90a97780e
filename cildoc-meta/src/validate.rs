//! Legality rules for modifier combinations.

use crate::error::{ModifierError, Result};
use crate::modifiers::Modifiers;

/// Accessibility subsets the modifier grammar permits, besides empty.
const LEGAL_ACCESSIBILITY: [Modifiers; 5] = [
    Modifiers::PRIVATE,
    Modifiers::PROTECTED,
    Modifiers::INTERNAL,
    Modifiers::PUBLIC,
    Modifiers::PROTECTED.union(Modifiers::INTERNAL),
];

/// Modality bits that cannot accompany `static`.
const STATIC_CONFLICTS: Modifiers = Modifiers::VIRTUAL.union(Modifiers::ABSTRACT);

/// Caller policy for [`validate_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationOptions {
    /// Reject an empty accessibility group. Off by default: explicit
    /// interface implementations legitimately carry no accessibility bit.
    pub require_accessibility: bool,
}

/// Check a modifier set against the grammar with the default options.
pub fn validate(modifiers: Modifiers) -> Result<()> {
    validate_with(modifiers, &ValidationOptions::default())
}

/// Check a modifier set against the modifier grammar.
///
/// Accessibility is checked first, then modality exclusivity. The reserved
/// `new` bit and any unassigned bits pass through unconditionally. The set
/// itself is never altered; an illegal set stays representable and can
/// still be rendered for diagnostics.
pub fn validate_with(modifiers: Modifiers, options: &ValidationOptions) -> Result<()> {
    let access = modifiers.intersection(Modifiers::ACCESS_MASK);
    let access_ok = if access.is_empty() {
        !options.require_accessibility
    } else {
        LEGAL_ACCESSIBILITY.contains(&access)
    };
    if !access_ok {
        return Err(ModifierError::InvalidAccessibilityCombination(access));
    }

    if modifiers.contains(Modifiers::STATIC) && modifiers.intersects(STATIC_CONFLICTS) {
        return Err(ModifierError::ConflictingModalityCombination(
            modifiers.intersection(Modifiers::STATIC.union(STATIC_CONFLICTS)),
        ));
    }
    if modifiers.contains(Modifiers::ABSTRACT) && modifiers.contains(Modifiers::SEALED) {
        return Err(ModifierError::ConflictingModalityCombination(
            Modifiers::ABSTRACT.union(Modifiers::SEALED),
        ));
    }

    Ok(())
}
