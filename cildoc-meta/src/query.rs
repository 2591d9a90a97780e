//! Predicate helpers for visibility filtering.
//!
//! The documentation-tree builder decides member inclusion with these.
//! They are plain bit tests over a set that has already been validated;
//! legality is [`validate`](crate::validate::validate)'s business.

use crate::modifiers::Modifiers;

impl Modifiers {
    /// Declared `public`.
    #[inline]
    pub const fn is_public(&self) -> bool {
        self.contains(Modifiers::PUBLIC)
    }

    /// Declared `private`.
    #[inline]
    pub const fn is_private(&self) -> bool {
        self.contains(Modifiers::PRIVATE)
    }

    /// Has the `protected` bit, alone or in the combined form.
    #[inline]
    pub const fn is_protected(&self) -> bool {
        self.contains(Modifiers::PROTECTED)
    }

    /// Has the `internal` bit, alone or in the combined form.
    #[inline]
    pub const fn is_internal(&self) -> bool {
        self.contains(Modifiers::INTERNAL)
    }

    /// The combined `protected internal` accessibility.
    #[inline]
    pub const fn is_protected_internal(&self) -> bool {
        self.contains(Modifiers::PROTECTED.union(Modifiers::INTERNAL))
    }

    /// Visible to external subclasses at least as widely as `protected`:
    /// true for `protected`, `protected internal`, and `public`.
    #[inline]
    pub const fn is_protected_or_wider(&self) -> bool {
        self.intersects(Modifiers::PROTECTED.union(Modifiers::PUBLIC))
    }

    /// Static member.
    #[inline]
    pub const fn is_static(&self) -> bool {
        self.contains(Modifiers::STATIC)
    }

    /// Abstract member.
    #[inline]
    pub const fn is_abstract(&self) -> bool {
        self.contains(Modifiers::ABSTRACT)
    }

    /// Virtual member.
    #[inline]
    pub const fn is_virtual(&self) -> bool {
        self.contains(Modifiers::VIRTUAL)
    }

    /// Sealed override.
    #[inline]
    pub const fn is_sealed(&self) -> bool {
        self.contains(Modifiers::SEALED)
    }

    /// Overrides an inherited member.
    #[inline]
    pub const fn is_override(&self) -> bool {
        self.contains(Modifiers::OVERRIDE)
    }

    /// Extern member.
    #[inline]
    pub const fn is_extern(&self) -> bool {
        self.contains(Modifiers::EXTERN)
    }

    /// The reserved `new` bit is set. A bare bit test — the hiding
    /// semantic is not defined yet.
    #[inline]
    pub const fn is_new(&self) -> bool {
        self.contains(Modifiers::NEW)
    }
}
