//! Modifier flag constants from the member metadata contract.
//!
//! Bit positions are fixed between the extraction layer and this model;
//! persisted raw patterns depend on the assignment staying stable. Bits
//! above `NEW` are reserved for future flags.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Modifier bits attached to an invokable member.
    ///
    /// A value is a lossless container: construction keeps every bit as
    /// given, including reserved bits with no assigned meaning, and no
    /// legality decision is made at this layer — that is
    /// [`validate`](crate::validate::validate)'s job.
    ///
    /// ```
    /// use cildoc_meta::Modifiers;
    ///
    /// let m = Modifiers::PUBLIC | Modifiers::OVERRIDE;
    /// assert!(m.contains(Modifiers::PUBLIC));
    /// assert_eq!(m.bits(), 0x0220);
    /// ```
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u32 {
        /// Abstract member — no body, subclasses must override.
        const ABSTRACT = 0x0001;
        /// Assembly-internal accessibility.
        const INTERNAL = 0x0002;
        /// Accessible to the declaring type and its subclasses.
        const PROTECTED = 0x0004;
        /// Sealed override — stops further overriding.
        const SEALED = 0x0008;
        /// Accessible to the declaring type only.
        const PRIVATE = 0x0010;
        /// Accessible everywhere.
        const PUBLIC = 0x0020;
        /// Static member, no instance receiver.
        const STATIC = 0x0040;
        /// Virtual dispatch.
        const VIRTUAL = 0x0080;
        /// Implemented outside managed code.
        const EXTERN = 0x0100;
        /// Overrides an inherited virtual member.
        const OVERRIDE = 0x0200;
        /// Reserved for "hides inherited member"; carries no semantics yet.
        const NEW = 0x0400;
    }
}

impl Modifiers {
    /// The accessibility group: private, protected, internal, public.
    pub const ACCESS_MASK: Modifiers = Modifiers::PRIVATE
        .union(Modifiers::PROTECTED)
        .union(Modifiers::INTERNAL)
        .union(Modifiers::PUBLIC);
}

// Persisted patterns round-trip as the raw integer. Deserialization must
// retain reserved bits, so `from_bits_retain` rather than `from_bits`.

impl Serialize for Modifiers {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Modifiers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Modifiers::from_bits_retain(u32::deserialize(deserializer)?))
    }
}
