//! Canonical declaration-keyword rendering.

use std::fmt;

use crate::modifiers::Modifiers;

/// Canonical keyword order, applied regardless of input bit order.
///
/// Accessibility comes first; its table order makes `{PROTECTED, INTERNAL}`
/// come out as the combined `protected internal` form with no special case.
/// The reserved `NEW` flag has no entry: it renders nothing until its
/// hiding semantic is defined.
const KEYWORD_ORDER: [(Modifiers, &str); 10] = [
    (Modifiers::PRIVATE, "private"),
    (Modifiers::PROTECTED, "protected"),
    (Modifiers::INTERNAL, "internal"),
    (Modifiers::PUBLIC, "public"),
    (Modifiers::STATIC, "static"),
    (Modifiers::ABSTRACT, "abstract"),
    (Modifiers::SEALED, "sealed"),
    (Modifiers::VIRTUAL, "virtual"),
    (Modifiers::OVERRIDE, "override"),
    (Modifiers::EXTERN, "extern"),
];

/// The ordered keyword sequence for a modifier set.
///
/// Total over every representable set: a combination that fails validation
/// still renders whatever recognized bits are present, in the same
/// canonical order, so diagnostics can show what the metadata claimed.
/// Unassigned bits are skipped.
pub fn keywords(modifiers: Modifiers) -> Vec<&'static str> {
    KEYWORD_ORDER
        .iter()
        .filter(|(flag, _)| modifiers.contains(*flag))
        .map(|&(_, keyword)| keyword)
        .collect()
}

/// The keyword sequence joined with single spaces, e.g. `"public override"`.
pub fn render(modifiers: Modifiers) -> String {
    keywords(modifiers).join(" ")
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(*self))
    }
}
