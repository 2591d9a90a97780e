use cildoc_meta::Modifiers;

#[test]
fn accessibility_predicates() {
    let m = Modifiers::PUBLIC | Modifiers::STATIC;
    assert!(m.is_public());
    assert!(!m.is_private());
    assert!(!m.is_protected());
    assert!(!m.is_internal());

    assert!(Modifiers::PRIVATE.is_private());
    assert!(Modifiers::INTERNAL.is_internal());
}

#[test]
fn protected_internal_sets_both_predicates() {
    let m = Modifiers::PROTECTED | Modifiers::INTERNAL;
    assert!(m.is_protected());
    assert!(m.is_internal());
    assert!(m.is_protected_internal());
    assert!(!Modifiers::PROTECTED.is_protected_internal());
    assert!(!Modifiers::INTERNAL.is_protected_internal());
}

#[test]
fn protected_or_wider_lattice() {
    assert!(Modifiers::PUBLIC.is_protected_or_wider());
    assert!(Modifiers::PROTECTED.is_protected_or_wider());
    assert!((Modifiers::PROTECTED | Modifiers::INTERNAL).is_protected_or_wider());
    assert!(!Modifiers::INTERNAL.is_protected_or_wider());
    assert!(!Modifiers::PRIVATE.is_protected_or_wider());
    assert!(!Modifiers::empty().is_protected_or_wider());
}

#[test]
fn modality_predicates() {
    let m = Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::EXTERN;
    assert!(m.is_static());
    assert!(m.is_extern());
    assert!(!m.is_virtual());
    assert!(!m.is_abstract());
    assert!(!m.is_sealed());
    assert!(!m.is_override());
}

#[test]
fn override_can_coexist_with_abstract_and_sealed() {
    let abstract_override = Modifiers::PUBLIC | Modifiers::ABSTRACT | Modifiers::OVERRIDE;
    assert!(abstract_override.is_abstract());
    assert!(abstract_override.is_override());

    let sealed_override = Modifiers::PUBLIC | Modifiers::SEALED | Modifiers::OVERRIDE;
    assert!(sealed_override.is_sealed());
    assert!(sealed_override.is_override());
}

#[test]
fn is_new_is_a_bare_bit_test() {
    assert!(Modifiers::NEW.is_new());
    assert!((Modifiers::PUBLIC | Modifiers::NEW).is_new());
    assert!(!Modifiers::PUBLIC.is_new());
}

#[test]
fn predicates_are_false_on_empty() {
    let m = Modifiers::empty();
    assert!(!m.is_public() && !m.is_private() && !m.is_protected() && !m.is_internal());
    assert!(!m.is_static() && !m.is_abstract() && !m.is_virtual());
    assert!(!m.is_sealed() && !m.is_override() && !m.is_extern() && !m.is_new());
}
