//! Property-based tests for identifier sets.

use proptest::prelude::*;
use qbridge_ir::{Atom, IdentifierSet, NativeAtom, Qubit};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Wire(u8);

impl NativeAtom for Wire {
    fn label(&self) -> String {
        format!("w{}", self.0)
    }
}

proptest! {
    /// Indices are dense, assigned in first-sight order, and never reassigned.
    #[test]
    fn indices_follow_first_sight(wires in prop::collection::vec(0_u8..16, 0..64)) {
        let natives: Vec<_> = wires.iter().copied().map(Wire).collect();
        let mut set: IdentifierSet<Wire, Qubit> = IdentifierSet::new();
        let atoms = set.get(&natives);

        let mut first_seen: Vec<u8> = Vec::new();
        for w in &wires {
            if !first_seen.contains(w) {
                first_seen.push(*w);
            }
        }
        prop_assert_eq!(set.len(), first_seen.len());

        for (native, atom) in natives.iter().zip(&atoms) {
            let expected = first_seen.iter().position(|w| *w == native.0).unwrap();
            prop_assert_eq!(atom.index(), expected);
            prop_assert_eq!(atom.label(), native.label());
        }

        // Resolving again changes nothing
        let again = set.get(&natives);
        prop_assert_eq!(again, atoms);
        prop_assert_eq!(set.len(), first_seen.len());
    }

    /// Materialized values line up with atom indices.
    #[test]
    fn materialize_is_index_aligned(count in 1_u8..32) {
        let natives: Vec<_> = (0..count).rev().map(Wire).collect();
        let mut set: IdentifierSet<Wire, Qubit> = IdentifierSet::new();
        let atoms = set.get(&natives);
        let labels = set.atoms().materialize(|q| q.label().to_string());

        for (native, atom) in natives.iter().zip(&atoms) {
            prop_assert_eq!(labels.get(atom).unwrap(), &native.label());
        }
    }
}
