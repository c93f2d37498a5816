//! Identifier sets: deduplicate native atoms and assign IR indices.
//!
//! An [`IdentifierSet`] maps each vendor-native atom (a qubit object, a
//! classical bit, a free parameter) to exactly one IR atom. Indices are handed
//! out in first-sight order and never change, so the index order of a set is
//! the order in which a circuit declared (or first used) its atoms.
//!
//! Once construction is done the native side is dropped and only the
//! vendor-neutral [`AtomSet`] survives in the circuit IR. Emitting to another
//! vendor goes through [`AtomSet::materialize`].

use crate::error::{IrError, IrResult};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of the set that created an atom.
///
/// Atoms created by different sets never compare equal, even when their
/// indices match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SetId(u64);

impl SetId {
    fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        SetId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A vendor-native atom that can be keyed in an identifier set.
pub trait NativeAtom: Clone + Eq + Hash {
    /// Human-readable label carried over to the IR atom.
    fn label(&self) -> String;
}

/// An IR atom handed out by an identifier set.
pub trait Atom: Clone {
    /// Kind name used in error messages.
    const KIND: &'static str;

    /// Create the atom at `index` of the set `owner`.
    fn create(owner: SetId, index: usize, label: String) -> Self;

    /// The set that created this atom.
    fn owner(&self) -> SetId;

    /// Position in the owning set.
    fn index(&self) -> usize;

    /// Label taken from the native atom.
    fn label(&self) -> &str;
}

/// Ordered, append-only collection of IR atoms.
#[derive(Debug, Clone, Serialize)]
pub struct AtomSet<A> {
    id: SetId,
    atoms: Vec<A>,
}

impl<A: Atom> AtomSet<A> {
    fn new() -> Self {
        Self {
            id: SetId::fresh(),
            atoms: Vec::new(),
        }
    }

    fn push(&mut self, label: String) -> A {
        let atom = A::create(self.id, self.atoms.len(), label);
        self.atoms.push(atom.clone());
        atom
    }

    /// Identity of this set.
    pub fn id(&self) -> SetId {
        self.id
    }

    /// Number of atoms.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Atom at `index`.
    pub fn get(&self, index: usize) -> Option<&A> {
        self.atoms.get(index)
    }

    /// Atoms in index order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &A> {
        self.atoms.iter()
    }

    /// Whether `atom` was created by this set.
    pub fn contains(&self, atom: &A) -> bool {
        atom.owner() == self.id && atom.index() < self.atoms.len()
    }

    /// Index of `atom`, rejecting atoms from other sets.
    pub fn position(&self, atom: &A) -> IrResult<usize> {
        if self.contains(atom) {
            Ok(atom.index())
        } else {
            Err(IrError::ForeignAtom { kind: A::KIND })
        }
    }

    /// Produce a target-native value for every atom.
    pub fn materialize<T>(&self, f: impl FnMut(&A) -> T) -> Materialized<T> {
        Materialized {
            owner: self.id,
            kind: A::KIND,
            items: self.atoms.iter().map(f).collect(),
        }
    }

    /// Like [`materialize`](Self::materialize) for fallible conversions.
    pub fn try_materialize<T, E>(
        &self,
        f: impl FnMut(&A) -> Result<T, E>,
    ) -> Result<Materialized<T>, E> {
        Ok(Materialized {
            owner: self.id,
            kind: A::KIND,
            items: self.atoms.iter().map(f).collect::<Result<_, _>>()?,
        })
    }
}

/// Target-native values indexed by the IR atoms they were built from.
#[derive(Debug, Clone)]
pub struct Materialized<T> {
    owner: SetId,
    kind: &'static str,
    items: Vec<T>,
}

impl<T> Materialized<T> {
    /// The native value for `atom`.
    pub fn get<A: Atom>(&self, atom: &A) -> IrResult<&T> {
        if atom.owner() != self.owner {
            return Err(IrError::ForeignAtom { kind: self.kind });
        }
        self.items
            .get(atom.index())
            .ok_or(IrError::ForeignAtom { kind: self.kind })
    }

    /// Resolve a slice of atoms, cloning the native values.
    pub fn resolve<A: Atom>(&self, atoms: &[A]) -> IrResult<Vec<T>>
    where
        T: Clone,
    {
        atoms.iter().map(|a| self.get(a).cloned()).collect()
    }

    /// Native values in index order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Injective mapping from native atoms to IR atoms.
#[derive(Debug, Clone)]
pub struct IdentifierSet<K, A> {
    atoms: AtomSet<A>,
    lookup: FxHashMap<K, usize>,
}

impl<K: NativeAtom, A: Atom> Default for IdentifierSet<K, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: NativeAtom, A: Atom> IdentifierSet<K, A> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            atoms: AtomSet::new(),
            lookup: FxHashMap::default(),
        }
    }

    /// Resolve one native atom, registering it on first sight.
    pub fn get_one(&mut self, native: &K) -> A {
        if let Some(&index) = self.lookup.get(native) {
            return self.atoms.atoms[index].clone();
        }
        let atom = self.atoms.push(native.label());
        self.lookup.insert(native.clone(), atom.index());
        atom
    }

    /// Resolve native atoms in order, registering unseen ones.
    pub fn get(&mut self, natives: &[K]) -> Vec<A> {
        natives.iter().map(|n| self.get_one(n)).collect()
    }

    /// The IR atom for `native`, if already registered.
    pub fn lookup(&self, native: &K) -> Option<&A> {
        self.lookup.get(native).map(|&i| &self.atoms.atoms[i])
    }

    /// Registered atoms.
    pub fn atoms(&self) -> &AtomSet<A> {
        &self.atoms
    }

    /// Forget every atom registered at or after index `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        if len < self.atoms.atoms.len() {
            self.atoms.atoms.truncate(len);
            self.lookup.retain(|_, index| *index < len);
        }
    }

    /// Drop the native side, keeping the IR atoms.
    pub fn into_atoms(self) -> AtomSet<A> {
        self.atoms
    }

    /// Number of registered atoms.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Whether no atom has been registered.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubit::Qubit;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Wire(u8);

    impl NativeAtom for Wire {
        fn label(&self) -> String {
            format!("w{}", self.0)
        }
    }

    #[test]
    fn test_first_sight_order() {
        let mut set: IdentifierSet<Wire, Qubit> = IdentifierSet::new();
        let atoms = set.get(&[Wire(7), Wire(3), Wire(7)]);

        assert_eq!(set.len(), 2);
        assert_eq!(atoms[0].index(), 0);
        assert_eq!(atoms[1].index(), 1);
        assert_eq!(atoms[0], atoms[2]);
        assert_eq!(atoms[1].label(), "w3");
    }

    #[test]
    fn test_indices_are_stable() {
        let mut set: IdentifierSet<Wire, Qubit> = IdentifierSet::new();
        let first = set.get_one(&Wire(1));
        set.get(&[Wire(2), Wire(3)]);
        assert_eq!(set.get_one(&Wire(1)), first);
        assert_eq!(set.lookup(&Wire(3)).map(|q| q.index()), Some(2));
        assert!(set.lookup(&Wire(9)).is_none());
    }

    #[test]
    fn test_atoms_from_different_sets_differ() {
        let mut a: IdentifierSet<Wire, Qubit> = IdentifierSet::new();
        let mut b: IdentifierSet<Wire, Qubit> = IdentifierSet::new();
        let qa = a.get_one(&Wire(0));
        let qb = b.get_one(&Wire(0));

        assert_ne!(qa, qb);
        assert!(a.atoms().contains(&qa));
        assert!(!a.atoms().contains(&qb));
        assert!(matches!(
            a.atoms().position(&qb),
            Err(IrError::ForeignAtom { kind: "qubit" })
        ));
    }

    #[test]
    fn test_truncate_forgets_later_atoms() {
        let mut set: IdentifierSet<Wire, Qubit> = IdentifierSet::new();
        set.get(&[Wire(0), Wire(1), Wire(2)]);
        set.truncate(1);

        assert_eq!(set.len(), 1);
        assert!(set.lookup(&Wire(1)).is_none());
        assert_eq!(set.get_one(&Wire(2)).index(), 1);
        assert_eq!(set.lookup(&Wire(0)).map(|q| q.index()), Some(0));
    }

    #[test]
    fn test_materialize() {
        let mut set: IdentifierSet<Wire, Qubit> = IdentifierSet::new();
        let atoms = set.get(&[Wire(5), Wire(6)]);
        let natives = set.atoms().materialize(|q| q.index() * 10);

        assert_eq!(natives.as_slice(), &[0, 10]);
        assert_eq!(natives.get(&atoms[1]).ok(), Some(&10));
        assert_eq!(natives.resolve(&[atoms[1].clone(), atoms[0].clone()]).ok(), Some(vec![10, 0]));

        let mut other: IdentifierSet<Wire, Qubit> = IdentifierSet::new();
        let foreign = other.get_one(&Wire(5));
        assert!(natives.get(&foreign).is_err());
    }

    #[test]
    fn test_try_materialize_propagates() {
        let mut set: IdentifierSet<Wire, Qubit> = IdentifierSet::new();
        set.get(&[Wire(0), Wire(1)]);
        let result: Result<Materialized<usize>, &str> = set
            .atoms()
            .try_materialize(|q| if q.index() == 1 { Err("boom") } else { Ok(0) });
        assert_eq!(result.err(), Some("boom"));
    }
}
