//! Qubit and classical bit atoms.

use crate::idset::{Atom, SetId};
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A qubit of one circuit IR.
///
/// Equality is identity: the creating set plus the index. The label is kept
/// for display and does not take part in comparisons.
#[derive(Debug, Clone, Serialize)]
pub struct Qubit {
    owner: SetId,
    index: usize,
    label: String,
}

impl PartialEq for Qubit {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.index == other.index
    }
}

impl Eq for Qubit {}

impl Hash for Qubit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.index.hash(state);
    }
}

impl Atom for Qubit {
    const KIND: &'static str = "qubit";

    fn create(owner: SetId, index: usize, label: String) -> Self {
        Self {
            owner,
            index,
            label,
        }
    }

    fn owner(&self) -> SetId {
        self.owner
    }

    fn index(&self) -> usize {
        self.index
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// A classical bit of one circuit IR.
///
/// The label is the bit's measurement key: results written to bits with the
/// same key are grouped into one classical register on emission.
#[derive(Debug, Clone, Serialize)]
pub struct Clbit {
    owner: SetId,
    index: usize,
    key: String,
}

impl Clbit {
    /// The measurement key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for Clbit {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.index == other.index
    }
}

impl Eq for Clbit {}

impl Hash for Clbit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.index.hash(state);
    }
}

impl Atom for Clbit {
    const KIND: &'static str = "clbit";

    fn create(owner: SetId, index: usize, label: String) -> Self {
        Self {
            owner,
            index,
            key: label,
        }
    }

    fn owner(&self) -> SetId {
        self.owner
    }

    fn index(&self) -> usize {
        self.index
    }

    fn label(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for Clbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}
