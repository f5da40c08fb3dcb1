use super::atom::Atom;
use super::element::Element;
use super::error::ModelError;
use super::ids::AtomKey;
use super::topology::BondType;
use crate::core::utils::formula::subscript_count;
use slotmap::{SecondaryMap, SlotMap};
use std::collections::HashMap;

/// A molecule: a set of atoms addressed by id, plus their bond graph.
///
/// Atoms are stored under stable [`AtomKey`] handles and the bond graph is an
/// adjacency map over those handles, so bonds never hold references to atoms.
/// Every bond is recorded on both endpoints with the same [`BondType`].
///
/// Adding an atom whose id is already present replaces the old atom. The new
/// atom gets a fresh handle and therefore none of the old atom's bonds; entries
/// that neighbors still hold for the old handle no longer resolve and are
/// ignored by every query.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    /// Caller-assigned identifier of the molecule.
    pub id: usize,
    /// Optional free-form label.
    pub label: Option<String>,
    atoms: SlotMap<AtomKey, Atom>,
    /// Live atom handles in insertion order.
    order: Vec<AtomKey>,
    id_map: HashMap<usize, AtomKey>,
    bond_adjacency: SecondaryMap<AtomKey, HashMap<AtomKey, BondType>>,
}

impl Molecule {
    pub fn new(id: usize, label: Option<String>) -> Self {
        Self {
            id,
            label,
            ..Default::default()
        }
    }

    /// Adds an atom, replacing any atom that already uses the same id.
    ///
    /// A replacement keeps the old atom's position in insertion order but none of
    /// its bonds.
    ///
    /// # Return
    ///
    /// Returns the replaced atom, if there was one.
    pub fn add(&mut self, atom: Atom) -> Option<Atom> {
        let id = atom.id;
        let key = self.atoms.insert(atom);
        self.bond_adjacency.insert(key, HashMap::new());

        match self.id_map.insert(id, key) {
            Some(old_key) => {
                if let Some(slot) = self.order.iter_mut().find(|k| **k == old_key) {
                    *slot = key;
                }
                self.bond_adjacency.remove(old_key);
                self.atoms.remove(old_key)
            }
            None => {
                self.order.push(key);
                None
            }
        }
    }

    /// Returns the atom with the given id, if present.
    pub fn lookup(&self, id: usize) -> Option<&Atom> {
        self.key_of(id).and_then(|key| self.atoms.get(key))
    }

    pub fn lookup_mut(&mut self, id: usize) -> Option<&mut Atom> {
        let key = self.key_of(id)?;
        self.atoms.get_mut(key)
    }

    /// Resolves an atom id to its stable handle.
    pub fn key_of(&self, id: usize) -> Option<AtomKey> {
        self.id_map.get(&id).copied()
    }

    pub fn atom(&self, key: AtomKey) -> Option<&Atom> {
        self.atoms.get(key)
    }

    /// Iterates atoms in insertion order.
    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.order.iter().filter_map(|key| self.atoms.get(*key))
    }

    /// Iterates atoms sorted by id.
    pub fn atoms_by_id(&self) -> impl Iterator<Item = &Atom> {
        let mut atoms: Vec<&Atom> = self.atoms().collect();
        atoms.sort_by_key(|atom| atom.id);
        atoms.into_iter()
    }

    pub fn atom_count(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Bonds two atoms of this molecule, recording the bond on both endpoints.
    ///
    /// Binding an already bonded pair overwrites the type on both sides.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownAtom`] if either id is not in the molecule.
    pub fn bind(&mut self, a: usize, b: usize, bond_type: BondType) -> Result<(), ModelError> {
        let key_a = self.key_of(a).ok_or(ModelError::UnknownAtom(a))?;
        let key_b = self.key_of(b).ok_or(ModelError::UnknownAtom(b))?;

        for (from, to) in [(key_a, key_b), (key_b, key_a)] {
            if let Some(bonds) = self.bond_adjacency.get_mut(from) {
                bonds.insert(to, bond_type);
            }
        }
        Ok(())
    }

    /// Binds two atoms by a bond type given as text (`single`, `d`, `3`, `ar`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidBondType`] if the text names no bond type, checked
    /// before the atoms, and otherwise fails like [`Molecule::bind`].
    pub fn bind_named(&mut self, a: usize, b: usize, bond_type: &str) -> Result<(), ModelError> {
        let bond_type: BondType = bond_type.parse()?;
        self.bind(a, b, bond_type)
    }

    /// Removes the bond between two atoms from both endpoints.
    ///
    /// # Return
    ///
    /// Returns the type of the removed bond, or `None` if the atoms were not bonded.
    pub fn unbind(&mut self, a: usize, b: usize) -> Option<BondType> {
        let key_a = self.key_of(a)?;
        let key_b = self.key_of(b)?;
        let removed = self
            .bond_adjacency
            .get_mut(key_a)
            .and_then(|bonds| bonds.remove(&key_b));
        if let Some(bonds) = self.bond_adjacency.get_mut(key_b) {
            bonds.remove(&key_a);
        }
        removed
    }

    /// Returns the type of the bond between two atoms, if they are bonded.
    pub fn bond(&self, a: usize, b: usize) -> Option<BondType> {
        let key_a = self.key_of(a)?;
        let key_b = self.key_of(b)?;
        self.bond_adjacency
            .get(key_a)
            .and_then(|bonds| bonds.get(&key_b))
            .copied()
    }

    /// Returns the bonded neighbors of an atom, sorted by neighbor id.
    pub fn neighbors(&self, id: usize) -> Vec<(&Atom, BondType)> {
        let Some(bonds) = self.key_of(id).and_then(|key| self.bond_adjacency.get(key)) else {
            return Vec::new();
        };
        let mut neighbors: Vec<(&Atom, BondType)> = bonds
            .iter()
            .filter_map(|(key, bond_type)| self.atoms.get(*key).map(|atom| (atom, *bond_type)))
            .collect();
        neighbors.sort_by_key(|(atom, _)| atom.id);
        neighbors
    }

    /// Number of live bonds on an atom; zero for unknown ids.
    pub fn bond_count(&self, id: usize) -> usize {
        self.key_of(id)
            .and_then(|key| self.bond_adjacency.get(key))
            .map_or(0, |bonds| {
                bonds
                    .keys()
                    .filter(|key| self.atoms.contains_key(**key))
                    .count()
            })
    }

    /// Every bond once, as `(lower id, higher id, type)`, sorted.
    pub fn bonds(&self) -> Vec<(usize, usize, BondType)> {
        let mut bonds: Vec<(usize, usize, BondType)> = self
            .atoms()
            .flat_map(|atom| {
                self.neighbors(atom.id)
                    .into_iter()
                    .filter(move |(neighbor, _)| atom.id <= neighbor.id)
                    .map(move |(neighbor, bond_type)| (atom.id, neighbor.id, bond_type))
            })
            .collect();
        bonds.sort();
        bonds
    }

    /// The molecular formula with the heaviest element first, e.g. `O₆N₃C₇H₅` for TNT.
    pub fn molecular_formula(&self) -> String {
        let mut counts: HashMap<Element, usize> = HashMap::new();
        for atom in self.atoms() {
            *counts.entry(atom.element).or_default() += 1;
        }
        let mut counts: Vec<(Element, usize)> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.0.cmp(&a.0));

        counts
            .into_iter()
            .map(|(element, count)| format!("{}{}", element.symbol, subscript_count(count)))
            .collect()
    }

    /// One-line description, e.g. `Molecule #1 (TNT): O₆N₃C₇H₅`.
    pub fn summary(&self) -> String {
        match &self.label {
            Some(label) => format!(
                "Molecule #{} ({}): {}",
                self.id,
                label,
                self.molecular_formula()
            ),
            None => format!("Molecule #{}: {}", self.id, self.molecular_formula()),
        }
    }
}
