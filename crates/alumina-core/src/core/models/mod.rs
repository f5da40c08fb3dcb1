//! # Molecular Models Module
//!
//! Data structures for molecules parsed from or written to HIN files.
//!
//! ## Key Components
//!
//! - [`element`] - The `Element` value and the `ElementCatalog` lookup trait
//! - [`orbital`] - Canonical electron orbitals and the registry that hands them out
//! - [`atom`] - A single atom with coordinates, charge and pass-through columns
//! - [`molecule`] - A set of atoms keyed by id together with their bond graph
//! - [`topology`] - Bond types and their HIN codes
//! - [`ids`] - Stable atom handles used by the bond graph
//!
//! ## Usage
//!
//! ```
//! use alumina::core::elements::PeriodicTable;
//! use alumina::core::models::element::ElementCatalog;
//! use alumina::core::models::{atom::Atom, molecule::Molecule, topology::BondType};
//! use nalgebra::Point3;
//!
//! let carbon = PeriodicTable.lookup_by_symbol("C").unwrap();
//! let oxygen = PeriodicTable.lookup_by_symbol("O").unwrap();
//!
//! let mut molecule = Molecule::new(1, Some("carbon monoxide".into()));
//! molecule.add(Atom::new(1, carbon, Point3::origin()));
//! molecule.add(Atom::new(2, oxygen, Point3::new(1.13, 0.0, 0.0)));
//! molecule.bind(1, 2, BondType::Triple).unwrap();
//!
//! assert_eq!(molecule.bond(2, 1), Some(BondType::Triple));
//! assert_eq!(molecule.molecular_formula(), "OC");
//! ```

pub mod atom;
pub mod element;
pub mod error;
pub mod ids;
pub mod molecule;
pub mod orbital;
pub mod topology;
