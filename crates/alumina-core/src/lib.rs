//! # Alumina
//!
//! Molecular structures (atoms, bonds, electron orbitals) and a parser/writer for
//! the line-oriented HyperChem HIN format.
//!
//! - [`core::models`](crate::core::models) holds the data model: [`Molecule`](crate::core::models::molecule::Molecule)
//!   owns its atoms and a symmetric bond graph, and the
//!   [`OrbitalRegistry`](crate::core::models::orbital::OrbitalRegistry) hands out one
//!   canonical instance per orbital.
//! - [`core::io::hin`](crate::core::io::hin) parses HIN text in strict or lenient mode and writes it back.
//!
//! ```
//! let molecules = alumina::parse_hin("mol 1\natom 1 - He ** - 0 0 0 0 0\nendmol 1\n").unwrap();
//! assert_eq!(molecules[0].molecular_formula(), "He");
//! ```

pub mod core;

use crate::core::io::hin::{HinError, HinParser};
use crate::core::models::molecule::Molecule;

/// Parses HIN text strictly, resolving elements through the built-in periodic table.
pub fn parse_hin(input: &str) -> Result<Vec<Molecule>, HinError> {
    HinParser::default().parse_str(input)
}
