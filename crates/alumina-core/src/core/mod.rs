//! # Core Module
//!
//! The data model and file handling of Alumina.
//!
//! - **Molecular Representation** ([`models`]) - Elements, orbitals, atoms, molecules and bonds
//! - **Element Catalog** ([`elements`]) - The built-in periodic table used to resolve symbols
//! - **File I/O** ([`io`]) - Reading and writing the HIN format
//! - **Utilities** ([`utils`]) - Formula rendering helpers

pub mod elements;
pub mod io;
pub mod models;
pub mod utils;
