//! Provides input/output functionality for molecular file formats.
//!
//! The [`traits::MolecularFile`] trait is the format-independent entry point;
//! [`hin`] implements it for HIN files and also exposes the lower-level
//! parser and writer.

pub mod hin;
pub mod traits;
