pub mod convert;
pub mod inspect;
pub mod orbital;
pub mod validate;

use crate::error::{CliError, Result};
use alumina::core::io::hin::{HinFile, ParserOptions};
use alumina::core::io::traits::MolecularFile;
use alumina::core::models::molecule::Molecule;
use std::path::Path;

/// Reads every molecule of a HIN file, attaching the path to any failure.
pub(crate) fn read_molecules(path: &Path, options: &ParserOptions) -> Result<Vec<Molecule>> {
    HinFile::read_from_path_with(path, options).map_err(|source| CliError::FileParsing {
        path: path.to_path_buf(),
        source,
    })
}
