//! The HyperChem HIN format.
//!
//! HIN files are line oriented: every non-blank line starts with a command name
//! followed by whitespace-separated arguments. Molecules are delimited by
//! `mol`/`endmol`, and each `atom` line lists its bonded neighbors with a
//! one-letter bond code (`s`, `d`, `t`, `a`).
//!
//! ```text
//! ; formaldehyde
//! mol 1 formaldehyde
//! atom 1 - C ** - 0 0 0 0 3 2 d 3 s 4 s
//! atom 2 - O ** - 0 0 1.208 0 1 1 d
//! atom 3 - H ** - 0 0.943 -0.587 0 1 1 s
//! atom 4 - H ** - 0 -0.943 -0.587 0 1 1 s
//! endmol 1
//! ```

pub mod command;
pub mod error;
pub mod parser;
pub mod writer;

pub use error::{HinError, HinParseErrorKind};
pub use parser::{HinParser, ParserOptions};
pub use writer::{AtomOrder, WriterOptions};

use crate::core::io::traits::MolecularFile;
use crate::core::models::molecule::Molecule;
use std::io::{BufRead, Write};

/// [`MolecularFile`] implementation for HIN, resolving elements through the
/// built-in [`PeriodicTable`](crate::core::elements::PeriodicTable).
pub struct HinFile;

impl MolecularFile for HinFile {
    type ReadOptions = ParserOptions;
    type WriteOptions = WriterOptions;
    type Error = HinError;

    fn read_with(
        reader: &mut impl BufRead,
        options: &Self::ReadOptions,
    ) -> Result<Vec<Molecule>, Self::Error> {
        HinParser::default().lenient(options.lenient).parse(reader)
    }

    fn write_with(
        molecules: &[Molecule],
        options: &Self::WriteOptions,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        writer::write_molecules(molecules, options, writer)?;
        Ok(())
    }
}
