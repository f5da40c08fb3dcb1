use crate::core::models::molecule::Molecule;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing molecular file formats.
///
/// Implementors handle format-specific parsing and serialization. Each format
/// chooses its own read and write options; the `*_with` methods take them
/// explicitly while the plain methods use the defaults.
pub trait MolecularFile {
    /// Options controlling how files are parsed.
    type ReadOptions: Default;

    /// Options controlling how files are written.
    type WriteOptions: Default;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads every molecule from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_with(
        reader: &mut impl BufRead,
        options: &Self::ReadOptions,
    ) -> Result<Vec<Molecule>, Self::Error>;

    /// Writes molecules to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_with(
        molecules: &[Molecule],
        options: &Self::WriteOptions,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Molecule>, Self::Error> {
        Self::read_with(reader, &Self::ReadOptions::default())
    }

    fn write_to(molecules: &[Molecule], writer: &mut impl Write) -> Result<(), Self::Error> {
        Self::write_with(molecules, &Self::WriteOptions::default(), writer)
    }

    /// Reads every molecule from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path_with<P: AsRef<Path>>(
        path: P,
        options: &Self::ReadOptions,
    ) -> Result<Vec<Molecule>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_with(&mut reader, options)
    }

    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Molecule>, Self::Error> {
        Self::read_from_path_with(path, &Self::ReadOptions::default())
    }

    /// Writes molecules to a file path, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path_with<P: AsRef<Path>>(
        molecules: &[Molecule],
        options: &Self::WriteOptions,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_with(molecules, options, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    fn write_to_path<P: AsRef<Path>>(molecules: &[Molecule], path: P) -> Result<(), Self::Error> {
        Self::write_to_path_with(molecules, &Self::WriteOptions::default(), path)
    }
}
