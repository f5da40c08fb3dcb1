use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HinError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: HinParseErrorKind,
    },
}

impl HinError {
    pub(crate) fn at(line: usize, kind: HinParseErrorKind) -> Self {
        HinError::Parse { line, kind }
    }

    /// The 1-based line the parser was on when it failed; `None` for I/O errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            HinError::Parse { line, .. } => Some(*line),
            HinError::Io(_) => None,
        }
    }

    pub fn kind(&self) -> Option<&HinParseErrorKind> {
        match self {
            HinError::Parse { kind, .. } => Some(kind),
            HinError::Io(_) => None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HinParseErrorKind {
    #[error("Unknown command '{command}'")]
    UnknownCommand { command: String },
    #[error("Can't open molecule {id} inside molecule {open_id}")]
    NestedMolecule { open_id: usize, id: usize },
    #[error("Can't have an '{command}' command outside of a mol section")]
    NoOpenMolecule { command: &'static str },
    #[error("Unknown element '{symbol}'")]
    UnknownElement { symbol: String },
    #[error("Unknown bond type '{token}' (expected s, d, t or a)")]
    UnknownBondType { token: String },
    #[error("Bond {a}-{b} declared as '{first}' and as '{second}'")]
    AsymmetricBond {
        a: usize,
        b: usize,
        first: String,
        second: String,
    },
    #[error("Atom declares {declared} bond(s) but lists {actual}")]
    BondCountMismatch { declared: usize, actual: usize },
    #[error("Given endmol with id {found}, but open molecule has id {expected}")]
    MoleculeIdMismatch { expected: usize, found: usize },
    #[error("Molecule {id} is never closed by an endmol")]
    UnclosedMolecule { id: usize },
    #[error("Bond {a}-{b} refers to an atom missing from its molecule")]
    DanglingBond { a: usize, b: usize },
    #[error("Invalid integer for {field} (value: '{value}')")]
    InvalidInteger { field: &'static str, value: String },
    #[error("Invalid number for {field} (value: '{value}')")]
    InvalidFloat { field: &'static str, value: String },
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },
    #[error("Line is not valid UTF-8 (from byte {column})")]
    InvalidEncoding { column: usize },
}
