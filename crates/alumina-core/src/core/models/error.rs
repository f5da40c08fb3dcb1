use thiserror::Error;

/// Errors raised by operations on the molecular data model itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid orbital n={shell}, l={subshell}: {reason}")]
    InvalidOrbital {
        shell: String,
        subshell: String,
        reason: &'static str,
    },

    #[error("Invalid bond type '{0}' (expected single, double, triple or aromatic)")]
    InvalidBondType(String),

    #[error("No atom with id {0} in this molecule")]
    UnknownAtom(usize),
}
