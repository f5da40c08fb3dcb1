use super::error::ModelError;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Subshell letters ordered by azimuthal quantum number. `j` is skipped by
/// convention, and `p` appears a second time at l = 12.
pub const SUBSHELL_LETTERS: [&str; 22] = [
    "s", "p", "d", "f", "g", "h", "i", "k", "l", "m", "n", "o", "p", "q", "r", "t", "u", "v",
    "w", "x", "y", "z",
];

/// An electron orbital identified by its principal (n) and azimuthal (l) quantum numbers.
///
/// Orbitals are only handed out by an [`OrbitalRegistry`], which guarantees a single
/// shared instance per `(shell, subshell)` pair. Two orbitals from the same registry
/// are equal exactly when they are the same allocation (see [`Arc::ptr_eq`]).
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Orbital {
    shell: u32,
    subshell: u32,
}

impl Orbital {
    /// The principal quantum number, e.g. `2` for a 2p orbital.
    pub fn shell(&self) -> u32 {
        self.shell
    }

    /// The azimuthal quantum number, e.g. `2` for a 4d orbital.
    pub fn subshell(&self) -> u32 {
        self.subshell
    }

    pub fn n(&self) -> u32 {
        self.shell
    }

    pub fn l(&self) -> u32 {
        self.subshell
    }

    /// The letter for the subshell, or its number once the letters run out.
    pub fn subshell_name(&self) -> String {
        SUBSHELL_LETTERS
            .get(self.subshell as usize)
            .map(|letter| letter.to_string())
            .unwrap_or_else(|| self.subshell.to_string())
    }
}

impl fmt::Display for Orbital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.shell, self.subshell_name())
    }
}

/// A subshell given either by its l-value or by its letter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subshell<'a> {
    Index(i64),
    Name(&'a str),
}

impl From<i64> for Subshell<'_> {
    fn from(index: i64) -> Self {
        Subshell::Index(index)
    }
}

impl From<u32> for Subshell<'_> {
    fn from(index: u32) -> Self {
        Subshell::Index(i64::from(index))
    }
}

impl<'a> From<&'a str> for Subshell<'a> {
    fn from(name: &'a str) -> Self {
        Subshell::Name(name)
    }
}

impl fmt::Display for Subshell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subshell::Index(index) => write!(f, "{}", index),
            Subshell::Name(name) => write!(f, "{:?}", name),
        }
    }
}

/// Canonicalizing cache of [`Orbital`] instances.
///
/// The registry is append-only and safe to share between threads: concurrent
/// parses may request orbitals through the same registry and still observe a
/// single instance per `(shell, subshell)` pair. Hosts own the registry and pass
/// it to whatever needs orbitals, so its lifetime is explicit.
#[derive(Debug, Default)]
pub struct OrbitalRegistry {
    orbitals: RwLock<HashMap<(u32, u32), Arc<Orbital>>>,
}

impl OrbitalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical orbital for `shell` and `subshell`, creating it on first use.
    ///
    /// # Arguments
    ///
    /// * `shell` - The principal quantum number; must be at least 1.
    /// * `subshell` - The azimuthal quantum number or its letter name; must resolve
    ///   to a value in `0..shell`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidOrbital`] if the letter name is unknown, the shell
    /// is below 1, or the subshell lies outside `0..shell`.
    pub fn get_or_create<'a>(
        &self,
        shell: i64,
        subshell: impl Into<Subshell<'a>>,
    ) -> Result<Arc<Orbital>, ModelError> {
        let subshell = subshell.into();
        let invalid = |reason: &'static str| ModelError::InvalidOrbital {
            shell: shell.to_string(),
            subshell: subshell.to_string(),
            reason,
        };

        let l = match subshell {
            Subshell::Index(index) => index,
            Subshell::Name(name) => SUBSHELL_LETTERS
                .iter()
                .position(|letter| *letter == name)
                .map(|index| index as i64)
                .ok_or_else(|| invalid("unknown subshell name"))?,
        };
        if shell < 1 {
            return Err(invalid("shell must be at least 1"));
        }
        if l < 0 || l >= shell {
            return Err(invalid("subshell must lie in 0..shell"));
        }
        let shell = u32::try_from(shell).map_err(|_| invalid("shell is out of range"))?;
        let key = (shell, l as u32);

        if let Some(orbital) = self
            .orbitals
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(Arc::clone(orbital));
        }

        let mut orbitals = self
            .orbitals
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let orbital = orbitals.entry(key).or_insert_with(|| {
            Arc::new(Orbital {
                shell: key.0,
                subshell: key.1,
            })
        });
        Ok(Arc::clone(orbital))
    }

    /// Resolves a textual orbital description such as `2p`, `4f` or `3 1`.
    ///
    /// The leading digits are the shell; the remainder is either a subshell letter
    /// or, after whitespace, a numeric l-value.
    pub fn parse(&self, description: &str) -> Result<Arc<Orbital>, ModelError> {
        let description = description.trim();
        let split = description
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(description.len());
        let (shell_str, rest) = description.split_at(split);
        let rest = rest.trim();

        let malformed = || ModelError::InvalidOrbital {
            shell: shell_str.to_string(),
            subshell: rest.to_string(),
            reason: "expected an orbital such as '2p' or '3 1'",
        };
        let shell: i64 = shell_str.parse().map_err(|_| malformed())?;
        if rest.is_empty() {
            return Err(malformed());
        }
        match rest.parse::<i64>() {
            Ok(index) => self.get_or_create(shell, index),
            Err(_) => self.get_or_create(shell, rest),
        }
    }

    /// Number of distinct orbitals created so far.
    pub fn len(&self) -> usize {
        self.orbitals
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
