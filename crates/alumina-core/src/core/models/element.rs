use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A chemical element as supplied by an [`ElementCatalog`].
///
/// Elements are plain values owned by the catalog that produced them; the data
/// model never invents new ones. Ordering follows the atomic number, so sorting a
/// list of elements puts hydrogen first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Element {
    /// The atomic number (hydrogen is 1).
    pub atomic_number: u8,
    /// The English element name.
    pub name: &'static str,
    /// The chemical symbol (e.g., "Ag" for silver).
    pub symbol: &'static str,
}

impl Element {
    pub const fn new(atomic_number: u8, name: &'static str, symbol: &'static str) -> Self {
        Self {
            atomic_number,
            name,
            symbol,
        }
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        self.atomic_number
            .cmp(&other.atomic_number)
            .then_with(|| self.symbol.cmp(other.symbol))
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol)
    }
}

/// Read-only lookup of elements by symbol or atomic number.
///
/// The HIN parser consults a catalog to resolve the element column of every
/// `atom` record. The catalog must be fully populated before parsing starts and
/// is never mutated by the parser. [`PeriodicTable`](crate::core::elements::PeriodicTable)
/// is the built-in implementation.
pub trait ElementCatalog {
    /// Returns the element with the given symbol. Matching is case-sensitive.
    fn lookup_by_symbol(&self, symbol: &str) -> Option<Element>;

    /// Returns the element with the given atomic number.
    fn lookup_by_number(&self, atomic_number: u8) -> Option<Element>;
}
