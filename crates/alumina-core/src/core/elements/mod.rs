//! # Element Catalog
//!
//! The built-in periodic table. It covers all 118 named elements and is compiled
//! into the binary: symbols resolve through a perfect-hash map and atomic numbers
//! index a static array, so lookups never allocate and the table can be shared
//! freely between threads.

mod table;

use crate::core::models::element::{Element, ElementCatalog};
use table::{ATOMIC_NUMBERS_BY_SYMBOL, ELEMENTS};

/// The static periodic table, implementing [`ElementCatalog`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodicTable;

impl PeriodicTable {
    /// All elements, ordered by atomic number.
    pub fn elements(&self) -> &'static [Element] {
        &ELEMENTS
    }
}

impl ElementCatalog for PeriodicTable {
    fn lookup_by_symbol(&self, symbol: &str) -> Option<Element> {
        ATOMIC_NUMBERS_BY_SYMBOL
            .get(symbol)
            .and_then(|number| self.lookup_by_number(*number))
    }

    fn lookup_by_number(&self, atomic_number: u8) -> Option<Element> {
        let index = usize::from(atomic_number).checked_sub(1)?;
        ELEMENTS.get(index).copied()
    }
}
