use super::command::{AtomRecord, Command};
use super::error::{HinError, HinParseErrorKind};
use crate::core::elements::PeriodicTable;
use crate::core::models::atom::Atom;
use crate::core::models::element::ElementCatalog;
use crate::core::models::molecule::Molecule;
use crate::core::models::topology::BondType;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::io::BufRead;
use tracing::{debug, warn};

/// Parser configuration.
///
/// Strict parsing (the default) rejects unknown commands, bond counts that do not
/// match the listed bonds, `endmol` ids that do not match the open molecule,
/// molecules left open at the end of input and bonds to atoms that never appear.
/// Lenient parsing logs and skips these instead. Unknown elements and bad bond
/// declarations are fatal in both modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ParserOptions {
    pub lenient: bool,
}

impl ParserOptions {
    pub fn strict() -> Self {
        Self { lenient: false }
    }

    pub fn lenient() -> Self {
        Self { lenient: true }
    }
}

/// Identifies a bond within one molecule of the input. `molecule` is the
/// molecule's position among all `mol` commands, so molecules sharing an id
/// never share bonds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct BondKey {
    molecule: usize,
    a: usize,
    b: usize,
}

#[derive(Debug, Clone)]
struct PendingBond {
    token: String,
    bond_type: BondType,
    line: usize,
}

#[derive(Debug)]
struct OpenMolecule {
    molecule: Molecule,
    ordinal: usize,
    opened_at: usize,
}

/// Line-oriented HIN parser.
///
/// A parser is consumed by [`HinParser::parse`], so every input gets a fresh
/// instance and its state can never leak between parses. The element catalog is
/// borrowed and only read.
///
/// Bonds are declared from both endpoints, often before the neighbor's own
/// `atom` line. They are therefore only recorded during the line pass and bound
/// once the whole input has been read.
#[derive(Debug)]
pub struct HinParser<'c, C: ElementCatalog + ?Sized = PeriodicTable> {
    catalog: &'c C,
    options: ParserOptions,
    current: Option<OpenMolecule>,
    molecules: Vec<(usize, Molecule)>,
    pending_bonds: BTreeMap<BondKey, PendingBond>,
    molecules_opened: usize,
    line_number: usize,
}

impl Default for HinParser<'static, PeriodicTable> {
    fn default() -> Self {
        HinParser::new(&PeriodicTable)
    }
}

impl<'c, C: ElementCatalog + ?Sized> HinParser<'c, C> {
    /// Creates a strict parser resolving elements through `catalog`.
    pub fn new(catalog: &'c C) -> Self {
        Self::with_options(catalog, ParserOptions::default())
    }

    pub fn with_options(catalog: &'c C, options: ParserOptions) -> Self {
        Self {
            catalog,
            options,
            current: None,
            molecules: Vec::new(),
            pending_bonds: BTreeMap::new(),
            molecules_opened: 0,
            line_number: 0,
        }
    }

    pub fn lenient(mut self, lenient: bool) -> Self {
        self.options.lenient = lenient;
        self
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Parses HIN data into molecules, in the order their `endmol` lines appear.
    ///
    /// # Errors
    ///
    /// Returns [`HinError::Parse`] with the offending line number on the first
    /// fatal problem, or [`HinError::Io`] if the reader fails. No partial result
    /// is returned.
    pub fn parse(mut self, mut reader: impl BufRead) -> Result<Vec<Molecule>, HinError> {
        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            self.line_number += 1;
            self.process_bytes(&buffer)
                .map_err(|kind| HinError::at(self.line_number, kind))?;
        }
        self.finish()
    }

    pub fn parse_str(self, input: &str) -> Result<Vec<Molecule>, HinError> {
        self.parse(input.as_bytes())
    }

    fn process_bytes(&mut self, bytes: &[u8]) -> Result<(), HinParseErrorKind> {
        let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
        let line = std::str::from_utf8(bytes).map_err(|e| HinParseErrorKind::InvalidEncoding {
            column: e.valid_up_to() + 1,
        })?;
        self.process_line(line)
    }

    fn process_line(&mut self, line: &str) -> Result<(), HinParseErrorKind> {
        let Some(command) = Command::tokenize(line)? else {
            return Ok(());
        };

        match command {
            Command::Mol { id, label } => self.open_molecule(id, label),
            Command::EndMol { id } => self.close_molecule(id),
            Command::Atom(args) => self.add_atom(&args),
            Command::Ignored(_) => Ok(()),
            Command::Unknown(name) => {
                if self.options.lenient {
                    warn!(line = self.line_number, command = name, "Skipping unknown command");
                    Ok(())
                } else {
                    Err(HinParseErrorKind::UnknownCommand {
                        command: name.to_string(),
                    })
                }
            }
        }
    }

    fn open_molecule(&mut self, id: usize, label: Option<String>) -> Result<(), HinParseErrorKind> {
        if let Some(open) = &self.current {
            return Err(HinParseErrorKind::NestedMolecule {
                open_id: open.molecule.id,
                id,
            });
        }
        debug!(line = self.line_number, id, "Opening molecule");
        self.current = Some(OpenMolecule {
            molecule: Molecule::new(id, label),
            ordinal: self.molecules_opened,
            opened_at: self.line_number,
        });
        self.molecules_opened += 1;
        Ok(())
    }

    fn close_molecule(&mut self, id: usize) -> Result<(), HinParseErrorKind> {
        let open = self
            .current
            .take()
            .ok_or(HinParseErrorKind::NoOpenMolecule { command: "endmol" })?;

        if id != open.molecule.id {
            if !self.options.lenient {
                return Err(HinParseErrorKind::MoleculeIdMismatch {
                    expected: open.molecule.id,
                    found: id,
                });
            }
            warn!(
                line = self.line_number,
                expected = open.molecule.id,
                found = id,
                "endmol id does not match open molecule; accepting"
            );
        }
        debug!(
            line = self.line_number,
            id = open.molecule.id,
            atoms = open.molecule.atom_count(),
            "Closing molecule"
        );
        self.molecules.push((open.ordinal, open.molecule));
        Ok(())
    }

    fn add_atom(&mut self, args: &[&str]) -> Result<(), HinParseErrorKind> {
        let lenient = self.options.lenient;
        let line = self.line_number;
        let open = self
            .current
            .as_mut()
            .ok_or(HinParseErrorKind::NoOpenMolecule { command: "atom" })?;
        let record = AtomRecord::parse(args)?;

        let element = self.catalog.lookup_by_symbol(record.symbol).ok_or_else(|| {
            HinParseErrorKind::UnknownElement {
                symbol: record.symbol.to_string(),
            }
        })?;

        let atom = Atom {
            id: record.id,
            label: record.label.map(str::to_string),
            element,
            position: record.position,
            partial_charge: record.partial_charge,
            force_field_type: record.force_field_type.to_string(),
            flags: record.flags.to_string(),
        };
        if open.molecule.add(atom).is_some() {
            debug!(line, id = record.id, "Atom id reused; replacing earlier atom");
        }

        for (neighbor, token) in &record.bonds {
            let key = BondKey {
                molecule: open.ordinal,
                a: record.id.min(*neighbor),
                b: record.id.max(*neighbor),
            };
            if let Some(existing) = self.pending_bonds.get(&key) {
                if existing.token != *token {
                    return Err(HinParseErrorKind::AsymmetricBond {
                        a: key.a,
                        b: key.b,
                        first: existing.token.clone(),
                        second: token.to_string(),
                    });
                }
                continue;
            }
            let bond_type = BondType::from_hin_token(token).ok_or_else(|| {
                HinParseErrorKind::UnknownBondType {
                    token: token.to_string(),
                }
            })?;
            self.pending_bonds.insert(
                key,
                PendingBond {
                    token: token.to_string(),
                    bond_type,
                    line,
                },
            );
        }

        if record.bond_count != record.bonds.len() {
            if !lenient {
                return Err(HinParseErrorKind::BondCountMismatch {
                    declared: record.bond_count,
                    actual: record.bonds.len(),
                });
            }
            warn!(
                line,
                id = record.id,
                declared = record.bond_count,
                actual = record.bonds.len(),
                "Bond count does not match listed bonds; accepting"
            );
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<Molecule>, HinError> {
        if let Some(open) = self.current.take() {
            if !self.options.lenient {
                return Err(HinError::at(
                    open.opened_at,
                    HinParseErrorKind::UnclosedMolecule {
                        id: open.molecule.id,
                    },
                ));
            }
            warn!(
                line = open.opened_at,
                id = open.molecule.id,
                "Discarding molecule without endmol"
            );
        }

        let positions: HashMap<usize, usize> = self
            .molecules
            .iter()
            .enumerate()
            .map(|(position, (ordinal, _))| (*ordinal, position))
            .collect();

        for (key, pending) in &self.pending_bonds {
            let Some(&position) = positions.get(&key.molecule) else {
                continue;
            };
            let molecule = &mut self.molecules[position].1;
            if molecule.bind(key.a, key.b, pending.bond_type).is_err() {
                if !self.options.lenient {
                    return Err(HinError::at(
                        pending.line,
                        HinParseErrorKind::DanglingBond { a: key.a, b: key.b },
                    ));
                }
                warn!(
                    line = pending.line,
                    a = key.a,
                    b = key.b,
                    "Skipping bond to missing atom"
                );
            }
        }
        debug!(
            molecules = self.molecules.len(),
            bonds = self.pending_bonds.len(),
            "Materialized bonds"
        );

        Ok(self
            .molecules
            .into_iter()
            .map(|(_, molecule)| molecule)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::Element;

    fn strict(input: &str) -> Result<Vec<Molecule>, HinError> {
        HinParser::default().parse_str(input)
    }

    fn lenient(input: &str) -> Result<Vec<Molecule>, HinError> {
        HinParser::default().lenient(true).parse_str(input)
    }

    fn assert_fails(result: Result<Vec<Molecule>, HinError>, line: usize, check: fn(&HinParseErrorKind) -> bool) {
        match result {
            Err(HinError::Parse { line: actual, kind }) => {
                assert_eq!(actual, line, "unexpected line for {kind:?}");
                assert!(check(&kind), "unexpected error kind {kind:?}");
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    const WATER: &str = "\
; water
forcefield mm+
sys 0 0 1
seed -1111
mol 1 water
atom 1 O1 O ** - 0 0.0 0.0 0.0 2 2 s 3 s
atom 2 - H ** - 0 0.9572 0.0 0.0 1 1 s
atom 3 - H ** - 0 -0.24 0.9266 0.0 1 1 s
endmol 1
";

    mod parsing {
        use super::*;

        #[test]
        fn parses_a_molecule_with_bonds() {
            let molecules = strict(WATER).unwrap();
            assert_eq!(molecules.len(), 1);

            let water = &molecules[0];
            assert_eq!(water.id, 1);
            assert_eq!(water.label.as_deref(), Some("water"));
            assert_eq!(water.atom_count(), 3);
            assert_eq!(water.molecular_formula(), "OH₂");

            let oxygen = water.lookup(1).unwrap();
            assert_eq!(oxygen.label.as_deref(), Some("O1"));
            assert_eq!(oxygen.element.symbol, "O");
            assert_eq!(water.lookup(2).unwrap().label, None);
            assert_eq!(water.lookup(2).unwrap().position.x, 0.9572);

            assert_eq!(water.bond(1, 2), Some(BondType::Single));
            assert_eq!(water.bond(3, 1), Some(BondType::Single));
            assert_eq!(water.bond_count(1), 2);
        }

        #[test]
        fn returns_molecules_in_endmol_order() {
            let input = "mol 5\nendmol 5\nmol 2 second\nendmol 2\n";
            let ids: Vec<usize> = strict(input).unwrap().iter().map(|m| m.id).collect();
            assert_eq!(ids, vec![5, 2]);
        }

        #[test]
        fn empty_input_yields_no_molecules() {
            assert!(strict("").unwrap().is_empty());
            assert!(strict("\n  \n; only comments\n").unwrap().is_empty());
        }

        #[test]
        fn forward_references_are_resolved_after_parsing() {
            let input = "\
mol 1
atom 1 - C ** - 0 0 0 0 1 2 d
atom 2 - O ** - 0 1.2 0 0 1 1 d
endmol 1
";
            let molecule = &strict(input).unwrap()[0];
            assert_eq!(molecule.bond(1, 2), Some(BondType::Double));
            assert_eq!(molecule.bond(2, 1), Some(BondType::Double));
        }

        #[test]
        fn bond_declared_from_one_side_is_still_bound() {
            let input = "\
mol 1
atom 1 - C ** - 0 0 0 0 1 2 t
atom 2 - N ** - 0 1.2 0 0 0
endmol 1
";
            let molecule = &strict(input).unwrap()[0];
            assert_eq!(molecule.bond(2, 1), Some(BondType::Triple));
        }

        #[test]
        fn molecules_reusing_an_id_keep_their_own_bonds() {
            let input = "\
mol 1
atom 1 - C ** - 0 0 0 0 1 2 s
atom 2 - C ** - 0 1 0 0 1 1 s
endmol 1
mol 1
atom 1 - C ** - 0 0 0 0 1 2 d
atom 2 - C ** - 0 1 0 0 1 1 d
endmol 1
";
            let molecules = strict(input).unwrap();
            assert_eq!(molecules[0].bond(1, 2), Some(BondType::Single));
            assert_eq!(molecules[1].bond(1, 2), Some(BondType::Double));
        }

        #[test]
        fn duplicate_atom_id_replaces_the_earlier_atom() {
            let input = "\
mol 1
atom 1 - C ** - 0 0 0 0 0
atom 1 - N ** - 0 5 5 5 0
endmol 1
";
            let molecule = &strict(input).unwrap()[0];
            assert_eq!(molecule.atom_count(), 1);
            assert_eq!(molecule.lookup(1).unwrap().element.symbol, "N");
        }

        #[test]
        fn opaque_columns_and_charge_are_preserved() {
            let input = "mol 1\natom 1 CA C CT h -1 0 0 0 0\nendmol 1\n";
            let molecule = &strict(input).unwrap()[0];
            let atom = molecule.lookup(1).unwrap();
            assert_eq!(atom.force_field_type, "CT");
            assert_eq!(atom.flags, "h");
            assert_eq!(atom.partial_charge, -1);
        }

        #[test]
        fn uses_the_injected_catalog() {
            struct OnlyCarbon;
            impl ElementCatalog for OnlyCarbon {
                fn lookup_by_symbol(&self, symbol: &str) -> Option<Element> {
                    (symbol == "C").then_some(Element::new(6, "Carbon", "C"))
                }
                fn lookup_by_number(&self, atomic_number: u8) -> Option<Element> {
                    (atomic_number == 6).then_some(Element::new(6, "Carbon", "C"))
                }
            }

            let input = "mol 1\natom 1 - C ** - 0 0 0 0 0\natom 2 - H ** - 0 0 0 0 0\nendmol 1\n";
            let result = HinParser::new(&OnlyCarbon).parse_str(input);
            assert_fails(result, 3, |k| matches!(k, HinParseErrorKind::UnknownElement { .. }));
        }

        #[test]
        fn crlf_line_endings_are_accepted() {
            let input = "mol 1 co\r\natom 1 - C ** - 0 0 0 0 1 2 t\r\natom 2 - O ** - 0 1.13 0 0 1 1 t\r\nendmol 1\r\n";
            let molecule = &strict(input).unwrap()[0];
            assert_eq!(molecule.label.as_deref(), Some("co"));
            assert_eq!(molecule.bond(1, 2), Some(BondType::Triple));
        }

        #[test]
        fn mol_dash_label_is_absent() {
            let molecules = strict("mol 1 -\nendmol 1\n").unwrap();
            assert_eq!(molecules[0].label, None);
        }

        #[test]
        fn invalid_utf8_is_reported_with_its_line() {
            let input: &[u8] = b"mol 1\natom 1 \xff C ** - 0 0 0 0 0\nendmol 1\n";
            for parser in [HinParser::default(), HinParser::default().lenient(true)] {
                assert_fails(parser.parse(input), 2, |k| {
                    matches!(k, HinParseErrorKind::InvalidEncoding { column: 8 })
                });
            }
        }

        #[test]
        fn reports_io_errors() {
            struct Broken;
            impl std::io::Read for Broken {
                fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                    Err(std::io::Error::other("broken pipe"))
                }
            }
            let result = HinParser::default().parse(std::io::BufReader::new(Broken));
            assert!(matches!(result, Err(HinError::Io(_))));
        }
    }

    mod strictness {
        use super::*;

        #[test]
        fn mismatched_endmol_fails_strict_and_passes_lenient() {
            let input = "mol 1\nendmol 2";
            assert_fails(strict(input), 2, |k| {
                matches!(
                    k,
                    HinParseErrorKind::MoleculeIdMismatch {
                        expected: 1,
                        found: 2
                    }
                )
            });

            let molecules = lenient(input).unwrap();
            assert_eq!(molecules.len(), 1);
            assert_eq!(molecules[0].id, 1);
        }

        #[test]
        fn unknown_command_fails_strict_and_is_skipped_lenient() {
            let input = "mol 1\nvelocity 1 0 0 0\nendmol 1\n";
            assert_fails(strict(input), 2, |k| {
                matches!(k, HinParseErrorKind::UnknownCommand { command } if command == "velocity")
            });
            assert_eq!(lenient(input).unwrap().len(), 1);
        }

        #[test]
        fn bond_count_mismatch_fails_strict_and_passes_lenient() {
            let input = "\
mol 1
atom 1 - C ** - 0 0 0 0 3 2 s
atom 2 - C ** - 0 1 0 0 1 1 s
endmol 1
";
            assert_fails(strict(input), 2, |k| {
                matches!(
                    k,
                    HinParseErrorKind::BondCountMismatch {
                        declared: 3,
                        actual: 1
                    }
                )
            });
            let molecules = lenient(input).unwrap();
            assert_eq!(molecules[0].bond(1, 2), Some(BondType::Single));
        }

        #[test]
        fn unclosed_molecule_fails_strict_and_is_dropped_lenient() {
            let input = "mol 1\nendmol 1\nmol 2\natom 1 - C ** - 0 0 0 0 0\n";
            assert_fails(strict(input), 3, |k| {
                matches!(k, HinParseErrorKind::UnclosedMolecule { id: 2 })
            });
            let molecules = lenient(input).unwrap();
            assert_eq!(molecules.len(), 1);
            assert_eq!(molecules[0].id, 1);
        }

        #[test]
        fn dangling_bond_fails_strict_and_is_skipped_lenient() {
            let input = "mol 1\natom 1 - C ** - 0 0 0 0 1 9 s\nendmol 1\n";
            assert_fails(strict(input), 2, |k| {
                matches!(k, HinParseErrorKind::DanglingBond { a: 1, b: 9 })
            });
            let molecules = lenient(input).unwrap();
            assert_eq!(molecules[0].bond_count(1), 0);
        }
    }

    mod always_fatal {
        use super::*;

        fn both_modes(input: &str, line: usize, check: fn(&HinParseErrorKind) -> bool) {
            assert_fails(strict(input), line, check);
            assert_fails(lenient(input), line, check);
        }

        #[test]
        fn asymmetric_bond_declarations() {
            let input = "\
mol 1
atom 1 - C ** - 0 0 0 0 1 2 s
atom 2 - C ** - 0 1 0 0 1 1 d
endmol 1
";
            both_modes(input, 3, |k| {
                matches!(
                    k,
                    HinParseErrorKind::AsymmetricBond { a: 1, b: 2, first, second }
                        if first == "s" && second == "d"
                )
            });
        }

        #[test]
        fn unknown_bond_code() {
            let input = "mol 1\natom 1 - C ** - 0 0 0 0 1 2 x\n";
            both_modes(input, 2, |k| {
                matches!(k, HinParseErrorKind::UnknownBondType { token } if token == "x")
            });
        }

        #[test]
        fn unknown_element() {
            let input = "mol 1\natom 1 - Xx ** - 0 0 0 0 0\nendmol 1\n";
            both_modes(input, 2, |k| {
                matches!(k, HinParseErrorKind::UnknownElement { symbol } if symbol == "Xx")
            });
        }

        #[test]
        fn nested_molecule() {
            both_modes("mol 1\nmol 2\n", 2, |k| {
                matches!(k, HinParseErrorKind::NestedMolecule { open_id: 1, id: 2 })
            });
        }

        #[test]
        fn atom_outside_molecule() {
            both_modes("atom 1 - C ** - 0 0 0 0 0\n", 1, |k| {
                matches!(k, HinParseErrorKind::NoOpenMolecule { command: "atom" })
            });
        }

        #[test]
        fn atom_outside_molecule_is_reported_before_its_fields() {
            both_modes("atom 1\n", 1, |k| {
                matches!(k, HinParseErrorKind::NoOpenMolecule { command: "atom" })
            });
        }

        #[test]
        fn endmol_outside_molecule() {
            both_modes("\n\nendmol 1\n", 3, |k| {
                matches!(k, HinParseErrorKind::NoOpenMolecule { command: "endmol" })
            });
        }

        #[test]
        fn malformed_fields() {
            both_modes("mol 1\natom 1 - C ** - 0 0 0\n", 2, |k| {
                matches!(k, HinParseErrorKind::MissingField { .. })
            });
        }
    }
}
