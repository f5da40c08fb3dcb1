use crate::core::models::atom::{Atom, DEFAULT_FLAGS, DEFAULT_FORCE_FIELD_TYPE};
use crate::core::models::molecule::Molecule;
use serde::Deserialize;
use std::borrow::Cow;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Order in which a molecule's atoms are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AtomOrder {
    /// The order atoms were added in (the input order for parsed molecules).
    #[default]
    Insertion,
    /// Ascending atom id.
    Id,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterOptions {
    pub atom_order: AtomOrder,
}

impl Molecule {
    /// Renders this molecule as a `mol` ... `endmol` block, atoms in insertion order.
    ///
    /// Text columns must be single tokens to be read back. Blank values are written
    /// as their placeholder (`-` for labels, `**` for force-field types, `-` for
    /// flags) and whitespace inside a value is written as `_`. Runs of whitespace in
    /// the molecule label collapse to one space.
    pub fn to_hin(&self) -> String {
        self.to_hin_with(AtomOrder::Insertion)
    }

    pub fn to_hin_with(&self, order: AtomOrder) -> String {
        let label = self
            .label
            .as_deref()
            .map(|label| label.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|label| !label.is_empty());
        let mut lines = vec![match label {
            Some(label) => format!("mol {} {}", self.id, label),
            None => format!("mol {}", self.id),
        }];
        let atoms: Vec<&Atom> = match order {
            AtomOrder::Insertion => self.atoms().collect(),
            AtomOrder::Id => self.atoms_by_id().collect(),
        };
        lines.extend(atoms.into_iter().map(|atom| self.atom_line(atom)));
        lines.push(format!("endmol {}", self.id));
        lines.join("\n")
    }

    /// Renders the `atom` line for the atom with the given id.
    pub fn atom_to_hin(&self, id: usize) -> Option<String> {
        self.lookup(id).map(|atom| self.atom_line(atom))
    }

    fn atom_line(&self, atom: &Atom) -> String {
        let neighbors = self.neighbors(atom.id);
        let mut line = format!(
            "atom {} {} {} {} {} {} {} {} {} {}",
            atom.id,
            column(atom.label.as_deref().unwrap_or(""), "-"),
            atom.element.symbol,
            column(&atom.force_field_type, DEFAULT_FORCE_FIELD_TYPE),
            column(&atom.flags, DEFAULT_FLAGS),
            atom.partial_charge,
            atom.position.x,
            atom.position.y,
            atom.position.z,
            neighbors.len()
        );
        for (neighbor, bond_type) in neighbors {
            let _ = write!(line, " {} {}", neighbor.id, bond_type.hin_token());
        }
        line
    }
}

fn column<'a>(value: &'a str, placeholder: &'static str) -> Cow<'a, str> {
    let value = value.trim();
    if value.is_empty() {
        Cow::Borrowed(placeholder)
    } else if value.contains(char::is_whitespace) {
        Cow::Owned(value.replace(char::is_whitespace, "_"))
    } else {
        Cow::Borrowed(value)
    }
}

/// Writes molecules as consecutive `mol` blocks, each followed by a newline.
pub fn write_molecules(
    molecules: &[Molecule],
    options: &WriterOptions,
    writer: &mut impl Write,
) -> io::Result<()> {
    for molecule in molecules {
        writeln!(writer, "{}", molecule.to_hin_with(options.atom_order))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::hin::parser::HinParser;
    use crate::core::models::topology::BondType;
    use std::collections::BTreeSet;

    const FORMALDEHYDE: &str = "\
mol 3 formaldehyde
atom 2 - O ** - 0 0 1.208 0 1 1 d
atom 1 C1 C CT h -1 0 0 0.5 3 2 d 3 s 4 s
atom 3 - H ** - 0 0.943 -0.587 0 1 1 s
atom 4 - H ** - 0 -0.943 -0.587 0 1 1 s
endmol 3
";

    fn parse(input: &str) -> Vec<Molecule> {
        HinParser::default().parse_str(input).unwrap()
    }

    #[test]
    fn molecule_renders_header_atoms_and_footer() {
        let molecule = &parse(FORMALDEHYDE)[0];
        let expected = "\
mol 3 formaldehyde
atom 2 - O ** - 0 0 1.208 0 1 1 d
atom 1 C1 C CT h -1 0 0 0.5 3 2 d 3 s 4 s
atom 3 - H ** - 0 0.943 -0.587 0 1 1 s
atom 4 - H ** - 0 -0.943 -0.587 0 1 1 s
endmol 3";
        assert_eq!(molecule.to_hin(), expected);
    }

    #[test]
    fn id_order_sorts_atom_lines() {
        let molecule = &parse(FORMALDEHYDE)[0];
        let text = molecule.to_hin_with(AtomOrder::Id);
        let ids: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with("atom"))
            .map(|l| l.split_whitespace().nth(1).unwrap())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn unlabelled_molecule_has_bare_header() {
        let molecule = Molecule::new(9, None);
        assert_eq!(molecule.to_hin(), "mol 9\nendmol 9");
    }

    #[test]
    fn bond_count_is_recomputed_from_the_graph() {
        let mut molecule = parse(FORMALDEHYDE).remove(0);
        molecule.unbind(1, 3);
        assert_eq!(
            molecule.atom_to_hin(1).unwrap(),
            "atom 1 C1 C CT h -1 0 0 0.5 2 2 d 4 s"
        );
        assert_eq!(molecule.atom_to_hin(3).unwrap(), "atom 3 - H ** - 0 0.943 -0.587 0 0");
        assert!(molecule.atom_to_hin(42).is_none());
    }

    #[test]
    fn text_columns_are_written_as_single_tokens() {
        let mut molecule = parse(FORMALDEHYDE).remove(0);
        molecule.label = Some("  formal\tdehyde ".into());
        let carbon = molecule.lookup_mut(1).unwrap();
        carbon.label = Some("alpha carbon".into());
        carbon.force_field_type = " ".into();
        carbon.flags = String::new();
        molecule.lookup_mut(3).unwrap().label = Some(String::new());

        let text = molecule.to_hin();
        assert!(text.starts_with("mol 3 formal dehyde\n"));
        assert_eq!(
            molecule.atom_to_hin(1).unwrap(),
            "atom 1 alpha_carbon C ** - -1 0 0 0.5 3 2 d 3 s 4 s"
        );

        let reparsed = parse(&text).remove(0);
        assert_eq!(reparsed.lookup(1).unwrap().label.as_deref(), Some("alpha_carbon"));
        assert_eq!(reparsed.lookup(3).unwrap().label, None);
        assert_eq!(reparsed.bonds(), molecule.bonds());
    }

    #[test]
    fn round_trip_preserves_semantic_content() {
        let original = parse(FORMALDEHYDE);
        let mut buffer = Vec::new();
        write_molecules(&original, &WriterOptions::default(), &mut buffer).unwrap();
        let reparsed = parse(std::str::from_utf8(&buffer).unwrap());

        assert_eq!(reparsed.len(), original.len());
        for (a, b) in original.iter().zip(&reparsed) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.label, b.label);
            let atoms_a: Vec<&Atom> = a.atoms_by_id().collect();
            let atoms_b: Vec<&Atom> = b.atoms_by_id().collect();
            assert_eq!(atoms_a, atoms_b);
            let bonds_a: BTreeSet<_> = a.bonds().into_iter().collect();
            let bonds_b: BTreeSet<_> = b.bonds().into_iter().collect();
            assert_eq!(bonds_a, bonds_b);
        }
        assert!(reparsed[0].bonds().contains(&(1, 2, BondType::Double)));
    }

    #[test]
    fn round_trip_preserves_awkward_coordinates() {
        let input = "mol 1\natom 1 - C ** - 0 0.1 -1e-7 123456.789012345 0\nendmol 1\n";
        let original = parse(input);
        let reparsed = parse(&original[0].to_hin());
        assert_eq!(
            original[0].lookup(1).unwrap().position,
            reparsed[0].lookup(1).unwrap().position
        );
    }

    #[test]
    fn molecules_are_written_back_to_back() {
        let molecules = parse("mol 1\nendmol 1\nmol 2 b\nendmol 2\n");
        let mut buffer = Vec::new();
        write_molecules(&molecules, &WriterOptions::default(), &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "mol 1\nendmol 1\nmol 2 b\nendmol 2\n"
        );
    }
}
