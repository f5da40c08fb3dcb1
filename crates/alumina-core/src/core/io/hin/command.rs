use super::error::HinParseErrorKind;
use nalgebra::Point3;
use phf::{Set, phf_set};
use std::str::FromStr;

/// Commands that are accepted and discarded.
static IGNORED_COMMANDS: Set<&'static str> = phf_set! {
    "forcefield", "sys", "view", "box", "seed",
};

/// One tokenized line of HIN input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<'a> {
    /// `mol <id> [label]`
    Mol { id: usize, label: Option<String> },
    /// `endmol <id>`
    EndMol { id: usize },
    /// `atom ...`, with its arguments still unparsed. Use [`AtomRecord::parse`]
    /// once the line is known to belong to an open molecule.
    Atom(Vec<&'a str>),
    /// A recognized command with no effect on the data model.
    Ignored(&'a str),
    /// Any other command name.
    Unknown(&'a str),
}

/// The fields of an `atom` line, parsed but not yet resolved against a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord<'a> {
    pub id: usize,
    pub label: Option<&'a str>,
    pub symbol: &'a str,
    pub force_field_type: &'a str,
    pub flags: &'a str,
    pub partial_charge: i32,
    pub position: Point3<f64>,
    pub bond_count: usize,
    /// Trailing `(neighbor id, bond code)` pairs, in line order.
    pub bonds: Vec<(usize, &'a str)>,
}

impl<'a> Command<'a> {
    /// Splits a line into a command and its arguments.
    ///
    /// # Return
    ///
    /// Returns `Ok(None)` for blank lines and `;` comments.
    ///
    /// # Errors
    ///
    /// Returns an error if a `mol` or `endmol` line is missing its id or the id
    /// is malformed. Arguments of `atom`, ignored and unknown commands are not
    /// inspected here.
    pub fn tokenize(line: &'a str) -> Result<Option<Self>, HinParseErrorKind> {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with(';') {
            return Ok(None);
        }

        let mut tokens = trimmed.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };

        let command = match name {
            "mol" => {
                let id = parse_int("molecule id", required(&mut tokens, "molecule id")?)?;
                let label = tokens.collect::<Vec<_>>().join(" ");
                Command::Mol {
                    id,
                    label: (!label.is_empty() && label != "-").then_some(label),
                }
            }
            "endmol" => Command::EndMol {
                id: parse_int("molecule id", required(&mut tokens, "molecule id")?)?,
            },
            "atom" => Command::Atom(tokens.collect()),
            _ if IGNORED_COMMANDS.contains(name) => Command::Ignored(name),
            _ => Command::Unknown(name),
        };
        Ok(Some(command))
    }
}

impl<'a> AtomRecord<'a> {
    /// Parses the arguments of an `atom` line.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the ten fixed fields is missing or malformed,
    /// or a trailing neighbor id has no bond code.
    pub fn parse(args: &[&'a str]) -> Result<Self, HinParseErrorKind> {
        let mut tokens = args.iter().copied();
        let id = parse_int("atom id", required(&mut tokens, "atom id")?)?;
        let label = required(&mut tokens, "atom label")?;
        let symbol = required(&mut tokens, "element symbol")?;
        let force_field_type = required(&mut tokens, "force field type")?;
        let flags = required(&mut tokens, "flags")?;
        let partial_charge = parse_int("partial charge", required(&mut tokens, "partial charge")?)?;
        let x = parse_float("x coordinate", required(&mut tokens, "x coordinate")?)?;
        let y = parse_float("y coordinate", required(&mut tokens, "y coordinate")?)?;
        let z = parse_float("z coordinate", required(&mut tokens, "z coordinate")?)?;
        let bond_count = parse_int("bond count", required(&mut tokens, "bond count")?)?;

        let mut bonds = Vec::new();
        while let Some(neighbor) = tokens.next() {
            let neighbor = parse_int("neighbor id", neighbor)?;
            let token = required(&mut tokens, "bond type")?;
            bonds.push((neighbor, token));
        }

        Ok(Self {
            id,
            label: (label != "-").then_some(label),
            symbol,
            force_field_type,
            flags,
            partial_charge,
            position: Point3::new(x, y, z),
            bond_count,
            bonds,
        })
    }
}

fn required<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<&'a str, HinParseErrorKind> {
    tokens
        .next()
        .ok_or(HinParseErrorKind::MissingField { field })
}

fn parse_int<T: FromStr>(field: &'static str, value: &str) -> Result<T, HinParseErrorKind> {
    value.parse().map_err(|_| HinParseErrorKind::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

fn parse_float(field: &'static str, value: &str) -> Result<f64, HinParseErrorKind> {
    value.parse().map_err(|_| HinParseErrorKind::InvalidFloat {
        field,
        value: value.to_string(),
    })
}
