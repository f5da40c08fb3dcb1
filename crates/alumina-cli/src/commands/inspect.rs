use super::read_molecules;
use crate::cli::InspectArgs;
use crate::config::AppConfig;
use crate::error::Result;
use std::io::Write;
use tracing::info;

pub fn run(args: InspectArgs, config: &AppConfig) -> Result<()> {
    let stdout = std::io::stdout();
    write_report(&args, config, &mut stdout.lock())
}

/// Writes one tab-separated row per molecule: file, id, label, atoms, bonds, formula.
fn write_report(args: &InspectArgs, config: &AppConfig, out: &mut impl Write) -> Result<()> {
    writeln!(out, "file\tmol\tlabel\tatoms\tbonds\tformula")?;
    for path in &args.inputs {
        let molecules = read_molecules(path, &config.parser)?;
        info!("Read {} molecule(s) from {:?}", molecules.len(), path);
        for molecule in &molecules {
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}\t{}",
                path.display(),
                molecule.id,
                molecule.label.as_deref().unwrap_or("-"),
                molecule.atom_count(),
                molecule.bonds().len(),
                molecule.molecular_formula()
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;
    use crate::error::CliError;
    use alumina::core::io::hin::{HinParseErrorKind, ParserOptions};
    use tempfile::TempDir;

    fn report(inputs: Vec<std::path::PathBuf>, config: &AppConfig) -> Result<String> {
        let mut out = Vec::new();
        write_report(&InspectArgs { inputs }, config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn one_row_per_molecule_across_files() {
        let dir = TempDir::new().unwrap();
        let water = fixtures::write(&dir, "water.hin", fixtures::WATER);
        let mixed = fixtures::write(&dir, "mixed.hin", fixtures::ETHYNE_AND_NEON);

        let text = report(vec![water.clone(), mixed.clone()], &AppConfig::default()).unwrap();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], format!("{}\t1\twater\t3\t2\tOH₂", water.display()));
        assert_eq!(rows[2], format!("{}\t1\tethyne\t4\t3\tC₂H₂", mixed.display()));
        assert_eq!(rows[3], format!("{}\t2\t-\t1\t0\tNe", mixed.display()));
    }

    #[test]
    fn strict_failure_names_the_file_and_line() {
        let dir = TempDir::new().unwrap();
        let path = fixtures::write(&dir, "bad.hin", fixtures::UNKNOWN_COMMAND);

        let err = report(vec![path.clone()], &AppConfig::default()).unwrap_err();
        let CliError::FileParsing { path: failed, source } = &err else {
            panic!("expected a parsing error, got {err:?}");
        };
        assert_eq!(failed, &path);
        assert_eq!(source.line(), Some(2));
        assert!(matches!(
            source.kind(),
            Some(HinParseErrorKind::UnknownCommand { .. })
        ));
    }

    #[test]
    fn lenient_config_is_honored() {
        let dir = TempDir::new().unwrap();
        let path = fixtures::write(&dir, "bad.hin", fixtures::UNKNOWN_COMMAND);
        let config = AppConfig {
            parser: ParserOptions::lenient(),
            ..AppConfig::default()
        };

        let text = report(vec![path], &config).unwrap();
        assert!(text.lines().nth(1).unwrap().ends_with("\t1\t0\tHe"));
    }
}
