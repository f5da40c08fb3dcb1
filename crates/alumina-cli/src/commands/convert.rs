use super::read_molecules;
use crate::cli::ConvertArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use alumina::core::io::hin::{AtomOrder, HinFile, WriterOptions};
use alumina::core::io::traits::MolecularFile;
use tracing::{debug, info};

pub fn run(args: ConvertArgs, config: &AppConfig) -> Result<()> {
    let molecules = read_molecules(&args.input, &config.parser)?;
    info!(
        "Read {} molecule(s) from {:?}",
        molecules.len(),
        args.input
    );
    for molecule in &molecules {
        debug!("{}", molecule.summary());
    }

    let writer = if args.sort_atoms {
        WriterOptions {
            atom_order: AtomOrder::Id,
        }
    } else {
        config.writer
    };

    HinFile::write_to_path_with(&molecules, &writer, &args.output).map_err(|source| {
        CliError::FileParsing {
            path: args.output.clone(),
            source,
        }
    })?;
    info!("Wrote {} molecule(s) to {:?}", molecules.len(), args.output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;
    use tempfile::TempDir;

    fn convert(dir: &TempDir, content: &str, sort_atoms: bool, config: &AppConfig) -> String {
        let input = fixtures::write(dir, "in.hin", content);
        let output = dir.path().join("out.hin");
        run(
            ConvertArgs {
                input,
                output: output.clone(),
                sort_atoms,
            },
            config,
        )
        .unwrap();
        std::fs::read_to_string(output).unwrap()
    }

    #[test]
    fn output_is_normalized_and_keeps_input_order() {
        let dir = TempDir::new().unwrap();
        let text = convert(&dir, fixtures::ETHYNE_AND_NEON, false, &AppConfig::default());
        assert_eq!(
            text,
            "\
mol 1 ethyne
atom 2 - C ** - 0 0.6 0 0 2 1 t 4 s
atom 1 - C ** - 0 -0.6 0 0 2 2 t 3 s
atom 3 - H ** - 0 -1.66 0 0 1 1 s
atom 4 - H ** - 0 1.66 0 0 1 2 s
endmol 1
mol 2
atom 1 - Ne ** - 0 0 0 0 0
endmol 2
"
        );
    }

    #[test]
    fn comments_are_dropped() {
        let dir = TempDir::new().unwrap();
        let text = convert(&dir, fixtures::WATER, false, &AppConfig::default());
        assert!(text.starts_with("mol 1 water\n"));
    }

    #[test]
    fn sort_flag_orders_atoms_by_id() {
        let dir = TempDir::new().unwrap();
        let text = convert(&dir, fixtures::ETHYNE_AND_NEON, true, &AppConfig::default());
        let second_line = text.lines().nth(1).unwrap();
        assert!(second_line.starts_with("atom 1 "));
    }

    #[test]
    fn configured_atom_order_applies_without_flag() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            writer: WriterOptions {
                atom_order: AtomOrder::Id,
            },
            ..AppConfig::default()
        };
        let text = convert(&dir, fixtures::ETHYNE_AND_NEON, false, &config);
        assert!(text.lines().nth(1).unwrap().starts_with("atom 1 "));
    }

    #[test]
    fn failed_parse_leaves_no_output() {
        let dir = TempDir::new().unwrap();
        let input = fixtures::write(&dir, "in.hin", fixtures::UNKNOWN_COMMAND);
        let output = dir.path().join("out.hin");
        let result = run(
            ConvertArgs {
                input,
                output: output.clone(),
                sort_atoms: false,
            },
            &AppConfig::default(),
        );
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
        assert!(!output.exists());
    }
}
