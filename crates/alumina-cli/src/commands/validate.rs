use super::read_molecules;
use crate::cli::ValidateArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress;
use indicatif::{ProgressBar, ProgressDrawTarget};
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{error, info};

/// Outcome of validating one file: the molecule count or the failure.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: Result<usize>,
}

pub fn run(args: ValidateArgs, config: &AppConfig) -> Result<()> {
    let pb = ProgressBar::new(args.inputs.len() as u64).with_style(progress::bar_style());
    pb.set_draw_target(ProgressDrawTarget::stderr());
    pb.set_message("Validating");

    let reports = validate_all(&args.inputs, config, &pb);
    pb.finish_and_clear();

    let total = reports.len();
    let mut failed = 0;
    for report in &reports {
        match &report.result {
            Ok(count) => println!("✓ {}: {} molecule(s)", report.path.display(), count),
            Err(e) => {
                failed += 1;
                error!("{}", e);
                println!("✗ {}", e);
            }
        }
    }

    info!("{} of {} file(s) valid", total - failed, total);
    if failed > 0 {
        return Err(CliError::Validation { failed, total });
    }
    Ok(())
}

/// Parses every file on the rayon pool. Each file gets its own parser, and all
/// of them resolve elements through the same shared periodic table.
pub fn validate_all(inputs: &[PathBuf], config: &AppConfig, pb: &ProgressBar) -> Vec<FileReport> {
    inputs
        .par_iter()
        .map(|path| {
            let result = read_molecules(path, &config.parser).map(|molecules| molecules.len());
            pb.inc(1);
            FileReport {
                path: path.clone(),
                result,
            }
        })
        .collect()
}
