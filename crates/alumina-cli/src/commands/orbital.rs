use crate::cli::OrbitalArgs;
use crate::error::{CliError, Result};
use alumina::core::models::orbital::{Orbital, OrbitalRegistry};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

pub fn run(args: OrbitalArgs) -> Result<()> {
    let registry = OrbitalRegistry::new();
    for (description, orbital) in args.orbitals.iter().zip(resolve(&registry, &args.orbitals)?) {
        println!(
            "{} -> {} (n={}, l={})",
            description.trim(),
            orbital,
            orbital.n(),
            orbital.l()
        );
    }
    debug!("{} distinct orbital(s) registered", registry.len());
    Ok(())
}

/// Canonicalizes every description through one shared registry, so equal
/// orbitals come back as the same instance.
pub fn resolve(registry: &OrbitalRegistry, descriptions: &[String]) -> Result<Vec<Arc<Orbital>>> {
    descriptions
        .par_iter()
        .map(|description| registry.parse(description).map_err(CliError::from))
        .collect()
}
