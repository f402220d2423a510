//! CLI subcommand implementations.

pub mod check;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod run;
pub mod status;
pub mod wrappers;

use std::path::Path;

use crate::availability::{AvailabilityCache, SystemProbe};
use crate::catalog::Catalog;
use crate::config::{load_config, Config, ConfigSource};
use crate::error::Result;

/// Everything a subcommand needs: resolved config, the assembled catalog,
/// and an availability cache wired with the catalog's install hints.
pub(crate) struct CommandContext {
    pub config: Config,
    pub source: ConfigSource,
    pub catalog: Catalog,
    pub cache: AvailabilityCache,
}

/// Build the command context for a project root.
pub(crate) fn build_context(
    project_root: &Path,
    explicit_config: Option<&Path>,
) -> Result<CommandContext> {
    let (config, source) = load_config(project_root, explicit_config)?;

    let mut catalog = Catalog::load()?;
    catalog.exclude(&config.exclude);
    catalog.merge_custom(config.custom_manifests());

    let mut cache = AvailabilityCache::new(Box::new(SystemProbe::new()))
        .with_install_hints(catalog.install_hints());
    if let Some(ttl) = config.ttl()? {
        cache = cache.with_ttl(ttl);
    }

    Ok(CommandContext {
        config,
        source,
        catalog,
        cache,
    })
}
