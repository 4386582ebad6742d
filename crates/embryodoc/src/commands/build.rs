//! Static site build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use embryodoc_static::{
    BuildError, BuildOptions, BuildResult, BuildTarget, Preset, StaticBuilder,
};
use serde::Deserialize;

use crate::site::{embryodoc_site, SiteOverrides};

/// Configuration file structure (embryodoc.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteOverrides,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    /// Preset used when `--preset` is not given
    #[serde(default = "default_preset")]
    pub preset: Preset,
    /// Absolute output directory for the deployed preset
    pub deploy_dir: Option<PathBuf>,
    #[serde(default = "default_minify")]
    pub minify: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            deploy_dir: None,
            minify: default_minify(),
        }
    }
}

fn default_preset() -> Preset {
    Preset::LocalPreview
}
fn default_minify() -> bool {
    true
}

/// Command line overrides for a build.
#[derive(Debug, Default)]
pub struct BuildArgs {
    pub preset: Option<Preset>,
    pub output: Option<PathBuf>,
    pub deploy_dir: Option<PathBuf>,
    pub minify: Option<bool>,
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the build command.
///
/// Build failures are reported and swallowed; only a malformed config file
/// is returned as an error.
pub async fn run(config_path: &Path, args: BuildArgs) -> Result<()> {
    tracing::info!("Building static site...");

    let file_config = load_config(config_path)?;
    let preset = args.preset.unwrap_or(file_config.build.preset);

    let outcome = publish(&file_config, preset, args).await;
    report(preset, &outcome);

    Ok(())
}

async fn publish(
    config: &ConfigFile,
    preset: Preset,
    args: BuildArgs,
) -> Result<BuildResult, BuildError> {
    let deploy_dir = args.deploy_dir.or_else(|| config.build.deploy_dir.clone());
    let target = BuildTarget::resolve(preset, args.output, deploy_dir)?;
    let site = embryodoc_site(&config.site)?;

    StaticBuilder::new(site)
        .options(BuildOptions {
            minify: args.minify.unwrap_or(config.build.minify),
        })
        .build(&target)
        .await
}

/// Log the outcome of a build. Returns whether it succeeded.
fn report(preset: Preset, outcome: &Result<BuildResult, BuildError>) -> bool {
    match outcome {
        Ok(result) => {
            tracing::info!(
                "Built {} pages ({} files) in {}ms",
                result.pages,
                result.files,
                result.duration_ms
            );
            tracing::info!("Build completed: {}", result.output_dir.display());
            if let Some(hint) = preview_hint(preset, result) {
                tracing::info!("{}", hint);
            }
            true
        }
        Err(e) => {
            tracing::error!("{}", e);
            false
        }
    }
}

/// Command that serves the directory just written, for the local preview
/// preset only.
fn preview_hint(preset: Preset, result: &BuildResult) -> Option<String> {
    (preset == Preset::LocalPreview)
        .then(|| format!("Preview: embryodoc serve --dir {}", result.output_dir.display()))
}
