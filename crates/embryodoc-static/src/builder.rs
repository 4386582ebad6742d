//! Static site publishing.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use html_escape::encode_text;
use tokio::fs;

use embryodoc_dom::{render_fragment, Page, PageError};

use crate::assets::AssetPipeline;
use crate::site::{page_url, Site};
use crate::templates::{Context, TemplateEngine};

/// Output directory of the local preview preset, relative to the working
/// directory.
pub const LOCAL_PREVIEW_DIR: &str = "docs";

/// Named ways of resolving where a build is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// `./docs` under the working directory.
    LocalPreview,
    /// An absolute directory supplied by configuration.
    Deployed,
}

impl Preset {
    pub fn name(self) -> &'static str {
        match self {
            Preset::LocalPreview => "local-preview",
            Preset::Deployed => "deployed",
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local-preview" => Ok(Preset::LocalPreview),
            "deployed" => Ok(Preset::Deployed),
            other => Err(format!(
                "unknown preset '{other}', expected 'local-preview' or 'deployed'"
            )),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved source and output directories of one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
    source_dir: PathBuf,
    output_dir: PathBuf,
}

impl BuildTarget {
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Resolve a target against the current working directory.
    ///
    /// `output` overrides the preset's directory. The deployed preset falls
    /// back to `deploy_dir` and only accepts absolute paths.
    pub fn resolve(
        preset: Preset,
        output: Option<PathBuf>,
        deploy_dir: Option<PathBuf>,
    ) -> Result<Self, BuildError> {
        let cwd = std::env::current_dir().map_err(|e| {
            BuildError::TargetError(format!("Cannot read working directory: {}", e))
        })?;
        Self::resolve_in(&cwd, preset, output, deploy_dir)
    }

    /// Same as [`BuildTarget::resolve`] with an explicit working directory.
    pub fn resolve_in(
        cwd: &Path,
        preset: Preset,
        output: Option<PathBuf>,
        deploy_dir: Option<PathBuf>,
    ) -> Result<Self, BuildError> {
        let output_dir = match preset {
            Preset::LocalPreview => {
                cwd.join(output.unwrap_or_else(|| PathBuf::from(LOCAL_PREVIEW_DIR)))
            }
            Preset::Deployed => {
                let dir = output.or(deploy_dir).ok_or_else(|| {
                    BuildError::TargetError(
                        "The deployed preset needs an output directory \
                         (--output, EMBRYODOC_DEPLOY_DIR or build.deploy_dir)"
                            .to_string(),
                    )
                })?;
                if !dir.is_absolute() {
                    return Err(BuildError::TargetError(format!(
                        "Deploy directory must be absolute: {}",
                        dir.display()
                    )));
                }
                dir
            }
        };

        Ok(Self::new(cwd, output_dir))
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Options that do not change what a site says, only how it is written.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Minify the stylesheet
    pub minify: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { minify: true }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Number of files written, pages and assets
    pub files: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to resolve build target: {0}")]
    TargetError(String),

    #[error("Invalid site metadata: {0}")]
    MetadataError(String),

    #[error("Invalid page: {0}")]
    PageError(#[from] PageError),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Writes a [`Site`] to disk.
pub struct StaticBuilder {
    site: Site,
    options: BuildOptions,
}

impl StaticBuilder {
    pub fn new(site: Site) -> Self {
        Self {
            site,
            options: BuildOptions::default(),
        }
    }

    pub fn options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the static site into `target`.
    ///
    /// Pages are written one after another. Files written before a failure
    /// stay on disk.
    pub async fn build(self, target: &BuildTarget) -> Result<BuildResult, BuildError> {
        let start = Instant::now();
        let output_dir = target.output_dir();

        self.site.metadata().validate()?;

        tracing::info!(
            "Publishing {} ({} pages) to {}",
            self.site.metadata().name,
            self.site.pages().len(),
            output_dir.display()
        );

        fs::create_dir_all(output_dir)
            .await
            .map_err(|e| write_error(output_dir, e))?;

        let templates =
            TemplateEngine::new().map_err(|e| BuildError::TemplateError(e.to_string()))?;

        let mut files = 0;
        for page in self.site.pages() {
            let html = self.render_page(&templates, page)?;
            let path = page_output_path(output_dir, page);
            write_file(&path, html).await?;
            tracing::debug!("Wrote {}", path.display());
            files += 1;
        }

        files += self.generate_assets(output_dir).await?;
        files += self.generate_sitemap(output_dir).await?;

        Ok(BuildResult {
            pages: self.site.pages().len(),
            files,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// Render a single page to a complete HTML document.
    fn render_page(&self, templates: &TemplateEngine, page: &Page) -> Result<String, BuildError> {
        let tree = self.site.compose(page);

        let anchors = tree.anchors();
        for link in tree.links() {
            if let Some(anchor) = link.target().and_then(|t| t.strip_prefix('#')) {
                if !anchors.contains(&anchor) {
                    tracing::debug!("{}: no element with id '{}'", page.path(), anchor);
                }
            }
        }

        let metadata = self.site.metadata();
        let context = Context {
            title: self.site.full_title(page),
            site_name: metadata.name.clone(),
            author: metadata.author.clone(),
            canonical_url: metadata.canonical_url(page.path()),
            content: render_fragment(&tree),
            icons: metadata.builtin_icons,
        };

        templates
            .render_page("page.html", &context)
            .map_err(|e| BuildError::TemplateError(e.to_string()))
    }

    /// Generate static assets, returning how many files were written.
    async fn generate_assets(&self, output_dir: &Path) -> Result<usize, BuildError> {
        let css = AssetPipeline::generate_css();
        let css = if self.options.minify {
            match AssetPipeline::minify_css(&css) {
                Ok(minified) => minified,
                Err(e) => {
                    tracing::warn!("Keeping unminified stylesheet: {}", e);
                    css
                }
            }
        } else {
            css
        };
        write_file(&output_dir.join("assets").join("main.css"), css).await?;

        if !self.site.metadata().builtin_icons {
            return Ok(1);
        }

        let favicon = AssetPipeline::generate_favicon(&self.site.metadata().name);
        write_file(&output_dir.join("favicon.svg"), favicon).await?;

        Ok(2)
    }

    /// Generate sitemap and robots.txt.
    async fn generate_sitemap(&self, output_dir: &Path) -> Result<usize, BuildError> {
        let metadata = self.site.metadata();
        let urls: Vec<String> = self
            .site
            .pages()
            .iter()
            .map(|page| {
                format!(
                    "  <url>\n    <loc>{}</loc>\n  </url>",
                    encode_text(&metadata.canonical_url(page.path()))
                )
            })
            .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );
        write_file(&output_dir.join("sitemap.xml"), sitemap).await?;

        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml\n",
            metadata.url.trim_end_matches('/')
        );
        write_file(&output_dir.join("robots.txt"), robots).await?;

        Ok(2)
    }
}

impl Site {
    /// Publish the site into `target` with default options.
    pub async fn publish(self, target: &BuildTarget) -> Result<BuildResult, BuildError> {
        StaticBuilder::new(self).build(target).await
    }
}

/// Output file of a page: `index.html` for home, `<path>/index.html` otherwise.
fn page_output_path(output_dir: &Path, page: &Page) -> PathBuf {
    let url = page_url(page.path());
    let relative = url.trim_matches('/');

    if relative.is_empty() {
        output_dir.join("index.html")
    } else {
        output_dir.join(relative).join("index.html")
    }
}

async fn write_file(path: &Path, contents: String) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| write_error(parent, e))?;
    }

    fs::write(path, contents)
        .await
        .map_err(|e| write_error(path, e))
}

fn write_error(path: &Path, e: std::io::Error) -> BuildError {
    BuildError::WriteError(format!("{}: {}", path.display(), e))
}
