//! The EmbryoDoc App site definition.

use embryodoc_dom::Page;
use embryodoc_static::{BuildError, MainLayout, Site, SiteMetadata};
use serde::Deserialize;

use crate::pages::Home;

/// Metadata fields that `embryodoc.toml` may override.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct SiteOverrides {
    pub name: Option<String>,
    pub title_suffix: Option<String>,
    pub url: Option<String>,
    pub author: Option<String>,
    pub builtin_icons: Option<bool>,
}

/// Site metadata with any overrides applied.
pub fn metadata(overrides: &SiteOverrides) -> SiteMetadata {
    let overrides = overrides.clone();
    SiteMetadata {
        name: overrides.name.unwrap_or_else(|| "EmbryoDoc App".to_string()),
        title_suffix: overrides
            .title_suffix
            .unwrap_or_else(|| " – Приложение для эмбриологов и репродуктологов".to_string()),
        url: overrides
            .url
            .unwrap_or_else(|| "https://embryodoc.app".to_string()),
        author: overrides.author.unwrap_or_else(|| "Egor Ledkov".to_string()),
        builtin_icons: overrides.builtin_icons.unwrap_or(true),
    }
}

/// Assemble the site: main layout around the home page.
pub fn embryodoc_site(overrides: &SiteOverrides) -> Result<Site, BuildError> {
    let metadata = metadata(overrides);
    metadata.validate()?;

    let home = Page::from_provider(&Home)?;
    Ok(Site::new(metadata, MainLayout, home))
}
