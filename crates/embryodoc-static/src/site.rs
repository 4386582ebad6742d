//! Site-wide metadata and the page collection a build operates on.

use embryodoc_dom::{Node, Page};

use crate::builder::BuildError;
use crate::layout::Layout;

/// Metadata shared by every page of a site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteMetadata {
    /// Site name, used for `og:site_name` and the favicon.
    pub name: String,

    /// Appended to every page title.
    pub title_suffix: String,

    /// Canonical absolute URL of the site root.
    pub url: String,

    pub author: String,

    /// Emit a generated favicon and link it from every page.
    pub builtin_icons: bool,
}

impl SiteMetadata {
    /// Check that `url` is an absolute http(s) URL with a host and no query
    /// or fragment, so page paths can be appended to it.
    pub fn validate(&self) -> Result<(), BuildError> {
        let invalid =
            |reason: &str| BuildError::MetadataError(format!("site url '{}' {}", self.url, reason));

        let Some(rest) = self
            .url
            .strip_prefix("https://")
            .or_else(|| self.url.strip_prefix("http://"))
        else {
            return Err(invalid("must be an absolute http(s) URL"));
        };

        if rest.trim_end_matches('/').is_empty() || rest.starts_with('/') {
            return Err(invalid("has no host"));
        }
        if rest.contains(|c: char| c == '?' || c == '#') {
            return Err(invalid("must not carry a query or fragment"));
        }
        if rest.contains(char::is_whitespace) {
            return Err(invalid("must not contain whitespace"));
        }

        Ok(())
    }

    /// Canonical URL of a page at `path`.
    pub fn canonical_url(&self, path: &str) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), page_url(path))
    }
}

/// Site-relative URL of a page path: `/` for home, `/about/` otherwise.
pub fn page_url(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

/// Metadata, one layout and the pages to publish.
pub struct Site {
    metadata: SiteMetadata,
    layout: Box<dyn Layout>,
    pages: Vec<Page>,
}

impl Site {
    /// Create a site around its home page.
    pub fn new(metadata: SiteMetadata, layout: impl Layout + 'static, home: Page) -> Self {
        Self {
            metadata,
            layout: Box::new(layout),
            pages: vec![home],
        }
    }

    pub fn add_page(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }

    pub fn metadata(&self) -> &SiteMetadata {
        &self.metadata
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Full document tree for `page`.
    pub fn compose(&self, page: &Page) -> Node {
        self.layout.compose(page.body())
    }

    /// Page title as emitted in the document head.
    pub fn full_title(&self, page: &Page) -> String {
        format!("{}{}", page.title(), self.metadata.title_suffix)
    }
}

impl std::fmt::Debug for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Site")
            .field("metadata", &self.metadata)
            .field("pages", &self.pages)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MainLayout;

    fn metadata() -> SiteMetadata {
        SiteMetadata {
            name: "EmbryoDoc App".to_string(),
            title_suffix: " – Приложение для эмбриологов и репродуктологов".to_string(),
            url: "https://embryodoc.app/".to_string(),
            author: "Egor Ledkov".to_string(),
            builtin_icons: true,
        }
    }

    #[test]
    fn appends_title_suffix() {
        let home = Page::new("Главная", "/", Node::text("hi")).unwrap();
        let site = Site::new(metadata(), MainLayout, home);

        assert_eq!(
            site.full_title(&site.pages()[0]),
            "Главная – Приложение для эмбриологов и репродуктологов"
        );
    }

    #[test]
    fn builds_canonical_urls() {
        let meta = metadata();

        assert_eq!(meta.canonical_url("/"), "https://embryodoc.app/");
        assert_eq!(meta.canonical_url("/about"), "https://embryodoc.app/about/");
    }

    #[test]
    fn accepts_absolute_urls() {
        assert!(metadata().validate().is_ok());
        assert!(SiteMetadata {
            url: "http://localhost:4000".to_string(),
            ..metadata()
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn rejects_unusable_urls() {
        for url in [
            "embryodoc.app",
            "/docs",
            "https://",
            "https://embryodoc.app/?ref=a&b=1",
            "https://embryodoc.app/#top",
            "https://embryo doc.app",
        ] {
            let meta = SiteMetadata {
                url: url.to_string(),
                ..metadata()
            };

            assert!(
                matches!(meta.validate(), Err(BuildError::MetadataError(_))),
                "accepted {url}"
            );
        }
    }

    #[test]
    fn keeps_pages_in_insertion_order() {
        let home = Page::new("Home", "/", Node::text("a")).unwrap();
        let about = Page::new("About", "/about", Node::text("b")).unwrap();
        let site = Site::new(metadata(), MainLayout, home).add_page(about);

        let titles: Vec<_> = site.pages().iter().map(Page::title).collect();
        assert_eq!(titles, vec!["Home", "About"]);
    }
}
