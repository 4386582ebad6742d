//! Pages and the content providers that produce them.

use crate::node::Node;

/// Supplies the content of one page.
pub trait StaticPage {
    /// Page title, without any site-wide suffix.
    fn title(&self) -> String;

    /// Output path of the page, `/` for the home page.
    fn path(&self) -> String {
        "/".to_string()
    }

    /// Root node of the page body.
    fn body(&self) -> Node;
}

/// Errors raised while turning content into a page.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PageError {
    #[error("Page title must not be empty (path {0})")]
    EmptyTitle(String),

    #[error("Page path must stay inside the site root: {0}")]
    InvalidPath(String),
}

/// A titled page body, ready to be laid out and rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    title: String,
    path: String,
    body: Node,
}

impl Page {
    pub fn new(
        title: impl Into<String>,
        path: impl Into<String>,
        body: Node,
    ) -> Result<Self, PageError> {
        let title = title.into();
        let path = normalize_path(&path.into());

        if path.split('/').any(|segment| segment == "..") {
            return Err(PageError::InvalidPath(path));
        }
        if title.trim().is_empty() {
            return Err(PageError::EmptyTitle(path));
        }

        Ok(Self { title, path, body })
    }

    pub fn from_provider<P: StaticPage + ?Sized>(provider: &P) -> Result<Self, PageError> {
        Self::new(provider.title(), provider.path(), provider.body())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Normalized path: always starts with `/`, never ends with one unless it
    /// is the root.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> &Node {
        &self.body
    }

    pub fn is_home(&self) -> bool {
        self.path == "/"
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct About;

    impl StaticPage for About {
        fn title(&self) -> String {
            "About".to_string()
        }

        fn path(&self) -> String {
            "about/".to_string()
        }

        fn body(&self) -> Node {
            Node::text("about us")
        }
    }

    #[test]
    fn builds_page_from_provider() {
        let page = Page::from_provider(&About).unwrap();

        assert_eq!(page.title(), "About");
        assert_eq!(page.path(), "/about");
        assert!(!page.is_home());
        assert_eq!(page.body(), &Node::text("about us"));
    }

    #[test]
    fn default_path_is_home() {
        let page = Page::new("Home", "", Node::text("hi")).unwrap();

        assert!(page.is_home());
        assert_eq!(page.path(), "/");
    }

    #[test]
    fn rejects_parent_segments() {
        for path in ["..", "/../outside", "docs/../../etc", "/a/.."] {
            let result = Page::new("Escape", path, Node::text("hi"));

            assert!(
                matches!(result, Err(PageError::InvalidPath(_))),
                "accepted {path}"
            );
        }
    }

    #[test]
    fn keeps_dotted_names() {
        let page = Page::new("Notes", "/v1..2/notes", Node::text("hi")).unwrap();

        assert_eq!(page.path(), "/v1..2/notes");
    }

    #[test]
    fn rejects_blank_title() {
        let result = Page::new("  ", "/x", Node::text("hi"));

        assert_eq!(result, Err(PageError::EmptyTitle("/x".to_string())));
    }
}
