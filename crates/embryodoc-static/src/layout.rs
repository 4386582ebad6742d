//! Shared page chrome.

use embryodoc_dom::{Edge, Font, Node, Region};

/// Wraps a page body in site-wide chrome.
pub trait Layout: Send + Sync {
    /// Produce the full document tree for `body`. Must be pure.
    fn compose(&self, body: &Node) -> Node;
}

/// Horizontal margin of each section link in the navigation bar.
pub const NAV_LINK_MARGIN: u32 = 15;

/// In-page sections reachable from the navigation bar, as (label, anchor).
pub const NAV_SECTIONS: [(&str, &str); 5] = [
    ("Эмбриологам", "embryologists"),
    ("Репродуктологам", "doctors"),
    ("Администраторам", "administrators"),
    ("Клиентам", "clients"),
    ("Контакты", "contact"),
];

pub const BRAND_LABEL: &str = "EmbryoDoc";
pub const BRAND_ANCHOR: &str = "home";

/// Navigation bar, page body, footer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MainLayout;

impl MainLayout {
    fn navigation(&self) -> Node {
        let sections = NAV_SECTIONS
            .iter()
            .map(|(label, anchor)| {
                Node::link(*label, format!("#{anchor}")).margin(Edge::Horizontal, NAV_LINK_MARGIN)
            })
            .collect();

        Node::container(
            Region::Navigation,
            vec![Node::section(vec![
                Node::link(BRAND_LABEL, format!("#{BRAND_ANCHOR}")).font(Font::Title3),
                Node::row(sections),
            ])],
        )
        .padding(Edge::Vertical, 20)
        .padding(Edge::Horizontal, 40)
    }

    fn footer(&self) -> Node {
        Node::container(
            Region::Footer,
            vec![Node::section(vec![
                Node::text("Built with Rust"),
                Node::link("rust-lang.org", "https://www.rust-lang.org"),
            ])],
        )
    }
}

impl Layout for MainLayout {
    fn compose(&self, body: &Node) -> Node {
        Node::container(
            Region::Body,
            vec![self.navigation(), body.clone(), self.footer()],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embryodoc_dom::{Style, StyleKey};
    use pretty_assertions::assert_eq;

    fn hero() -> Node {
        Node::text("Приложение для эмбриологов и репродуктологов").font(Font::Title1)
    }

    #[test]
    fn wraps_body_between_navigation_and_footer() {
        let body = hero();
        let page = MainLayout.compose(&body);

        assert_eq!(page.region(), Some(Region::Body));
        let regions: Vec<_> = page.children().iter().map(Node::region).collect();
        assert_eq!(
            regions,
            vec![Some(Region::Navigation), None, Some(Region::Footer)]
        );
        assert_eq!(&page.children()[1], &body);
    }

    #[test]
    fn exactly_one_navigation_and_footer() {
        let page = MainLayout.compose(&Node::section(vec![hero()]));

        let count = |region| {
            page.descendants()
                .iter()
                .filter(|n| n.region() == Some(region))
                .count()
        };
        assert_eq!(count(Region::Navigation), 1);
        assert_eq!(count(Region::Footer), 1);
    }

    #[test]
    fn composition_is_deterministic() {
        let body = hero();

        assert_eq!(MainLayout.compose(&body), MainLayout.compose(&body));
    }

    #[test]
    fn navigation_has_brand_then_five_sections() {
        let page = MainLayout.compose(&hero());
        let targets: Vec<_> = page.children()[0]
            .links()
            .iter()
            .filter_map(|n| n.target())
            .collect();

        assert_eq!(
            targets,
            vec![
                "#home",
                "#embryologists",
                "#doctors",
                "#administrators",
                "#clients",
                "#contact"
            ]
        );
    }

    #[test]
    fn only_section_links_have_horizontal_margin() {
        let page = MainLayout.compose(&hero());
        let links = page.children()[0].links();
        let (brand, sections) = links.split_first().unwrap();

        assert!(brand.style_for(StyleKey::Margin(Edge::Horizontal)).is_none());
        for link in sections {
            assert_eq!(
                link.style_for(StyleKey::Margin(Edge::Horizontal)),
                Some(&Style::Margin(Edge::Horizontal, NAV_LINK_MARGIN))
            );
            assert!(link.style_for(StyleKey::Margin(Edge::Vertical)).is_none());
        }
    }

    #[test]
    fn navigation_is_padded() {
        let page = MainLayout.compose(&hero());
        let nav = &page.children()[0];

        assert_eq!(
            nav.styles(),
            &[
                Style::Padding(Edge::Vertical, 20),
                Style::Padding(Edge::Horizontal, 40)
            ]
        );
    }
}
