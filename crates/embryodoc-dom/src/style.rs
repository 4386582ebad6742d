//! Style modifiers attached to document nodes.

/// Which sides of a box a spacing modifier applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    All,
    Horizontal,
    Vertical,
    Top,
    Bottom,
    Leading,
    Trailing,
}

impl Edge {
    /// CSS box sides covered by this edge.
    pub fn sides(self) -> &'static [&'static str] {
        match self {
            Edge::All => &["top", "right", "bottom", "left"],
            Edge::Horizontal => &["left", "right"],
            Edge::Vertical => &["top", "bottom"],
            Edge::Top => &["top"],
            Edge::Bottom => &["bottom"],
            Edge::Leading => &["left"],
            Edge::Trailing => &["right"],
        }
    }
}

/// Semantic font sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Title1,
    Title2,
    Title3,
    Title4,
    Title5,
    Title6,
    Body,
}

impl Font {
    /// Heading level for title fonts, `None` for body text.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            Font::Title1 => Some(1),
            Font::Title2 => Some(2),
            Font::Title3 => Some(3),
            Font::Title4 => Some(4),
            Font::Title5 => Some(5),
            Font::Title6 => Some(6),
            Font::Body => None,
        }
    }

    /// Stylesheet class carrying the font size.
    pub fn class_name(self) -> &'static str {
        match self {
            Font::Title1 => "font-title1",
            Font::Title2 => "font-title2",
            Font::Title3 => "font-title3",
            Font::Title4 => "font-title4",
            Font::Title5 => "font-title5",
            Font::Title6 => "font-title6",
            Font::Body => "font-body",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Medium,
    Bold,
}

impl FontWeight {
    fn css_value(self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
        }
    }
}

/// Identity of a modifier. Two modifiers with the same key conflict and the
/// later one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKey {
    Font,
    FontWeight,
    Margin(Edge),
    Padding(Edge),
}

/// A single style modifier. Lengths are in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Font(Font),
    FontWeight(FontWeight),
    Margin(Edge, u32),
    Padding(Edge, u32),
}

impl Style {
    pub fn key(&self) -> StyleKey {
        match self {
            Style::Font(_) => StyleKey::Font,
            Style::FontWeight(_) => StyleKey::FontWeight,
            Style::Margin(edge, _) => StyleKey::Margin(*edge),
            Style::Padding(edge, _) => StyleKey::Padding(*edge),
        }
    }

    /// Inline CSS declarations for this modifier.
    ///
    /// Fonts are expressed through a class instead and yield nothing here.
    pub fn declarations(&self) -> Vec<String> {
        match self {
            Style::Font(_) => Vec::new(),
            Style::FontWeight(weight) => vec![format!("font-weight: {}", weight.css_value())],
            Style::Margin(edge, px) => spacing("margin", *edge, *px),
            Style::Padding(edge, px) => spacing("padding", *edge, *px),
        }
    }
}

fn spacing(property: &str, edge: Edge, px: u32) -> Vec<String> {
    edge.sides()
        .iter()
        .map(|side| format!("{property}-{side}: {px}px"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_margin_covers_left_and_right() {
        let decls = Style::Margin(Edge::Horizontal, 15).declarations();

        assert_eq!(decls, vec!["margin-left: 15px", "margin-right: 15px"]);
    }

    #[test]
    fn font_has_no_inline_declarations() {
        assert!(Style::Font(Font::Title1).declarations().is_empty());
        assert_eq!(Font::Title3.heading_level(), Some(3));
        assert_eq!(Font::Body.heading_level(), None);
    }

    #[test]
    fn keys_distinguish_edges() {
        assert_ne!(
            Style::Padding(Edge::Vertical, 20).key(),
            Style::Padding(Edge::Horizontal, 40).key()
        );
        assert_eq!(
            Style::Margin(Edge::Top, 1).key(),
            Style::Margin(Edge::Top, 99).key()
        );
    }
}
