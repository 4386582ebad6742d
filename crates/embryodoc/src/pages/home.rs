use embryodoc_dom::{Font, Node, StaticPage};

/// Landing page hero.
pub struct Home;

impl StaticPage for Home {
    fn title(&self) -> String {
        "Главная".to_string()
    }

    fn body(&self) -> Node {
        Node::text("Приложение для эмбриологов и репродуктологов").font(Font::Title1)
    }
}
