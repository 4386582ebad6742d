//! Shared stylesheet and generated icons.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Generate an SVG favicon showing the first letter of `site_name`.
    pub fn generate_favicon(site_name: &str) -> String {
        let initial = site_name
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string());

        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect width="64" height="64" rx="14" fill="#2b6cb0"/><text x="32" y="44" font-family="system-ui, sans-serif" font-size="36" font-weight="700" text-anchor="middle" fill="#ffffff">{initial}</text></svg>"##
        )
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

// Font classes mirror embryodoc_dom::Font::class_name.
const DEFAULT_CSS: &str = r#"/* EmbryoDoc landing page */

:root {
  --background: #ffffff;
  --foreground: #1a202c;
  --muted: #f7fafc;
  --muted-foreground: #4a5568;
  --primary: #2b6cb0;
  --border: #e2e8f0;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
  background: var(--background);
  color: var(--foreground);
  line-height: 1.6;
}

.page {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.page > :not(.navbar):not(.footer) {
  flex: 1;
  padding: 4rem 2.5rem;
}

/* Navigation */
.navbar {
  background: var(--muted);
  border-bottom: 1px solid var(--border);
}

.navbar > .section {
  display: flex;
  align-items: center;
  justify-content: space-between;
  flex-wrap: wrap;
  gap: 1rem;
}

.navbar a {
  color: var(--foreground);
  text-decoration: none;
}

.navbar a:hover {
  color: var(--primary);
}

.row-list {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
}

.row-list a {
  color: var(--muted-foreground);
}

/* Footer */
.footer {
  border-top: 1px solid var(--border);
  padding: 1.5rem 2.5rem;
  color: var(--muted-foreground);
  font-size: 0.875rem;
  text-align: center;
}

.footer .section {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
}

.footer a {
  color: var(--primary);
}

/* Fonts */
.font-title1 { font-size: 2.5rem; font-weight: 700; line-height: 1.2; }
.font-title2 { font-size: 2rem; font-weight: 700; line-height: 1.25; }
.font-title3 { font-size: 1.75rem; font-weight: 600; }
.font-title4 { font-size: 1.5rem; font-weight: 600; }
.font-title5 { font-size: 1.25rem; font-weight: 600; }
.font-title6 { font-size: 1rem; font-weight: 600; }
.font-body { font-size: 1rem; }

@media (max-width: 768px) {
  .navbar > .section {
    flex-direction: column;
  }

  .font-title1 {
    font-size: 2rem;
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_css_for_every_font_class() {
        let css = AssetPipeline::generate_css();

        for class in ["font-title1", "font-title3", "font-title6", "font-body"] {
            assert!(css.contains(class), "missing {class}");
        }
        assert!(css.contains(".navbar"));
        assert!(css.contains(".row-list"));
    }

    #[test]
    fn favicon_uses_site_initial() {
        let svg = AssetPipeline::generate_favicon("embryoDoc App");

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(">E</text>"));
    }

    #[test]
    fn favicon_falls_back_for_symbol_names() {
        assert!(AssetPipeline::generate_favicon("--").contains(">?</text>"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.button {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".button"));
    }

    #[test]
    fn default_css_survives_minification() {
        let minified = AssetPipeline::minify_css(&AssetPipeline::generate_css()).unwrap();

        assert!(minified.contains(".font-title1"));
    }
}
