//! Document shell templates.

use minijinja::{context, Environment};

/// Context for rendering one page.
#[derive(Debug, Clone)]
pub struct Context {
    /// Page title including the site suffix
    pub title: String,
    /// Site name
    pub site_name: String,
    pub author: String,
    /// Canonical absolute URL of this page
    pub canonical_url: String,
    /// Rendered body HTML
    pub content: String,
    /// Link the generated favicon
    pub icons: bool,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a template engine with the built-in templates.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();

        env.add_template("base.html", BASE_TEMPLATE)?;
        env.add_template("page.html", PAGE_TEMPLATE)?;

        Ok(Self { env })
    }

    /// Render a page using the specified template.
    pub fn render_page(
        &self,
        template: &str,
        context: &Context,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;

        tmpl.render(context! {
            title => &context.title,
            site_name => &context.site_name,
            author => &context.author,
            canonical_url => &context.canonical_url,
            content => &context.content,
            icons => context.icons,
            generator => GENERATOR,
        })
    }
}

const GENERATOR: &str = concat!("embryodoc ", env!("CARGO_PKG_VERSION"));

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="ru">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="author" content="{{ author }}">
  <meta name="generator" content="{{ generator }}">
  <title>{{ title }}</title>
  <link rel="canonical" href="{{ canonical_url }}">
  <meta property="og:title" content="{{ title }}">
  <meta property="og:site_name" content="{{ site_name }}">
  <meta property="og:url" content="{{ canonical_url }}">
  {% if icons %}<link rel="icon" type="image/svg+xml" href="/favicon.svg">
  {% endif %}<link rel="stylesheet" href="/assets/main.css">
</head>
<body>
  {% block content %}{% endblock %}
</body>
</html>"##;

const PAGE_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{{ content | safe }}
{% endblock %}"##;
