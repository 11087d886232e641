//! HTML templates, compiled into the binary and rendered with minijinja.

use chrono::DateTime;
use minijinja::{Environment, default_auto_escape_callback};
use serde::Serialize;

/// Every page template, keyed by the name handlers render it under.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("users/list.html", include_str!("../templates/users/list.html")),
    ("users/detail.html", include_str!("../templates/users/detail.html")),
    ("users/new.html", include_str!("../templates/users/new.html")),
    ("users/edit.html", include_str!("../templates/users/edit.html")),
    ("posts/new.html", include_str!("../templates/posts/new.html")),
    ("posts/detail.html", include_str!("../templates/posts/detail.html")),
    ("posts/edit.html", include_str!("../templates/posts/edit.html")),
    ("tags/list.html", include_str!("../templates/tags/list.html")),
    ("tags/detail.html", include_str!("../templates/tags/detail.html")),
    ("tags/new.html", include_str!("../templates/tags/new.html")),
    ("tags/edit.html", include_str!("../templates/tags/edit.html")),
];

/// Compiled template set.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Parse every embedded template; fails on the first syntax error.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(default_auto_escape_callback);
        env.add_filter("format_date", format_date);

        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }

        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}

/// `{{ post.created_at | format_date }}` renders as `Mon Jan 1 2024, 9:05 AM`.
fn format_date(value: String) -> String {
    match DateTime::parse_from_rfc3339(&value) {
        Ok(dt) => dt.format("%a %b %-d %Y, %-I:%M %p").to_string(),
        Err(_) => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn all_templates_compile() {
        let templates = Templates::new().unwrap();

        for &(name, _) in TEMPLATES {
            assert!(templates.env.get_template(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn dates_are_humanized() {
        assert_eq!(
            format_date("2024-01-01T09:05:00Z".to_string()),
            "Mon Jan 1 2024, 9:05 AM"
        );
        assert_eq!(format_date("yesterday".to_string()), "yesterday");
    }

    #[test]
    fn user_input_is_escaped() {
        let templates = Templates::new().unwrap();
        let html = templates
            .render(
                "tags/list.html",
                context! { tags => vec![context! { id => 1, name => "<b>bold</b>" }] },
            )
            .unwrap();

        assert!(html.contains("&lt;b&gt;bold"));
        assert!(!html.contains("<b>bold</b>"));
    }
}
