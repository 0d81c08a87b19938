//! Server-side HTML rendering.
//!
//! Pages share one layout. Every string that comes from the database goes
//! through [`escape`] before it is interpolated.

mod info;
mod pages;

pub use info::{plan, privacy, terms};
pub use pages::{about, category, cuisine_menu, cuisine_style, details, home};

use guide_core::Category;

const SITE_NAME: &str = "Incredible India Guide";

/// Colour themes offered by the theme switcher, as `(data-theme, label)`.
const THEMES: &[(&str, &str)] = &[("light", "Light"), ("dark", "Dark"), ("saffron", "Saffron")];

/// Site navigation, with one entry per browsable category.
fn nav_items() -> Vec<(&'static str, &'static str)> {
    let categories = Category::ALL
        .iter()
        .filter(|c| c.is_browsable())
        .filter_map(|c| Some((c.path()?, c.as_str())));
    std::iter::once(("/", "Home"))
        .chain(categories)
        .chain([("/plan", "Plan a Trip"), (category_href(Category::About), Category::About.as_str())])
        .collect()
}

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Link to a destination detail page. The title is percent-encoded as one path segment.
pub fn detail_href(title: &str) -> String {
    format!("/details/{}", urlencoding::encode(title))
}

pub fn cuisine_href(slug: &str) -> String {
    format!("/cuisine/{}", urlencoding::encode(slug))
}

pub(crate) fn category_href(category: Category) -> &'static str {
    category.path().unwrap_or("/")
}

/// Wrap a page body in the site layout. `active` is the nav path to highlight.
pub fn layout(title: &str, active: &str, body: &str) -> String {
    let nav: String = nav_items()
        .into_iter()
        .map(|(href, label)| {
            let class = if href == active { " class=\"active\"" } else { "" };
            format!("<li><a href=\"{href}\"{class}>{label}</a></li>")
        })
        .collect();
    let themes: String = THEMES
        .iter()
        .map(|(theme, label)| {
            format!("<button type=\"button\" class=\"theme-button\" data-theme=\"{theme}\">{label}</button>")
        })
        .collect();
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">
<title>{title} | {SITE_NAME}</title>
<link rel=\"stylesheet\" href=\"/static/css/style.css\">
<script src=\"/static/js/main.js\" defer></script>
<script src=\"/static/js/slider.js\" defer></script>
</head>
<body>
<header class=\"site-header\">
<a class=\"logo\" href=\"/\">{SITE_NAME}</a>
<button type=\"button\" class=\"hamburger-menu\" aria-label=\"Toggle navigation\" aria-controls=\"main-nav\" aria-expanded=\"false\"><span></span><span></span><span></span></button>
<nav class=\"main-nav\" id=\"main-nav\"><ul>{nav}</ul></nav>
<div class=\"theme-switcher\">
<button type=\"button\" class=\"theme-toggle-btn\" aria-label=\"Choose a colour theme\" aria-expanded=\"false\">Theme</button>
<div class=\"color-switcher\">{themes}</div>
</div>
</header>
<main>
{body}
</main>
<footer class=\"site-footer\">
<a href=\"/privacy\">Privacy</a> · <a href=\"/terms\">Terms</a>
</footer>
</body>
</html>
",
        title = escape(title),
    )
}

fn optional_image(url: Option<&str>, alt: &str) -> String {
    url.map(|u| format!("<img src=\"{}\" alt=\"{}\" loading=\"lazy\">", escape(u), escape(alt)))
        .unwrap_or_default()
}

fn optional_paragraph(text: Option<&str>, class: &str) -> String {
    text.map(|t| format!("<p class=\"{class}\">{}</p>", escape(t))).unwrap_or_default()
}

pub fn not_found(message: &str) -> String {
    layout(
        "Not Found",
        "",
        &format!(
            "<section class=\"error\"><h1>Page not found</h1><p>{}</p>\
             <p><a href=\"/\">Back to the home page</a></p></section>",
            escape(message)
        ),
    )
}

pub fn internal_error() -> String {
    layout(
        "Error",
        "",
        "<section class=\"error\"><h1>Something went wrong</h1>\
         <p>Please try again in a moment.</p></section>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_special_characters() {
        assert_eq!(
            escape("<b>\"Forts\" & 'Palaces'</b>"),
            "&lt;b&gt;&quot;Forts&quot; &amp; &#39;Palaces&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn detail_href_encodes_title() {
        assert_eq!(detail_href("Ancient Forts & Palaces"), "/details/Ancient%20Forts%20%26%20Palaces");
        assert_eq!(detail_href("a/b"), "/details/a%2Fb");
    }

    #[test]
    fn layout_marks_active_nav_item() {
        let html = layout("Culture", "/culture", "<p>x</p>");
        assert!(html.contains("<a href=\"/culture\" class=\"active\">Culture</a>"));
        assert!(html.contains("<a href=\"/history\">History</a>"));
        assert!(html.contains("<title>Culture | Incredible India Guide</title>"));
    }

    #[test]
    fn nav_lists_browsable_categories_in_order() {
        let hrefs: Vec<_> = nav_items().into_iter().map(|(href, _)| href).collect();
        assert_eq!(
            hrefs,
            vec!["/", "/culture", "/history", "/nature", "/cuisine", "/plan", "/about"]
        );
    }

    #[test]
    fn layout_loads_scripts_and_theme_controls() {
        let html = layout("Home", "/", "");
        assert!(html.contains("<script src=\"/static/js/main.js\" defer></script>"));
        assert!(html.contains("<script src=\"/static/js/slider.js\" defer></script>"));
        assert!(html.contains("class=\"hamburger-menu\""));
        assert!(html.contains("class=\"theme-toggle-btn\""));
        for (theme, _) in THEMES {
            assert!(html.contains(&format!("data-theme=\"{theme}\"")));
        }
    }

    #[test]
    fn layout_escapes_title() {
        let html = layout("<script>", "", "");
        assert!(html.contains("<title>&lt;script&gt; |"));
    }
}
