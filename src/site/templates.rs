//! Askama page templates.
//!
//! Every page extends `templates/base.html`, which carries the document
//! head, navigation and footer. Templates are compiled into the binary;
//! the stylesheet is served separately from [`STYLESHEET_PATH`] so pages
//! stay within the `default-src 'self'` content security policy.

use askama::Template;

use super::routes::Page;
use crate::errors::GatewayError;

pub const STYLESHEET_PATH: &str = "/static/style.css";
pub const STYLESHEET: &str = include_str!("../../static/style.css");

/// Per-request values the layout needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Mount prefix without a trailing slash, e.g. `/portfolio` or empty.
    pub prefix: String,
    /// Absolute URL of the page being rendered.
    pub canonical_url: String,
}

struct NavLink {
    href: String,
    title: &'static str,
    current: bool,
}

/// Values shared by every template through `base.html`.
struct Layout {
    title: String,
    prefix: String,
    canonical_url: String,
    nav: Vec<NavLink>,
}

impl Layout {
    fn new(title: &str, current: Option<Page>, ctx: &RenderContext) -> Self {
        let nav = Page::ALL
            .into_iter()
            .map(|page| NavLink {
                href: format!("{}{}", ctx.prefix, page.path()),
                title: page.title(),
                current: current == Some(page),
            })
            .collect();
        Self {
            title: title.to_string(),
            prefix: ctx.prefix.clone(),
            canonical_url: ctx.canonical_url.clone(),
            nav,
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    layout: Layout,
}

#[derive(Template)]
#[template(path = "education.html")]
struct EducationTemplate {
    layout: Layout,
}

#[derive(Template)]
#[template(path = "experience.html")]
struct ExperienceTemplate {
    layout: Layout,
}

#[derive(Template)]
#[template(path = "projects.html")]
struct ProjectsTemplate {
    layout: Layout,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    layout: Layout,
    heading: String,
    message: String,
}

/// Full HTML document for `page`.
pub fn render_page(page: Page, ctx: &RenderContext) -> Result<String, GatewayError> {
    let layout = Layout::new(page.title(), Some(page), ctx);
    let html = match page {
        Page::Home => IndexTemplate { layout }.render()?,
        Page::Education => EducationTemplate { layout }.render()?,
        Page::Experience => ExperienceTemplate { layout }.render()?,
        Page::Projects => ProjectsTemplate { layout }.render()?,
    };
    Ok(html)
}

/// Full HTML document for an error page such as a 404.
pub fn render_error(
    heading: &str,
    message: &str,
    ctx: &RenderContext,
) -> Result<String, GatewayError> {
    let template = ErrorTemplate {
        layout: Layout::new(heading, None, ctx),
        heading: heading.to_string(),
        message: message.to_string(),
    };
    Ok(template.render()?)
}
