//! Page Shells
//!
//! Renders the HTML document for each portal page. The shell carries the
//! page's props as embedded JSON; the browser bundle reads them on start and
//! takes over rendering.

use hackportal_core::{
    DashboardProps, HomeProps, PageKind, SiteContent, PROPS_ELEMENT_ID, ROOT_ELEMENT_ID,
};
use serde::Serialize;
use thiserror::Error;
use tinytemplate::TinyTemplate;

static SHELL: &str = include_str!("shell.html");

/// URL prefix the browser bundle is served under
pub const ASSETS_PREFIX: &str = "/pkg";

/// File stem of the compiled browser bundle
const BUNDLE_NAME: &str = "hackportal-ui";

#[derive(Serialize)]
struct ShellContext<'a> {
    title: &'a str,
    description: &'a str,
    page: &'static str,
    root_id: &'static str,
    props_id: &'static str,
    props: String,
    assets_prefix: &'static str,
    bundle: &'static str,
}

/// Render the landing page shell
pub fn render_home(props: &HomeProps) -> Result<String, RenderError> {
    render_shell(
        PageKind::Home,
        &props.site.title,
        &props.site.description,
        props,
    )
}

/// Render the attendee dashboard shell
pub fn render_dashboard(site: &SiteContent, props: &DashboardProps) -> Result<String, RenderError> {
    let title = format!("{} - Dashboard", site.title);
    let description = format!("{}'s Dashboard", site.title);
    render_shell(PageKind::Dashboard, &title, &description, props)
}

fn render_shell<P: Serialize>(
    page: PageKind,
    title: &str,
    description: &str,
    props: &P,
) -> Result<String, RenderError> {
    let context = ShellContext {
        title,
        description,
        page: page.as_str(),
        root_id: ROOT_ELEMENT_ID,
        props_id: PROPS_ELEMENT_ID,
        props: embed_json(props)?,
        assets_prefix: ASSETS_PREFIX,
        bundle: BUNDLE_NAME,
    };

    let mut tt = TinyTemplate::new();
    tt.add_template("shell", SHELL)?;
    Ok(tt.render("shell", &context)?)
}

/// Serialize props for a `<script>` element.
///
/// `<`, `>` and `&` only occur inside JSON strings, so swapping them for
/// their `\u` escapes keeps the document valid JSON and stops API data from
/// closing the script element.
pub fn embed_json<T: Serialize>(value: &T) -> Result<String, RenderError> {
    let json = serde_json::to_string(value)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to encode page props: {0}")]
    Props(#[from] serde_json::Error),

    #[error("Failed to render page shell: {0}")]
    Template(#[from] tinytemplate::error::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use hackportal_core::{Announcement, Challenge};

    fn props_json(html: &str) -> serde_json::Value {
        let open = format!(r#"<script type="application/json" id="{}">"#, PROPS_ELEMENT_ID);
        let start = html.find(&open).unwrap() + open.len();
        let end = start + html[start..].find("</script>").unwrap();
        serde_json::from_str(&html[start..end]).unwrap()
    }

    #[test]
    fn test_embed_json_escapes_markup() {
        let json = embed_json(&"</script><b>&").unwrap();
        assert!(!json.contains('<'));
        assert!(!json.contains('>'));
        assert!(!json.contains('&'));

        let back: String = serde_json::from_str(&json).unwrap();
        assert_eq!(back, "</script><b>&");
    }

    #[test]
    fn test_home_shell_embeds_props() {
        let props = HomeProps {
            challenges: vec![Challenge {
                organization: "Acme <Corp>".to_string(),
                title: "Best Hack".to_string(),
                description: String::new(),
                prizes: vec![],
                rank: 0,
            }],
            ..Default::default()
        };

        let html = render_home(&props).unwrap();
        assert!(html.contains("<title>HackPortal</title>"));
        assert!(html.contains(r#"data-page="home""#));
        assert!(html.contains("/pkg/hackportal-ui.js"));

        let embedded = props_json(&html);
        assert_eq!(embedded["challenges"][0]["organization"], "Acme <Corp>");
        assert_eq!(embedded["keynoteSpeakers"], serde_json::json!([]));
    }

    #[test]
    fn test_dashboard_shell() {
        let props = DashboardProps {
            announcements: vec![Announcement {
                announcement: "Lunch is served".to_string(),
                timestamp: None,
            }],
            spotlight: vec![],
        };

        let html = render_dashboard(&SiteContent::default(), &props).unwrap();
        assert!(html.contains("<title>HackPortal - Dashboard</title>"));
        assert!(html.contains(r#"data-page="dashboard""#));

        let embedded = props_json(&html);
        assert_eq!(embedded["announcements"][0]["announcement"], "Lunch is served");
    }

    #[test]
    fn test_title_is_html_escaped() {
        let mut props = HomeProps::default();
        props.site.title = "Hack <&> Day".to_string();

        let html = render_home(&props).unwrap();
        assert!(!html.contains("Hack <&> Day"));
    }
}
