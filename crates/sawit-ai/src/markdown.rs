//! Minimal markdown-to-HTML transform for model replies.
//!
//! HTML-significant characters are escaped before any substitution runs,
//! so remote text can never introduce markup of its own. Supported:
//! `**bold**`, `*italic*`, `[text](https://…)`, bare URL auto-linking and
//! line breaks. Backticks are dropped.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\((https?://[^)\s]+)\)").unwrap());

// A URL directly after a quote is already inside an href attribute.
static BARE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(^|[^"'])(https?://[^\s<"]+)"#).unwrap());

/// Escape `&`, `<`, `>`, `"` and `'`.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render user text: escaped, otherwise verbatim.
pub fn render_plain(text: &str) -> String {
    escape_html(text)
}

/// Render model text to an HTML fragment.
pub fn render_markdown(text: &str) -> String {
    let escaped = escape_html(text).replace('`', "");
    let html = BOLD_RE.replace_all(&escaped, "<strong>${1}</strong>");
    let html = ITALIC_RE.replace_all(&html, "<em>${1}</em>");
    let linked = LINK_RE.replace_all(
        &html,
        r#"<a href="${2}" target="_blank" rel="noopener">${1}</a>"#,
    );
    // Escaped text has no raw `"`, so `">` only closes an anchor made above.
    let html = BARE_URL_RE.replace_all(&linked, |caps: &Captures| {
        let url = &caps[2];
        let url_start = caps.get(2).map_or(0, |m| m.start());
        if linked[..url_start].ends_with("\">") {
            format!("{}{url}", &caps[1])
        } else {
            format!(
                r#"{}<a href="{url}" target="_blank" rel="noopener">{url}</a>"#,
                &caps[1]
            )
        }
    });
    html.replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_tags_are_escaped_before_substitution() {
        let html = render_markdown("<script>alert('x')</script> **bold**");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&#39;x&#39;"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn markup_inside_bold_stays_escaped() {
        let html = render_markdown("**<img src=x onerror=alert(1)>**");
        assert_eq!(
            html,
            "<strong>&lt;img src=x onerror=alert(1)&gt;</strong>"
        );
    }

    #[test]
    fn bold_and_italic() {
        assert_eq!(
            render_markdown("**slay** and *lowkey*"),
            "<strong>slay</strong> and <em>lowkey</em>"
        );
    }

    #[test]
    fn backticks_are_stripped() {
        assert_eq!(render_markdown("use `cargo` here"), "use cargo here");
    }

    #[test]
    fn explicit_link() {
        assert_eq!(
            render_markdown("see [Dompetku](https://fardaaannn.github.io/dompetku/)"),
            r#"see <a href="https://fardaaannn.github.io/dompetku/" target="_blank" rel="noopener">Dompetku</a>"#
        );
    }

    #[test]
    fn javascript_links_are_not_linked() {
        let html = render_markdown("[click](javascript:alert(1))");
        assert!(!html.contains("<a"));
    }

    #[test]
    fn bare_url_is_autolinked() {
        assert_eq!(
            render_markdown("visit https://mykasgweh.vercel.app now"),
            r#"visit <a href="https://mykasgweh.vercel.app" target="_blank" rel="noopener">https://mykasgweh.vercel.app</a> now"#
        );
    }

    #[test]
    fn url_at_start_is_autolinked() {
        let html = render_markdown("http://a.dev");
        assert!(html.starts_with(r#"<a href="http://a.dev""#));
    }

    #[test]
    fn explicit_link_href_is_not_linked_twice() {
        let html = render_markdown("[x](https://a.dev)");
        assert_eq!(html.matches("<a ").count(), 1);
    }

    #[test]
    fn link_whose_text_is_a_url_is_not_nested() {
        let html = render_markdown("[https://a.dev](https://a.dev)");
        assert_eq!(
            html,
            r#"<a href="https://a.dev" target="_blank" rel="noopener">https://a.dev</a>"#
        );
        assert_eq!(html.matches("<a ").count(), 1);
    }

    #[test]
    fn bold_url_is_still_autolinked() {
        assert_eq!(
            render_markdown("**https://a.dev**"),
            r#"<strong><a href="https://a.dev" target="_blank" rel="noopener">https://a.dev</a></strong>"#
        );
    }

    #[test]
    fn quote_in_url_cannot_break_out_of_href() {
        let html = render_markdown(r#"https://a.dev/"onmouseover="alert(1)"#);
        assert!(!html.contains(r#"" onmouseover"#));
        assert!(!html.contains(r#"/"onmouseover"#));
    }

    #[test]
    fn newlines_become_breaks() {
        assert_eq!(render_markdown("a\nb"), "a<br>b");
    }

    #[test]
    fn plain_render_escapes_only() {
        assert_eq!(
            render_plain("**not bold** <b>"),
            "**not bold** &lt;b&gt;"
        );
    }
}
