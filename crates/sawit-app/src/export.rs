//! HTML export of the display log.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use sawit_ai::{render_markdown, render_plain, DisplayEntry, EntryKind, PageContext};

/// Render `entries` as the chat window's HTML: one
/// `<div class="chat-message {type}">` per line, bot text through the
/// markdown transform and user text escaped verbatim.
pub fn render_html(
    entries: &[DisplayEntry],
    page: PageContext,
    generated_at: DateTime<Utc>,
) -> String {
    let mut html = format!(
        "<!-- sawit chat export: page {page}, {} -->\n<div class=\"chat-messages\">\n",
        generated_at.to_rfc3339()
    );
    for entry in entries {
        let (class, body) = match entry.kind {
            EntryKind::User => ("user", render_plain(&entry.text)),
            EntryKind::Bot => ("bot", render_markdown(&entry.text)),
        };
        // Writing to a String cannot fail.
        let _ = writeln!(html, "  <div class=\"chat-message {class}\">{body}</div>");
    }
    html.push_str("</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn renders_one_div_per_entry() {
        let entries = vec![
            DisplayEntry::bot("hai **bestie**"),
            DisplayEntry::user("<b>hi</b>"),
        ];
        let html = render_html(&entries, PageContext::Skills, at());

        assert!(html
            .starts_with("<!-- sawit chat export: page Skills, 2025-03-01T12:00:00+00:00 -->"));
        assert!(html.contains(
            "  <div class=\"chat-message bot\">hai <strong>bestie</strong></div>\n"
        ));
        assert!(html.contains(
            "  <div class=\"chat-message user\">&lt;b&gt;hi&lt;/b&gt;</div>\n"
        ));
        assert!(html.ends_with("</div>\n"));
    }

    #[test]
    fn user_markdown_is_not_interpreted() {
        let html = render_html(&[DisplayEntry::user("**x**")], PageContext::Home, at());
        assert!(html.contains(">**x**</div>"));
    }

    #[test]
    fn empty_log_renders_empty_container() {
        let html = render_html(&[], PageContext::Home, at());
        assert_eq!(html.matches("chat-message ").count(), 0);
        assert!(html.contains("<div class=\"chat-messages\">\n</div>\n"));
    }
}
