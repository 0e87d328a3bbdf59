//! Static HTML rendering of hook cards.
//!
//! Produces a self-contained fragment: a card grid, or the empty-state
//! message when nothing matches. Every outbound link opens in a new
//! browsing context with `rel="noopener noreferrer"`, so the repository
//! page gets neither a `window.opener` handle nor a referrer. Only
//! `http`/`https` URLs become links; anything else renders inert.

use std::fmt::Write;
use std::sync::Arc;

use hookhub_core::{EMPTY_STATE_MESSAGE, Hook, link};

/// Render the card grid for `hooks`, in order.
pub fn render_grid(hooks: &[Arc<Hook>]) -> String {
    if hooks.is_empty() {
        return format!(
            "<div class=\"hook-empty\">\n  <p>{}</p>\n</div>",
            escape(EMPTY_STATE_MESSAGE)
        );
    }

    let mut out = String::from("<div class=\"hook-grid\">\n");
    for hook in hooks {
        out.push_str(&render_card(hook));
        out.push('\n');
    }
    out.push_str("</div>");
    out
}

/// Render one card. The `data-hook-id` attribute carries the card key.
pub fn render_card(hook: &Hook) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  <article class=\"hook-card\" data-hook-id=\"{}\">",
        escape(&hook.id)
    );
    let _ = writeln!(out, "    <header>");
    let _ = writeln!(out, "      <h3>{}</h3>", escape(&hook.name));
    let _ = writeln!(
        out,
        "      <span class=\"badge {}\">{}</span>",
        hook.badge_tone().css_class(),
        escape(&hook.category)
    );
    let _ = writeln!(out, "    </header>");
    let _ = writeln!(
        out,
        "    <p class=\"hook-description\">{}</p>",
        escape(&hook.description)
    );
    if let Some(author) = hook.attribution() {
        let _ = writeln!(out, "    <p class=\"hook-author\">by {}</p>", escape(author));
    }
    match link::outbound_url(&hook.repo_url) {
        Ok(url) => {
            let _ = writeln!(
                out,
                "    <a class=\"hook-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">View on GitHub</a>",
                escape(url.as_str())
            );
        }
        Err(err) => {
            tracing::debug!(id = %hook.id, error = %err, "rendering inert link");
            let _ = writeln!(
                out,
                "    <span class=\"hook-link hook-link-disabled\">View on GitHub</span>"
            );
        }
    }
    out.push_str("  </article>");
    out
}

/// Escape text for use in element content and double-quoted attributes.
fn escape(text: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn hook(id: &str, category: &str, author: Option<&str>) -> Arc<Hook> {
        Arc::new(Hook {
            id: id.into(),
            name: format!("Hook {id}"),
            category: category.into(),
            description: "Blocks <script> & friends".into(),
            repo_url: format!("https://github.com/example/{id}"),
            author: author.map(Into::into),
            tags: None,
        })
    }

    #[test]
    fn empty_list_renders_empty_state() {
        insta::assert_snapshot!(render_grid(&[]), @r#"
        <div class="hook-empty">
          <p>No hooks found in this category.</p>
        </div>
        "#);
    }

    #[test]
    fn links_open_without_opener_access() {
        let html = render_card(&hook("a", "Security", None));
        assert!(html.contains(r#"href="https://github.com/example/a""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn non_web_urls_render_without_href() {
        for raw in ["javascript:alert(document.cookie)", "file:///etc/passwd", "repo/a"] {
            let mut h = (*hook("a", "Security", None)).clone();
            h.repo_url = raw.into();
            let html = render_card(&h);
            assert!(!html.contains("href="), "{raw} leaked into an href:\n{html}");
            assert!(html.contains(r#"<span class="hook-link hook-link-disabled">"#));
        }
    }

    #[test]
    fn text_is_escaped() {
        let html = render_card(&hook("a", "Security", None));
        assert!(html.contains("Blocks &lt;script&gt; &amp; friends"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn author_paragraph_only_when_present() {
        assert!(render_card(&hook("a", "Logging", Some("ada"))).contains("by ada"));
        assert!(!render_card(&hook("a", "Logging", None)).contains("hook-author"));
        assert!(!render_card(&hook("a", "Logging", Some(""))).contains("hook-author"));
    }

    #[test]
    fn badge_class_falls_back_for_unknown_category() {
        assert!(render_card(&hook("a", "Security", None)).contains("badge badge-red"));
        assert!(render_card(&hook("d", "Secuirty", None)).contains("badge badge-neutral"));
    }

    #[test]
    fn grid_keeps_order_and_keys_cards_by_id() {
        let html = render_grid(&[hook("a", "Security", None), hook("c", "Security", None)]);
        let a = html.find(r#"data-hook-id="a""#).unwrap_or(usize::MAX);
        let c = html.find(r#"data-hook-id="c""#).unwrap_or(0);
        assert!(a < c);
    }
}
