use std::ops::Range;

use regex::Regex;
use tracing::warn;

use crate::page::host::HostPage;

/// Elements that never have content, so they cannot host the form.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose content is text, never markup.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// An HTML document held as text.
///
/// Containers are located by their `id` attribute; the content between the
/// opening tag and its matching close tag is what gets replaced. Comments
/// and the content of raw-text elements are never searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlPage {
    html: String,
}

impl HtmlPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    pub fn has_container(&self, id: &str) -> bool {
        self.content_range(id).is_some()
    }

    /// Current inner content of the element with `id`.
    pub fn content(&self, id: &str) -> Option<&str> {
        self.content_range(id).map(|r| &self.html[r])
    }

    fn content_range(&self, id: &str) -> Option<Range<usize>> {
        // Same byte offsets as `html`, with hidden text blanked out
        let visible = visible_markup(&self.html)?;

        let id = regex::escape(id);
        let open_pattern = format!(
            r#"(?i)<([a-z][a-z0-9-]*)(?:\s[^>]*)?\sid\s*=\s*(?:"{id}"|'{id}')[^>]*>"#,
            id = id
        );
        let open_re = compile(&open_pattern)?;

        let caps = open_re.captures(&visible)?;
        let open = caps.get(0)?;
        let tag = caps[1].to_ascii_lowercase();

        if open.as_str().ends_with("/>") || VOID_ELEMENTS.contains(&tag.as_str()) {
            return None;
        }

        let content_start = open.end();
        let tag_pattern = format!(r"(?i)<(/?){}(?:\s[^>]*)?>", regex::escape(&tag));
        let tag_re = compile(&tag_pattern)?;

        let mut depth = 1usize;
        for caps in tag_re.captures_iter(&visible[content_start..]) {
            let m = caps.get(0)?;
            if &caps[1] == "/" {
                depth -= 1;
                if depth == 0 {
                    return Some(content_start..content_start + m.start());
                }
            } else if !m.as_str().ends_with("/>") {
                depth += 1;
            }
        }

        // Unclosed container
        None
    }
}

/// Copy of `html` where comments and raw-text element bodies are replaced by
/// spaces of equal byte length.
fn visible_markup(html: &str) -> Option<String> {
    let mut masked = html.to_string();
    blank_matches(&mut masked, r"(?s)<!--.*?(?:-->|\z)", 0)?;
    for tag in RAW_TEXT_ELEMENTS {
        let pattern = format!(r"(?is)<{tag}(?:\s[^>]*)?>(.*?)</{tag}\s*>", tag = tag);
        blank_matches(&mut masked, &pattern, 1)?;
    }
    Some(masked)
}

fn blank_matches(text: &mut String, pattern: &str, group: usize) -> Option<()> {
    let re = compile(pattern)?;
    let ranges: Vec<Range<usize>> = re
        .captures_iter(text)
        .filter_map(|caps| caps.get(group))
        .map(|m| m.range())
        .collect();

    for range in ranges {
        let blank = " ".repeat(range.len());
        text.replace_range(range, &blank);
    }
    Some(())
}

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("could not build container pattern: {}", e);
            None
        }
    }
}

impl HostPage for HtmlPage {
    fn replace_content(&mut self, id: &str, markup: &str) -> bool {
        match self.content_range(id) {
            Some(range) => {
                self.html.replace_range(range, markup);
                true
            }
            None => false,
        }
    }
}
