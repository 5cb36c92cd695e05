//! Text clean-up applied to generated task content before it is rendered.
//!
//! The generation service emits markdown with a few quirks: escaped newlines
//! arrive as the two characters `\n`, bold markers are sprinkled through the
//! text, sub-steps are labelled `Subtask N`, and links follow the convention
//! `Resource: Name - https://url` instead of markdown link syntax.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static RE_SUBTASK_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)- Subtask \d+:").expect("valid subtask label regex"));

static RE_SUBTASK_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[Subtask \d+\]").expect("valid subtask tag regex"));

static RE_RESOURCE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Resource: (.*?) - (https?://[^\s]+)").expect("valid resource link regex")
});

/// Turn literal `\n` escape sequences into real line breaks.
pub fn unescape_newlines(text: &str) -> Cow<'_, str> {
    if text.contains("\\n") {
        Cow::Owned(text.replace("\\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Strip `**` bold markers.
pub fn strip_bold(text: &str) -> Cow<'_, str> {
    if text.contains("**") {
        Cow::Owned(text.replace("**", ""))
    } else {
        Cow::Borrowed(text)
    }
}

/// Clean a task title: unescape newlines and strip bold markers.
pub fn format_title(title: &str) -> String {
    strip_bold(&unescape_newlines(title)).into_owned()
}

/// Fully format task content for rendering.
///
/// Besides the title clean-up this collapses `- Subtask N:` list labels to a
/// bare `-`, drops `[Subtask N]` tags and rewrites `Resource: Name - URL`
/// into a markdown link.
///
/// ```rust
/// use roadmap_core::content::format_content;
///
/// let raw = r"- Subtask 1: Install **Python**\n- Resource: Docs - https://docs.python.org";
/// assert_eq!(
///     format_content(raw),
///     "- Install Python\n- Resource: [Docs](https://docs.python.org)"
/// );
/// ```
pub fn format_content(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }

    let text = format_title(content);
    let text = RE_SUBTASK_LABEL.replace_all(&text, "-");
    let text = RE_SUBTASK_TAG.replace_all(&text, "");
    RE_RESOURCE_LINK
        .replace_all(&text, "Resource: [${1}](${2})")
        .into_owned()
}
