//! # Editing Helpers
//!
//! Pure-string formatting insertion for an editor toolbar: wrap the current
//! selection in inline style markers, or prefix a heading marker. No buffer
//! or cursor model lives here; callers pass the content and a byte-range
//! selection and get the new content back.

use std::ops::Range;

/// A toolbar formatting action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormattingAction {
    Bold,
    Italic,
    Strikethrough,
    Heading,
}

impl FormattingAction {
    /// The marker placed on each side of a wrapped selection.
    fn marker(self) -> &'static str {
        match self {
            FormattingAction::Bold => "**",
            FormattingAction::Italic => "*",
            FormattingAction::Strikethrough => "~~",
            FormattingAction::Heading => "#",
        }
    }

    /// The text inserted when nothing is selected.
    fn template(self) -> &'static str {
        match self {
            FormattingAction::Bold => "**Bold**",
            FormattingAction::Italic => "*Italic*",
            FormattingAction::Strikethrough => "~~Strike~~",
            FormattingAction::Heading => "# Heading",
        }
    }
}

/// Applies a formatting action to `content` at the given byte-range
/// selection, returning the new content.
///
/// A non-empty selection is wrapped in the action's markers; `Heading`
/// instead inserts `# ` at the selection start. An empty selection inserts
/// the action's template text. The selection is clamped to the content and
/// must fall on character boundaries.
pub fn apply_formatting(content: &str, selection: Range<usize>, action: FormattingAction) -> String {
    let start = selection.start.min(content.len());
    let end = selection.end.clamp(start, content.len());

    let mut out = String::with_capacity(content.len() + 16);
    out.push_str(&content[..start]);

    if action == FormattingAction::Heading {
        out.push_str(&format!("{} ", action.marker()));
        out.push_str(&content[start..]);
        return out;
    }

    if start == end {
        out.push_str(action.template());
    } else {
        out.push_str(action.marker());
        out.push_str(&content[start..end]);
        out.push_str(action.marker());
    }
    out.push_str(&content[end..]);
    out
}
