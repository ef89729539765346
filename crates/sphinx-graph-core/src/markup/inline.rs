//! Inline text formatting helpers.

use crate::markup::attribute::Align;

/// Marks a string as a literal HTML-like label rather than plain text.
pub fn html(s: &str) -> String {
    format!("<{s}>")
}

/// Underline.
pub fn u(s: &str) -> String {
    format!("<U>{s}</U>")
}

/// Overline.
pub fn o(s: &str) -> String {
    format!("<O>{s}</O>")
}

/// Bold.
pub fn b(s: &str) -> String {
    format!("<B>{s}</B>")
}

/// Italic.
pub fn i(s: &str) -> String {
    format!("<I>{s}</I>")
}

/// Strike-through.
pub fn s(s: &str) -> String {
    format!("<S>{s}</S>")
}

/// Subscript.
pub fn sub(s: &str) -> String {
    format!("<SUB>{s}</SUB>")
}

/// Superscript.
pub fn sup(s: &str) -> String {
    format!("<SUP>{s}</SUP>")
}

/// Line break, optionally aligning the line it terminates.
pub fn br(align: Option<Align>) -> String {
    match align {
        Some(align) => format!("<BR ALIGN=\"{align}\" />"),
        None => "<BR/>".to_string(),
    }
}

/// Replaces every newline in `text` with an aligned line break.
pub fn multiline(text: &str, align: Option<Align>) -> String {
    text.replace('\n', &br(align))
}
