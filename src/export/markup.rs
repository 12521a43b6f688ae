//! Markup helpers shared by the ODC writer

use std::borrow::Cow;

/// Office namespace, bound to the `o:` prefix
pub const OFFICE_NAMESPACE: &str = "urn:schemas-microsoft-com:office:office";
/// ODC namespace, bound to the `odc:` prefix
pub const ODC_NAMESPACE: &str = "urn:schemas-microsoft-com:office:odc";
/// Default HTML namespace of the document and both islands
pub const HTML_NAMESPACE: &str = "http://www.w3.org/TR/REC-html40";

/// Escape free text for an element body or a double-quoted attribute value.
///
/// `&`, `<`, `>`, `"` and `'` become `&amp;`, `&lt;`, `&gt;`, `&quot;` and
/// `&apos;` in a single pass, so no entity produced here is escaped twice.
/// Text without any of those characters is borrowed unchanged.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}

/// Append `<tag>escaped text</tag>` on a new line with the given indent.
pub(crate) fn push_text_element(out: &mut String, indent: &str, tag: &str, text: &str) {
    push_raw_element(out, indent, tag, &escape_text(text));
}

/// Append `<tag>value</tag>` without escaping; only for enum names and numbers.
pub(crate) fn push_raw_element(out: &mut String, indent: &str, tag: &str, value: &str) {
    out.push('\n');
    out.push_str(indent);
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(value);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
