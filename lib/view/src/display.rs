use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// A row ready for display, mapping variable names to rendered values.
pub type DisplayRow = BTreeMap<String, DisplayValue>;

/// HTML that is already escaped and must be emitted as is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    /// Wraps `html` without escaping it. The caller is responsible for its safety.
    pub fn from_trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Markup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A rendered value of a [`DisplayRow`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayValue {
    /// Plain text. Renderers must escape it.
    Text(String),
    /// Safe markup, e.g. a link to another resource. Renderers must not escape it again.
    Markup(Markup),
}

impl DisplayValue {
    pub fn as_str(&self) -> &str {
        match self {
            DisplayValue::Text(text) => text,
            DisplayValue::Markup(markup) => markup.as_str(),
        }
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, DisplayValue::Markup(_))
    }

    /// Returns the value as HTML, escaping plain text.
    pub fn to_html(&self) -> String {
        match self {
            DisplayValue::Text(text) => escape_html(text),
            DisplayValue::Markup(markup) => markup.as_str().to_owned(),
        }
    }
}

/// Escapes the characters that are significant in HTML text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href='x'>"Tom & Jerry"</a>"#),
            "&lt;a href=&#39;x&#39;&gt;&#34;Tom &amp; Jerry&#34;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn only_text_is_escaped_for_html() {
        let text = DisplayValue::Text("<http://example.com/>".to_owned());
        let markup = DisplayValue::Markup(Markup::from_trusted("<a href='/x'>x</a>"));

        assert_eq!(text.to_html(), "&lt;http://example.com/&gt;");
        assert_eq!(markup.to_html(), "<a href='/x'>x</a>");
        assert!(markup.is_markup());
    }

    #[test]
    fn serializes_with_kind_tag() -> Result<(), serde_json::Error> {
        let text = DisplayValue::Text("dc:title".to_owned());
        let markup = DisplayValue::Markup(Markup::from_trusted("<a href='/x'>x</a>"));

        assert_eq!(serde_json::to_string(&text)?, r#"{"text":"dc:title"}"#);
        assert_eq!(
            serde_json::to_string(&markup)?,
            r#"{"markup":"<a href='/x'>x</a>"}"#
        );
        Ok(())
    }
}
