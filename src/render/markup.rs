//! Escape-by-default HTML fragments
//!
//! `Markup` holds HTML that is safe to insert into the document. Dynamic text
//! only becomes `Markup` through [`Markup::text`], which escapes it. Raw
//! markup comes from `'static` literals inside this crate, either via
//! [`Markup::raw`] or the [`html!`] macro's template string.
//!
//! ```text
//! html!(r#"<span class="tag">{name}</span>"#, name = skill.name.as_str())
//!                                                   ^ escaped
//! ```

use std::fmt;

use crate::format::format_number;

/// Build `Markup` from a static template with named arguments.
///
/// Every argument goes through [`ToMarkup`], so strings are escaped and
/// nested `Markup` is inserted as-is. Arguments must be passed by name.
macro_rules! html {
    ($template:literal $(, $name:ident = $value:expr)* $(,)?) => {
        $crate::render::markup::Markup::from_trusted(format!(
            $template
            $(, $name = $crate::render::markup::ToMarkup::to_markup($value))*
        ))
    };
}

pub(crate) use html;

/// A fragment of HTML that is safe to insert into the document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Escape text for use in element content or quoted attribute values
    pub fn text(s: &str) -> Self {
        Self(escape(s))
    }

    /// Literal markup written in the source
    pub fn raw(s: &'static str) -> Self {
        Self(s.to_string())
    }

    /// Wrap a string assembled only from static templates and escaped parts
    pub(crate) fn from_trusted(s: String) -> Self {
        Self(s)
    }

    pub fn push(&mut self, other: Markup) {
        self.0.push_str(&other.0);
    }

    pub fn push_text(&mut self, text: &str) {
        self.0.push_str(&escape(text));
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Join fragments with nothing in between
    pub fn concat<I: IntoIterator<Item = Markup>>(parts: I) -> Self {
        parts.into_iter().collect()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = Markup::new();
        for part in iter {
            out.push(part);
        }
        out
    }
}

/// Conversion used by [`html!`] for interpolated values
pub trait ToMarkup {
    fn to_markup(self) -> Markup;
}

impl ToMarkup for Markup {
    fn to_markup(self) -> Markup {
        self
    }
}

impl ToMarkup for &Markup {
    fn to_markup(self) -> Markup {
        self.clone()
    }
}

impl ToMarkup for &str {
    fn to_markup(self) -> Markup {
        Markup::text(self)
    }
}

impl ToMarkup for String {
    fn to_markup(self) -> Markup {
        Markup::text(&self)
    }
}

impl ToMarkup for &String {
    fn to_markup(self) -> Markup {
        Markup::text(self)
    }
}

impl ToMarkup for f64 {
    fn to_markup(self) -> Markup {
        Markup(format_number(self))
    }
}

macro_rules! integer_to_markup {
    ($($t:ty),*) => {
        $(impl ToMarkup for $t {
            fn to_markup(self) -> Markup {
                Markup(self.to_string())
            }
        })*
    };
}

integer_to_markup!(u8, u32, u64, usize, i32, i64);

/// Escape the five HTML-significant characters
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x")</script> & 'y'"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#39;y&#39;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_html_macro_escapes_strings_but_not_markup() {
        let name = "<b>Eve</b>";
        let inner = Markup::raw("<em>ok</em>");
        let out = html!(
            r#"<div title="{title}">{name}{inner}{count}</div>"#,
            title = "a\"b",
            name = name,
            inner = inner,
            count = 3usize,
        );

        assert_eq!(
            out.as_str(),
            r#"<div title="a&quot;b">&lt;b&gt;Eve&lt;/b&gt;<em>ok</em>3</div>"#
        );
    }

    #[test]
    fn test_collect_and_push() {
        let mut out: Markup = vec![Markup::raw("<i>"), Markup::text("&"), Markup::raw("</i>")]
            .into_iter()
            .collect();
        out.push_text("<");

        assert_eq!(out.to_string(), "<i>&amp;</i>&lt;");
        assert!(!out.is_empty());
    }
}
