//! Minimal HTML-safe string helpers for the fragment builders. Everything
//! user-supplied goes through `escape` before landing in a fragment.

/// Escape the five characters with special meaning in HTML text and
/// double-quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// An `<img>` element; attribute values are escaped.
pub fn img(src: &str, attrs: &[(&str, &str)]) -> String {
    let mut out = format!("<img src=\"{}\"", escape(src));
    for (name, value) in attrs {
        out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
    }
    out.push_str(" />");
    out
}

/// An `<a>` element; the href and label are escaped, extra attributes are
/// emitted verbatim-named with escaped values.
pub fn anchor(href: &str, label: &str, attrs: &[(&str, &str)]) -> String {
    let mut out = format!("<a href=\"{}\"", escape(href));
    for (name, value) in attrs {
        out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
    }
    out.push_str(&format!(">{}</a>", escape(label)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape("it's"), "it&#039;s");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_img() {
        assert_eq!(
            img("http://x/a.png", &[("alt", "A & B")]),
            "<img src=\"http://x/a.png\" alt=\"A &amp; B\" />"
        );
    }

    #[test]
    fn test_anchor() {
        assert_eq!(
            anchor("http://x/?a=1&b=2", "label <x>", &[("rel", "nofollow")]),
            "<a href=\"http://x/?a=1&amp;b=2\" rel=\"nofollow\">label &lt;x&gt;</a>"
        );
    }
}
