/// Escapes text for use in HTML element content and quoted attribute values.
pub fn html_escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        let input = "<script>alert('XSS')</script>";
        assert_eq!(
            html_escape(input),
            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_html_escape_ampersand_first() {
        assert_eq!(html_escape("A & B"), "A &amp; B");
        assert_eq!(html_escape("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_html_escape_attribute_quotes() {
        assert_eq!(
            html_escape("https://x.test/\" onclick=\"x"),
            "https://x.test/&quot; onclick=&quot;x"
        );
    }
}
