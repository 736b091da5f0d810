use std::collections::HashMap;

/// One parsed skill document: front-matter fields plus the Markdown body.
///
/// Produced by [`parse`], which is total — a document with no header, a
/// malformed header, or no content at all still yields a `ParsedDocument`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Front-matter `key: value` fields. Empty when the document has no
    /// header or the header is malformed.
    pub fields: HashMap<String, String>,
    /// The document with the header stripped and whitespace trimmed. Never
    /// contains the `---` delimiter lines.
    pub body: String,
}

impl ParsedDocument {
    /// Look up a header field, treating an empty value as absent.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }
}

/// Split a skill document into front-matter fields and body.
///
/// A header is recognized only when the trimmed text starts with a `---`
/// line that is later closed by another `---` line. Between the delimiters,
/// each line is split on its first colon; lines with no colon or a leading
/// colon are ignored. Values lose one optional layer of matching single or
/// double quotes.
///
/// Any deviation — missing opening delimiter, missing closing delimiter —
/// means "no header": the whole trimmed input becomes the body. This
/// function never fails; the signature is the fail-soft contract.
pub fn parse(raw: &str) -> ParsedDocument {
    let trimmed = raw.trim();

    if !trimmed.starts_with("---") {
        return ParsedDocument {
            fields: HashMap::new(),
            body: trimmed.to_string(),
        };
    }

    let after_open = &trimmed[3..];
    let Some(close) = after_open.find("\n---") else {
        // Unclosed header: degrade to a header-less document.
        return ParsedDocument {
            fields: HashMap::new(),
            body: trimmed.to_string(),
        };
    };

    let header = &after_open[..close];
    let body = after_open[close + 4..].trim().to_string();

    let mut fields = HashMap::new();
    for line in header.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        fields.insert(key.to_string(), unquote(value.trim()));
    }

    ParsedDocument { fields, body }
}

/// Remove one layer of surrounding quotes from a header value.
fn unquote(s: &str) -> String {
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"'))
            || (s.starts_with('\'') && s.ends_with('\'')))
    {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_header() {
        let content = r#"---
name: code-review
description: Reviews code for security and best practices
---

# Code Review

1. Scan for vulnerabilities
2. Check for anti-patterns
"#;
        let doc = parse(content);
        assert_eq!(doc.field("name"), Some("code-review"));
        assert_eq!(
            doc.field("description"),
            Some("Reviews code for security and best practices")
        );
        assert!(doc.body.starts_with("# Code Review"));
        assert!(!doc.body.contains("---"));
    }

    #[test]
    fn no_header_yields_trimmed_body() {
        let content = "  \n# Just Markdown\n\nNo front matter here.\n";
        let doc = parse(content);
        assert!(doc.fields.is_empty());
        assert_eq!(doc.body, "# Just Markdown\n\nNo front matter here.");
    }

    #[test]
    fn unclosed_header_degrades_to_body() {
        let content = "---\nname: broken\n\nNo closing delimiter";
        let doc = parse(content);
        assert!(doc.fields.is_empty());
        assert_eq!(doc.body, content);
    }

    #[test]
    fn empty_input() {
        let doc = parse("");
        assert!(doc.fields.is_empty());
        assert_eq!(doc.body, "");
    }

    #[test]
    fn splits_on_first_colon_only() {
        let content = "---\nurl: https://example.com/path\n---\nBody.";
        let doc = parse(content);
        assert_eq!(doc.field("url"), Some("https://example.com/path"));
    }

    #[test]
    fn lines_without_colon_are_ignored() {
        let content = "---\nname: ok\njust some text\n: leading colon\n---\nBody.";
        let doc = parse(content);
        assert_eq!(doc.fields.len(), 1);
        assert_eq!(doc.field("name"), Some("ok"));
    }

    #[test]
    fn one_layer_of_quotes_stripped() {
        let content = "---\nname: \"quoted\"\ndescription: 'single'\nnote: \"'nested'\"\n---\nBody.";
        let doc = parse(content);
        assert_eq!(doc.field("name"), Some("quoted"));
        assert_eq!(doc.field("description"), Some("single"));
        // Only the outer layer comes off.
        assert_eq!(doc.field("note"), Some("'nested'"));
    }

    #[test]
    fn mismatched_quotes_kept() {
        let content = "---\nname: \"mismatch'\n---\nBody.";
        let doc = parse(content);
        assert_eq!(doc.field("name"), Some("\"mismatch'"));
    }

    #[test]
    fn empty_field_reads_as_absent() {
        let content = "---\nname: real\ndescription:\n---\nBody.";
        let doc = parse(content);
        assert_eq!(doc.field("description"), None);
        assert_eq!(doc.fields.get("description").map(String::as_str), Some(""));
    }
}
