//! Plain-text extraction from markdown sources, so markup characters never
//! reach the tokenizer as delimiters around phantom tokens.

use pulldown_cmark::{Event, Parser, TagEnd};

/// Strip markdown markup, keeping the visible text. Block boundaries become
/// newlines so words from adjacent blocks don't fuse.
pub fn extract_text(markdown: &str) -> String {
    let mut out = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => out.push_str(&t),
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            Event::End(
                TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item | TagEnd::CodeBlock,
            ) => out.push('\n'),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_emphasis_stripped() {
        let text = extract_text("# The Fox\n\nA *quick* **brown** fox.");
        assert!(text.contains("The Fox"));
        assert!(text.contains("quick brown fox."));
        assert!(!text.contains('#'));
        assert!(!text.contains('*'));
    }

    #[test]
    fn test_link_text_kept_url_dropped() {
        let text = extract_text("see [the fox](https://example.com/fox)");
        assert!(text.contains("the fox"));
        assert!(!text.contains("example.com"));
    }

    #[test]
    fn test_inline_code_kept() {
        let text = extract_text("run `fox --fast` now");
        assert!(text.contains("fox --fast"));
        assert!(!text.contains('`'));
    }

    #[test]
    fn test_blocks_do_not_fuse() {
        let text = extract_text("fox\n\ndog");
        assert!(text.contains("fox\n"));
        assert!(!text.contains("foxdog"));
    }
}
