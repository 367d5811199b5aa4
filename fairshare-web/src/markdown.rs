//! Markdown rendering for generated stories.

use pulldown_cmark::{Event, Parser, TagEnd, html};

/// Render generator Markdown to HTML for display.
#[must_use]
pub fn markdown_to_html(text: &str) -> String {
    let mut out = String::new();
    html::push_html(&mut out, Parser::new(text));
    out
}

/// Flatten generator Markdown to plain text, for the clipboard.
#[must_use]
pub fn markdown_to_plain_text(text: &str) -> String {
    let mut out = String::new();
    for event in Parser::new(text) {
        match event {
            Event::Text(chunk) | Event::Code(chunk) => out.push_str(&chunk),
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item) => out.push('\n'),
            _ => {}
        }
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_emphasis_and_paragraphs() {
        let html = markdown_to_html("A *quiet* morning.\n\nThe trams hummed.");
        assert!(html.contains("<em>quiet</em>"));
        assert_eq!(html.matches("<p>").count(), 2);
    }

    #[test]
    fn plain_text_strips_markup_but_keeps_the_words() {
        let plain = markdown_to_plain_text("# Dawn\n\nA *quiet* morning with `tea`.");
        assert_eq!(plain, "Dawn\nA quiet morning with tea.");
    }

    #[test]
    fn plain_text_joins_soft_wrapped_lines() {
        let plain = markdown_to_plain_text("one\ntwo");
        assert_eq!(plain, "one two");
    }
}
