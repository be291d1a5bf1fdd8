//! # HTML Conversion
//!
//! Structured HTML form of a rendered document. This is the richest output
//! the core owns; paginating it into a byte-exact PDF is an external
//! renderer's responsibility.

use crate::document::RenderedDocument;

/// Escape the five HTML-significant characters.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
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

fn paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(|p| format!("<p>{}</p>", escape(p).replace('\n', "<br>")))
        .collect::<Vec<_>>()
        .join("\n")
}

impl RenderedDocument {
    /// The HTML form of the document.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<div class=\"will-document\" lang=\"{}\">\n",
            escape(self.language.as_str())
        ));
        for section in self.sections() {
            out.push_str(&format!(
                "<section id=\"{}\">\n<h2>{}</h2>\n{}\n</section>\n",
                escape(&section.id),
                escape(&section.title),
                paragraphs(&section.text)
            ));
        }
        if !self.clauses.is_empty() {
            out.push_str("<section id=\"legal-clauses\">\n");
            for clause in &self.clauses {
                out.push_str(&format!(
                    "<p class=\"clause\">{} <cite>({})</cite></p>\n",
                    escape(&clause.text),
                    escape(&clause.legal_basis)
                ));
            }
            out.push_str("</section>\n");
        }
        out.push_str("</div>\n");
        out
    }
}
