//! # Rendered Document Structure
//!
//! The output of a render: included, substituted sections in their
//! original order, bucketed into header/body/footer, with the applicable
//! legal clauses and the execution instructions for the will type.

use serde::{Deserialize, Serialize};

use testa_core::{JurisdictionCode, LanguageCode, WillType};
use testa_template::{ExecutionInstructions, TemplateId};

/// One included section after substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSection {
    pub id: String,
    pub title: String,
    pub text: String,
}

/// One applicable legal clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedClause {
    pub id: String,
    pub legal_basis: String,
    pub text: String,
}

/// A fully rendered document structure. Producing PDF bytes or paginated
/// output from this is an external renderer's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub template_id: TemplateId,
    pub template_version: String,
    pub jurisdiction: JurisdictionCode,
    pub will_type: WillType,
    pub language: LanguageCode,
    pub header: Vec<RenderedSection>,
    pub body: Vec<RenderedSection>,
    pub footer: Vec<RenderedSection>,
    pub clauses: Vec<RenderedClause>,
    pub execution: ExecutionInstructions,
}

impl RenderedDocument {
    /// All included sections in document order.
    pub fn sections(&self) -> impl Iterator<Item = &RenderedSection> {
        self.header
            .iter()
            .chain(self.body.iter())
            .chain(self.footer.iter())
    }

    /// Assemble the plain-text form of the document. Deterministic for
    /// identical inputs; this is the text the assembler checksums.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for section in self.sections() {
            out.push_str(&section.title);
            out.push_str("\n\n");
            out.push_str(&section.text);
            out.push_str("\n\n");
        }
        for clause in &self.clauses {
            out.push_str(&clause.text);
            out.push_str("\n(");
            out.push_str(&clause.legal_basis);
            out.push_str(")\n\n");
        }
        out
    }

    /// Word count of the plain-text form.
    pub fn word_count(&self) -> usize {
        self.to_text().split_whitespace().count()
    }
}
