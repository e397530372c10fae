//! Import section: deduplicated import statements.

use indexmap::IndexSet;
use weld_codegen::CodeBuilder;

/// Accumulates import statements, collapsing duplicates.
///
/// Insertion order is kept, so rendering is deterministic for a given
/// submission sequence even though no order is promised to callers.
#[derive(Debug, Clone, Default)]
pub(crate) struct ImportSection {
    imports: IndexSet<String>,
}

impl ImportSection {
    /// Absorb import texts; already-seen texts are no-ops.
    pub(crate) fn absorb(&mut self, fragments: impl IntoIterator<Item = String>) {
        self.imports.extend(fragments);
    }

    /// Render each import as its own `;`-terminated line.
    pub(crate) fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        self.imports
            .iter()
            .fold(builder, |b, import| b.line(&format!("{import};")))
    }
}
