//! Nested type section: inner class and interface declarations.

use weld_codegen::CodeBuilder;

/// Accumulates nested type declarations in submission order.
#[derive(Debug, Clone, Default)]
pub(crate) struct NestedTypeSection {
    declarations: Vec<String>,
}

impl NestedTypeSection {
    pub(crate) fn absorb(&mut self, fragments: impl IntoIterator<Item = String>) {
        self.declarations.extend(fragments);
    }

    /// Render each declaration verbatim, one per line, in stored order.
    pub(crate) fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.each(&self.declarations, |b, decl| b.line(decl))
    }
}
