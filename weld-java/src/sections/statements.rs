//! Statement section: the body of the generated execution routine.

use weld_codegen::CodeBuilder;

use crate::skeleton::Skeleton;

/// Accumulates executable statements in submission order and renders them
/// inside the fixed execution routine.
#[derive(Debug, Clone, Default)]
pub(crate) struct StatementSection {
    statements: Vec<String>,
}

impl StatementSection {
    pub(crate) fn absorb(&mut self, fragments: impl IntoIterator<Item = String>) {
        self.statements.extend(fragments);
    }

    /// Render the execution routine: opening, temporary declaration, each
    /// statement in stored order, closing brace.
    pub(crate) fn render(&self, skeleton: &Skeleton, builder: CodeBuilder) -> CodeBuilder {
        builder
            .blank()
            .indent()
            .indent()
            .line(&format!("public void {}(){{", skeleton.exec_method))
            .indent()
            .line(&format!("{} {};", skeleton.temp_row_type, skeleton.temp_var))
            .each(&self.statements, |b, stmt| b.line(stmt))
            .dedent()
            .line("}")
            .dedent()
            .dedent()
    }
}
