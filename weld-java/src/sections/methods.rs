//! Method section: complete method declarations.

use weld_codegen::CodeBuilder;

/// Accumulates method declarations in submission order.
#[derive(Debug, Clone, Default)]
pub(crate) struct MethodSection {
    methods: Vec<String>,
}

impl MethodSection {
    pub(crate) fn absorb(&mut self, fragments: impl IntoIterator<Item = String>) {
        self.methods.extend(fragments);
    }

    /// Render each method verbatim, one per line, in stored order.
    pub(crate) fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.each(&self.methods, |b, method| b.line(method))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_order_preserved() {
        let mut section = MethodSection::default();
        section.absorb(["public int two() { return 2; }".to_string()]);
        section.absorb(["public int one() { return 1; }".to_string()]);

        let out = section.render(CodeBuilder::java()).build();
        assert_eq!(
            out,
            "public int two() { return 2; }\npublic int one() { return 1; }\n"
        );
    }
}
