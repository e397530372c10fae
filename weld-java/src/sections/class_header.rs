//! Class header section: the opening declaration and constructor.

use weld_codegen::CodeBuilder;

use crate::error::{Error, Result};
use crate::skeleton::Skeleton;

/// Holds the class name and renders the declaration that wraps every other
/// section: the opening line and constructor precede the rest of the output,
/// the closing brace follows it.
#[derive(Debug, Clone, Default)]
pub(crate) struct ClassHeaderSection {
    class_name: Option<String>,
}

impl ClassHeaderSection {
    /// Absorb a class name submission.
    ///
    /// The first fragment of the call becomes the class name; re-submission
    /// silently overwrites (last write wins, matching upstream generators
    /// that refine the name late in a pass). Submitting no fragments at all
    /// is a caller defect.
    pub(crate) fn absorb(&mut self, fragments: impl IntoIterator<Item = String>) -> Result<()> {
        let name = fragments
            .into_iter()
            .next()
            .ok_or_else(Error::missing_class_name)?;
        self.class_name = Some(name);
        Ok(())
    }

    /// Current class name, or the skeleton's placeholder if never submitted.
    pub(crate) fn name<'a>(&'a self, skeleton: &'a Skeleton) -> &'a str {
        self.class_name
            .as_deref()
            .unwrap_or(&skeleton.default_class_name)
    }

    /// Render the opening declaration and the fixed constructor.
    pub(crate) fn render_open(&self, skeleton: &Skeleton, builder: CodeBuilder) -> CodeBuilder {
        let name = self.name(skeleton);
        // The trailing space after `{` is part of the format contract.
        builder
            .blank()
            .line(&format!(
                "public class {name} extends {} {{ ",
                skeleton.base_class
            ))
            .indent()
            .indent()
            .line(&format!(
                "public {name}({} {}){{",
                skeleton.session_type, skeleton.session_param
            ))
            .indent()
            .line(&format!("super({});", skeleton.session_param))
            .dedent()
            .line("}")
            .dedent()
            .dedent()
    }

    /// Render the closing brace of the class declaration.
    pub(crate) fn render_close(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.line("}")
    }
}
