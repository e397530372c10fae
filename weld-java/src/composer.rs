//! The composer facade: routes fragments to sections and renders the class.

use weld_codegen::CodeBuilder;

use crate::category::Category;
use crate::error::Result;
use crate::sections::{
    ClassHeaderSection, ImportSection, MethodSection, NestedTypeSection, StatementSection,
};
use crate::skeleton::Skeleton;

/// Collects generated code fragments and assembles them into one compilable
/// Java class.
///
/// Upstream generators each produce code for their slice of a query. A
/// composer instance collects those fragments per [`Category`] over one
/// generation pass, then [`render`](Self::render) emits the complete class
/// body: imports, the class declaration with its fixed constructor, nested
/// types, methods, and the execution routine holding the statements.
///
/// One composer produces one class; create a fresh instance per unit.
///
/// # Example
///
/// ```
/// use weld_java::{Category, ClassBodyComposer};
///
/// let mut composer = ClassBodyComposer::new();
/// composer.submit(Category::Class, ["Requirement_17"])?;
/// composer.submit(Category::Import, ["import org.apache.spark.sql.Dataset"])?;
/// composer.submit(Category::Statement, ["tmp = spark.sql(\"SELECT 1\");"])?;
///
/// let class = composer.render();
/// assert!(class.contains("public class Requirement_17 extends SparkRequirement"));
/// # Ok::<(), Box<weld_java::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassBodyComposer {
    skeleton: Skeleton,
    imports: ImportSection,
    header: ClassHeaderSection,
    nested_types: NestedTypeSection,
    methods: MethodSection,
    statements: StatementSection,
}

impl ClassBodyComposer {
    /// Create a composer targeting the default (Spark) skeleton.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a composer with an explicit format skeleton.
    pub fn with_skeleton(skeleton: Skeleton) -> Self {
        Self {
            skeleton,
            ..Self::default()
        }
    }

    /// The skeleton this composer renders against.
    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    /// Submit fragments under a category.
    ///
    /// Exactly one section absorbs the fragments; the match is exhaustive
    /// over the closed category set, so a submission can never go unrouted.
    ///
    /// # Errors
    ///
    /// [`Error::MissingClassName`](crate::Error::MissingClassName) if
    /// `category` is [`Category::Class`] and `fragments` is empty.
    pub fn submit<I, S>(&mut self, category: Category, fragments: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fragments = fragments.into_iter().map(Into::into);
        match category {
            Category::Import => self.imports.absorb(fragments),
            Category::Class => self.header.absorb(fragments)?,
            Category::NestedType => self.nested_types.absorb(fragments),
            Category::Method => self.methods.absorb(fragments),
            Category::Statement => self.statements.absorb(fragments),
        }
        Ok(())
    }

    /// Render the complete class from the current section state.
    ///
    /// Reads section state without mutating it: repeated calls with no
    /// intervening [`submit`](Self::submit) produce byte-identical output.
    /// Section order is fixed here — imports first, then the class header
    /// wrapping nested types, methods, and the execution routine.
    pub fn render(&self) -> String {
        let builder = CodeBuilder::java();
        let builder = self.imports.render(builder);
        let builder = self.header.render_open(&self.skeleton, builder);
        let builder = self.nested_types.render(builder);
        let builder = self.methods.render(builder);
        let builder = self.statements.render(&self.skeleton, builder);
        self.header.render_close(builder).build()
    }
}
