//! Java class-body composer for Weld query pipelines.
//!
//! A query plan spanning several data sources is compiled by several
//! independent generators, each emitting its own slice of Java source text.
//! This crate welds those slices into one compilable class: callers submit
//! each fragment under a structural [`Category`], and
//! [`ClassBodyComposer::render`] emits the complete class in fixed
//! structural order — imports, the class declaration with its constructor,
//! nested types, methods, and an execution routine holding the statements.
//!
//! The composer does not parse or validate the fragments it is handed; it is
//! purely a collection-and-ordering engine. The fixed textual constants of
//! the output format live in [`Skeleton`].

mod category;
mod composer;
mod error;
mod sections;
mod skeleton;

pub use category::Category;
pub use composer::ClassBodyComposer;
pub use error::{Error, Result};
pub use skeleton::Skeleton;
