//! Per-category fragment accumulators.
//!
//! Each section owns every fragment submitted under one [`Category`] and
//! knows how to render its slice of the output. Two disciplines exist:
//! imports collapse duplicates into a set, everything else is an ordered
//! list that preserves submission order.
//!
//! [`Category`]: crate::Category

mod class_header;
mod imports;
mod methods;
mod nested_types;
mod statements;

pub(crate) use class_header::ClassHeaderSection;
pub(crate) use imports::ImportSection;
pub(crate) use methods::MethodSection;
pub(crate) use nested_types::NestedTypeSection;
pub(crate) use statements::StatementSection;
