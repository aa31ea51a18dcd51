#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for typetrail provenance models.
//!
//! A model is the persistent output of scraping one inference trace:
//! - **Typeset registry**: each typeset maps its member types to the record
//!   of how that type was introduced.
//! - **Constraint registry**: directed provenance edges between typesets.
//!
//! Models are built once, then queried read-only. The query surface
//! ([`Model::path_of`] and friends) walks the constraint chain recorded for
//! a `(typeset, type)` pair back to its origin.

mod model;
mod origin;


pub use model::{
    Constraint, ConstraintId, Model, Provenance, TypeName, TypeSet, TypeSource, TypesetId,
};
pub use origin::Origin;
