//! Typeset and constraint registries plus the provenance walk.
//!
//! Registries use insertion-ordered maps so that rebuilding a model from
//! the same trace yields identical iteration order everywhere.

use indexmap::{IndexMap, IndexSet};

use crate::Origin;

/// Identifier of a typeset, as spelled in the trace.
pub type TypesetId = String;

/// Identifier of a constraint, as spelled in the trace.
pub type ConstraintId = String;

/// A type name, as spelled in the trace.
pub type TypeName = String;

/// A directed provenance edge: the owning typeset's content flows from
/// `source`, via a relation of `kind`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Constraint {
    /// Free-form relation tag (e.g. `inherits`, `subset`).
    pub kind: String,
    /// The typeset on the origin side of the edge.
    pub source: TypesetId,
}

/// Where a recorded type came from: an edge to chase, or a terminal tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSource {
    /// The type propagated through this constraint.
    Constraint(ConstraintId),
    /// The type was introduced here.
    Origin(Origin),
}

/// A named collection of types, each paired with the record of how it was
/// introduced. At most one record per type name; later writes during
/// construction overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSet {
    types: IndexMap<TypeName, TypeSource>,
}

impl TypeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where `ty` came from. Last write wins.
    pub fn add_type(&mut self, ty: impl Into<TypeName>, src: TypeSource) {
        self.types.insert(ty.into(), src);
    }

    pub fn has_type(&self, ty: &str) -> bool {
        self.types.contains_key(ty)
    }

    /// The recorded source for `ty`, if any.
    pub fn type_from(&self, ty: &str) -> Option<&TypeSource> {
        self.types.get(ty)
    }

    /// Member type names, in insertion order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Provenance answer for one `(typeset, type)` pair.
///
/// `path` lists the constraints in discovery order: the queried typeset's
/// own edge first, the edge nearest the origin last. `origin` classifies
/// the terminus. Absence of provenance is not representable here; see
/// [`Model::path_of`], which returns `None` for that case instead.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Provenance<'m> {
    pub path: Vec<&'m Constraint>,
    pub origin: Origin,
}

/// The built flows-to graph for one trace: typeset and constraint
/// registries, read-only once construction finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    typesets: IndexMap<TypesetId, TypeSet>,
    constraints: IndexMap<ConstraintId, Constraint>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh empty typeset under `id`, discarding any prior
    /// typeset recorded under the same identifier.
    pub fn insert_typeset(&mut self, id: impl Into<TypesetId>) {
        self.typesets.insert(id.into(), TypeSet::new());
    }

    /// Allocate a constraint under `id`, discarding any prior one.
    pub fn insert_constraint(&mut self, id: impl Into<ConstraintId>, constraint: Constraint) {
        self.constraints.insert(id.into(), constraint);
    }

    pub fn typeset(&self, id: &str) -> Option<&TypeSet> {
        self.typesets.get(id)
    }

    pub fn typeset_mut(&mut self, id: &str) -> Option<&mut TypeSet> {
        self.typesets.get_mut(id)
    }

    pub fn constraint(&self, id: &str) -> Option<&Constraint> {
        self.constraints.get(id)
    }

    /// All typesets, in trace declaration order.
    pub fn typesets(&self) -> &IndexMap<TypesetId, TypeSet> {
        &self.typesets
    }

    /// All constraints, in trace declaration order.
    pub fn constraints(&self) -> &IndexMap<ConstraintId, Constraint> {
        &self.constraints
    }

    pub fn typeset_exists(&self, id: &str) -> bool {
        self.typesets.contains_key(id)
    }

    /// Member types of a typeset, in insertion order. `None` if the typeset
    /// is unknown.
    pub fn types_tracked_by(&self, id: &str) -> Option<impl Iterator<Item = &str>> {
        self.typesets.get(id).map(TypeSet::type_names)
    }

    /// Walk the recorded provenance of `ty` in `typeset` back to its origin.
    ///
    /// Returns `None` when there is no information at all: the typeset is
    /// unknown, or it tracks no record for `ty`. That outcome is distinct
    /// from a successful walk ending in [`Origin::Unknown`], which means
    /// "traced, but the terminus was never classified".
    ///
    /// Each step follows the constraint recorded for the *same* type name
    /// in the constraint's source typeset. A missing record along the way
    /// (dangling lookup) and a revisited typeset (cycle in the input) both
    /// terminate the walk as [`Origin::Unknown`].
    pub fn path_of(&self, typeset: &str, ty: &str) -> Option<Provenance<'_>> {
        let mut current = self.typesets.get(typeset)?.type_from(ty)?;

        let mut path = Vec::new();
        let mut visited: IndexSet<&str> = IndexSet::new();
        visited.insert(typeset);

        loop {
            let id = match current {
                TypeSource::Origin(origin) => {
                    return Some(Provenance {
                        path,
                        origin: *origin,
                    });
                }
                TypeSource::Constraint(id) => id,
            };

            let Some(constraint) = self.constraints.get(id) else {
                return Some(Provenance {
                    path,
                    origin: Origin::Unknown,
                });
            };
            path.push(constraint);

            if !visited.insert(constraint.source.as_str()) {
                // Input traces are not verified acyclic; stop instead of
                // chasing the chain forever.
                return Some(Provenance {
                    path,
                    origin: Origin::Unknown,
                });
            }

            match self
                .typesets
                .get(&constraint.source)
                .and_then(|ts| ts.type_from(ty))
            {
                Some(next) => current = next,
                None => {
                    return Some(Provenance {
                        path,
                        origin: Origin::Unknown,
                    });
                }
            }
        }
    }
}
