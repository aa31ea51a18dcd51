//! Two-pass graph construction over classified trace records.
//!
//! The trace carries no explicit edge records: a `resolve`, `analyze`, or
//! `bytecodeType` record explains the pending `addType` records accumulated
//! before it. The first pass allocates every typeset and constraint and
//! retains the recognized records in trace order; the second pass replays
//! that order with an explicit pending-add queue and binds each add to the
//! record that explains it.
//!
//! Allocation must complete before resolution starts: an `addType` may
//! target a typeset declared further down the trace, and a `resolve` may
//! reference a constraint it precedes.

use typetrail_core::{Constraint, Model, Origin, TypeSource};

use crate::ScrapeError;
use crate::classify::{Op, classify};

/// A retained record paired with its 1-based trace line number.
#[derive(Debug, Clone)]
struct Event {
    line: usize,
    op: Op,
}

/// An `addType` awaiting the record that explains it.
#[derive(Debug, Clone, Copy)]
struct PendingAdd<'a> {
    target: &'a str,
    ty: &'a str,
}

/// Build a provenance model from one raw trace.
///
/// Unrecognized lines are dropped; structural violations in the recognized
/// records fail the whole batch and no model is returned.
pub fn scrape(trace: &str) -> Result<Model, ScrapeError> {
    let mut model = Model::new();
    let mut events = Vec::new();

    // Allocation pass: typesets and constraints exist before anything
    // references them. Never fails.
    for (idx, line) in trace.lines().enumerate() {
        let Some(op) = classify(line) else { continue };

        match &op {
            Op::TypeSet { typeset } => model.insert_typeset(typeset.clone()),
            Op::AddConstraint {
                source,
                constraint,
                kind,
            } => model.insert_constraint(
                constraint.clone(),
                Constraint {
                    kind: kind.clone(),
                    source: source.clone(),
                },
            ),
            _ => {}
        }

        events.push(Event { line: idx + 1, op });
    }

    // Every constraint must flow from a typeset declared somewhere in the
    // trace; later `typeSet` lines count, so check only now.
    for (id, constraint) in model.constraints() {
        if !model.typeset_exists(&constraint.source) {
            return Err(ScrapeError::UnknownConstraintSource {
                constraint: id.clone(),
                typeset: constraint.source.clone(),
            });
        }
    }

    resolve_adds(&mut model, &events)?;
    Ok(model)
}

/// Resolution pass: replay the retained records, attributing each pending
/// `addType` to the explaining record that follows it.
fn resolve_adds(model: &mut Model, events: &[Event]) -> Result<(), ScrapeError> {
    let mut pending: Vec<PendingAdd<'_>> = Vec::new();

    for event in events {
        match &event.op {
            Op::AddType { target, ty } => {
                if !model.typeset_exists(target) {
                    return Err(ScrapeError::UnknownTypeset {
                        line: event.line,
                        typeset: target.clone(),
                    });
                }
                pending.push(PendingAdd {
                    target: target.as_str(),
                    ty: ty.as_str(),
                });
            }
            Op::Resolve { constraint, .. } => {
                // Attribution is unambiguous only with a single add in
                // flight; with zero or several, this resolve tells us
                // nothing reliable and the queue is left as-is.
                if pending.len() != 1 {
                    continue;
                }
                if model.constraint(constraint).is_none() {
                    return Err(ScrapeError::UnknownConstraint {
                        line: event.line,
                        constraint: constraint.clone(),
                    });
                }
                if let Some(add) = pending.pop() {
                    bind(model, add, TypeSource::Constraint(constraint.clone()));
                }
            }
            Op::Analyze { .. } => drain(model, &mut pending, Origin::Static),
            Op::BytecodeType { .. } => drain(model, &mut pending, Origin::Dynamic),
            // Allocation-only records; nothing left to do here.
            Op::TypeSet { .. } | Op::AddConstraint { .. } => {}
        }
    }

    // Leftover adds were never explained; tolerated, not an error.
    Ok(())
}

fn drain(model: &mut Model, pending: &mut Vec<PendingAdd<'_>>, origin: Origin) {
    for add in pending.drain(..) {
        bind(model, add, TypeSource::Origin(origin));
    }
}

fn bind(model: &mut Model, add: PendingAdd<'_>, src: TypeSource) {
    // The target was checked against the typeset registry when queued.
    if let Some(typeset) = model.typeset_mut(add.target) {
        typeset.add_type(add.ty, src);
    }
}
