//! Line classifier for inference-engine trace records.
//!
//! Each line either matches one of the fixed record shapes below, or is
//! unrecognized and dropped by the caller. Shapes are whitespace-delimited
//! with a literal tag first; field counts are exact per tag.
//!
//! ```text
//! addType {typeset} {type}
//! addConstraint {typeset} {constraint} {constraint-kind}
//! resolve {constraint} {type}
//! analyze {loc}
//! bytecodeType {loc}: {type}
//! typeSet {typeset} ...
//! ```
//!
//! The raw spew dialect is accepted too: a leading `[infer]` marker and a
//! trailing `:` on the tag, so `[infer] addType: T1 int` classifies the
//! same as `addType T1 int`.

use logos::Logos;

/// A classified trace record.
///
/// Records are immutable once produced; their order in the trace is
/// semantically significant and preserved by the scraper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// `{type}` was recorded into `{target}`.
    AddType { target: String, ty: String },
    /// A constraint edge was created; `source` is its origin-side typeset.
    AddConstraint {
        source: String,
        constraint: String,
        kind: String,
    },
    /// `{constraint}` propagated `{type}`.
    Resolve { constraint: String, ty: String },
    /// Static analysis ran at `{loc}`.
    Analyze { loc: String },
    /// `{type}` was observed at `{loc}` in executed bytecode.
    BytecodeType { loc: String, ty: String },
    /// Declares `{typeset}`.
    TypeSet { typeset: String },
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\f]+")]
enum Token {
    #[token("[infer]")]
    Marker,

    #[regex("addType:?")]
    AddType,

    #[regex("addConstraint:?")]
    AddConstraint,

    #[regex("resolve:?")]
    Resolve,

    #[regex("analyze:?")]
    Analyze,

    #[regex("bytecodeType:?")]
    BytecodeType,

    #[regex("typeSet:?")]
    TypeSet,

    #[regex(r"[^ \t\r\f]+")]
    Word,
}

/// Lex one line into `(kind, text)` pairs.
///
/// The catch-all word pattern covers every non-whitespace fragment, so a
/// lex error cannot occur for real input; bail to "unrecognized" anyway.
fn tokenize(line: &str) -> Option<Vec<(Token, &str)>> {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        tokens.push((token.ok()?, lexer.slice()));
    }

    Some(tokens)
}

/// Classify one trace line, or report it unrecognized (`None`).
///
/// Pure function over the line; unrecognized covers foreign diagnostics,
/// malformed records, and wrong field counts alike. The caller drops such
/// lines without error.
pub fn classify(line: &str) -> Option<Op> {
    let tokens = tokenize(line)?;
    let mut tokens = &tokens[..];

    if let [(Token::Marker, _), rest @ ..] = tokens {
        tokens = rest;
    }

    // Tag position is matched by token kind; field positions accept any
    // token and take its text, so a type literally named `resolve` still
    // classifies.
    match tokens {
        [(Token::AddType, _), (_, target), (_, ty)] => Some(Op::AddType {
            target: (*target).to_owned(),
            ty: (*ty).to_owned(),
        }),
        [(Token::AddConstraint, _), (_, source), (_, constraint), (_, kind)] => {
            Some(Op::AddConstraint {
                source: (*source).to_owned(),
                constraint: (*constraint).to_owned(),
                kind: (*kind).to_owned(),
            })
        }
        [(Token::Resolve, _), (_, constraint), (_, ty)] => Some(Op::Resolve {
            constraint: (*constraint).to_owned(),
            ty: (*ty).to_owned(),
        }),
        [(Token::Analyze, _), (_, loc)] => Some(Op::Analyze {
            loc: (*loc).to_owned(),
        }),
        // The location field carries a mandatory trailing colon.
        [(Token::BytecodeType, _), (_, loc), (_, ty)] => {
            loc.strip_suffix(':').map(|loc| Op::BytecodeType {
                loc: loc.to_owned(),
                ty: (*ty).to_owned(),
            })
        }
        [(Token::TypeSet, _), (_, typeset), ..] => Some(Op::TypeSet {
            typeset: (*typeset).to_owned(),
        }),
        _ => None,
    }
}
