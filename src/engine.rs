//! Matching engine.
//!
//! The engine is split into focused submodules under `src/engine/`; this file
//! wires them together and re-exports the public surface.
//!
//! ## How the parts work together
//!
//! ```text
//! PatternSpec (all)  ──┐
//!                      │  PatternTable::from_specs        (table.rs)
//!                      │    - validate, expand variants
//!                      │    - Grammar::compile            (grammar.rs)
//!                      │    - PrefixRule::derive          (prefix.rs)
//!                      └──────────────┬──────────────
//!                                     │
//! input ── normalize + InputShape::scan (prefix.rs)
//!          ShapeKey::of when a session is given (session.rs)
//!                                     │
//!                                     v
//!                         Matcher::run (matcher.rs)
//!                           - session keys first, then table order
//!                           - locale filter
//!                           - prefix rule (cheap)
//!                           - grammar (regex captures)
//!                           - OutputTemplate::assemble (assemble.rs)
//!                                     │
//!                                     v
//!                         MatchResult + MatchMetrics (metrics.rs)
//! ```
//!
//! The table is built once and never mutated, so a single table can serve
//! any number of threads. All adaptive state lives in a caller-owned
//! [`Session`].
//!
//! ## Responsibilities by module
//!
//! - `table.rs`: validates authored specs, expands them into variants and
//!   keeps them in deterministic trial order.
//! - `grammar.rs`: compiles a token list into an anchored regex, extracts
//!   fields, and renders values back into text.
//! - `prefix.rs`: input normalization, the single-pass input scan, and the
//!   conservative per-pattern prefix rule.
//! - `matcher.rs`: trial order and the match loop.
//! - `assemble.rs`: year rules and calendar validation.
//! - `session.rs`: shape keys and the per-session MRU cache.
//! - `metrics.rs`: per-call counters and the result type.
//!
//! ## Debugging
//!
//! Every attempted pattern is reported as a `tracing` event at `trace`
//! level; the winner (or the miss) at `debug` level.

#[path = "engine/assemble.rs"]
mod assemble;
#[path = "engine/grammar.rs"]
mod grammar;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/prefix.rs"]
mod prefix;
#[path = "engine/session.rs"]
mod session;
#[path = "engine/table.rs"]
mod table;

pub use assemble::year_from;
pub use grammar::Grammar;
pub use metrics::{MatchMetrics, MatchResult};
pub use prefix::{Delims, InputShape, LeadClass, PrefixRule, normalize};
pub use session::{PatternCounter, Session, SessionConfig, SessionReport, ShapeKey};
pub use table::{LoadReport, PatternDefinition, PatternTable};
