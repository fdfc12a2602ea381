//! Partial styles and the merge rules components use to layer them.
//!
//! Components build a list of fragments (their defaults, state-dependent
//! fragments and caller overrides) and resolve it left to right: a field
//! set by a later fragment replaces the earlier value, absent fragments
//! contribute nothing.

mod fragment;
pub use fragment::*;

mod apply;
pub use apply::*;

mod schema;
pub use schema::*;
