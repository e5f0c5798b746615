//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching relayer requests and responses
//! - `convert.rs` — Conversions from wire records into domain results
//! - `client.rs` — Sub-client running the single relayer call for the slice

pub mod asset_pair;
pub mod order;
