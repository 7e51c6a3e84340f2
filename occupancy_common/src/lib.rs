//! Shared pieces of the table occupancy pipeline: the record model,
//! aggregate statistics, the per-image result store, and the asynchronous
//! detection provider boundary with its canned implementation.

pub mod classify;
pub mod mock;
pub mod provider;
pub mod record;
pub mod stats;
pub mod store;
