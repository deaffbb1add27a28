//! Flutter-facing bindings for the Jotter note store.

pub mod api;
