//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate filesystem details from service/business orchestration.
//!
//! # Invariants
//! - Repositories never validate content; the service layer owns that.
//! - Read and delete paths absorb filesystem failures; only writes report them.

pub mod note_repo;
