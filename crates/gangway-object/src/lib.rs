//! gangway-object — weakly-typed cluster objects for scheduling decisions.
//!
//! Job-launching frameworks materialize their topology in resources whose
//! schema is only known at runtime. This crate models those resources the
//! way the decision logic consumes them:
//!
//! - [`Unstructured`] — a group/version/kind selector plus an arbitrary
//!   nested JSON body, with path accessors for nested fields
//! - [`Pod`] — the schedulable unit, reduced to identity, labels, and
//!   annotations
//! - [`ObjectClient`] — async read access to cluster objects, with an
//!   in-memory [`FakeClient`] for tests and single-process wiring
//! - [`keys`] — the well-known label/annotation keys the decisions consume
//!
//! Objects are owned and mutated by the cluster control plane; everything
//! here is read-only and fetched on demand, never cached.

pub mod client;
pub mod error;
pub mod keys;
pub mod pod;
pub mod unstructured;

pub use client::{FakeClient, ObjectClient};
pub use error::{ObjectError, ObjectResult};
pub use pod::Pod;
pub use unstructured::{GroupVersionKind, Unstructured};
