//! Single-threaded push-based observation primitives.
//!
//! # Responsibility
//! - Hold immutable snapshots that observers may retain safely.
//! - Notify listeners synchronously, in registration order, with the final
//!   post-mutation snapshot.
//! - Recompute derived views eagerly whenever a source publishes.
//!
//! # Invariants
//! - Snapshots are `Rc<T>`; a published snapshot is never mutated.
//! - Every publish bumps the revision by exactly one.
//! - A listener is never re-entered while it is running.

mod derived;
mod queue;
mod writable;

pub use derived::Derived;
pub use writable::{SubscriptionId, WeakWritable, Writable};
