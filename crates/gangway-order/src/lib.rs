//! gangway-order — preemption ordering within a gang.
//!
//! When the scheduler reclaims resources from a running job it must pick
//! victims in an order the job survives: evicting a coordinator first can
//! deadlock or silently corrupt a training run that a worker eviction would
//! only have slowed down. This crate ranks pods of one gang for that
//! victim-selection sort.
//!
//! The order is a chain of independent tie-break [`rules`], tried in
//! priority order; the first rule with a signal wins. `Less` means more
//! critical, protected longest, evicted last.
//!
//! The comparator is pure and total: it performs no I/O and never fails,
//! and malformed input reads as "no signal". It assumes both pods belong
//! to the same gang without verifying it; cross-gang results carry no
//! meaning.

pub mod rules;

pub use rules::{TieBreak, gang_order};
