//! Test utilities for homing development.
//!
//! Provides the reference demo sequences, a [`RecordingObserver`] that
//! captures every fold event, and proptest strategies for directive
//! sequences.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{balanced_walk, DemoCase, ObservedEvent, RecordingObserver, DEMO_CASES};
