//! Host-facing controls
//!
//! Widget construction belongs to the host toolkit; these types hold the
//! selection logic the widgets call into.

pub mod selector;

pub use selector::{SelectorOption, TypeSelector};
