//! Domain models for Dr. Macadamia.
//!
//! # Core Concepts
//!
//! The knowledge base relates three kinds of names:
//!
//! - **Disease**: a named condition (or pest) with a set of symptoms.
//! - **Symptom**: something a grower can observe on the tree or nut.
//! - **Treatment**: something that acts on one or more diseases.
//!
//! These are plain strings keyed by name; the types here are the view models
//! shared by the query engine, the HTTP API, its client and the renderer.
//!
//! - [`Diagnosis`]: Symptom Checker result (causes and treatments of a symptom).
//! - [`DiseaseProfile`]: Disease Lookup result (symptoms and treatments of a disease).
//! - [`Catalog`]: the selectable symptoms and diseases.

mod catalog;
mod diagnosis;
mod profile;

pub use catalog::*;
pub use diagnosis::*;
pub use profile::*;
