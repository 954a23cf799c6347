//! Dr. Macadamia: a symptom checker and disease encyclopedia for macadamia crops.
//!
//! The knowledge base is a hand-authored CSV table of diseases, their
//! symptoms and the treatments that act on them. It is loaded once into
//! [`kb::KnowledgeBase`] and then served read-only through the CLI views in
//! [`render`] or the HTTP API in [`api`].

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod kb;
pub mod models;
pub mod render;
