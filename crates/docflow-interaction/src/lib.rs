//! HTTP implementations of the docflow backend collaborator traits.
//!
//! `BackendClient` talks to the assistant backend's JSON API and implements
//! `ChatBackend`, `DocumentBackend`, and `AlertBackend` from docflow-core.

mod alerts;
mod chat;
mod client;
mod documents;

pub use client::BackendClient;
