//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store reads into the use cases each surface needs.
//! - Keep CLI/UI layers decoupled from fixture details.

pub mod case_session;
pub mod ingest_service;
pub mod network_service;
pub mod timeline_service;
