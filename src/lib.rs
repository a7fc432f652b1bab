//! Login and signup service.
//!
//! The `domain` layer holds the authentication rules and the ports they need.
//! `infrastructure` implements those ports (PostgreSQL or in-memory storage,
//! Argon2id hashing) and loads configuration, while `adapters` exposes the
//! service over HTTP.

pub mod adapters;
pub mod domain;
pub mod infrastructure;
