//! Route handlers
//!
//! All HTTP request handlers organized by route domain.

pub mod auth;
pub mod health;
pub mod problems;
pub mod subtopics;
pub mod topics;
