//! Public IP detection by consensus.
//!
//! Several "what is my IP" services are queried concurrently and their
//! answers are reconciled by a vote. See [`utility::ip_detector`] for the
//! retrieval side and [`utility::vote`] for the reconciliation.

pub mod cli;
pub mod functions;
pub mod settings;
pub mod utility;
