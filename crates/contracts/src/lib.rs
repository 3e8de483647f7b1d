//! Shared data contracts between the inventory frontend and the REST backend.
//!
//! Everything here is a plain serde type mirroring the wire format; the only
//! logic is validation and the decode of the movement-direction pair.

pub mod domain;
pub mod usecases;
