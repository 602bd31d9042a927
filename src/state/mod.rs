//! Session state modules.
//!
//! DESIGN
//! ======
//! `persist` owns the storage seam, `session` the in-memory state, and
//! `hydrate` the repair bridging the server and browser rendering contexts.

pub mod hydrate;
pub mod persist;
pub mod session;
