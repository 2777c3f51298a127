//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`form` for the auth form's field record,
//! `session` for the persisted credential) so components can depend on
//! small focused models.

pub mod form;
pub mod session;
