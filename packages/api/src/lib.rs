//! # API crate — REST client for the hosted feedback collection
//!
//! This crate is the only place that talks to the network. It implements
//! [`store::FeedbackStore`] on top of the hosted database's REST interface so the
//! view-model never sees HTTP.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`remote`] | [`RemoteStore`]: create / list / delete over `reqwest`, status and body mapping to [`store::StoreError`] |
//!
//! ## Wire format
//!
//! - `POST {base}/feedbacks.json` with `{name, email, comment, timestamp}` answers
//!   `{"name": "<id>"}`.
//! - `GET {base}/feedbacks.json` answers `null` or an object of id → entry.
//! - `DELETE {base}/feedbacks/{id}.json` answers `null`.
//!
//! Any 2xx status is success. Nothing is retried.

pub mod remote;

pub use remote::RemoteStore;
pub use store::{BoardConfig, FeedbackCollection, FeedbackEntry, FeedbackId, StoreError};
