//! `genesix-core`: domain for the genesix product-discovery wizard.
//!
//! # Architecture
//!
//! ```text
//! FormState ── edits ──▶ Step1Form ── validate ──▶ ErrorMap
//!                            │
//!                            ├── build_payload ──▶ Payload
//!                            │
//!                            └── WebhookClient::send ──▶ SubmissionStatus
//!                                                             │
//!                                   (Succeeded) advance ──────┘
//!                                            │
//!                                            ▼
//!                  Navigator ── Router (current Page, watch channel)
//!                      │
//!                      └── AuthProvider (explicit auth context)
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod form;
pub mod io;
pub mod navigator;
pub mod payload;
pub mod router;
pub mod steps;
pub mod submission;
pub mod types;
pub mod validation;
pub mod webhook;

pub use error::{GenesixError, Result};
