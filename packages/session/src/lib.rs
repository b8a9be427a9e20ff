//! Client-side session management shared by every TuniHire panel.
//!
//! This crate is the single source of truth for "who is logged in" on the
//! client: it persists the bearer token and the user record, validates them at
//! the storage boundary, and classifies roles for the panels' routing rules.
//! Storage is injected through the [`SessionStore`] trait so the same code runs
//! against browser localStorage and against an in-memory fake in tests.

pub mod config;
pub mod handoff;
pub mod user;

mod store;
pub use store::{SessionManager, SessionStore, StoreError, TOKEN_KEY, USER_KEY};

mod memory;
pub use memory::MemoryStore;

#[cfg(target_arch = "wasm32")]
mod local_storage;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;

pub use config::PanelConfig;
pub use user::{Role, Session, User};
