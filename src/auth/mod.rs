// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Session state, its persisted storage, and magic-link token decoding.

pub mod session;
pub mod storage;
pub mod token;

pub use session::{SessionState, SessionStore, SESSION_KEY, TOKEN_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use token::{token_from_link, TokenDecoder};
