// SPDX-License-Identifier: MIT

//! Storage layer (flat JSON file).

pub mod sessions;

pub use sessions::SessionStore;
