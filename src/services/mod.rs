// SPDX-License-Identifier: MIT

//! Services module - external collaborators.

pub mod identity;

pub use identity::{AuthUser, IdentityError, IdentityVerifier};
