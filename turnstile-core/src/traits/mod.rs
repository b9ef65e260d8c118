//! Seams to external collaborators.

pub mod authority;

pub use authority::{RemoteCheck, SubscriptionAuthority};
