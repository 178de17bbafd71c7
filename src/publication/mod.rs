//! One-time publication of hidden events.

pub mod gate;
pub mod handlers;

#[cfg(test)]
mod tests;

pub use gate::{generate_token, ActivationFailure, PublicationGate};
