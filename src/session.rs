//! Session identity.
//!
//! A session id scopes the playlist on the backend. It is created once per
//! client lifetime and never persisted, so a restarted client starts with an
//! empty playlist. The random provider is not collision resistant across many
//! clients; ids are short and drawn from a small alphabet.

use std::fmt;

use rand::{Rng, distr::Alphanumeric};

const SESSION_PREFIX: &str = "user_";
const SESSION_SUFFIX_LEN: usize = 9;

/// Opaque session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        SessionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Produces the session id for a client at start-up.
pub trait IdentityProvider {
    fn create(&self) -> SessionId;
}

/// `user_` followed by nine random lowercase alphanumerics.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdentity;

impl IdentityProvider for RandomIdentity {
    fn create(&self) -> SessionId {
        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(SESSION_SUFFIX_LEN)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect();

        SessionId(format!("{}{}", SESSION_PREFIX, suffix))
    }
}

/// Reuses an id handed in from outside, e.g. `--session` on the command line.
#[derive(Debug, Clone)]
pub struct FixedIdentity(pub String);

impl IdentityProvider for FixedIdentity {
    fn create(&self) -> SessionId {
        SessionId(self.0.clone())
    }
}

/// Picks the fixed provider when an id is given, the random one otherwise.
pub fn resolve(explicit: Option<String>) -> SessionId {
    match explicit.filter(|id| !id.trim().is_empty()) {
        Some(id) => FixedIdentity(id).create(),
        None => RandomIdentity.create(),
    }
}
