use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub sub: String,
    pub aud: String,
    pub exp: usize,
    pub iat: usize,
}

/// Verified caller identity, as extracted from a session token issued by
/// the external identity provider.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: String,
}
