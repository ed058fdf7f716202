use crate::Claims;

/// Verified caller identity. Trusted: only ever built from validated claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub uid: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl Subject {
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            uid: claims.sub,
            email: claims.email,
            name: claims.name,
        }
    }
}
