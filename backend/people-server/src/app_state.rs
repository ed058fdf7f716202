use people_auth::IdentityVerifier;
use people_db::PersonRepository;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler and middleware.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// `None` when authentication is disabled
    pub verifier: Option<Arc<dyn IdentityVerifier>>,
    /// Restrict update/delete to records owned by the caller
    pub scope_mutations: bool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            verifier: None,
            scope_mutations: false,
        }
    }

    pub fn with_verifier(mut self, verifier: Arc<dyn IdentityVerifier>) -> Self {
        self.verifier = Some(verifier);
        self
    }

    pub fn with_scope_mutations(mut self, scope_mutations: bool) -> Self {
        self.scope_mutations = scope_mutations;
        self
    }

    pub fn auth_enabled(&self) -> bool {
        self.verifier.is_some()
    }

    /// Owner scoping applies to update/delete only when auth is on too
    pub fn mutations_scoped(&self) -> bool {
        self.auth_enabled() && self.scope_mutations
    }

    pub fn people(&self) -> PersonRepository {
        PersonRepository::new(self.pool.clone())
    }
}
