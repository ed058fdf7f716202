/// Where and for whom the identity provider issues tokens
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// Audience the tokens are minted for
    pub project_id: String,
    /// JSON Web Key Set endpoint
    pub jwks_url: String,
}

impl ProviderSettings {
    pub fn issuer(&self) -> String {
        format!("https://securetoken.google.com/{}", self.project_id)
    }
}
