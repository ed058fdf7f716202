use crate::Subject;

/// Who is making the request, as established by the auth middleware.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Identity {
    /// No Authorization header was sent (or auth is disabled)
    #[default]
    Anonymous,
    Authenticated(Subject),
}

impl Identity {
    pub fn subject(&self) -> Option<&Subject> {
        match self {
            Identity::Anonymous => None,
            Identity::Authenticated(subject) => Some(subject),
        }
    }

    pub fn uid(&self) -> Option<&str> {
        self.subject().map(|s| s.uid.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Identity::Authenticated(_))
    }
}
