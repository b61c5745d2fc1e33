use crate::models::Officer;

/// Store abstraction the session service is built against; swap the
/// implementation without touching the auth flow.
pub trait OfficerDirectory {
    fn list(&self) -> &[Officer];
    fn find_by_email(&self, email: &str) -> Option<Officer>;
    fn append(&mut self, officer: Officer);
}

pub struct InMemoryDirectory {
    officers: Vec<Officer>,
}

impl InMemoryDirectory {
    pub fn new(officers: Vec<Officer>) -> Self {
        Self { officers }
    }

    pub fn seeded() -> Self {
        Self::new(crate::data::seed_officers())
    }
}

impl OfficerDirectory for InMemoryDirectory {
    fn list(&self) -> &[Officer] {
        &self.officers
    }

    fn find_by_email(&self, email: &str) -> Option<Officer> {
        self.officers.iter().find(|o| o.email == email).cloned()
    }

    fn append(&mut self, officer: Officer) {
        self.officers.push(officer);
    }
}
