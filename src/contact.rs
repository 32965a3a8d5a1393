#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub company: String,
}

impl ContactInfo {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_company(&mut self, company: impl Into<String>) {
        self.company = company.into();
    }

    // Only the empty string counts as missing.
    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }
}
