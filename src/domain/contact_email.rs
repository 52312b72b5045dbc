use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    /// Trims and lower-cases the address so that repeat signups compare
    /// equal regardless of casing. Only presence is checked beyond that.
    pub fn parse(s: String) -> Result<Self, String> {
        let normalized = s.trim().to_lowercase();

        match normalized.is_empty() {
            true => Err("Name and email are required".to_string()),
            false => Ok(Self(normalized)),
        }
    }
}

impl Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
