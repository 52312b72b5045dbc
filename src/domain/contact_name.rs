#[derive(Debug, Clone)]
pub struct ContactName(String);

impl ContactName {
    /// Trims surrounding whitespace and rejects names that are empty
    /// afterwards. Anything non-empty is accepted as-is.
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();

        match trimmed.is_empty() {
            true => Err("Name and email are required".to_string()),
            false => Ok(Self(trimmed.to_string())),
        }
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
