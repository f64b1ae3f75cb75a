use serde::{Deserialize, Serialize};

/// Tier derived from the client name; drives the credit-check policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    VeryImportant,
    Important,
    Regular,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: i32,
    name: String,
}

impl Client {
    pub fn new(id: i32, name: String) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exact, case-sensitive match on the client name. Anything that is not
    /// one of the two known names, including an empty name, is `Regular`.
    pub fn classification(&self) -> Classification {
        match self.name.as_str() {
            "VeryImportantClient" => Classification::VeryImportant,
            "ImportantClient" => Classification::Important,
            _ => Classification::Regular,
        }
    }
}
