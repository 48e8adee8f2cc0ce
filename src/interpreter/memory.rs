use std::collections::HashMap;

/// Value stored by `DECLARE` before any assignment.
pub const DECLARED: &str = "null";

/// Variable store for one execution pass. Absent names read as the empty string.
#[derive(Debug, Default)]
pub struct Memory {
    values: HashMap<String, String>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: &str) {
        self.assign(name, DECLARED);
    }

    pub fn assign(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }
}
