use std::collections::HashMap;

use crate::page::host::HostPage;

/// Page made of named containers only. Useful when the caller assembles the
/// surrounding document itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPage {
    containers: HashMap<String, String>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, id: &str, content: &str) -> Self {
        self.containers.insert(id.to_string(), content.to_string());
        self
    }

    pub fn content(&self, id: &str) -> Option<&str> {
        self.containers.get(id).map(String::as_str)
    }
}

impl HostPage for MemoryPage {
    fn replace_content(&mut self, id: &str, markup: &str) -> bool {
        match self.containers.get_mut(id) {
            Some(content) => {
                *content = markup.to_string();
                true
            }
            None => false,
        }
    }
}
