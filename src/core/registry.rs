use std::collections::HashMap;
use uuid::Uuid;

/// Live surfaces keyed by a generated id. Removal is how a surface is retired.
#[derive(Debug)]
pub struct Registry<T> {
    entries: HashMap<Uuid, T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self { entries: HashMap::new() }
    }
}

impl<T> Registry<T> {
    pub fn insert(&mut self, value: T) -> Uuid {
        let id = Uuid::new_v4();
        self.entries.insert(id, value);
        id
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.entries.get(&id)
    }

    pub fn remove(&mut self, id: Uuid) -> Option<T> {
        self.entries.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
