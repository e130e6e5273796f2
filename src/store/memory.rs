use std::cell::RefCell;

use super::ContactStore;
use crate::domain::contact::Contact;
use crate::errors::AppError;

/// In-memory backend for tests, benches and the `mem` storage choice.
/// RefCell interior mutability keeps saves real through a shared reference.
pub struct MemStorage {
    data: RefCell<Vec<Contact>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            data: RefCell::new(Vec::new()),
        }
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: RefCell::new(contacts),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.to_vec();
        Ok(())
    }
}
