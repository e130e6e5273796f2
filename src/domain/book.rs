use std::sync::Mutex;

use log::debug;

use crate::domain::contact::{self, Contact, ContactUpdate};
use crate::domain::search;
use crate::errors::AppError;
use crate::net::Network;
use crate::store::ContactStore;

/// The contact collection and its operations.
///
/// Persistence lives behind a [`ContactStore`] holding the whole sequence
/// under one key, and every operation passes through an injected [`Network`]
/// gate that models first-load latency. Reads memoize their gate key;
/// mutations make the keyless call, which busts the gate's cache so the next
/// read is slow again.
///
/// Mutations are a full read-modify-write of the sequence, so they hold a
/// single writer lock for their whole duration. Two concurrent updates can no
/// longer lose the earlier write; reads stay lock-free.
pub struct ContactBook {
    storage: Box<dyn ContactStore>,
    network: Box<dyn Network>,
    write_lock: Mutex<()>,
}

impl ContactBook {
    pub fn new(storage: Box<dyn ContactStore>, network: Box<dyn Network>) -> Self {
        Self {
            storage,
            network,
            write_lock: Mutex::new(()),
        }
    }

    /// All contacts, optionally filtered by a name query, sorted ascending by
    /// (`last`, `createdAt`). An empty query behaves like no query.
    pub fn list(&self, query: Option<&str>) -> Result<Vec<Contact>, AppError> {
        self.network
            .simulate(Some(&format!("getContacts:{}", query.unwrap_or(""))));

        let mut contacts = self.storage.load()?;

        if let Some(query) = query.filter(|q| !q.is_empty()) {
            contacts.retain(|contact| search::rank_contact(contact, query).is_some());
        }

        contacts.sort_by(contact::by_last_then_created);

        debug!("listed {} contacts", contacts.len());
        Ok(contacts)
    }

    /// Create an empty shell contact at the front of the collection
    /// (most-recent-first) and return it.
    pub fn create(&self) -> Result<Contact, AppError> {
        let _guard = self.write_lock.lock()?;
        self.network.simulate(None);

        let mut contacts = self.storage.load()?;

        let contact = Contact::new();
        contacts.insert(0, contact.clone());
        self.storage.save(&contacts)?;

        debug!("created contact {}", contact.id);
        Ok(contact)
    }

    /// Look up one contact by id. A missing id is `Ok(None)`, never an error;
    /// only a storage failure produces `Err`.
    pub fn get(&self, id: &str) -> Result<Option<Contact>, AppError> {
        self.network.simulate(Some(&format!("contact:{}", id)));

        let contacts = self.storage.load()?;

        Ok(contacts.into_iter().find(|contact| contact.id == id))
    }

    /// Apply a partial update to the contact with the given id and return the
    /// updated record. A missing id is a reportable `NotFound` error, unlike
    /// [`ContactBook::get`].
    pub fn update(&self, id: &str, update: ContactUpdate) -> Result<Contact, AppError> {
        let _guard = self.write_lock.lock()?;
        self.network.simulate(None);

        let mut contacts = self.storage.load()?;

        let contact = contacts
            .iter_mut()
            .find(|contact| contact.id == id)
            .ok_or_else(|| AppError::NotFound("Contact".to_string()))?;

        contact.apply(update);
        let updated = contact.clone();

        self.storage.save(&contacts)?;

        debug!("updated contact {}", id);
        Ok(updated)
    }

    /// Remove the contact with the given id. Returns `true` when something
    /// was deleted, `false` when the id was unknown; the collection is only
    /// written back when a record was actually removed.
    pub fn delete(&self, id: &str) -> Result<bool, AppError> {
        let _guard = self.write_lock.lock()?;
        self.network.simulate(None);

        let mut contacts = self.storage.load()?;

        let Some(index) = contacts.iter().position(|contact| contact.id == id) else {
            return Ok(false);
        };

        contacts.remove(index);
        self.storage.save(&contacts)?;

        debug!("deleted contact {}", id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::net::NoNetwork;
    use crate::store::memory::MemStorage;

    fn book() -> ContactBook {
        ContactBook::new(Box::new(MemStorage::new()), Box::new(NoNetwork))
    }

    #[test]
    fn new_contacts_land_at_the_front_of_storage() -> Result<(), AppError> {
        let book = book();

        let first = book.create()?;
        let second = book.create()?;

        // Persisted order is most-recent-first, independent of list() sorting.
        let stored = book.storage.load()?;

        assert_eq!(stored[0].id, second.id);
        assert_eq!(stored[1].id, first.id);
        Ok(())
    }

    #[test]
    fn update_on_unknown_id_is_a_not_found_error() {
        let book = book();

        let err = book
            .update("missing", ContactUpdate::default())
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn delete_miss_does_not_rewrite_storage() -> Result<(), AppError> {
        let book = book();
        let contact = book.create()?;

        assert!(!book.delete("missing")?);
        assert_eq!(book.list(None)?, vec![contact]);
        Ok(())
    }
}
