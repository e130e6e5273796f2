use std::env;
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use dotenv::dotenv;
use log::debug;

use super::{ContactStore, create_file_parent};
use crate::domain::contact::Contact;
use crate::errors::AppError;

pub const DEFAULT_STORAGE_PATH: &str = "./.instance/contacts.json";

/// The whole contact sequence in one JSON file.
pub struct JsonStorage {
    pub path: String,
}

impl JsonStorage {
    pub fn new() -> Result<Self, AppError> {
        dotenv().ok();

        let path =
            env::var("CONTACTS_STORAGE_PATH").unwrap_or(DEFAULT_STORAGE_PATH.to_string());
        Self::with_path(&path)
    }

    pub fn with_path(path: &str) -> Result<Self, AppError> {
        create_file_parent(path)?;

        Ok(Self {
            path: path.to_string(),
        })
    }
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(Path::new(&self.path))? {
            return Ok(Vec::new());
        }

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .truncate(false)
            .create(true)
            .open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let path = Path::new(&self.path);
        if !path.exists() {
            create_file_parent(&self.path)?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;

        let json_contacts = serde_json::to_string(&contacts)?;
        file.write_all(json_contacts.as_bytes())?;

        debug!("saved {} contacts to {}", contacts.len(), self.path);
        Ok(())
    }
}
