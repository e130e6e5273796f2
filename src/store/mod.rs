pub mod json;
pub mod memory;

use std::fs;
use std::path::Path;

use crate::domain::contact::Contact;
use crate::errors::AppError;

/// Persistence backend: the whole contact sequence lives under one key, and
/// every save is a single write of the full sequence.
pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;
}

#[derive(Debug)]
pub enum StorageMediums {
    Json,
    Mem,
}

impl StorageMediums {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMediums::Json)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }
}

pub fn parse_store(medium: StorageMediums) -> Result<Box<dyn ContactStore>, AppError> {
    match medium {
        StorageMediums::Json => Ok(Box::new(json::JsonStorage::new()?)),
        StorageMediums::Mem => Ok(Box::new(memory::MemStorage::new())),
    }
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
