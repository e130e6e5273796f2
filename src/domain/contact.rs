use std::cmp::Ordering;

pub use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

const ID_LEN: usize = 7;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// One stored contact. Every field except `id` and `created_at` is optional;
/// a contact with no name fields is valid and displays as "No Name".
///
/// Serialized field names match the persisted JSON format: optional fields are
/// omitted when unset and `createdAt` is integer milliseconds since the epoch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,

    #[serde(
        rename = "createdAt",
        default = "default_timestamp",
        with = "chrono::serde::ts_milliseconds"
    )]
    pub created_at: DateTime<Utc>,
}

/// Partial update for a contact: only `Some` fields are written, everything
/// else is left untouched. `id` and `created_at` are immutable and have no
/// counterpart here.
#[derive(Debug, Clone, Default)]
pub struct ContactUpdate {
    pub first: Option<String>,
    pub last: Option<String>,
    pub twitter: Option<String>,
    pub avatar: Option<String>,
    pub notes: Option<String>,
    pub favorite: Option<bool>,
}

impl Contact {
    /// An empty shell record: fresh id, creation time, nothing else set.
    pub fn new() -> Self {
        Contact {
            id: new_id(),
            first: None,
            last: None,
            twitter: None,
            avatar: None,
            notes: None,
            favorite: None,
            created_at: Utc::now(),
        }
    }

    pub fn apply(&mut self, update: ContactUpdate) {
        if let Some(first) = update.first {
            self.first = Some(first);
        }
        if let Some(last) = update.last {
            self.last = Some(last);
        }
        if let Some(twitter) = update.twitter {
            self.twitter = Some(twitter);
        }
        if let Some(avatar) = update.avatar {
            self.avatar = Some(avatar);
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        if let Some(favorite) = update.favorite {
            self.favorite = Some(favorite);
        }
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite.unwrap_or(false)
    }

    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first.as_deref(), self.last.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            "No Name".to_string()
        } else {
            parts.join(" ")
        }
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self::new()
    }
}

/// Listing order: ascending by `last` (unset sorts as the empty string),
/// ties broken by creation time.
pub fn by_last_then_created(a: &Contact, b: &Contact) -> Ordering {
    let a_last = a.last.as_deref().unwrap_or("");
    let b_last = b.last.as_deref().unwrap_or("");

    a_last
        .cmp(b_last)
        .then_with(|| a.created_at.cmp(&b.created_at))
}

/// Random base-36 id token, collision-resistant at address-book scale.
pub fn new_id() -> String {
    let mut rng = rand::thread_rng();

    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

fn default_timestamp() -> DateTime<Utc> {
    Utc::now()
}
