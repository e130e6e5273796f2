pub use crate::cli::{command, run_app};
pub use crate::domain::{
    book::ContactBook,
    contact::{self, Contact, ContactUpdate},
    search::{self, MatchTier},
};
pub use crate::errors::AppError;
pub use crate::net::{FakeNetwork, Network, NoNetwork};
pub use crate::store::{self, ContactStore, json::JsonStorage, memory::MemStorage, parse_store};
