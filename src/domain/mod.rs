pub mod book;
pub mod contact;
pub mod search;
