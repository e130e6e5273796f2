use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Contact manager with local JSON storage")]
pub struct Cli {
    /// Storage choice (json, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
    pub storage_choice: String,

    /// Skip the simulated network delay
    #[arg(long)]
    pub no_delay: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List contacts, optionally filtered by a name query
    List {
        /// Search string matched against first and last names
        query: Option<String>,
    },

    /// Create a new empty contact and print its id
    New,

    /// Show one contact by id
    Show {
        /// Contact id
        id: String,
    },

    /// Edit fields of an existing contact; omitted fields are left unchanged
    Edit {
        /// Contact id
        id: String,

        /// First name
        #[arg(long)]
        first: Option<String>,

        /// Last name
        #[arg(long)]
        last: Option<String>,

        /// Twitter handle
        #[arg(long)]
        twitter: Option<String>,

        /// Avatar URL
        #[arg(long)]
        avatar: Option<String>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Mark a contact as a favorite
    Favorite {
        /// Contact id
        id: String,

        /// Clear the favorite flag instead of setting it
        #[arg(long)]
        off: bool,
    },

    /// Delete a contact by id
    Delete {
        /// Contact id
        id: String,
    },
}
