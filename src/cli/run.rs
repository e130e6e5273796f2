use clap::Parser;
use dotenv::dotenv;

use crate::domain::book::ContactBook;
use crate::domain::contact::{Contact, ContactUpdate};
use crate::errors::AppError;
use crate::net::{FakeNetwork, Network, NoNetwork};
use crate::store::{StorageMediums, parse_store};

use super::command::{Cli, Commands};

pub fn run_app() -> Result<(), AppError> {
    // Load .env before clap so `env = ...` flag defaults can see it
    dotenv().ok();

    let cli = Cli::parse();

    let medium = StorageMediums::from(&cli.storage_choice)?;
    println!("Current storage choice is: {}", medium.is_which());

    let storage = parse_store(medium)?;
    let network: Box<dyn Network> = if cli.no_delay {
        Box::new(NoNetwork)
    } else {
        Box::new(FakeNetwork::default())
    };

    let book = ContactBook::new(storage, network);

    match cli.command {
        Commands::List { query } => {
            let contacts = book.list(query.as_deref())?;

            if contacts.is_empty() {
                match query {
                    Some(query) => println!("No contacts match {{{}}}", query),
                    None => println!("No contacts yet"),
                }
                return Ok(());
            }

            for (mut i, c) in contacts.iter().enumerate() {
                i += 1;
                println!(
                    "{i:>3}. {:<9} {:<25} {:<16} {}",
                    c.id,
                    c.display_name(),
                    c.twitter.as_deref().unwrap_or(""),
                    if c.is_favorite() { "*" } else { "" }
                );
            }

            Ok(())
        }

        Commands::New => {
            let contact = book.create()?;

            println!("Contact created successfully");
            println!("Created contact {}", contact.id);
            Ok(())
        }

        Commands::Show { id } => {
            match book.get(&id)? {
                Some(contact) => show_contact(&contact),
                None => {
                    // An unknown id on a read is an absent record, not a failure
                    eprintln!("{}", AppError::NotFound("Contact".to_string()));
                }
            }

            Ok(())
        }

        Commands::Edit {
            id,
            first,
            last,
            twitter,
            avatar,
            notes,
        } => {
            let update = ContactUpdate {
                first,
                last,
                twitter,
                avatar,
                notes,
                favorite: None,
            };

            let contact = book.update(&id, update)?;

            println!("Contact updated successfully");
            show_contact(&contact);
            Ok(())
        }

        Commands::Favorite { id, off } => {
            let update = ContactUpdate {
                favorite: Some(!off),
                ..ContactUpdate::default()
            };

            let contact = book.update(&id, update)?;

            if contact.is_favorite() {
                println!("Contact marked as favorite");
            } else {
                println!("Contact unmarked as favorite");
            }
            Ok(())
        }

        Commands::Delete { id } => {
            if book.delete(&id)? {
                println!("Contact deleted successfully");
            } else {
                eprintln!("{}", AppError::NotFound("Contact".to_string()));
            }

            Ok(())
        }
    }
}

fn show_contact(contact: &Contact) {
    println!("{:<10} {}", "Id:", contact.id);
    println!("{:<10} {}", "Name:", contact.display_name());

    if let Some(twitter) = &contact.twitter {
        println!("{:<10} {}", "Twitter:", twitter);
    }
    if let Some(avatar) = &contact.avatar {
        println!("{:<10} {}", "Avatar:", avatar);
    }
    if let Some(notes) = &contact.notes {
        println!("{:<10} {}", "Notes:", notes);
    }
    if contact.is_favorite() {
        println!("{:<10} yes", "Favorite:");
    }

    println!("{:<10} {}", "Created:", contact.created_at.date_naive());
}
