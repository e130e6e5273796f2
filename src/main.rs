use std::process::exit;

use contact_book::{cli, logging};

fn main() {
    let _logger = logging::init();

    if let Err(err) = cli::run_app() {
        eprintln!("{}", err);
        exit(1);
    }
}
