//! Reads HTML from stdin and prints the refined document as JSON.
//!
//! Usage: `outline_stdin [PAGE_URL] < page.html`
//!
//! Set `RUST_LOG=page_outline=debug` to see extraction diagnostics on stderr.

use std::io::{self, Read};

use page_outline::{extract_bytes_with_options, refine, Options};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let options = Options {
        url: std::env::args().nth(1),
        ..Options::default()
    };

    let refined = match extract_bytes_with_options(&html, &options) {
        Ok(raw) => refine(raw),
        Err(err) => {
            eprintln!("Extraction failed: {err}");
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&refined) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("Failed to serialize output: {err}");
            std::process::exit(1);
        }
    }
}
