//! # Wiki Flag
//!
//! Imports a flag image and its licence from a Wikimedia Commons file page
//! into a per-place directory: `<place>/flag.svg` plus a one-line
//! `<place>/LICENCE.md` crediting the source.
//!
//! ## Example Usage
//!
//! ```no_run
//! use wiki_flag::{FlagImporter, ImportOutcome, LocalStorage, ReqwestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let importer = FlagImporter::new(ReqwestClient::new(), LocalStorage::new("./places"))?;
//!
//!     match importer.import("Wales", "Flag_of_Wales_(1959–present).svg").await? {
//!         ImportOutcome::Imported(flag) => println!("Wrote {}", flag.flag_path),
//!         ImportOutcome::Rejected { url } => println!("Not an SVG file page: {}", url),
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod services;
pub mod types;

// Re-export main types and services for easier usage
pub use error::{FlagImportError, Result};
pub use services::{
    CommonsPageParser, ContentFetcher, FlagImporter, HttpClient, LocalStorage, ReqwestClient,
    Storage,
};
pub use types::{
    FileInfo, HttpResponse, ImportOutcome, ImportedFlag, LicenceNote, EXIT_LICENCE_NOT_FOUND,
    EXIT_REJECTED,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
