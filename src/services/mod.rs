pub mod fetcher;
pub mod importer;
pub mod parser;
pub mod storage;

pub use fetcher::{ContentFetcher, HttpClient, ReqwestClient};
pub use importer::FlagImporter;
pub use parser::CommonsPageParser;
pub use storage::{LocalStorage, Storage};
