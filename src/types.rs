use std::fmt;

pub const COMMONS_FILE_BASE_URL: &str = "https://commons.wikimedia.org/wiki/File:";

pub const LICENCE_FILE: &str = "LICENCE.md";
pub const FLAG_FILE: &str = "flag.svg";

pub const UNKNOWN_AUTHOR: &str = "Unknown";

pub const EXIT_REJECTED: i32 = 2;
pub const EXIT_LICENCE_NOT_FOUND: i32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// What the file page says about the media file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Direct link to the SVG, empty when no rule matched.
    pub file_url: String,
    pub author: String,
    pub licence: String,
}

/// The single Markdown bullet stored in `LICENCE.md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenceNote {
    pub page_url: String,
    pub licence: String,
    pub author: String,
}

impl fmt::Display for LicenceNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "* [{}]({}) - {} - {}",
            FLAG_FILE, self.page_url, self.licence, self.author
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedFlag {
    pub page_url: String,
    pub info: FileInfo,
    pub svg_bytes: usize,
    pub flag_path: String,
    pub licence_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported(ImportedFlag),
    /// The constructed URL is not a Commons SVG file page. Only the
    /// placeholder licence file was written.
    Rejected { url: String },
}

pub fn licence_path(place: &str) -> String {
    format!("{}/{}", place, LICENCE_FILE)
}

pub fn flag_path(place: &str) -> String {
    format!("{}/{}", place, FLAG_FILE)
}
