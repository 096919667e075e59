use crate::error::Result;
use crate::services::fetcher::{ContentFetcher, HttpClient};
use crate::services::parser::CommonsPageParser;
use crate::services::storage::Storage;
use crate::types::{flag_path, licence_path, ImportOutcome, ImportedFlag, LicenceNote};
use tracing::{debug, info};

/// Imports one flag from a Commons file page into `<place>/flag.svg` and
/// `<place>/LICENCE.md`.
pub struct FlagImporter<H, S> {
    http: H,
    storage: S,
    fetcher: ContentFetcher,
    parser: CommonsPageParser,
}

impl<H: HttpClient, S: Storage> FlagImporter<H, S> {
    pub fn new(http: H, storage: S) -> Result<Self> {
        Ok(Self {
            http,
            storage,
            fetcher: ContentFetcher::new()?,
            parser: CommonsPageParser::new()?,
        })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub async fn import(&self, place: &str, flag: &str) -> Result<ImportOutcome> {
        let url = ContentFetcher::page_url(flag);
        let licence_path = licence_path(place);

        // The placeholder goes in before validation so the place always exists.
        if !self.storage.has(&licence_path).await? {
            self.storage.write(&licence_path, b"").await?;
            debug!("Created placeholder {}", licence_path);
        }

        if !self.fetcher.is_svg_file_page(&url) {
            return Ok(ImportOutcome::Rejected { url });
        }

        let html = ContentFetcher::download(&self.http, &url).await;
        let info = self.parser.parse(&String::from_utf8_lossy(&html), &url)?;

        let svg = ContentFetcher::download(&self.http, &info.file_url).await;
        let flag_path = flag_path(place);
        self.storage.put(&flag_path, &svg).await?;
        info!("Wrote {} bytes to {}", svg.len(), flag_path);

        let note = LicenceNote {
            page_url: url.clone(),
            licence: info.licence.clone(),
            author: info.author.clone(),
        };
        self.storage.put(&licence_path, note.to_string().as_bytes()).await?;
        info!("Wrote {}", licence_path);

        Ok(ImportOutcome::Imported(ImportedFlag {
            page_url: url,
            info,
            svg_bytes: svg.len(),
            flag_path,
            licence_path,
        }))
    }
}
