use crate::error::{FlagImportError, Result};
use crate::types::{FileInfo, UNKNOWN_AUTHOR};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

/// Extracts the media link, author and licence from a Commons file page.
pub struct CommonsPageParser {
    file_url_rules: Vec<Selector>,
    author_cell: Selector,
    licence: Selector,
    namespace_pattern: Regex,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| FlagImportError::Selector {
        reason: format!("{}: {}", css, e),
    })
}

impl CommonsPageParser {
    pub fn new() -> Result<Self> {
        // Reverse-engineered from the "use this file on the web" link
        let file_url_rules = vec![
            selector("div#file > a")?,
            selector("div#file > div > div > a")?,
            selector(".fullMedia a")?,
        ];

        let namespace_pattern =
            Regex::new(r#"\s+xmlns\s*=\s*"[^"]*""#).map_err(anyhow::Error::from)?;

        Ok(Self {
            file_url_rules,
            author_cell: selector("td#fileinfotpl_aut")?,
            licence: selector(".licensetpl_short")?,
            namespace_pattern,
        })
    }

    pub fn parse(&self, markup: &str, page_url: &str) -> Result<FileInfo> {
        let document = self.normalize(markup);

        let file_url = self.extract_file_url(&document);
        info!("File URL: {}", file_url);

        let author = match self.extract_author(&document) {
            Some(author) => {
                info!("Author: {}", author);
                author
            }
            None => UNKNOWN_AUTHOR.to_string(),
        };

        let licence = self
            .extract_licence(&document)
            .ok_or_else(|| FlagImportError::LicenceNotFound {
                url: page_url.to_string(),
            })?;
        info!("Licence: {}", licence);

        Ok(FileInfo {
            file_url,
            author,
            licence,
        })
    }

    /// Parses `markup` and, when the root element declares a default
    /// namespace, drops that declaration and parses the result again.
    pub fn normalize(&self, markup: &str) -> Html {
        let document = Html::parse_document(markup);

        let stripped = {
            let root = document.root_element();
            root.value().attr("xmlns").map(|namespace| {
                debug!("Stripping default namespace {}", namespace);
                let serialized = root.html();
                let tag_end = serialized.find('>').map_or(serialized.len(), |i| i + 1);
                let (open_tag, rest) = serialized.split_at(tag_end);
                format!("{}{}", self.namespace_pattern.replace(open_tag, ""), rest)
            })
        };

        match stripped {
            Some(markup) => Html::parse_document(&markup),
            None => document,
        }
    }

    /// Every rule is tried; the first hit of the last matching rule wins.
    pub fn extract_file_url(&self, document: &Html) -> String {
        let mut file_url = String::new();

        for (idx, rule) in self.file_url_rules.iter().enumerate() {
            if let Some(anchor) = document.select(rule).next() {
                file_url = anchor.value().attr("href").unwrap_or_default().to_string();
                debug!("File URL rule {} matched: {}", idx + 1, file_url);
            }
        }

        file_url
    }

    /// First link in any cell of the row holding the author label.
    pub fn extract_author(&self, document: &Html) -> Option<String> {
        let cell = document.select(&self.author_cell).next()?;
        let row = cell.parent().and_then(ElementRef::wrap)?;

        let anchor = row
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|child| child.value().name() == "td")
            .flat_map(|td| td.children().filter_map(ElementRef::wrap))
            .find(|child| child.value().name() == "a")?;

        let text: String = anchor.text().collect();
        Some(text.replace("User:", ""))
    }

    pub fn extract_licence(&self, document: &Html) -> Option<String> {
        document
            .select(&self.licence)
            .next()
            .map(|element| element.text().collect())
    }
}
