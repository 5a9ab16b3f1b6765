//! Site content document: the explicit set of pages, copy, and notices
//! the app shell is constructed from. Anything missing or inconsistent is
//! a load-time error, never a runtime branch scattered through the UI.

use serde::Deserialize;
use thiserror::Error;

use crate::nav::PageId;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse site content: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("site content declares no pages")]
    NoPages,
    #[error("page `{0}` appears more than once in site content")]
    DuplicatePage(PageId),
    #[error("page `{0}` is missing from site content")]
    MissingPage(PageId),
    #[error("site name must not be empty")]
    EmptySiteName,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteContent {
    pub site: SiteInfo,
    pub pages: Vec<PageContent>,
    pub privacy_notice: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageContent {
    pub id: PageId,
    pub nav_label: String,
    pub title: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

impl SiteContent {
    pub fn from_toml(text: &str) -> Result<Self, ContentError> {
        let content: SiteContent = toml::from_str(text)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.site.name.trim().is_empty() {
            return Err(ContentError::EmptySiteName);
        }
        if self.pages.is_empty() {
            return Err(ContentError::NoPages);
        }
        // Every page must be declared exactly once; the contact page in
        // particular is required for the form to mount.
        for expected in PageId::ALL {
            match self.pages.iter().filter(|page| page.id == expected).count() {
                0 => return Err(ContentError::MissingPage(expected)),
                1 => {}
                _ => return Err(ContentError::DuplicatePage(expected)),
            }
        }
        Ok(())
    }

    pub fn page(&self, id: PageId) -> &PageContent {
        // validate() guarantees every PageId is present exactly once.
        self.pages
            .iter()
            .find(|page| page.id == id)
            .expect("validated page set")
    }
}

#[cfg(test)]
mod tests {
    use super::{ContentError, SiteContent};
    use crate::nav::PageId;

    fn minimal_toml() -> String {
        let mut text = String::from(
            "privacy_notice = \"No data is collected.\"\n\n[site]\nname = \"Test Site\"\ntagline = \"Just testing\"\n",
        );
        for id in PageId::ALL {
            text.push_str(&format!(
                "\n[[pages]]\nid = \"{id}\"\nnav_label = \"{id}\"\ntitle = \"{id}\"\n"
            ));
        }
        text
    }

    #[test]
    fn minimal_document_loads_and_resolves_every_page() {
        let content = SiteContent::from_toml(&minimal_toml()).expect("load");
        for id in PageId::ALL {
            assert_eq!(content.page(id).id, id);
        }
    }

    #[test]
    fn missing_contact_page_is_a_load_error() {
        let text = minimal_toml().replace("id = \"contact\"", "id = \"about\"");
        match SiteContent::from_toml(&text) {
            Err(ContentError::DuplicatePage(PageId::About))
            | Err(ContentError::MissingPage(PageId::Contact)) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn empty_site_name_is_rejected() {
        let text = minimal_toml().replace("name = \"Test Site\"", "name = \"  \"");
        assert!(matches!(
            SiteContent::from_toml(&text),
            Err(ContentError::EmptySiteName)
        ));
    }

    #[test]
    fn malformed_toml_reports_a_parse_error() {
        assert!(matches!(
            SiteContent::from_toml("[site\nname ="),
            Err(ContentError::Parse(_))
        ));
    }
}
