// portal/collector.rs
use crate::errors::ScraperError;
use crate::html::Document;
use crate::portal::selectors::{CARD_LINK, RESULT_LINK};
use crate::portal::PortalScraper;
use tracing::{debug, info, warn};
use url::Url;

impl PortalScraper {
    /// Listing URLs across every result page of `base_url`, in page order.
    /// A page that fails to load contributes nothing; the walk carries on.
    pub fn collect_urls(&self, base_url: &str) -> Result<Vec<String>, ScraperError> {
        let total_pages = self.page_count(base_url)?;
        let mut listing_urls = Vec::new();

        for page in 1..=total_pages {
            let page_url = format!("{base_url}?page={page}");
            info!("📄 Scraping page {page}/{total_pages}: {page_url}");

            match self.document(&page_url) {
                Ok(document) => {
                    let found = listing_links(&document, &self.origin);
                    debug!(page, count = found.len(), "listing links on page");
                    listing_urls.extend(found);
                }
                Err(e) => {
                    warn!("⚠️ Error scraping page {page}: {e}");
                }
            }
        }

        Ok(listing_urls)
    }
}

/// Absolute listing URLs on one result page. Tries the development card
/// layout first, then the plain listing layout.
pub(crate) fn listing_links(document: &Document, origin: &Url) -> Vec<String> {
    let mut links = document.all(&CARD_LINK);
    if links.is_empty() {
        debug!("no development cards, trying listing-result links");
        links = document.all(&RESULT_LINK);
    }

    links
        .iter()
        .filter_map(|link| link.attr("href"))
        .filter_map(|href| match origin.join(href) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                warn!(href, error = %e, "skipping unparseable listing link");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Url {
        Url::parse("https://www.privateproperty.co.za").unwrap()
    }

    #[test]
    fn primary_cards_win_over_fallback() {
        let doc = Document::parse(
            r#"
            <a class="development-result-card-link" href="/developments/a/1">A</a>
            <a class="listing-result" href="/for-sale/x/T1">X</a>
            <a class="development-result-card-link" href="/developments/b/2">B</a>
            "#,
        );

        assert_eq!(
            listing_links(&doc, &origin()),
            vec![
                "https://www.privateproperty.co.za/developments/a/1",
                "https://www.privateproperty.co.za/developments/b/2",
            ]
        );
    }

    #[test]
    fn falls_back_to_listing_result_links() {
        let doc = Document::parse(
            r#"
            <a class="listing-result" href="/for-sale/gauteng/centurion/T100">one</a>
            <a class="listing-result">no href</a>
            <a class="listing-result" href="/for-sale/gauteng/centurion/T100">dup</a>
            "#,
        );

        assert_eq!(
            listing_links(&doc, &origin()),
            vec![
                "https://www.privateproperty.co.za/for-sale/gauteng/centurion/T100",
                "https://www.privateproperty.co.za/for-sale/gauteng/centurion/T100",
            ]
        );
    }

    #[test]
    fn no_links_at_all() {
        let doc = Document::parse("<div>nothing here</div>");
        assert!(listing_links(&doc, &origin()).is_empty());
    }
}
