// portal/selectors.rs
//
// Markup hooks on privateproperty.co.za. Result pages and listing pages each
// come in two card layouts, hence the alternates.

use once_cell::sync::Lazy;
use scraper::Selector;

fn css(selector: &str) -> Selector {
    Selector::parse(selector).unwrap_or_else(|e| panic!("bad selector {selector}: {e}"))
}

// Search results
pub static RESULT_COUNT: Lazy<Selector> =
    Lazy::new(|| css(".listing-results-layout__desktop-item-count"));
pub static CARD_LINK: Lazy<Selector> =
    Lazy::new(|| css("a.development-result-card-link[href]"));
pub static RESULT_LINK: Lazy<Selector> = Lazy::new(|| css("a.listing-result[href]"));

// Listing page
pub static TITLE: Lazy<Selector> = Lazy::new(|| css("h1.listing-details__title"));
pub static ADDRESS: Lazy<Selector> = Lazy::new(|| css("div.listing-details__address"));
pub static DESCRIPTION: Lazy<Selector> = Lazy::new(|| css("div.listing-description__text"));
pub static DESCRIPTION_WRAPPER: Lazy<Selector> =
    Lazy::new(|| css("div.listing-description-wrapper"));
pub static PARAGRAPH: Lazy<Selector> = Lazy::new(|| css("p"));
pub static PRICE: Lazy<Selector> = Lazy::new(|| css("div.listing-price-display__price"));
pub static PRICE_ALT: Lazy<Selector> = Lazy::new(|| css("p.listing-price-display__price"));

// Features list
pub static FEATURES: Lazy<Selector> = Lazy::new(|| css("div.property-features"));
pub static FEATURE_ITEM: Lazy<Selector> = Lazy::new(|| css("li.property-features__list-item"));
pub static FEATURE_NAME_VALUE: Lazy<Selector> =
    Lazy::new(|| css("span.property-features__name-value"));
pub static FEATURE_VALUE: Lazy<Selector> = Lazy::new(|| css("span.property-features__value"));

// Details list
pub static DETAILS: Lazy<Selector> = Lazy::new(|| css("div.property-details"));
pub static DETAIL_ITEM: Lazy<Selector> = Lazy::new(|| css("li.property-details__list-item"));
pub static DETAIL_NAME_VALUE: Lazy<Selector> =
    Lazy::new(|| css("span.property-details__name-value"));
pub static DETAIL_VALUE: Lazy<Selector> = Lazy::new(|| css("span.property-details__value"));
