// src/html.rs
//
// Thin query layer over `scraper`. Extraction code only needs to select,
// read text and read attributes, so that is all this exposes.

use scraper::{ElementRef, Html, Selector};

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    pub fn first(&self, selector: &Selector) -> Option<Element<'_>> {
        self.html.select(selector).next().map(Element)
    }

    pub fn all(&self, selector: &Selector) -> Vec<Element<'_>> {
        self.html.select(selector).map(Element).collect()
    }

    pub fn first_text(&self, selector: &Selector) -> Option<String> {
        self.first(selector).map(|el| el.text())
    }
}

#[derive(Clone, Copy)]
pub struct Element<'a>(ElementRef<'a>);

impl<'a> Element<'a> {
    pub fn first(&self, selector: &Selector) -> Option<Element<'a>> {
        self.0.select(selector).next().map(Element)
    }

    pub fn all(&self, selector: &Selector) -> Vec<Element<'a>> {
        self.0.select(selector).map(Element).collect()
    }

    /// Every descendant text node, trimmed, empties dropped, joined with no
    /// separator.
    pub fn text(&self) -> String {
        self.0
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Descendant text exactly as it appears in the markup.
    pub fn raw_text(&self) -> String {
        self.0.text().collect()
    }

    /// First non-blank text node that is a direct child of this element.
    pub fn own_text(&self) -> Option<String> {
        self.0
            .children()
            .filter_map(|child| child.value().as_text())
            .map(|text| String::from(&**text))
            .find(|text| !text.trim().is_empty())
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(css: &str) -> Selector {
        Selector::parse(css).unwrap()
    }

    #[test]
    fn text_joins_stripped_nodes() {
        let doc = Document::parse("<div class='x'> Showing <b> 1 - 20 </b> of 45 </div>");
        assert_eq!(doc.first_text(&sel("div.x")).as_deref(), Some("Showing1 - 20of 45"));
    }

    #[test]
    fn own_text_skips_nested_elements() {
        let doc = Document::parse(
            "<span class='nv'>\n  Bedrooms <span class='v'>3</span></span>",
        );
        let span = doc.first(&sel("span.nv")).unwrap();

        assert_eq!(span.own_text().map(|t| t.trim().to_string()).as_deref(), Some("Bedrooms"));
        assert_eq!(span.raw_text(), "\n  Bedrooms 3");
    }

    #[test]
    fn missing_elements_are_none() {
        let doc = Document::parse("<p>hello</p>");
        assert!(doc.first(&sel("h1.title")).is_none());
        assert!(doc.all(&sel("li")).is_empty());
        assert_eq!(doc.first(&sel("p")).and_then(|p| p.attr("href")), None);
    }
}
