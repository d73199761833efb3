//! Page fetching and anchor extraction
//!
//! Fetches a page with GET and pulls every `<a href>` out of the body,
//! resolved against the page URL. Failures are contained here: a non-200
//! response or a transport error yields an empty link list and a warning,
//! never an error to the caller.

use reqwest::{Client, StatusCode};
use scraper::{Html, Selector};
use url::Url;

/// Fetches a page and returns every anchor on it as an absolute URL
///
/// Returns an empty list when the page responds with anything other than
/// status 200 or is unreachable; the crawl moves on either way.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `page_url` - The page to fetch; also the base for resolving relative hrefs
pub async fn extract_links(client: &Client, page_url: &Url) -> Vec<String> {
    let response = match client.get(page_url.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Error fetching {}: {}", page_url, e);
            return Vec::new();
        }
    };

    if response.status() != StatusCode::OK {
        tracing::warn!(
            "Failed to fetch {}. Status code: {}",
            page_url,
            response.status().as_u16()
        );
        return Vec::new();
    }

    match response.text().await {
        Ok(body) => links_from_html(&body, page_url),
        Err(e) => {
            tracing::warn!("Error reading body of {}: {}", page_url, e);
            Vec::new()
        }
    }
}

/// Extracts and resolves all anchor hrefs from an HTML document
///
/// Anchors without an `href` attribute are skipped. Fragment-only hrefs
/// (`#section`) resolve to the page URL plus fragment and are kept as-is.
/// Absolute hrefs with non-HTTP schemes (`mailto:` and friends) resolve to
/// themselves and are also kept; scope filtering happens later, at enqueue
/// time. Hrefs that cannot be resolved against the base are dropped.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The URL of the page the HTML came from
///
/// # Returns
///
/// Absolute URLs in document order, duplicates preserved
pub fn links_from_html(html: &str, base_url: &Url) -> Vec<String> {
    let mut links = Vec::new();

    let document = Html::parse_document(html);

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Ok(absolute) = base_url.join(href) {
                    links.push(absolute.to_string());
                }
            }
        }
    }

    links
}
