//! Live search source descriptors.

use serde::{Deserialize, Serialize};

/// Where a live search draws results from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchSource {
    /// General web results
    Web {
        /// ISO country code restricting results
        #[serde(default, skip_serializing_if = "Option::is_none")]
        country: Option<String>,
    },
    /// News results
    News {
        /// ISO country code restricting results
        #[serde(default, skip_serializing_if = "Option::is_none")]
        country: Option<String>,
    },
    /// Posts on X
    X,
    /// RSS feeds
    Rss {
        /// Feed URLs
        links: Vec<String>,
    },
}

impl SearchSource {
    /// Builds the default source list for a country and a set of RSS feeds.
    ///
    /// Web, news and X come first (web and news scoped to `country` when
    /// given), followed by one RSS source per link. Returns `None` when there
    /// is neither a country nor a link, meaning the API picks its own sources.
    /// A blank country counts as no country.
    ///
    /// # Examples
    ///
    /// ```
    /// use grok_core::SearchSource;
    ///
    /// let sources = SearchSource::defaults_for(Some("us"), &[]).unwrap();
    /// assert_eq!(sources.len(), 3);
    /// assert!(SearchSource::defaults_for(None, &[]).is_none());
    /// ```
    pub fn defaults_for(country: Option<&str>, rss_links: &[String]) -> Option<Vec<SearchSource>> {
        let country = country.filter(|c| !c.trim().is_empty());
        if country.is_none() && rss_links.is_empty() {
            return None;
        }

        let country = country.map(str::to_string);
        let mut sources = vec![
            SearchSource::Web {
                country: country.clone(),
            },
            SearchSource::News { country },
            SearchSource::X,
        ];
        sources.extend(rss_links.iter().map(|link| SearchSource::Rss {
            links: vec![link.clone()],
        }));
        Some(sources)
    }
}
