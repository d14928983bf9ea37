use super::HeadlineSource;
use crate::reccore::cfg::Cfg;
use crate::reccore::error::Error;
use serde::Deserialize;
use std::time::Duration;

// the item endpoint returns more fields; only the title matters here
#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
}

/// Hacker News top stories. One request for the story id list, then one
/// request per item; stories that fail to load or have no title are skipped.
pub struct HackerNews {
    base_url: String,
    limit: usize,
    client: reqwest::blocking::Client,
}

impl HackerNews {
    pub fn from_cfg(cfg: &Cfg) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(cfg.get_timeout_secs()))
            .build()?;
        Ok(HackerNews {
            base_url: cfg.get_api_base().trim_end_matches('/').to_string(),
            limit: cfg.get_fetch_limit(),
            client,
        })
    }

    fn story_ids(&self) -> Result<Vec<u64>, Error> {
        let url = format!("{}/topstories.json", self.base_url);
        let ids = self.client.get(&url).send()?.error_for_status()?.json()?;
        Ok(ids)
    }

    fn item_title(&self, id: u64) -> Result<Option<String>, Error> {
        let url = format!("{}/item/{}.json", self.base_url, id);
        // deleted or dead items come back as a JSON null
        let item: Option<Item> = self.client.get(&url).send()?.error_for_status()?.json()?;
        Ok(item.and_then(|i| i.title))
    }
}

impl HeadlineSource for HackerNews {
    fn top_headlines(&self) -> Result<Vec<String>, Error> {
        let mut ids = self.story_ids()?;
        ids.truncate(self.limit);
        log::debug!("fetching {} stories", ids.len());
        let mut headlines = Vec::with_capacity(ids.len());
        for id in ids {
            match self.item_title(id) {
                Ok(Some(title)) => headlines.push(title),
                Ok(None) => log::warn!("story {} has no title, skipped", id),
                Err(e) => log::warn!("story {}: {}", id, e),
            }
        }
        Ok(headlines)
    }
}
