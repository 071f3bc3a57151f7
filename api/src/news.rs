/// Wire types for the news proxy and the Giphy search endpoint.
use crate::{Gif, NewsArticle};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct NewsResponse {
    #[serde(default)]
    pub articles: Vec<NewsWire>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NewsWire {
    pub title: Option<String>,
    pub url: Option<String>,
    pub source: Option<NewsSource>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NewsSource {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct GiphyResponse {
    #[serde(default)]
    pub data: Vec<GiphyGif>,
}

#[derive(Debug, Deserialize, Default)]
pub struct GiphyGif {
    pub id: Option<String>,
    pub title: Option<String>,
    pub images: Option<GiphyImages>,
}

#[derive(Debug, Deserialize, Default)]
pub struct GiphyImages {
    pub original: Option<GiphyRendition>,
}

#[derive(Debug, Deserialize, Default)]
pub struct GiphyRendition {
    pub url: Option<String>,
}

pub fn map_article(raw: &NewsWire) -> Option<NewsArticle> {
    Some(NewsArticle {
        title: raw.title.clone()?,
        url: raw.url.clone()?,
        source: raw.source.as_ref().and_then(|s| s.name.clone()),
        published: raw.published_at,
        image: raw.url_to_image.clone(),
    })
}

pub fn map_gif(raw: &GiphyGif) -> Option<Gif> {
    Some(Gif {
        id: raw.id.clone()?,
        title: raw.title.clone().unwrap_or_default(),
        url: raw.images.as_ref()?.original.as_ref()?.url.clone()?,
    })
}
