/// Resource catalog and the title matcher behind the gallery search
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Video,
    Audio,
    Article,
}

impl MediaType {
    pub fn label(&self) -> &'static str {
        match self {
            MediaType::Video => "video",
            MediaType::Audio => "audio",
            MediaType::Article => "article",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub media: MediaType,
    pub lang: String,
    pub youtube_id: Option<String>,
    pub image_url: Option<String>,
}

impl Resource {
    fn video(id: u32, title: &str, media: MediaType, youtube_id: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            media,
            lang: "en".to_string(),
            youtube_id: Some(youtube_id.to_string()),
            image_url: None,
        }
    }

    /// Ссылка на ролик, если он есть
    pub fn watch_url(&self) -> Option<String> {
        self.youtube_id
            .as_ref()
            .map(|id| format!("https://www.youtube.com/watch?v={}", id))
    }
}

/// The fixed catalog shown in the resource hub.
pub fn sample_catalog() -> Vec<Resource> {
    vec![
        Resource::video(1, "10-Minute Guided Meditation", MediaType::Video, "O-6f5wQXSu8"),
        Resource::video(2, "Understanding Depression", MediaType::Video, "z-IR48Mb3W0"),
        Resource::video(5, "Coping with Exam Stress", MediaType::Video, "-RZ86OB9hw4"),
        Resource::video(3, "Peaceful Forest Stream", MediaType::Audio, "1v8mDF57WYs"),
        Resource::video(4, "Journaling for Clarity", MediaType::Video, "WI-j39vOqmk"),
        Resource::video(6, "Spirit Of Kashmir", MediaType::Video, "cXLXn-MV5HQ"),
        Resource {
            id: 7,
            title: "Sleep Guide".to_string(),
            media: MediaType::Article,
            lang: "en".to_string(),
            youtube_id: None,
            image_url: Some(
                "https://images.unsplash.com/photo-1541781774459-bb2af2f05b55?w=800".to_string(),
            ),
        },
    ]
}

/// Records whose title contains `query`, ignoring case, in catalog order.
/// An empty query matches everything.
pub fn match_resources<'a>(query: &str, catalog: &'a [Resource]) -> Vec<&'a Resource> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|r| r.title.to_lowercase().contains(&needle))
        .collect()
}

pub fn filter_by_language<'a>(items: Vec<&'a Resource>, lang: Option<&str>) -> Vec<&'a Resource> {
    match lang {
        Some(lang) => items.into_iter().filter(|r| r.lang == lang).collect(),
        None => items,
    }
}

/// Title match plus the optional language selector from the gallery.
pub fn search(query: &str, lang: Option<&str>, catalog: &[Resource]) -> Vec<Resource> {
    filter_by_language(match_resources(query, catalog), lang)
        .into_iter()
        .cloned()
        .collect()
}
