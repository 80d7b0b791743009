use crate::core::catalog::{self, Resource};
use std::time::Duration;

/// Сервис поиска по каталогу ресурсов
pub struct ResourceService {
    catalog: Vec<Resource>,
    delay: Duration,
}

impl ResourceService {
    pub fn new(delay: Duration) -> Self {
        Self::with_catalog(catalog::sample_catalog(), delay)
    }

    pub fn with_catalog(catalog: Vec<Resource>, delay: Duration) -> Self {
        Self { catalog, delay }
    }

    pub fn catalog(&self) -> &[Resource] {
        &self.catalog
    }

    /// Title search plus optional language filter, after the simulated delay
    pub async fn get_resources(&self, query: &str, lang: Option<&str>) -> Vec<Resource> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let items = catalog::search(query, lang, &self.catalog);
        log::debug!("🔎 Resource search {:?} ({:?}): {} hits", query, lang, items.len());
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_resources_matches_catalog_search() {
        let service = ResourceService::new(Duration::ZERO);
        let all = service.get_resources("", None).await;
        assert_eq!(all, service.catalog().to_vec());

        let sleep = service.get_resources("sleep", None).await;
        assert_eq!(sleep.len(), 1);
        assert_eq!(sleep[0].title, "Sleep Guide");
    }

    #[tokio::test]
    async fn test_get_resources_language() {
        let service = ResourceService::new(Duration::ZERO);
        assert!(service.get_resources("", Some("hi")).await.is_empty());
        assert_eq!(service.get_resources("stress", Some("en")).await.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_resources_delay() {
        let service = ResourceService::new(Duration::from_millis(350));
        let started = tokio::time::Instant::now();
        service.get_resources("", None).await;
        assert!(started.elapsed() >= Duration::from_millis(350));
    }
}
