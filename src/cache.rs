//! In-memory caching using moka
//!
//! The catalogue listing backs both the landing page and `GET /api/wallpapers`
//! and only changes through the admin endpoints, which invalidate it.

use moka::future::Cache;
use serde::Serialize;
use sqlx::PgPool;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::db::queries;
use crate::error::{AppError, Result};
use crate::models::Wallpaper;

const CATALOGUE_KEY: &str = "catalogue";

/// Application cache holding the wallpaper catalogue
#[derive(Clone)]
pub struct AppCache {
    /// Full catalogue listing, newest first (single entry)
    pub catalogue: Cache<String, Arc<Vec<Wallpaper>>>,
    /// Bumped on every invalidation so in-flight loads can detect they are stale
    generation: Arc<AtomicU64>,
}

impl AppCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // Catalogue: 1 entry, 10 min TTL (admin writes invalidate it early)
            catalogue: Cache::builder()
                .max_capacity(1)
                .time_to_live(Duration::from_secs(10 * 60))
                .build(),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            catalogue_cached: self.catalogue.entry_count() > 0,
        }
    }

    pub async fn cached_catalogue(&self) -> Option<Arc<Vec<Wallpaper>>> {
        self.catalogue.get(CATALOGUE_KEY).await
    }

    pub async fn store_catalogue(&self, wallpapers: Vec<Wallpaper>) -> Arc<Vec<Wallpaper>> {
        let wallpapers = Arc::new(wallpapers);
        self.catalogue
            .insert(CATALOGUE_KEY.to_string(), wallpapers.clone())
            .await;
        wallpapers
    }

    /// Drop the catalogue after a wallpaper is created or deleted
    pub async fn invalidate_catalogue(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.catalogue.invalidate(CATALOGUE_KEY).await;
        info!("Catalogue cache invalidated");
    }

    /// Invalidation count; read it before querying the database.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Drop the cached catalogue if it was invalidated since `generation`.
    ///
    /// A load that started before a write may have stored the old listing
    /// after the write's invalidation ran. Returns true if it was dropped.
    pub async fn discard_if_stale(&self, generation: u64) -> bool {
        if self.generation() == generation {
            return false;
        }
        self.catalogue.invalidate(CATALOGUE_KEY).await;
        debug!("Discarded catalogue loaded before an invalidation");
        true
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub catalogue_cached: bool,
}

/// Catalogue from cache, falling back to the database on a miss
pub async fn load_catalogue(cache: &AppCache, db: &PgPool) -> Result<Arc<Vec<Wallpaper>>> {
    if let Some(cached) = cache.cached_catalogue().await {
        debug!("Cache HIT for catalogue");
        return Ok(cached);
    }

    debug!("Cache MISS for catalogue");
    let generation = cache.generation();
    // Concurrent misses share one query
    let wallpapers = cache
        .catalogue
        .try_get_with(CATALOGUE_KEY.to_string(), async {
            queries::get_wallpapers(db).await.map(Arc::new)
        })
        .await
        .map_err(|e| AppError::from_shared(&e))?;

    cache.discard_if_stale(generation).await;
    Ok(wallpapers)
}

/// Start background cache warmer
///
/// Warms the cache on startup and refreshes every 10 minutes.
pub async fn start_cache_warmer(cache: AppCache, db: PgPool) {
    let mut interval = interval(Duration::from_secs(10 * 60));
    loop {
        // First tick completes immediately, giving the initial warm-up
        interval.tick().await;
        warm_cache(&cache, &db).await;
    }
}

/// Warm the cache with commonly accessed data
async fn warm_cache(cache: &AppCache, db: &PgPool) {
    info!("Starting cache warm-up...");

    let generation = cache.generation();
    match queries::get_wallpapers(db).await {
        Ok(wallpapers) => {
            let count = wallpapers.len();
            cache.store_catalogue(wallpapers).await;
            if !cache.discard_if_stale(generation).await {
                info!(count, "Catalogue cache warmed");
            }
        }
        Err(e) => warn!("Failed to warm catalogue cache: {}", e),
    }

    info!("Cache warm-up complete. Stats: {:?}", cache.stats());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn wallpaper(title: &str) -> Wallpaper {
        Wallpaper {
            id: Uuid::new_v4(),
            title: title.to_string(),
            style: "Modern".to_string(),
            color: "Neutral".to_string(),
            room: "Bedroom".to_string(),
            price: dec!(160),
            img: "linen.jpg".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_store_and_invalidate_catalogue() {
        let cache = AppCache::new();
        assert!(cache.cached_catalogue().await.is_none());

        cache.store_catalogue(vec![wallpaper("Linen Weave")]).await;
        let cached = cache.cached_catalogue().await.unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].title, "Linen Weave");

        cache.invalidate_catalogue().await;
        assert!(cache.cached_catalogue().await.is_none());
    }

    #[tokio::test]
    async fn test_load_finishing_after_invalidation_is_discarded() {
        let cache = AppCache::new();
        let before_write = cache.generation();

        // A write lands while the load is still querying
        cache.invalidate_catalogue().await;
        cache.store_catalogue(vec![wallpaper("Deleted Design")]).await;

        assert!(cache.discard_if_stale(before_write).await);
        assert!(cache.cached_catalogue().await.is_none());
    }

    #[tokio::test]
    async fn test_current_load_is_kept() {
        let cache = AppCache::new();
        let generation = cache.generation();
        cache.store_catalogue(vec![wallpaper("Linen Weave")]).await;

        assert!(!cache.discard_if_stale(generation).await);
        assert_eq!(cache.cached_catalogue().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_generation() {
        let cache = AppCache::new();
        let handle = cache.clone();
        let generation = cache.generation();

        handle.invalidate_catalogue().await;
        assert_eq!(cache.generation(), generation + 1);
    }
}
