//! Flyweight registry for shared ball state
//!
//! Every ball of a given [`BallKind`] points at the same [`BallFlyweight`]:
//! one sprite and one radius, loaded once and never mutated. Balls hold only
//! their own position and velocity.
//!
//! The cache lock is taken for lookup and for insertion only. Sprite loading
//! happens under a per-kind load lock instead, so a slow load never stalls a
//! concurrent tick or a lookup of another kind. Callers that miss on the same
//! kind at once wait for the first load, so each kind is built at most once.
//! A failed load caches nothing. No entry is ever removed.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::kind::BallKind;
use crate::assets::{AssetLoader, Sprite};
use crate::error::ResourceLoadError;
use crate::lock;

/// Intrinsic state shared by all balls of one kind
#[derive(Debug)]
pub struct BallFlyweight {
    kind: BallKind,
    radius: f32,
    sprite: Sprite,
}

impl BallFlyweight {
    fn new(kind: BallKind, sprite: Sprite) -> Self {
        let radius = kind.radius();
        debug_assert!(radius > 0.0, "{:?} radius must be positive", kind);
        Self {
            kind,
            radius,
            sprite,
        }
    }

    pub fn kind(&self) -> BallKind {
        self.kind
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Side of the square a ball of this kind occupies
    pub fn diameter(&self) -> f32 {
        2.0 * self.radius
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}

/// Memoizing cache of [`BallFlyweight`]s, keyed by kind
pub struct BallRegistry {
    asset_dir: PathBuf,
    loader: Box<dyn AssetLoader>,
    cache: Mutex<HashMap<BallKind, Arc<BallFlyweight>>>,
    /// One load lock per kind; only that kind's callers wait on a load
    loading: Mutex<HashMap<BallKind, Arc<Mutex<()>>>>,
    constructions: AtomicUsize,
}

impl BallRegistry {
    /// Create an empty registry. Sprite paths are resolved under `asset_dir`.
    pub fn new(asset_dir: impl Into<PathBuf>, loader: impl AssetLoader + 'static) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            loader: Box::new(loader),
            cache: Mutex::new(HashMap::new()),
            loading: Mutex::new(HashMap::new()),
            constructions: AtomicUsize::new(0),
        }
    }

    fn cached(&self, kind: BallKind) -> Option<Arc<BallFlyweight>> {
        lock(&self.cache).get(&kind).map(Arc::clone)
    }

    /// Get the shared state for `kind`, loading it on first request
    pub fn get(&self, kind: BallKind) -> Result<Arc<BallFlyweight>, ResourceLoadError> {
        if let Some(cached) = self.cached(kind) {
            return Ok(cached);
        }

        let load_lock = Arc::clone(lock(&self.loading).entry(kind).or_default());
        let _loading = lock(&load_lock);
        // Another caller may have finished the load while we waited
        if let Some(cached) = self.cached(kind) {
            return Ok(cached);
        }

        let path = self.asset_dir.join(kind.asset_path());
        let sprite = self.loader.load(&path).inspect_err(|e| {
            log::warn!("Failed to load {:?} sprite: {}", kind, e);
        })?;
        let flyweight = Arc::new(BallFlyweight::new(kind, sprite));
        self.constructions.fetch_add(1, Ordering::Relaxed);
        log::info!(
            "Created {:?} flyweight (radius {}, sprite {})",
            kind,
            flyweight.radius,
            flyweight.sprite.path().display()
        );

        lock(&self.cache).insert(kind, Arc::clone(&flyweight));
        Ok(flyweight)
    }

    /// Load every kind up front. Keeps going after a failure and returns the
    /// first error seen.
    pub fn preload_all(&self) -> Result<(), ResourceLoadError> {
        let mut first_err = None;
        for kind in BallKind::ALL {
            if let Err(e) = self.get(kind) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Number of flyweights ever built
    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::Relaxed)
    }

    pub fn contains(&self, kind: BallKind) -> bool {
        lock(&self.cache).contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        lock(&self.cache).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for BallRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BallRegistry")
            .field("asset_dir", &self.asset_dir)
            .field("cached", &self.len())
            .field("constructions", &self.constructions())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::MemoryLoader;
    use super::*;
    use std::path::Path;
    use std::time::Duration;
    use std::thread;

    #[test]
    fn test_same_kind_is_same_instance() {
        let registry = BallRegistry::new("assets", MemoryLoader::default());
        let a = registry.get(BallKind::Soccer).unwrap();
        let b = registry.get(BallKind::Soccer).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.constructions(), 1);
    }

    #[test]
    fn test_distinct_kinds_are_distinct() {
        let registry = BallRegistry::new("assets", MemoryLoader::default());
        let beach = registry.get(BallKind::Beach).unwrap();
        let basket = registry.get(BallKind::Basket).unwrap();
        let soccer = registry.get(BallKind::Soccer).unwrap();
        assert!(!Arc::ptr_eq(&beach, &basket));
        assert!(!Arc::ptr_eq(&basket, &soccer));
        assert!(!Arc::ptr_eq(&beach, &soccer));
        assert_eq!(registry.len(), 3);
        assert_eq!(beach.sprite().path(), Path::new("assets/ball_beach.png"));
    }

    #[test]
    fn test_loads_once_per_kind() {
        let loader = MemoryLoader::default();
        let registry = BallRegistry::new("assets", loader.clone());
        for _ in 0..100 {
            registry.get(BallKind::Basket).unwrap();
        }
        assert_eq!(loader.loads.load(Ordering::SeqCst), 1);
        assert_eq!(registry.constructions(), 1);
    }

    #[test]
    fn test_failure_is_not_cached() {
        let loader = MemoryLoader::default();
        loader.fail(BallKind::Beach);
        let registry = BallRegistry::new("assets", loader.clone());

        let err = registry.get(BallKind::Beach).unwrap_err();
        assert!(matches!(err, ResourceLoadError::NotFound { .. }));
        assert!(!registry.contains(BallKind::Beach));
        assert!(registry.is_empty());

        loader.heal(BallKind::Beach);
        let flyweight = registry.get(BallKind::Beach).unwrap();
        assert_eq!(flyweight.kind(), BallKind::Beach);
        assert_eq!(registry.constructions(), 1);
        assert_eq!(loader.loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_preload_all_reports_first_failure() {
        let loader = MemoryLoader::default();
        loader.fail(BallKind::Basket);
        let registry = BallRegistry::new("assets", loader);

        assert!(registry.preload_all().is_err());
        assert!(registry.contains(BallKind::Beach));
        assert!(!registry.contains(BallKind::Basket));
        assert!(registry.contains(BallKind::Soccer));
    }

    #[test]
    fn test_concurrent_get_keeps_single_instance() {
        let loader = MemoryLoader {
            delay: Some(Duration::from_millis(50)),
            ..Default::default()
        };
        let registry = Arc::new(BallRegistry::new("assets", loader.clone()));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.get(BallKind::Soccer).unwrap())
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let first = &results[0];
        assert!(results.iter().all(|r| Arc::ptr_eq(r, first)));
        assert_eq!(loader.loads.load(Ordering::SeqCst), 1);
        assert_eq!(registry.constructions(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_concurrent_failure_leaves_retry_open() {
        let loader = MemoryLoader {
            delay: Some(Duration::from_millis(20)),
            ..Default::default()
        };
        loader.fail(BallKind::Beach);
        let registry = Arc::new(BallRegistry::new("assets", loader.clone()));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.get(BallKind::Beach).is_err())
            })
            .collect();
        assert!(handles.into_iter().all(|h| h.join().unwrap()));
        assert_eq!(registry.constructions(), 0);

        loader.heal(BallKind::Beach);
        assert!(registry.get(BallKind::Beach).is_ok());
        assert_eq!(registry.constructions(), 1);
    }

    #[test]
    fn test_flyweight_data() {
        let registry = BallRegistry::new("assets", MemoryLoader::default());
        let flyweight = registry.get(BallKind::Soccer).unwrap();
        assert_eq!(flyweight.radius(), 25.0);
        assert_eq!(flyweight.diameter(), 50.0);
        assert!(flyweight.sprite().is_valid());
    }
}
