// SPDX-License-Identifier: MPL-2.0
//! Background page decoding.
//!
//! Each navigation issues a [`LoadTicket`] carrying a generation number. The
//! decode runs on a blocking worker; when it finishes, the result is shown
//! only if its ticket is still the newest one. Quick key repeats therefore
//! never flash an older page over the one the user asked for last.
//!
//! Neighbouring pages are decoded into the [`PageCache`] once the current
//! page is on screen.

mod cache;

pub use cache::{CacheStats, PageCache, PrefetchConfig};

use crate::catalog::{ImageStore, PageImage};
use crate::error::{Error, Result};
use crate::page_state::PageState;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Identifies one request to show a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub index: usize,
    pub path: PathBuf,
}

/// What the presenter should do after asking for a page.
#[derive(Debug, Clone)]
pub enum LoadRequest {
    /// The page was cached and can be drawn right away.
    Ready(PageImage),
    /// A decode must run for this ticket.
    Pending(LoadTicket),
}

/// Hands out load tickets, filters stale completions and owns the page cache.
pub struct PageLoader {
    store: Arc<dyn ImageStore>,
    cache: PageCache,
    generation: u64,
    latest: Option<LoadTicket>,
    prefetching: HashSet<PathBuf>,
}

impl PageLoader {
    #[must_use]
    pub fn new(store: Arc<dyn ImageStore>, config: PrefetchConfig) -> Self {
        Self {
            store,
            cache: PageCache::new(config),
            generation: 0,
            latest: None,
            prefetching: HashSet::new(),
        }
    }

    #[must_use]
    pub fn store(&self) -> Arc<dyn ImageStore> {
        Arc::clone(&self.store)
    }

    #[must_use]
    pub fn cache(&self) -> &PageCache {
        &self.cache
    }

    /// Whether a page decode is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.latest.is_some()
    }

    /// Asks for the page at `index`.
    ///
    /// Every call supersedes all earlier tickets, including when the page is
    /// served from the cache.
    pub fn request(&mut self, index: usize, path: &Path) -> LoadRequest {
        self.generation += 1;

        if let Some(page) = self.cache.get(path) {
            log::debug!("Page {} served from cache", index + 1);
            self.latest = None;
            return LoadRequest::Ready(page);
        }

        let ticket = LoadTicket {
            generation: self.generation,
            index,
            path: path.to_path_buf(),
        };
        self.latest = Some(ticket.clone());
        LoadRequest::Pending(ticket)
    }

    /// The newest outstanding ticket, if a decode is running.
    #[must_use]
    pub fn pending(&self) -> Option<&LoadTicket> {
        self.latest.as_ref()
    }

    /// Whether `ticket` is the newest outstanding request.
    #[must_use]
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.latest.as_ref() == Some(ticket)
    }

    /// Accepts a finished decode.
    ///
    /// Returns `None` for a superseded ticket. Successful decodes are cached
    /// either way.
    pub fn complete(
        &mut self,
        ticket: &LoadTicket,
        result: Result<PageImage>,
    ) -> Option<Result<PageImage>> {
        if let Ok(page) = &result {
            self.cache.insert(ticket.path.clone(), page.clone());
        }

        if !self.is_current(ticket) {
            log::debug!(
                "Discarding stale decode of page {} (generation {})",
                ticket.index + 1,
                ticket.generation
            );
            return None;
        }

        self.latest = None;
        Some(result)
    }

    /// Neighbouring pages of `state` that are neither cached nor already
    /// being prefetched, nearest first. The returned paths are marked as in
    /// flight until [`Self::complete_prefetch`] is called for them.
    pub fn prefetch_targets(&mut self, state: &PageState) -> Vec<PathBuf> {
        let config = *self.cache.config();
        if !config.enabled || config.prefetch_count == 0 {
            return Vec::new();
        }

        let mut targets = Vec::new();
        for index in state.neighbours(config.prefetch_count) {
            let path = &state.pages()[index];
            if self.cache.contains(path) || self.prefetching.contains(path) {
                continue;
            }
            self.prefetching.insert(path.clone());
            targets.push(path.clone());
        }
        targets
    }

    /// Stores a prefetched page.
    pub fn complete_prefetch(&mut self, path: PathBuf, result: Result<PageImage>) {
        self.prefetching.remove(&path);
        match result {
            Ok(page) => {
                self.cache.insert(path, page);
            }
            Err(err) => log::debug!("Prefetch of {} failed: {err}", path.display()),
        }
    }
}

impl std::fmt::Debug for PageLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageLoader")
            .field("generation", &self.generation)
            .field("latest", &self.latest)
            .field("prefetching", &self.prefetching.len())
            .field("cache", &self.cache)
            .finish()
    }
}

/// Decodes the page named by `ticket` on a blocking worker thread.
pub async fn decode(
    store: Arc<dyn ImageStore>,
    ticket: LoadTicket,
) -> (LoadTicket, Result<PageImage>) {
    let result = decode_path(store, ticket.path.clone()).await;
    (ticket, result)
}

/// Decodes `path` for the cache.
pub async fn prefetch(store: Arc<dyn ImageStore>, path: PathBuf) -> (PathBuf, Result<PageImage>) {
    let result = decode_path(store, path.clone()).await;
    (path, result)
}

async fn decode_path(store: Arc<dyn ImageStore>, path: PathBuf) -> Result<PageImage> {
    let task_path = path.clone();
    tokio::task::spawn_blocking(move || store.load_pixels(&task_path))
        .await
        .unwrap_or_else(|err| Err(Error::image_load(path, format!("decode task failed: {err}"))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page_state::{ImageDimensions, ZoomBounds};
    use std::sync::Mutex;

    /// In-memory store that fabricates pages and records decode calls.
    #[derive(Default)]
    struct FakeStore {
        decoded: Mutex<Vec<PathBuf>>,
    }

    impl ImageStore for FakeStore {
        fn list_pages(&self, _directory: &Path) -> Vec<PathBuf> {
            Vec::new()
        }

        fn load_dimensions(&self, _path: &Path) -> Result<ImageDimensions> {
            Ok(ImageDimensions::new(2, 3))
        }

        fn load_pixels(&self, path: &Path) -> Result<PageImage> {
            if let Ok(mut decoded) = self.decoded.lock() {
                decoded.push(path.to_path_buf());
            }
            if path.ends_with("broken.png") {
                return Err(Error::image_load(path, "corrupt"));
            }
            Ok(PageImage::from_rgba(2, 3, vec![0; 24]))
        }
    }

    fn loader(config: PrefetchConfig) -> PageLoader {
        PageLoader::new(Arc::new(FakeStore::default()), config)
    }

    fn pages(count: usize) -> Vec<PathBuf> {
        (1..=count)
            .map(|n| PathBuf::from(format!("/p/image{n}.png")))
            .collect()
    }

    fn page() -> PageImage {
        PageImage::from_rgba(2, 3, vec![0; 24])
    }

    fn pending(request: LoadRequest) -> LoadTicket {
        match request {
            LoadRequest::Pending(ticket) => ticket,
            LoadRequest::Ready(_) => panic!("expected a pending ticket"),
        }
    }

    #[test]
    fn generations_increase() {
        let mut loader = loader(PrefetchConfig::default());
        let first = pending(loader.request(0, Path::new("/p/a.png")));
        let second = pending(loader.request(1, Path::new("/p/b.png")));
        assert!(second.generation > first.generation);
        assert!(!loader.is_current(&first));
        assert!(loader.is_current(&second));
    }

    #[test]
    fn stale_completion_is_discarded_but_cached() {
        let mut loader = loader(PrefetchConfig::default());
        let stale = pending(loader.request(0, Path::new("/p/a.png")));
        let fresh = pending(loader.request(1, Path::new("/p/b.png")));

        assert!(loader.complete(&stale, Ok(page())).is_none());
        assert!(loader.is_loading());
        assert!(loader.cache().contains(Path::new("/p/a.png")));

        let shown = loader.complete(&fresh, Ok(page()));
        assert!(matches!(shown, Some(Ok(_))));
        assert!(!loader.is_loading());
    }

    #[test]
    fn failures_of_current_ticket_are_reported() {
        let mut loader = loader(PrefetchConfig::default());
        let ticket = pending(loader.request(0, Path::new("/p/broken.png")));
        let result = loader.complete(&ticket, Err(Error::image_load(&ticket.path, "corrupt")));
        assert!(matches!(result, Some(Err(Error::ImageLoadFailed { .. }))));
        assert!(!loader.cache().contains(&ticket.path));
    }

    #[test]
    fn cached_page_is_ready_and_supersedes_pending() {
        let mut loader = loader(PrefetchConfig::default());
        loader.complete_prefetch(PathBuf::from("/p/b.png"), Ok(page()));
        let slow = pending(loader.request(0, Path::new("/p/a.png")));

        assert!(matches!(
            loader.request(1, Path::new("/p/b.png")),
            LoadRequest::Ready(_)
        ));
        assert!(loader.complete(&slow, Ok(page())).is_none());
    }

    #[test]
    fn disabled_cache_always_decodes() {
        let mut loader = loader(PrefetchConfig::disabled());
        let ticket = pending(loader.request(0, Path::new("/p/a.png")));
        loader.complete(&ticket, Ok(page()));
        assert!(matches!(
            loader.request(0, Path::new("/p/a.png")),
            LoadRequest::Pending(_)
        ));
    }

    #[test]
    fn prefetch_targets_skip_cached_and_in_flight() {
        let mut loader = loader(PrefetchConfig::default());
        let mut state = PageState::new(pages(10), ZoomBounds::default()).expect("pages");
        state.go_to_page(4);
        loader.complete_prefetch(PathBuf::from("/p/image6.png"), Ok(page()));

        let targets = loader.prefetch_targets(&state);
        assert_eq!(
            targets,
            vec![
                PathBuf::from("/p/image4.png"),
                PathBuf::from("/p/image7.png"),
                PathBuf::from("/p/image3.png"),
            ]
        );
        assert!(loader.prefetch_targets(&state).is_empty());

        loader.complete_prefetch(PathBuf::from("/p/image4.png"), Err(Error::Io("x".into())));
        assert_eq!(
            loader.prefetch_targets(&state),
            vec![PathBuf::from("/p/image4.png")]
        );
    }

    #[test]
    fn disabled_prefetch_has_no_targets() {
        let mut loader = loader(PrefetchConfig::disabled());
        let state = PageState::new(pages(3), ZoomBounds::default()).expect("pages");
        assert!(loader.prefetch_targets(&state).is_empty());
    }

    #[tokio::test]
    async fn decode_runs_store_off_thread() {
        let store = Arc::new(FakeStore::default());
        let ticket = LoadTicket {
            generation: 7,
            index: 0,
            path: PathBuf::from("/p/image1.png"),
        };
        let (returned, result) = decode(store.clone(), ticket.clone()).await;
        assert_eq!(returned, ticket);
        assert_eq!(result.expect("decoded").height, 3);
        assert_eq!(
            store.decoded.lock().expect("lock").as_slice(),
            &[PathBuf::from("/p/image1.png")]
        );
    }

    #[tokio::test]
    async fn prefetch_reports_failures() {
        let store: Arc<dyn ImageStore> = Arc::new(FakeStore::default());
        let (path, result) = prefetch(store, PathBuf::from("/p/broken.png")).await;
        assert_eq!(path, PathBuf::from("/p/broken.png"));
        assert!(result.is_err());
    }
}
