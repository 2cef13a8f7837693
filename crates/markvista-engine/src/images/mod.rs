//! # Image Loading
//!
//! The parser only carries image URLs; turning a URL into displayable data
//! is an external collaborator's job. The engine provides the seam: a
//! best-effort [`ImageLoader`] trait and a bounded, URL-keyed [`ImageCache`]
//! with recency-based eviction in front of it.
//!
//! Loading is best-effort throughout: a failed fetch is logged and swallowed,
//! and the caller proceeds without the image.

use std::collections::HashMap;

/// Fetches and decodes an image for a URL.
///
/// Implementations may do network or file io; the engine never does. A
/// failure is reported as `None`, never as a panic or error type.
pub trait ImageLoader {
    type Image;

    fn fetch(&self, url: &str) -> Option<Self::Image>;
}

/// Bounded key→image cache with recency-based eviction.
///
/// Keys are URLs. A `get` refreshes the entry's recency; inserting past
/// capacity evicts the least recently used entry. The value type is whatever
/// the loader produces; the cache never inspects it.
pub struct ImageCache<T> {
    capacity: usize,
    entries: HashMap<String, T>,
    /// Keys ordered least → most recently used.
    recency: Vec<String>,
}

impl<T> ImageCache<T> {
    /// Creates a cache holding at most `capacity` entries. A capacity of 0
    /// is treated as 1.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            recency: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    /// Looks up a cached image, refreshing its recency on a hit.
    pub fn get(&mut self, url: &str) -> Option<&T> {
        if self.entries.contains_key(url) {
            self.touch(url);
        }
        self.entries.get(url)
    }

    /// Stores an image, evicting the least recently used entry if the cache
    /// is full.
    pub fn insert(&mut self, url: &str, image: T) {
        if self.entries.insert(url.to_string(), image).is_some() {
            self.touch(url);
            return;
        }
        self.recency.push(url.to_string());
        if self.entries.len() > self.capacity {
            let evicted = self.recency.remove(0);
            self.entries.remove(&evicted);
        }
    }

    /// Cache-through load: hit → cached image; miss → fetch, store, return;
    /// fetch failure → warn and `None`.
    pub fn load<L>(&mut self, url: &str, loader: &L) -> Option<&T>
    where
        L: ImageLoader<Image = T>,
    {
        if !self.entries.contains_key(url) {
            match loader.fetch(url) {
                Some(image) => self.insert(url, image),
                None => {
                    log::warn!("image fetch failed for {url}");
                    return None;
                }
            }
        }
        self.get(url)
    }

    fn touch(&mut self, url: &str) {
        if let Some(pos) = self.recency.iter().position(|k| k == url) {
            let key = self.recency.remove(pos);
            self.recency.push(key);
        }
    }
}
