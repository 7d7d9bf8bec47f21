//! Ordered image collection backing the image-to-PDF flow

use crate::assemble::SourceImage;
use crate::types::{ImageKind, Notification};

/// Hard cap on collection size
pub const MAX_IMAGES: usize = 50;

/// Stable entry identifier, unique for the collection's lifetime and never
/// reused after deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub u64);

/// Direction for single-step reordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// A file offered to the collection, before validation
#[derive(Debug, Clone)]
pub struct CandidateImage {
    pub name: String,
    pub data: Vec<u8>,
}

/// One accepted image plus its collection-scoped metadata.
///
/// `preview` is whatever renderable resource the embedder attaches (a GUI
/// texture, a unit value, a test guard). The entry owns it outright and it
/// is dropped together with the entry, which is the single release point.
#[derive(Debug)]
pub struct ImageEntry<P> {
    pub id: EntryId,
    pub name: String,
    pub kind: ImageKind,
    pub data: Vec<u8>,
    pub preview: P,
}

/// User-curated, reorderable image list with bounded size.
///
/// Mutating operations return the notification describing their outcome, so
/// state change and message always travel together.
#[derive(Debug)]
pub struct ImageCollection<P> {
    entries: Vec<ImageEntry<P>>,
    next_id: u64,
}

impl<P> Default for ImageCollection<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> ImageCollection<P> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageEntry<P>> {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<EntryId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Validate and append a batch of candidate files.
    ///
    /// Candidates outside the format allow-list are dropped individually,
    /// but a batch in which nothing passes is rejected as a whole, as is a
    /// batch that would push the collection past [`MAX_IMAGES`]. Accepted
    /// files are appended in batch order; `make_preview` supplies the
    /// preview resource for each of them.
    pub fn add_images<F>(&mut self, batch: Vec<CandidateImage>, mut make_preview: F) -> Notification
    where
        F: FnMut(&CandidateImage, ImageKind) -> P,
    {
        let offered = batch.len();
        let mut accepted = Vec::new();
        for candidate in batch {
            match ImageKind::sniff(&candidate.data) {
                Some(kind) => accepted.push((candidate, kind)),
                None => log::debug!("Skipping unsupported file: {}", candidate.name),
            }
        }

        if accepted.is_empty() {
            return Notification::error("Only JPEG, PNG, WebP and GIF images are supported");
        }

        if self.entries.len() + accepted.len() > MAX_IMAGES {
            return Notification::error(format!(
                "Cannot add {} image(s): at most {} images per document",
                accepted.len(),
                MAX_IMAGES
            ));
        }

        let added = accepted.len();
        for (candidate, kind) in accepted {
            let preview = make_preview(&candidate, kind);
            let id = EntryId(self.next_id);
            self.next_id += 1;
            self.entries.push(ImageEntry {
                id,
                name: candidate.name,
                kind,
                data: candidate.data,
                preview,
            });
        }

        if added < offered {
            Notification::success(format!(
                "Added {} of {} file(s); the rest were not supported images",
                added, offered
            ))
        } else {
            Notification::success(format!("Added {} image(s)", added))
        }
    }

    /// Swap the entry at `index` with its neighbor in `direction`.
    /// No-op at the boundary; returns whether anything moved.
    pub fn move_entry(&mut self, index: usize, direction: MoveDirection) -> bool {
        match direction {
            MoveDirection::Up if index > 0 && index < self.entries.len() => {
                self.entries.swap(index, index - 1);
                true
            }
            MoveDirection::Down if index + 1 < self.entries.len() => {
                self.entries.swap(index, index + 1);
                true
            }
            _ => false,
        }
    }

    /// Move `source` immediately before `target`'s current position.
    /// No-op if the ids match or either is unknown.
    pub fn reorder(&mut self, source: EntryId, target: EntryId) -> bool {
        if source == target {
            return false;
        }
        let (Some(from), Some(_)) = (self.position(source), self.position(target)) else {
            return false;
        };
        let entry = self.entries.remove(from);
        // Removing the source may have shifted the target's index
        let to = self.position(target).unwrap_or(from);
        self.entries.insert(to, entry);
        true
    }

    /// Remove the entry with `id`, dropping its preview resource.
    ///
    /// Removing the last remaining entry yields a distinct message so
    /// callers can tell the collection is no longer ready to assemble.
    pub fn remove(&mut self, id: EntryId) -> Option<Notification> {
        let index = self.position(id)?;
        self.entries.remove(index);
        Some(if self.entries.is_empty() {
            Notification::info("Image removed; the list is now empty")
        } else {
            Notification::info("Image removed")
        })
    }

    /// Drop every entry (and its preview resource) unconditionally.
    pub fn clear(&mut self) -> Notification {
        let count = self.entries.len();
        self.entries.clear();
        Notification::info(format!("Removed all {} image(s)", count))
    }

    /// Snapshot of the image data in collection order, detached from the
    /// preview resources, for handing to assembly.
    pub fn to_sources(&self) -> Vec<SourceImage> {
        self.entries
            .iter()
            .map(|e| SourceImage {
                name: e.name.clone(),
                kind: e.kind,
                data: e.data.clone(),
            })
            .collect()
    }
}
