//! Ordered collection of selected images
//!
//! Items and their display handles live in two parallel sequences that are
//! always the same length and index-aligned. Every mutating method updates
//! both at the same index before returning.

mod drag;
mod preview;

pub use drag::DragGesture;
pub use preview::{NullPreviewer, PreviewRenderer};

use crate::item::ImageFile;

pub struct ImageCollection<R: PreviewRenderer> {
    items: Vec<ImageFile>,
    handles: Vec<R::Handle>,
    renderer: R,
}

impl<R: PreviewRenderer> ImageCollection<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            items: Vec::new(),
            handles: Vec::new(),
            renderer,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ImageFile] {
        &self.items
    }

    pub fn handles(&self) -> &[R::Handle] {
        &self.handles
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ImageFile, &R::Handle)> {
        self.items.iter().zip(self.handles.iter())
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Point-in-time copy of the current order for the pipeline
    pub fn snapshot(&self) -> Vec<ImageFile> {
        self.items.clone()
    }

    /// Append every candidate whose content type is `image/*`.
    ///
    /// Other candidates are dropped without error. Returns how many were
    /// accepted; zero leaves the collection untouched.
    pub fn add(&mut self, candidates: impl IntoIterator<Item = ImageFile>) -> usize {
        let mut accepted = 0;
        for file in candidates {
            if !file.is_image() {
                log::debug!(
                    "Skipping {} (content type {:?})",
                    file.name,
                    file.content_type
                );
                continue;
            }
            let handle = self.renderer.create(&file);
            self.items.push(file);
            self.handles.push(handle);
            accepted += 1;
        }
        accepted
    }

    /// Release the handle at `index` and drop the item. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        let handle = self.handles.remove(index);
        self.renderer.release(handle);
        self.items.remove(index);
        true
    }

    pub fn clear(&mut self) {
        for handle in self.handles.drain(..) {
            self.renderer.release(handle);
        }
        self.items.clear();
    }

    /// Take the item at `from` out and reinsert it at `to`.
    ///
    /// Every other item keeps its relative order. Out-of-range indices and
    /// `from == to` are no-ops.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        let len = self.items.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        let handle = self.handles.remove(from);
        self.handles.insert(to, handle);
        true
    }

    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 {
            return false;
        }
        self.move_item(index, index - 1)
    }

    pub fn move_down(&mut self, index: usize) -> bool {
        match index.checked_add(1) {
            Some(next) if next < self.items.len() => self.move_item(index, next),
            _ => false,
        }
    }
}

impl<R: PreviewRenderer> Drop for ImageCollection<R> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Hands out numbered handles tagged with the item name and records releases
    #[derive(Default, Clone)]
    struct CountingPreviewer {
        next_id: Rc<RefCell<u32>>,
        released: Rc<RefCell<Vec<u32>>>,
    }

    impl PreviewRenderer for CountingPreviewer {
        type Handle = (u32, String);

        fn create(&mut self, file: &ImageFile) -> Self::Handle {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            (*next, file.name.clone())
        }

        fn release(&mut self, handle: Self::Handle) {
            self.released.borrow_mut().push(handle.0);
        }
    }

    fn image(name: &str) -> ImageFile {
        ImageFile::from_bytes(name, "image/png", vec![0u8; 4])
    }

    fn names(collection: &ImageCollection<CountingPreviewer>) -> Vec<String> {
        collection.items().iter().map(|f| f.name.clone()).collect()
    }

    fn assert_aligned(collection: &ImageCollection<CountingPreviewer>) {
        assert_eq!(collection.items().len(), collection.handles().len());
        for (item, handle) in collection.iter() {
            assert_eq!(item.name, handle.1);
        }
    }

    fn collection_of(names: &[&str]) -> (ImageCollection<CountingPreviewer>, CountingPreviewer) {
        let previewer = CountingPreviewer::default();
        let mut collection = ImageCollection::new(previewer.clone());
        collection.add(names.iter().map(|n| image(n)));
        (collection, previewer)
    }

    #[test]
    fn test_add_filters_non_images() {
        let (mut collection, _) = collection_of(&[]);
        let accepted = collection.add(vec![
            image("a.png"),
            ImageFile::from_bytes("notes.txt", "text/plain", vec![1u8]),
            ImageFile::from_bytes("b.jpg", "image/jpeg", vec![2u8]),
            ImageFile::from_bytes("doc.pdf", "application/pdf", vec![3u8]),
        ]);

        assert_eq!(accepted, 2);
        assert_eq!(names(&collection), vec!["a.png", "b.jpg"]);
        assert_aligned(&collection);
    }

    #[test]
    fn test_add_nothing_is_noop() {
        let (mut collection, previewer) = collection_of(&["a"]);

        assert_eq!(collection.add(Vec::new()), 0);
        assert_eq!(
            collection.add(vec![ImageFile::from_bytes("x", "text/plain", vec![0u8])]),
            0
        );

        assert_eq!(names(&collection), vec!["a"]);
        assert_eq!(*previewer.next_id.borrow(), 1);
    }

    #[test]
    fn test_add_appends_in_order() {
        let (mut collection, _) = collection_of(&["a", "b"]);
        collection.add(vec![image("c"), image("d")]);
        assert_eq!(names(&collection), vec!["a", "b", "c", "d"]);
        assert_aligned(&collection);
    }

    #[test]
    fn test_remove_releases_handle() {
        let (mut collection, previewer) = collection_of(&["a", "b", "c"]);

        assert!(collection.remove(1));
        assert_eq!(names(&collection), vec!["a", "c"]);
        assert_eq!(*previewer.released.borrow(), vec![2]);
        assert_aligned(&collection);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let (mut collection, previewer) = collection_of(&["a", "b"]);

        assert!(!collection.remove(2));
        assert!(!collection.remove(usize::MAX));
        assert_eq!(names(&collection), vec!["a", "b"]);
        assert!(previewer.released.borrow().is_empty());
    }

    #[test]
    fn test_clear_releases_every_handle_once() {
        let (mut collection, previewer) = collection_of(&["a", "b", "c"]);

        collection.clear();
        assert!(collection.is_empty());
        assert!(collection.handles().is_empty());

        let mut released = previewer.released.borrow().clone();
        released.sort();
        assert_eq!(released, vec![1, 2, 3]);

        // Nothing left to release a second time
        collection.clear();
        assert_eq!(previewer.released.borrow().len(), 3);
    }

    #[test]
    fn test_drop_releases_remaining_handles() {
        let (mut collection, previewer) = collection_of(&["a", "b", "c"]);
        collection.remove(0);
        drop(collection);

        let mut released = previewer.released.borrow().clone();
        released.sort();
        assert_eq!(released, vec![1, 2, 3]);
    }

    #[test]
    fn test_move_item_splices() {
        let (mut collection, _) = collection_of(&["a", "b", "c", "d"]);

        assert!(collection.move_item(0, 2));
        assert_eq!(names(&collection), vec!["b", "c", "a", "d"]);

        assert!(collection.move_item(3, 0));
        assert_eq!(names(&collection), vec!["d", "b", "c", "a"]);
        assert_aligned(&collection);
    }

    #[test]
    fn test_move_and_back_restores_order() {
        let original = ["a", "b", "c", "d", "e"];
        for i in 0..original.len() {
            for j in 0..original.len() {
                if i == j {
                    continue;
                }
                let (mut collection, _) = collection_of(&original);
                collection.move_item(i, j);
                collection.move_item(j, i);
                assert_eq!(names(&collection), original, "move({i}, {j}) and back");
                assert_aligned(&collection);
            }
        }
    }

    #[test]
    fn test_move_invalid_is_noop() {
        let (mut collection, _) = collection_of(&["a", "b"]);
        assert!(!collection.move_item(0, 0));
        assert!(!collection.move_item(0, 2));
        assert!(!collection.move_item(5, 0));
        assert!(!collection.move_up(usize::MAX));
        assert!(!collection.move_down(usize::MAX));
        assert_eq!(names(&collection), vec!["a", "b"]);
    }

    #[test]
    fn test_move_up_and_down_boundaries() {
        let (mut collection, _) = collection_of(&["a", "b", "c"]);

        assert!(!collection.move_up(0));
        assert!(!collection.move_down(2));
        assert_eq!(names(&collection), vec!["a", "b", "c"]);

        assert!(collection.move_up(2));
        assert_eq!(names(&collection), vec!["a", "c", "b"]);

        assert!(collection.move_down(0));
        assert_eq!(names(&collection), vec!["c", "a", "b"]);
        assert_aligned(&collection);
    }

    #[test]
    fn test_move_on_empty_collection() {
        let (mut collection, _) = collection_of(&[]);
        assert!(!collection.move_up(0));
        assert!(!collection.move_down(0));
        assert!(!collection.remove(0));
    }

    #[test]
    fn test_alignment_over_mixed_operations() {
        let (mut collection, previewer) = collection_of(&[]);

        // Deterministic pseudo-random op sequence
        let mut seed: u32 = 7;
        let mut next = || {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (seed >> 16) as usize
        };

        for step in 0..500 {
            let len = collection.len().max(1);
            match next() % 6 {
                0 | 1 => {
                    collection.add(vec![image(&format!("img{step}"))]);
                }
                2 => {
                    collection.remove(next() % (len + 1));
                }
                3 => {
                    collection.move_item(next() % len, next() % len);
                }
                4 => {
                    collection.move_up(next() % len);
                }
                _ => {
                    collection.move_down(next() % len);
                }
            }
            assert_aligned(&collection);
        }

        let created = *previewer.next_id.borrow() as usize;
        let released = previewer.released.borrow().len();
        assert_eq!(created - released, collection.len());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let (mut collection, _) = collection_of(&["a", "b"]);
        let snapshot = collection.snapshot();

        collection.clear();
        collection.add(vec![image("z")]);

        let snapshot_names: Vec<_> = snapshot.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(snapshot_names, vec!["a", "b"]);
    }
}
