/// A list assembled from eagerly supplied items and deferred thunks.
///
/// Thunks let a type's fields refer to types that aren't constructed yet
/// (including the type itself). Each thunk is called exactly once, when
/// the schema is built.
pub(crate) struct ThunkedList<T> {
    items: Vec<T>,
    thunks: Vec<Box<dyn FnOnce() -> Vec<T> + Send>>,
}

impl<T> ThunkedList<T> {
    pub(crate) fn new() -> Self {
        Self {
            items: vec![],
            thunks: vec![],
        }
    }

    pub(crate) fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub(crate) fn push_thunk(&mut self, thunk: impl FnOnce() -> Vec<T> + Send + 'static) {
        self.thunks.push(Box::new(thunk));
    }

    /// Eager items first, then each thunk's items in registration order.
    pub(crate) fn resolve(self) -> Vec<T> {
        let mut items = self.items;
        for thunk in self.thunks {
            items.extend(thunk());
        }
        items
    }
}

impl<T> std::fmt::Debug for ThunkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThunkedList")
            .field("items", &self.items.len())
            .field("thunks", &self.thunks.len())
            .finish()
    }
}
