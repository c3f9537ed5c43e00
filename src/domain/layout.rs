/// The set of layout handles requested for the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutUpdate {
    handles: Vec<String>,
}

impl LayoutUpdate {
    pub fn new<I, S>(handles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut update = Self::default();
        for handle in handles {
            update.add_handle(handle);
        }
        update
    }

    pub fn handles(&self) -> &[String] {
        &self.handles
    }

    pub fn has_handle(&self, handle: &str) -> bool {
        self.handles.iter().any(|h| h == handle)
    }

    /// Appends a handle, keeping the set free of duplicates.
    pub fn add_handle(&mut self, handle: impl Into<String>) {
        let handle = handle.into();
        if !self.has_handle(&handle) {
            self.handles.push(handle);
        }
    }
}
