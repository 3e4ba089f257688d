use indexmap::IndexMap;

/// Accumulates copied basenames while files are materialized.
///
/// Names are never deduplicated: a basename copied twice appears twice.
#[derive(Debug, Default)]
pub struct StubListBuilder {
    native_stub: Vec<String>,
    ignored: Vec<String>,
    seen: IndexMap<String, usize>,
}

/// Sorted output of a [`StubListBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubLists {
    pub native_stub: Vec<String>,
    pub ignored: Vec<String>,
    /// Basenames copied more than once, in first-seen order.
    pub duplicates: Vec<String>,
}

impl StubListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a copied implementation file: it is compiled and ignored.
    pub fn record_source(&mut self, name: String) {
        self.native_stub.push(name.clone());
        self.record_header(name);
    }

    /// Records a copied header: it is only ignored.
    pub fn record_header(&mut self, name: String) {
        *self.seen.entry(name.clone()).or_insert(0) += 1;
        self.ignored.push(name);
    }

    /// Appends the sentinel to the stub list and sorts both lists.
    pub fn finish(self, sentinel: &str) -> StubLists {
        let StubListBuilder {
            mut native_stub,
            mut ignored,
            seen,
        } = self;

        native_stub.push(sentinel.to_string());
        native_stub.sort();
        ignored.sort();

        let duplicates = seen
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(name, _)| name)
            .collect();

        StubLists {
            native_stub,
            ignored,
            duplicates,
        }
    }
}
