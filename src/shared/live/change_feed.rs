use tokio::sync::broadcast;

const DEFAULT_CAPACITY: usize = 64;

/// Remote collections that can be observed for changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Projects,
    Resumes,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Projects => "projects",
            Collection::Resumes => "resumes",
        }
    }
}

/// In-process fan-out of "collection X changed" notifications.
///
/// Writers publish after every successful create/update/delete; each live
/// subscription holds its own receiver and re-reads the collection when it
/// sees an event for the collection it watches. Events carry no payload, so a
/// lagging receiver only needs to re-read once.
#[derive(Debug, Clone)]
pub struct ChangeFeed {
    sender: broadcast::Sender<Collection>,
}

impl ChangeFeed {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn publish(&self, collection: Collection) {
        // No receivers simply means nobody is watching right now.
        let watchers = self.sender.send(collection).unwrap_or(0);
        tracing::debug!(
            collection = collection.as_str(),
            watchers,
            "Published collection change"
        );
    }

    pub fn listen(&self) -> broadcast::Receiver<Collection> {
        self.sender.subscribe()
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
