//! Event bus for bookmark change notifications.
//!
//! One registration point for every kind of change. Subscribers either pass
//! a callback or take a channel receiver that the host drains on its own
//! schedule. A subscription may be restricted to a single event kind.

use std::fmt;
use std::sync::mpsc::{self, Receiver};

use uuid::Uuid;

use crate::types::events::{BookmarkEvent, BookmarkEventKind};

type Handler = Box<dyn FnMut(&BookmarkEvent)>;

struct Subscription {
    id: String,
    kind: Option<BookmarkEventKind>,
    handler: Handler,
}

/// Dispatches [`BookmarkEvent`]s to registered subscribers in
/// registration order.
#[derive(Default)]
pub struct EventBus {
    subscriptions: Vec<Subscription>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for events of `kind`, or for every event when
    /// `kind` is `None`. Returns the subscription ID.
    pub fn subscribe<F>(&mut self, kind: Option<BookmarkEventKind>, handler: F) -> String
    where
        F: FnMut(&BookmarkEvent) + 'static,
    {
        let id = Uuid::new_v4().to_string();
        self.subscriptions.push(Subscription {
            id: id.clone(),
            kind,
            handler: Box::new(handler),
        });
        id
    }

    /// Registers a channel subscription. Events are delivered until the
    /// receiver is dropped or the subscription is removed.
    pub fn subscribe_channel(
        &mut self,
        kind: Option<BookmarkEventKind>,
    ) -> (String, Receiver<BookmarkEvent>) {
        let (tx, rx) = mpsc::channel();
        let id = self.subscribe(kind, move |event| {
            // A dropped receiver just means nobody is listening anymore.
            let _ = tx.send(event.clone());
        });
        (id, rx)
    }

    /// Removes a subscription. Returns `false` if the ID is unknown.
    pub fn unsubscribe(&mut self, id: &str) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    pub fn publish(&mut self, event: BookmarkEvent) {
        let kind = event.kind();
        tracing::trace!(?kind, "publishing bookmark event");
        for subscription in &mut self.subscriptions {
            if subscription.kind.map_or(true, |k| k == kind) {
                (subscription.handler)(&event);
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.len()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriptions.len())
            .finish()
    }
}
