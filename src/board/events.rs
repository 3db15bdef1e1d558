//! Typed change notifications for the board store.

use std::sync::mpsc::{Receiver, Sender, channel};

/// What part of the board changed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardChange {
    Notes,
    Strokes,
    Jobs,
    Viewport,
    Selection,
    Clipboard,
    Tool,
    Overlay,
    /// Wholesale replace via `load_board`
    Loaded,
    /// Notes and strokes wiped, viewport reset
    Cleared,
}

impl BoardChange {
    /// True when the change is part of the persisted snapshot
    pub fn is_persistent(self) -> bool {
        match self {
            BoardChange::Notes
            | BoardChange::Strokes
            | BoardChange::Jobs
            | BoardChange::Viewport
            | BoardChange::Loaded
            | BoardChange::Cleared => true,
            BoardChange::Selection
            | BoardChange::Clipboard
            | BoardChange::Tool
            | BoardChange::Overlay => false,
        }
    }
}

/// Where a change came from. Remote changes are never pushed back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChangeOrigin {
    #[default]
    Local,
    Remote,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardEvent {
    pub change: BoardChange,
    pub origin: ChangeOrigin,
    /// Board revision after the change
    pub revision: u64,
}

impl BoardEvent {
    /// True when the backend should eventually see this change
    pub fn needs_sync(&self) -> bool {
        self.origin == ChangeOrigin::Local && self.change.is_persistent()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Default)]
pub(super) struct Subscribers {
    next_id: u64,
    senders: Vec<(SubscriptionId, Sender<BoardEvent>)>,
}

impl Subscribers {
    pub(super) fn subscribe(&mut self) -> (SubscriptionId, Receiver<BoardEvent>) {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let (tx, rx) = channel();
        self.senders.push((id, tx));
        (id, rx)
    }

    pub(super) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.senders.len();
        self.senders.retain(|(sid, _)| *sid != id);
        self.senders.len() != before
    }

    /// Deliver to every live subscriber, pruning those whose receiver is gone
    pub(super) fn notify(&mut self, event: &BoardEvent) {
        self.senders.retain(|(_, tx)| tx.send(*event).is_ok());
    }
}
