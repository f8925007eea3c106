use nura_core::model::Notification;

/// A notification on screen, keyed so its dismissal timer can find it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeVm {
    pub id: u64,
    pub message: String,
    pub class: String,
}

/// Stack of visible notifications, newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeQueue {
    next_id: u64,
    items: Vec<NoticeVm>,
}

impl NoticeQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `notification` and return the id to dismiss it with.
    pub fn push(&mut self, notification: &Notification) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(NoticeVm {
            id,
            message: notification.message.clone(),
            class: format!("alert alert-{} notification", notification.level.as_str()),
        });
        id
    }

    /// Remove a notification. Dismissing twice is harmless.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    #[must_use]
    pub fn items(&self) -> &[NoticeVm] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
