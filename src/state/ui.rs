#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// A user-visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: uuid::Uuid,
    pub message: String,
}

/// UI state shared across pages: the notice stack.
///
/// Request failures and session expiry surface here; the `NoticeStack`
/// component renders the messages and lets the user dismiss them.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub notices: Vec<Notice>,
}

impl UiState {
    /// Append a notice.
    pub fn push_notice(&mut self, message: impl Into<String>) {
        self.notices.push(Notice {
            id: uuid::Uuid::new_v4(),
            message: message.into(),
        });
    }

    /// Remove a notice by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: uuid::Uuid) {
        self.notices.retain(|n| n.id != id);
    }
}
