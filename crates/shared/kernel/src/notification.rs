//! # Notifications
//!
//! Toast messages stacked in insertion order. Each one expires on its own timer and can be
//! dismissed earlier; there is no queue, deduplication or cap.

use crate::scheduler::{Scheduler, TimerHandle};
use crate::task::Task;
use aqua_domain::notification::{NotificationId, Severity};
use std::time::Duration;
use tracing::debug;

/// A message a component wants shown; turned into a [`Notification`] by the center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self { message: message.into(), severity }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at: Duration,
    expiry: TimerHandle,
}

impl Notification {
    /// Classes of the toast container.
    #[must_use]
    pub fn class(&self) -> String {
        format!("notification {}", self.severity.css_class())
    }
}

#[derive(Debug)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    next_id: u64,
    ttl: Duration,
}

impl NotificationCenter {
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self { items: Vec::new(), next_id: 0, ttl }
    }

    /// Shows `notice` now and schedules its removal after the time-to-live.
    pub fn push(
        &mut self,
        scheduler: &mut Scheduler<Task>,
        now: Duration,
        notice: Notice,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let expiry = scheduler.schedule(now, self.ttl, Task::ExpireNotification(id));
        debug!(%id, severity = %notice.severity, message = %notice.message, "Notification shown");

        self.items.push(Notification {
            id,
            message: notice.message,
            severity: notice.severity,
            created_at: now,
            expiry,
        });
        id
    }

    /// Removes `id` immediately and cancels its expiry. Unknown ids are ignored.
    pub fn dismiss(&mut self, scheduler: &mut Scheduler<Task>, id: NotificationId) -> bool {
        let Some(notification) = self.take(id) else {
            return false;
        };
        scheduler.cancel(notification.expiry);
        debug!(%id, "Notification dismissed");
        true
    }

    /// Timer callback.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        let expired = self.take(id).is_some();
        if expired {
            debug!(%id, "Notification expired");
        }
        expired
    }

    fn take(&mut self, id: NotificationId) -> Option<Notification> {
        let index = self.items.iter().position(|n| n.id == id)?;
        Some(self.items.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
