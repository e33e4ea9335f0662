//! Notification Center
//!
//! Single process-wide queue shared by every mounted form. Sequence ids
//! are assigned under the lock, so publish order is drain order.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;
use tracing::{debug, warn};

use crate::domain::value_objects::Notice;
use crate::ports::Notifier;

/// Default number of notifications retained before the oldest is evicted
pub const DEFAULT_CAPACITY: usize = 32;

/// A published notice
#[derive(Clone, Debug, Serialize)]
pub struct Notification {
    pub id: u64,
    #[serde(flatten)]
    pub notice: Notice,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Queue {
    next_id: u64,
    entries: VecDeque<Notification>,
}

/// Bounded FIFO of notifications
#[derive(Debug)]
pub struct NotificationCenter {
    queue: Mutex<Queue>,
    capacity: usize,
}

impl NotificationCenter {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: Mutex::new(Queue::default()),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Take every queued notification in publish order
    pub fn drain(&self) -> Vec<Notification> {
        let mut queue = self.queue.lock();
        queue.entries.drain(..).collect()
    }

    /// Remove one notification by id, leaving the rest queued
    pub fn take(&self, id: u64) -> Option<Notification> {
        let mut queue = self.queue.lock();
        let index = queue.entries.iter().position(|n| n.id == id)?;
        queue.entries.remove(index)
    }

    /// Copy of the queue without consuming it
    pub fn snapshot(&self) -> Vec<Notification> {
        self.queue.lock().entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.queue.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().entries.is_empty()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Notifier for NotificationCenter {
    fn publish(&self, notice: Notice) -> u64 {
        let mut queue = self.queue.lock();
        queue.next_id += 1;
        let id = queue.next_id;

        if queue.entries.len() >= self.capacity {
            if let Some(evicted) = queue.entries.pop_front() {
                warn!(evicted = evicted.id, "notification queue full, dropping oldest");
            }
        }

        debug!(id, title = %notice.title, "notification published");
        queue.entries.push_back(Notification { id, notice, created_at: Utc::now() });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_ids_increase_and_drain_in_order() {
        let center = NotificationCenter::default();
        let a = center.publish(Notice::success("First", ""));
        let b = center.publish(Notice::error("Second", ""));
        assert!(b > a);

        let drained = center.drain();
        assert_eq!(drained.iter().map(|n| n.notice.title.as_str()).collect::<Vec<_>>(), vec!["First", "Second"]);
        assert!(center.is_empty());

        // ids keep increasing after a drain
        let c = center.publish(Notice::success("Third", ""));
        assert!(c > b);
    }

    #[test]
    fn test_take_removes_only_the_requested_entry() {
        let center = NotificationCenter::default();
        let a = center.publish(Notice::success("Mine", ""));
        let b = center.publish(Notice::success("Someone else's", ""));

        assert_eq!(center.take(a).map(|n| n.notice.title), Some("Mine".to_string()));
        assert!(center.take(a).is_none());
        assert_eq!(center.snapshot().iter().map(|n| n.id).collect::<Vec<_>>(), vec![b]);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let center = NotificationCenter::new(2);
        center.publish(Notice::success("one", ""));
        center.publish(Notice::success("two", ""));
        center.publish(Notice::success("three", ""));

        let titles: Vec<String> = center.snapshot().into_iter().map(|n| n.notice.title).collect();
        assert_eq!(titles, vec!["two", "three"]);
        assert_eq!(center.len(), 2);
    }

    #[test]
    fn test_concurrent_publishers_get_unique_ids() {
        let center = Arc::new(NotificationCenter::new(1000));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let center = Arc::clone(&center);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        center.publish(Notice::success(format!("{}-{}", t, i), ""));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let ids: Vec<u64> = center.drain().into_iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), 200);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
