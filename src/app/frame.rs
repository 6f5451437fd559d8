//! One-shot frame scheduling for the refresh loop.
//!
//! Each `request` delivers a single `AppEvent::Frame` after one frame
//! interval; the handler asks for the next one only while the stopwatch is
//! running. Frames carry an id so a tick that was already in the channel when
//! its frame got cancelled is recognised as stale and dropped.

use crate::app::event::{AppEvent, FrameId};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct FrameScheduler {
    tx: mpsc::UnboundedSender<AppEvent>,
    interval: Duration,
    next_id: FrameId,
    pending: Option<(FrameId, JoinHandle<()>)>,
}

impl FrameScheduler {
    pub fn new(tx: mpsc::UnboundedSender<AppEvent>, frame_rate: u32) -> Self {
        Self {
            tx,
            interval: Duration::from_secs(1) / frame_rate.max(1),
            next_id: 0,
            pending: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Schedule the next frame. No-op while one is already pending.
    pub fn request(&mut self) {
        if self.pending.is_some() {
            return;
        }
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        let tx = self.tx.clone();
        let interval = self.interval;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(interval).await;
            let _ = tx.send(AppEvent::Frame(id));
        });
        self.pending = Some((id, handle));
    }

    pub fn cancel(&mut self) {
        if let Some((_, handle)) = self.pending.take() {
            handle.abort();
        }
    }

    /// Mark frame `id` as delivered. Returns false for stale frames, which
    /// the caller should ignore.
    pub fn accept(&mut self, id: FrameId) -> bool {
        match &self.pending {
            Some((pending, _)) if *pending == id => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
