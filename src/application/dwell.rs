//! Dwell-time tracker.
//!
//! Background loop that accumulates on-page time into the analytics
//! session, one tick at a time. Ticks landing long after the last
//! interaction are treated as the visitor having walked away and are
//! not counted.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;
use tracing::{debug, warn};

use crate::domain::foundation::{SessionId, Timestamp};
use crate::ports::EventSink;

/// Accumulates dwell time for one session until shut down.
pub struct DwellTracker {
    sink: Arc<dyn EventSink>,
    session_id: SessionId,
    tick: Duration,
    inactivity_cutoff: Duration,
    last_interaction: Arc<RwLock<Timestamp>>,
}

impl DwellTracker {
    pub fn new(
        sink: Arc<dyn EventSink>,
        session_id: SessionId,
        tick: Duration,
        inactivity_cutoff: Duration,
        last_interaction: Arc<RwLock<Timestamp>>,
    ) -> Self {
        Self {
            sink,
            session_id,
            tick,
            inactivity_cutoff,
            last_interaction,
        }
    }

    /// Run the tracker loop until the shutdown signal fires or the
    /// sender side is dropped.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.tick);
        // The first tick of a tokio interval fires immediately; the
        // session has accumulated nothing at that point.
        interval.tick().await;

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
                _ = interval.tick() => {
                    self.tick_once().await;
                }
            }
        }
        debug!(session_id = %self.session_id, "dwell tracker stopped");
    }

    async fn tick_once(&self) {
        let last = match self.last_interaction.read() {
            Ok(guard) => *guard,
            Err(_) => return,
        };

        let idle = Timestamp::now().duration_since(&last);
        if idle.num_seconds() > self.inactivity_cutoff.as_secs() as i64 {
            return;
        }

        if let Err(e) = self
            .sink
            .add_dwell_time(&self.session_id, self.tick.as_secs_f64())
            .await
        {
            warn!(session_id = %self.session_id, error = %e, "failed to record dwell time");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::analytics::TrackingStore;

    fn tracker(
        store: Arc<TrackingStore>,
        session_id: SessionId,
    ) -> (DwellTracker, Arc<RwLock<Timestamp>>) {
        let last = Arc::new(RwLock::new(Timestamp::now()));
        let tracker = DwellTracker::new(
            store,
            session_id,
            Duration::from_secs(1),
            Duration::from_secs(30),
            last.clone(),
        );
        (tracker, last)
    }

    #[tokio::test(start_paused = true)]
    async fn accumulates_one_tick_per_second_while_active() {
        let store = Arc::new(TrackingStore::new());
        let session_id = store.start_session(None).await.unwrap();
        let (tracker, last) = tracker(store.clone(), session_id);

        let (tx, rx) = watch::channel(false);
        let handle = tokio::spawn(async move { tracker.run(rx).await });

        for _ in 0..5 {
            time::sleep(Duration::from_secs(1)).await;
            if let Ok(mut guard) = last.write() {
                *guard = Timestamp::now();
            }
        }
        tx.send(true).unwrap();
        handle.await.unwrap();

        let metrics = store.engagement_metrics(&session_id).unwrap();
        assert!(metrics.dwell_time_total >= 4.0);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_sessions_stop_accumulating() {
        let store = Arc::new(TrackingStore::new());
        let session_id = store.start_session(None).await.unwrap();
        let (tracker, last) = tracker(store.clone(), session_id);

        // Last interaction well past the 30 second cutoff.
        if let Ok(mut guard) = last.write() {
            *guard = Timestamp::now().minus_days(1);
        }

        let (tx, rx) = watch::channel(false);
        let handle = tokio::spawn(async move { tracker.run(rx).await });

        time::sleep(Duration::from_secs(10)).await;
        tx.send(true).unwrap();
        handle.await.unwrap();

        let metrics = store.engagement_metrics(&session_id).unwrap();
        assert_eq!(metrics.dwell_time_total, 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_sender_stops_the_loop() {
        let store = Arc::new(TrackingStore::new());
        let session_id = store.start_session(None).await.unwrap();
        let (tracker, _last) = tracker(store, session_id);

        let (tx, rx) = watch::channel(false);
        let handle = tokio::spawn(async move { tracker.run(rx).await });
        drop(tx);
        handle.await.unwrap();
    }
}
