//! Data Update Coordinator.
//! Polls OIG Cloud periodically and shares the latest snapshot with its listeners.
//! Fetch failures are logged and kept out of the listeners' way: the previous data stays
//! in place and only `last_update_success` flips.

use chrono::{DateTime, Local};
use std::sync::Arc;
use tokio::sync::{Notify, watch};
use tokio::time::{Duration, MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

use crate::integration::oigcloud::{self, Stats};

/// Latest coordinator state shared with listeners.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub data: Option<Arc<Stats>>,
    pub last_update_success: bool,
    pub last_updated: Option<DateTime<Local>>,
}

pub struct DataUpdateCoordinator {
    oigcloud: Arc<oigcloud::Client>,
    update_interval: Duration,
    snapshot: watch::Sender<Snapshot>,
    refresh_requested: Notify,
}

impl DataUpdateCoordinator {
    /// Creates a new instance of `DataUpdateCoordinator`.
    pub fn new(oigcloud: Arc<oigcloud::Client>, update_interval: Duration) -> Self {
        let (snapshot, _) = watch::channel(Snapshot::default());
        DataUpdateCoordinator {
            oigcloud,
            update_interval,
            snapshot,
            refresh_requested: Notify::new(),
        }
    }

    pub fn update_interval(&self) -> Duration {
        self.update_interval
    }

    /// Current data, `None` until the first successful refresh.
    pub fn data(&self) -> Option<Arc<Stats>> {
        self.snapshot.borrow().data.clone()
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.borrow().clone()
    }

    /// Register an update listener. The receiver is notified after every refresh.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot.subscribe()
    }

    /// Ask the polling loop to refresh now instead of waiting for the next tick.
    pub fn request_refresh(&self) {
        self.refresh_requested.notify_one();
    }

    /// Fetch once, propagating the error. Used before entities are created.
    pub async fn first_refresh(&self) -> Result<Arc<Stats>, oigcloud::Error> {
        let stats = Arc::new(self.oigcloud.get_stats().await?);
        self.publish(Some(Arc::clone(&stats)));
        Ok(stats)
    }

    /// Fetch once. A failure keeps the previous data and marks the update as failed.
    pub async fn refresh(&self) {
        match self.oigcloud.get_stats().await {
            Ok(stats) => self.publish(Some(Arc::new(stats))),
            Err(e) => {
                log::error!("Error fetching OIG Cloud stats: {e}");
                self.publish(None);
            }
        }
    }

    /// Poll at the update interval, or sooner when requested, until cancelled.
    pub async fn run(&self, shutdown_token: CancellationToken) {
        let mut interval = interval(self.update_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately. Skip it: data was just fetched by `first_refresh`.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = shutdown_token.cancelled() => break,
                _ = interval.tick() => {}
                _ = self.refresh_requested.notified() => interval.reset(),
            }
            self.refresh().await;
        }
        log::debug!("Coordinator stopped");
    }

    fn publish(&self, data: Option<Arc<Stats>>) {
        self.snapshot.send_modify(|snapshot| match data {
            Some(data) => {
                snapshot.data = Some(data);
                snapshot.last_update_success = true;
                snapshot.last_updated = Some(Local::now());
            }
            None => snapshot.last_update_success = false,
        });
    }
}
