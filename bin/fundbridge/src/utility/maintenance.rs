use chrono::{Duration as ChronoDuration, Utc};
use fundbridge_core::repositories::ticket_repository::TicketRepository;
use fundbridge_core::repositories::topup_repository::TopUpRepository;
use fundbridge_core::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, error, info};

const DAILY_MAINTENANCE_INTERVAL: Duration = Duration::from_secs(60 * 60 * 24);

pub fn spawn_background_tasks(state: Arc<AppState>) {
    let state_clone = state.clone();

    // Expire pending top-up claims nobody ever confirmed (daily)
    tokio::spawn(async move {
        info!("Starting daily top-up expiry task");
        expire_stale_topups(state_clone).await;
    });

    // Close answered support tickets with no follow-up (daily)
    let state_clone = state.clone();
    tokio::spawn(async move {
        info!("Starting daily idle-ticket close task");
        close_idle_tickets(state_clone).await;
    });

    info!("Background maintenance tasks spawned");
}

async fn expire_stale_topups(state: Arc<AppState>) {
    let mut interval = interval(DAILY_MAINTENANCE_INTERVAL);
    interval.tick().await;

    loop {
        interval.tick().await;

        let Ok(mut conn) = state.db.get() else {
            error!("Top-up expiry: DB connection failed");
            continue;
        };

        let cutoff = Utc::now() - ChronoDuration::days(state.config.topup_expiry_days);
        match TopUpRepository::expire_stale_pending(&mut conn, cutoff) {
            Ok(0) => debug!("No stale top-up claims"),
            Ok(n) => info!("Expired {} stale top-up claims", n),
            Err(e) => error!("Top-up expiry failed: {}", e),
        }
    }
}

async fn close_idle_tickets(state: Arc<AppState>) {
    let mut interval = interval(DAILY_MAINTENANCE_INTERVAL);
    interval.tick().await;

    loop {
        interval.tick().await;

        let Ok(mut conn) = state.db.get() else {
            error!("Idle-ticket close: DB connection failed");
            continue;
        };

        let cutoff = Utc::now() - ChronoDuration::days(state.config.ticket_idle_close_days);
        match TicketRepository::close_idle_answered(&mut conn, cutoff) {
            Ok(0) => debug!("No idle answered tickets"),
            Ok(n) => info!("Closed {} idle tickets", n),
            Err(e) => error!("Idle-ticket close failed: {}", e),
        }
    }
}
