use std::sync::Arc;
use std::time::Duration;

use crate::state::AppState;

/// Spawn the background sweep that periodically refreshes every user's
/// balance snapshot.
///
/// One user's failure is logged and the sweep continues; the loop itself
/// only ends with the process.
pub fn start_refresh_loop(state: Arc<AppState>, interval: Duration) {
    tracing::info!("Balance refresh loop enabled, every {} s", interval.as_secs());
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;

            let user_ids = match state.store.list_user_ids().await {
                Ok(ids) => ids,
                Err(e) => {
                    tracing::error!("Balance refresh sweep could not list users: {e}");
                    continue;
                }
            };

            tracing::info!("Refreshing balances for {} users", user_ids.len());
            for user_id in user_ids {
                if let Err(e) = state.balance_service.recalculate(&user_id).await {
                    tracing::error!("Balance refresh failed for {user_id}: {e}");
                }
            }
        }
    });
}
