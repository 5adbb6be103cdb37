use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;

use wavectl::application::usecases::DispatchManager;
use wavectl::application::{AppResult, PlaybackController};
use wavectl::domain::{ActionRegistry, DispatchResult, GestureId, PlaybackAction};

#[derive(Clone, Default)]
struct CountingController {
    count: Arc<Mutex<u32>>,
}

#[async_trait]
impl PlaybackController for CountingController {
    async fn perform(&self, _action: PlaybackAction) -> AppResult<()> {
        // linger a little so the second dispatch overlaps the invocation
        tokio::time::sleep(Duration::from_millis(20)).await;
        *self.count.lock().unwrap() += 1;
        Ok(())
    }
}

/// Two producers triggering the same gesture at the same instant must yield
/// exactly one Fired: the check-and-mark critical section may not interleave.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn simultaneous_triggers_fire_exactly_once() {
    let controller = CountingController::default();
    let manager = Arc::new(DispatchManager::new(
        ActionRegistry::with_default_bindings(),
        Duration::from_secs(2),
        Arc::new(controller.clone()),
    ));

    let now = Instant::now();
    let a = {
        let manager = manager.clone();
        tokio::spawn(async move { manager.dispatch_at(&GestureId::from("play_pause"), now).await })
    };
    let b = {
        let manager = manager.clone();
        tokio::spawn(async move { manager.dispatch_at(&GestureId::from("play_pause"), now).await })
    };

    let (ra, rb) = (a.await.unwrap(), b.await.unwrap());
    let mut results = [ra, rb];
    results.sort_by_key(|r| r.as_str());

    assert_eq!(results, [DispatchResult::Fired, DispatchResult::Suppressed]);
    assert_eq!(*controller.count.lock().unwrap(), 1);
}

/// The mark lands before the action call starts, so a duplicate arriving
/// while the (slow) invocation is still in flight is suppressed.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn slow_invocation_does_not_reopen_the_window() {
    let controller = CountingController::default();
    let manager = Arc::new(DispatchManager::new(
        ActionRegistry::with_default_bindings(),
        Duration::from_secs(2),
        Arc::new(controller.clone()),
    ));

    let now = Instant::now();
    let first = {
        let manager = manager.clone();
        tokio::spawn(async move { manager.dispatch_at(&GestureId::from("fist"), now).await })
    };
    tokio::time::sleep(Duration::from_millis(5)).await;

    // first invocation is still sleeping inside the controller
    let second = manager
        .dispatch_at(&GestureId::from("fist"), now + Duration::from_millis(5))
        .await;

    assert_eq!(first.await.unwrap(), DispatchResult::Fired);
    assert_eq!(second, DispatchResult::Suppressed);
    assert_eq!(*controller.count.lock().unwrap(), 1);
}
