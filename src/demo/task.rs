//! The cancellable background counter task
//!
//! The counter is a plain event stream: one tick per interval, then a
//! terminal event. [`spawn_counter`] drains it on a spawned task, appending
//! each event to the shared console and pushing refreshed UI at the host.

use super::console::Console;
use super::form;
use super::types::{DemoData, TaskEvent};
use crate::extension_system::HostLink;
use async_stream::stream;
use futures::{Stream, StreamExt};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;

/// Counter event stream: waits one tick, yields `Tick { n }` for n in
/// 1..=total, then `Finished`. A cancellation observed mid-wait yields
/// `Canceled { completed }` instead and ends the stream.
pub fn counter_events(
    total: u32,
    tick: Duration,
    mut cancel: watch::Receiver<bool>,
) -> impl Stream<Item = TaskEvent> + Send + 'static {
    stream! {
        for n in 1..=total {
            // A closed channel means every handle is gone; both cases stop the counter
            let canceled = tokio::select! {
                _ = cancel.changed() => true,
                _ = tokio::time::sleep(tick) => false,
            };
            if canceled {
                yield TaskEvent::canceled(n - 1);
                return;
            }
            yield TaskEvent::tick(n);
        }
        yield TaskEvent::finished(total);
    }
}

/// Handle to a running counter task
///
/// Dropping the handle closes the watch channel, which cancels the task -
/// a replaced or torn-down extension never leaks a counter.
pub struct TaskHandle {
    cancel: watch::Sender<bool>,
    running: Arc<AtomicBool>,
}

impl TaskHandle {
    /// Whether this task is still ticking
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Request cancellation; the task appends its cancellation line and stops
    pub fn cancel(&self) {
        let _ = self.cancel.send(true);
    }
}

/// Spawn the counter and wire its events to the console and the host
///
/// While ticking, every event pushes the running (console) form; the
/// terminal event flips `running` off and pushes the stopped form rebuilt
/// from the data snapshot taken at spawn time.
pub fn spawn_counter(
    total: u32,
    tick: Duration,
    console: Arc<Mutex<Console>>,
    data: DemoData,
    link: HostLink,
) -> TaskHandle {
    let (cancel_tx, cancel_rx) = watch::channel(false);
    let running = Arc::new(AtomicBool::new(true));
    let task_running = Arc::clone(&running);

    tokio::spawn(async move {
        tracing::debug!(total, "counter task started");
        let mut events = Box::pin(counter_events(total, tick, cancel_rx));
        while let Some(event) = events.next().await {
            let text = {
                let mut console = console.lock().unwrap();
                console.push_event(&event);
                console.contents()
            };
            if event.is_terminal() {
                task_running.store(false, Ordering::SeqCst);
                tracing::debug!(?event, "counter task ended");
                link.update_ui(form::stopped_form(&data));
            } else {
                link.update_ui(form::running_form(&text));
            }
        }
    });

    TaskHandle {
        cancel: cancel_tx,
        running,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(5);

    #[tokio::test]
    async fn test_counter_yields_ticks_then_finished() {
        let (_cancel_tx, cancel_rx) = watch::channel(false);
        let events: Vec<TaskEvent> = counter_events(3, TICK, cancel_rx).collect().await;

        assert_eq!(events.len(), 4);
        for (i, event) in events.iter().take(3).enumerate() {
            match event {
                TaskEvent::Tick { n, .. } => assert_eq!(*n as usize, i + 1),
                other => panic!("expected tick, got {other:?}"),
            }
        }
        assert!(matches!(events[3], TaskEvent::Finished { total: 3, .. }));
    }

    #[tokio::test]
    async fn test_counter_zero_total_finishes_immediately() {
        let (_cancel_tx, cancel_rx) = watch::channel(false);
        let events: Vec<TaskEvent> = counter_events(0, TICK, cancel_rx).collect().await;

        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], TaskEvent::Finished { total: 0, .. }));
    }

    #[tokio::test]
    async fn test_cancel_ends_stream_with_canceled_event() {
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let mut events = Box::pin(counter_events(100, TICK, cancel_rx));

        assert!(matches!(
            events.next().await,
            Some(TaskEvent::Tick { n: 1, .. })
        ));
        cancel_tx.send(true).unwrap();

        match events.next().await {
            Some(TaskEvent::Canceled { completed, .. }) => assert_eq!(completed, 1),
            other => panic!("expected canceled, got {other:?}"),
        }
        assert!(events.next().await.is_none(), "no events after cancel");
    }

    #[tokio::test]
    async fn test_dropping_sender_cancels() {
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let mut events = Box::pin(counter_events(100, TICK, cancel_rx));
        drop(cancel_tx);

        assert!(matches!(
            events.next().await,
            Some(TaskEvent::Canceled { completed: 0, .. })
        ));
    }

    #[tokio::test]
    async fn test_spawned_counter_flips_running_flag() {
        let (link, mut updates) = HostLink::channel();
        let console = Arc::new(Mutex::new(Console::new(50)));
        let handle = spawn_counter(2, TICK, console, DemoData::default(), link);

        assert!(handle.is_running());
        // 2 running-form updates then the stopped form
        for _ in 0..3 {
            updates.next().await.expect("update");
        }
        assert!(!handle.is_running());
    }
}
