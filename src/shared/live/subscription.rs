use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::change_feed::{ChangeFeed, Collection};

const SNAPSHOT_BUFFER: usize = 8;

/// Handle to a running live query.
///
/// The background task delivers the initial snapshot, then a fresh snapshot
/// after every change event for the watched collection. The task is stopped
/// either by [`LiveSubscription::unsubscribe`] (which consumes the handle, so it
/// cannot run twice) or when the handle is dropped.
pub struct LiveSubscription<T> {
    receiver: mpsc::Receiver<T>,
    task: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> LiveSubscription<T> {
    pub fn spawn<F, Fut>(feed: &ChangeFeed, collection: Collection, snapshot: F) -> Self
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        // Listen before the first read so a write landing in between is not missed.
        let mut changes = feed.listen();
        let (tx, receiver) = mpsc::channel(SNAPSHOT_BUFFER);

        let task = tokio::spawn(async move {
            if tx.send(snapshot().await).await.is_err() {
                return;
            }

            loop {
                match changes.recv().await {
                    Ok(changed) if changed == collection => {}
                    Ok(_) => continue,
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(
                            collection = collection.as_str(),
                            skipped,
                            "Live subscription lagged, re-reading once"
                        );
                    }
                    Err(RecvError::Closed) => break,
                }

                if tx.send(snapshot().await).await.is_err() {
                    break;
                }
            }
        });

        Self {
            receiver,
            task: Some(task),
        }
    }
}

impl<T> LiveSubscription<T> {
    /// Waits for the next snapshot. `None` once the subscription has stopped.
    pub async fn next_snapshot(&mut self) -> Option<T> {
        self.receiver.recv().await
    }

    pub fn unsubscribe(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl<T> Drop for LiveSubscription<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<T> Stream for LiveSubscription<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.receiver.poll_recv(cx)
    }
}
