use futures::{stream, Stream};
use tokio::sync::broadcast::{self, error::RecvError};

/// In-process fan-out of events to every live subscriber.
#[derive(Clone)]
pub struct PubSub<T> {
    sender: broadcast::Sender<T>,
}

impl<T: Clone + Send + 'static> PubSub<T> {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishing with nobody listening is not an error.
    pub fn publish(&self, event: T) {
        if self.sender.send(event).is_err() {
            tracing::debug!("Published an event without any subscriber");
        }
    }

    pub fn subscribe(&self) -> impl Stream<Item = T> + Send + 'static {
        stream::unfold(self.sender.subscribe(), |mut receiver| async move {
            loop {
                match receiver.recv().await {
                    Ok(event) => return Some((event, receiver)),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!("Subscriber lagged behind, skipped {} events", skipped);
                    }
                    Err(RecvError::Closed) => return None,
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn delivers_to_every_subscriber() {
        let pubsub = PubSub::<u32>::new(8);
        let first = pubsub.subscribe();
        let second = pubsub.subscribe();

        pubsub.publish(1);
        pubsub.publish(2);

        let first = first.take(2).collect::<Vec<_>>().await;
        let second = second.take(2).collect::<Vec<_>>().await;
        assert_eq!(first, vec![1, 2]);
        assert_eq!(second, vec![1, 2]);
    }

    #[tokio::test]
    async fn publishing_without_subscribers_is_fine() {
        let pubsub = PubSub::<u32>::new(8);
        pubsub.publish(1);

        let late = pubsub.subscribe();
        pubsub.publish(2);
        assert_eq!(late.take(1).collect::<Vec<_>>().await, vec![2]);
    }
}
