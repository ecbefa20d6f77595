use crate::feed::models::{DeviceId, DeviceUpdate};
use thiserror::Error;

/// What the transport delivers to the reconciler, already validated.
#[derive(Clone, Debug, PartialEq)]
pub enum FeedEvent {
    Upserted(DeviceUpdate),
    Removed(DeviceId),
    /// The initial snapshot has been replayed in full.
    Ready,
    Cancelled(FeedError),
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FeedError {
    #[error("the feed cancelled the subscription")]
    SubscriptionCancelled,
    #[error("the feed revoked the credentials")]
    CredentialsRevoked,
}
