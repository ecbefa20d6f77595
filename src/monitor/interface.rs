/// Where user-facing monitor status goes. The dashboard implementation
/// broadcasts to connected clients; a host embedding the monitor routes
/// permission denials through the same seam.
pub trait StatusSink {
    /// The initial snapshot has been replayed; any loading indicator can go.
    async fn feed_ready(&self);

    /// Short-lived, non-fatal notice (the feed dropped the subscription and
    /// the like).
    async fn transient_message(&self, message: &str);
}
