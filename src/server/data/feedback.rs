//! Feedback store: every rating ever submitted and the quantity tally.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::server::model::feedback::{FeedbackSnapshot, SubmitFeedbackParam};

#[derive(Clone, Default)]
pub struct FeedbackRepository {
    inner: Arc<RwLock<FeedbackSnapshot>>,
}

impl FeedbackRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the rating and bumps the matching quantity counter in one step.
    pub async fn record(&self, param: SubmitFeedbackParam) {
        let mut inner = self.inner.write().await;

        inner.ratings.push(param.rating);
        inner.tally.record(param.quantity);
    }

    pub async fn snapshot(&self) -> FeedbackSnapshot {
        self.inner.read().await.clone()
    }
}
