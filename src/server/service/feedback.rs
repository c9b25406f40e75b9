//! Feedback service for the food survey.

use crate::server::{data::feedback::FeedbackRepository, model::feedback::SubmitFeedbackParam};

pub const FEEDBACK_RECORDED: &str = "Thank you! Your feedback has been recorded.";

pub struct FeedbackService<'a> {
    feedback: &'a FeedbackRepository,
}

impl<'a> FeedbackService<'a> {
    pub fn new(feedback: &'a FeedbackRepository) -> Self {
        Self { feedback }
    }

    /// Stores one survey answer. Entries are anonymous and never deduplicated.
    ///
    /// # Returns
    /// - `&str` - Acknowledgement shown on the survey page
    pub async fn submit_feedback(&self, param: SubmitFeedbackParam) -> &'static str {
        tracing::debug!(
            "Feedback recorded: rating {}, quantity {:?}",
            param.rating.value(),
            param.quantity
        );

        self.feedback.record(param).await;

        FEEDBACK_RECORDED
    }
}
