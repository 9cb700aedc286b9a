//! Feedback draft and submission seam.

use tracing::info;

/// Uncommitted feedback input
///
/// Owned by the feedback form while it is open; discarded on cancel, handed
/// to the [`FeedbackSink`] on submit. No validation is applied to either
/// field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    /// Contact value (free text, called "email" in the UI)
    pub email: String,
    /// Free-form opinion text
    pub opinion: String,
}

impl FeedbackDraft {
    pub fn new(email: impl Into<String>, opinion: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            opinion: opinion.into(),
        }
    }
}

/// Boundary to the (excluded) feedback backend
///
/// The shell hands submitted drafts here and moves on; the contract makes no
/// promise about delivery, retry, or acknowledgement.
pub trait FeedbackSink {
    fn submit(&mut self, draft: FeedbackDraft);
}

/// Placeholder sink: logs the submission and drops it
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFeedbackSink;

impl FeedbackSink for NullFeedbackSink {
    fn submit(&mut self, draft: FeedbackDraft) {
        info!(
            "Feedback discarded (no backend): {} chars from '{}'",
            draft.opinion.len(),
            draft.email
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sink_accepts_anything() {
        let mut sink = NullFeedbackSink;
        sink.submit(FeedbackDraft::default());
        sink.submit(FeedbackDraft::new("student@example.com", "more cat pictures"));
    }
}
