//! Quiz and progress endpoints
//!
//! Typed wrappers over `/api/quiz/*`, `/api/vocab/*`, and the health
//! check. These back the profile dashboard and quiz-resume features.

use crate::http::{ApiClient, ApiError};
use serde::{Deserialize, Serialize};

/// Body for `POST /api/quiz/submit`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    /// Kind of quiz taken (e.g., "vocabulary")
    pub quiz_type: String,
    /// Score as a percentage
    pub score: u32,
    /// Number of questions in the quiz
    pub total_questions: u32,
    /// Number answered correctly
    pub correct_answers: u32,
    /// Seconds spent on the quiz
    pub time_spent: u32,
}

/// One completed quiz in the results history
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    /// Score as a percentage
    pub score: u32,
    /// Number of questions in the quiz
    pub total_questions: u32,
    /// Number answered correctly
    pub correct_answers: u32,
    /// Seconds spent on the quiz
    pub time_spent: u32,
    /// ISO-8601 completion timestamp
    pub completed_at: String,
    /// Category the quiz covered, when recorded
    #[serde(default)]
    pub quiz_category: Option<String>,
}

/// Aggregate statistics for the profile dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStats {
    /// Quizzes completed
    pub total_quizzes: u32,
    /// Mean score across quizzes
    pub average_score: f64,
    /// Correct answers across all quizzes
    pub total_correct: u32,
    /// Questions seen across all quizzes
    pub total_questions: u32,
    /// Highest score achieved
    pub best_score: u32,
}

/// Body for `POST /api/quiz/progress` and `POST /api/vocab/progress`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    /// Category being worked through
    pub quiz_category: String,
    /// Completion fraction, 0-100
    pub progress: u32,
    /// Index of the question the user is on
    pub current_question: u32,
}

/// Saved progress returned by the progress endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizProgress {
    /// Category being worked through
    pub quiz_category: String,
    /// Completion fraction, 0-100
    pub progress: u32,
    /// Index of the question the user is on
    pub current_question: u32,
}

#[derive(Debug, Deserialize)]
struct ProgressEnvelope {
    #[serde(default)]
    progress: Option<QuizProgress>,
}

/// The results endpoint has returned both a bare array and a wrapped
/// object across backend versions; accept either.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ResultsPayload {
    Bare(Vec<QuizResult>),
    Wrapped { results: Vec<QuizResult> },
}

impl ResultsPayload {
    fn into_results(self) -> Vec<QuizResult> {
        match self {
            ResultsPayload::Bare(results) => results,
            ResultsPayload::Wrapped { results } => results,
        }
    }
}

/// Response from `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// Service status string (e.g., "ok")
    pub status: String,
}

impl ApiClient {
    /// `POST /api/quiz/submit`
    pub async fn submit_quiz(
        &self,
        token: &str,
        submission: &QuizSubmission,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .post_json("/api/quiz/submit", Some(token), submission)
            .await?;
        Ok(())
    }

    /// `GET /api/quiz/results`
    pub async fn quiz_results(&self, token: &str) -> Result<Vec<QuizResult>, ApiError> {
        let payload: ResultsPayload = self.get_json("/api/quiz/results", Some(token)).await?;
        Ok(payload.into_results())
    }

    /// `GET /api/quiz/stats`
    pub async fn quiz_stats(&self, token: &str) -> Result<QuizStats, ApiError> {
        self.get_json("/api/quiz/stats", Some(token)).await
    }

    /// `POST /api/quiz/progress`
    pub async fn save_quiz_progress(
        &self,
        token: &str,
        update: &ProgressUpdate,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .post_json("/api/quiz/progress", Some(token), update)
            .await?;
        Ok(())
    }

    /// `GET /api/quiz/progress`
    ///
    /// Returns `None` when there is no saved progress to resume.
    pub async fn quiz_progress(&self, token: &str) -> Result<Option<QuizProgress>, ApiError> {
        let envelope: ProgressEnvelope = self.get_json("/api/quiz/progress", Some(token)).await?;
        Ok(envelope.progress)
    }

    /// `POST /api/vocab/progress`
    pub async fn save_vocab_progress(
        &self,
        token: &str,
        update: &ProgressUpdate,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .post_json("/api/vocab/progress", Some(token), update)
            .await?;
        Ok(())
    }

    /// `GET /api/vocab/progress`
    pub async fn vocab_progress(&self, token: &str) -> Result<Option<QuizProgress>, ApiError> {
        let envelope: ProgressEnvelope = self.get_json("/api/vocab/progress", Some(token)).await?;
        Ok(envelope.progress)
    }

    /// `GET /api/health`
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("/api/health", None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_payload_bare_array() {
        let json = r#"[{"score":80,"totalQuestions":10,"correctAnswers":8,"timeSpent":120,"completedAt":"2026-01-01T00:00:00Z"}]"#;
        let payload: ResultsPayload = serde_json::from_str(json).unwrap();
        let results = payload.into_results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 80);
        assert_eq!(results[0].quiz_category, None);
    }

    #[test]
    fn test_results_payload_wrapped() {
        let json = r#"{"results":[{"score":60,"totalQuestions":10,"correctAnswers":6,"timeSpent":90,"completedAt":"2026-01-01T00:00:00Z","quizCategory":"makanan"}]}"#;
        let payload: ResultsPayload = serde_json::from_str(json).unwrap();
        let results = payload.into_results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].quiz_category.as_deref(), Some("makanan"));
    }

    #[test]
    fn test_progress_envelope_absent() {
        let envelope: ProgressEnvelope = serde_json::from_str(r#"{"progress":null}"#).unwrap();
        assert!(envelope.progress.is_none());
    }

    #[test]
    fn test_stats_wire_format() {
        let json = r#"{"totalQuizzes":5,"averageScore":72.4,"totalCorrect":36,"totalQuestions":50,"bestScore":90}"#;
        let stats: QuizStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_quizzes, 5);
        assert_eq!(stats.best_score, 90);
    }

    #[test]
    fn test_submission_serializes_camel_case() {
        let submission = QuizSubmission {
            quiz_type: "vocabulary".to_string(),
            score: 80,
            total_questions: 10,
            correct_answers: 8,
            time_spent: 120,
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("quizType").is_some());
        assert!(json.get("timeSpent").is_some());
    }
}
