use serde::{Deserialize, Serialize};

/// Progress message type
#[derive(Debug, Deserialize, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ProgressType {
    Start,
    Progress,
    Complete,
    Error,
}

/// Progress event emitted while a batch of photos is being re-encoded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Progress type (start, progress, complete, error)
    pub progress_type: ProgressType,
    /// Number of completed files, successful or not
    pub completed_tasks: usize,
    /// Total number of files in the batch
    pub total_tasks: usize,
    /// Progress percentage (0-100)
    pub progress_percentage: usize,
    /// Current status message
    pub status: String,
    /// File this event refers to, if any
    #[serde(default)]
    pub filename: Option<String>,
    /// Optional error message
    #[serde(default)]
    pub error: Option<String>,
}

impl Progress {
    /// Create a new Progress instance with basic information
    pub fn new(
        progress_type: ProgressType,
        completed_tasks: usize,
        total_tasks: usize,
        status: &str,
    ) -> Self {
        let progress_percentage = if total_tasks > 0 {
            (completed_tasks * 100) / total_tasks
        } else {
            100
        };

        Self {
            progress_type,
            completed_tasks,
            total_tasks,
            progress_percentage,
            status: status.to_string(),
            filename: None,
            error: None,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_is_integer_share() {
        assert_eq!(Progress::new(ProgressType::Progress, 1, 3, "processing").progress_percentage, 33);
        assert_eq!(Progress::new(ProgressType::Complete, 3, 3, "complete").progress_percentage, 100);
    }

    #[test]
    fn empty_batch_is_complete() {
        assert_eq!(Progress::new(ProgressType::Complete, 0, 0, "complete").progress_percentage, 100);
    }

    #[test]
    fn serializes_camel_case() {
        let progress = Progress::new(ProgressType::Error, 1, 2, "error")
            .with_filename("a.png")
            .with_error("Decode error: bad");
        let json = serde_json::to_value(&progress).unwrap();
        assert_eq!(json["progressType"], "error");
        assert_eq!(json["progressPercentage"], 50);
        assert_eq!(json["filename"], "a.png");
    }
}
