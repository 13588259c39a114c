use thiserror::Error;

/// Errors from export and report generation.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing an output file failed. Files written before the failure are
    /// left on disk.
    #[error("Failed to export: {0}")]
    Io(#[from] std::io::Error),

    /// The course selected for a report does not exist.
    #[error("Could not generate report: failed to get course {0}.")]
    MissingCourse(i64),

    /// No student row matches the requesting identity's email.
    #[error("Could not generate report: failed to get student.")]
    MissingStudent,
}
