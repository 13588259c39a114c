//! Command-line surface for the `examdesk` binary.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use exam_core::enums::{Grade, Role};

/// Top-level CLI parser.
#[derive(Debug, Parser)]
#[command(name = "examdesk", version, about = "University exam records manager")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Login email (falls back to EXAMDESK_EMAIL)
    #[arg(long, global = true)]
    pub email: Option<String>,

    /// Login password (falls back to EXAMDESK_PASSWORD)
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage departments
    Department {
        #[command(subcommand)]
        action: DepartmentAction,
    },
    /// Manage teachers
    Teacher {
        #[command(subcommand)]
        action: TeacherAction,
    },
    /// Manage students
    Student {
        #[command(subcommand)]
        action: StudentAction,
    },
    /// Manage courses
    Course {
        #[command(subcommand)]
        action: CourseAction,
    },
    /// Manage exams
    Exam {
        #[command(subcommand)]
        action: ExamAction,
    },
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Export every entity table to CSV files
    Export(ExportArgs),
    /// Generate text reports
    Report {
        #[command(subcommand)]
        action: ReportAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum DepartmentAction {
    /// List all departments
    List,
    /// Add a department
    Add { name: String },
    /// Rename a department
    Update { id: i64, name: String },
    /// Delete departments by id
    Delete { ids: Vec<i64> },
}

#[derive(Debug, Subcommand)]
pub enum TeacherAction {
    List,
    Add {
        first_name: String,
        last_name: String,
        department: String,
        email: String,
    },
    Update {
        id: i64,
        first_name: String,
        last_name: String,
        department: String,
        email: String,
    },
    Delete {
        ids: Vec<i64>,
    },
}

#[derive(Debug, Subcommand)]
pub enum StudentAction {
    List,
    Add {
        first_name: String,
        last_name: String,
        email: String,
        enrollment_year: i64,
    },
    Update {
        id: i64,
        first_name: String,
        last_name: String,
        email: String,
        enrollment_year: i64,
    },
    Delete {
        ids: Vec<i64>,
    },
}

#[derive(Debug, Subcommand)]
pub enum CourseAction {
    List,
    Add {
        course_code: String,
        title: String,
        credits: i64,
        teacher_id: i64,
    },
    Update {
        id: i64,
        course_code: String,
        title: String,
        credits: i64,
        teacher_id: i64,
    },
    Delete {
        ids: Vec<i64>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ExamAction {
    /// List exams (a student sees only their own)
    List,
    Add {
        student_id: i64,
        course_id: i64,
        exam_date: NaiveDate,
        /// Grade A-F; omitted means "No grade"
        #[arg(long)]
        grade: Option<Grade>,
    },
    Update {
        id: i64,
        student_id: i64,
        course_id: i64,
        exam_date: NaiveDate,
        #[arg(long)]
        grade: Option<Grade>,
    },
    Delete {
        ids: Vec<i64>,
    },
}

#[derive(Debug, Subcommand)]
pub enum UserAction {
    /// List account emails
    List,
    /// Add an account
    Add {
        email: String,
        password: String,
        role: Role,
    },
    /// Delete an account (never the one currently logged in)
    Delete { email: String },
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output directory (defaults to the configured export directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum ReportAction {
    /// Report over every exam in one course
    Course {
        id: i64,
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// The logged-in student's own report card
    Card {
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, DepartmentAction};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn department_add_parses() {
        let cli = Cli::try_parse_from([
            "examdesk",
            "--email",
            "a@b.com",
            "--password",
            "pw",
            "department",
            "add",
            "Physics",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Department {
                action: DepartmentAction::Add { .. }
            }
        ));
        assert_eq!(cli.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn exam_add_accepts_iso_dates_and_grades() {
        let cli = Cli::try_parse_from([
            "examdesk", "exam", "add", "1", "2", "2026-05-20", "--grade", "A",
        ])
        .expect("cli should parse");
        let Commands::Exam {
            action: super::ExamAction::Add {
                exam_date, grade, ..
            },
        } = cli.command
        else {
            panic!("wrong command");
        };
        assert_eq!(exam_date.to_string(), "2026-05-20");
        assert_eq!(grade, Some(exam_core::enums::Grade::A));
    }

    #[test]
    fn delete_accepts_multiple_ids() {
        let cli = Cli::try_parse_from(["examdesk", "department", "delete", "1", "2", "3"])
            .expect("cli should parse");
        let Commands::Department {
            action: DepartmentAction::Delete { ids },
        } = cli.command
        else {
            panic!("wrong command");
        };
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
