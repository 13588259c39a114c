//! Entity structs for all persisted records.
//!
//! Each entity maps to one table in the database. The `New*` variants are
//! the insert inputs: identical fields minus the id, which the store
//! assigns on insert. All structs derive `Serialize`/`Deserialize` for JSON
//! round-tripping in the CLI.

mod course;
mod credential;
mod department;
mod exam;
mod student;
mod teacher;

pub use course::{Course, NewCourse};
pub use credential::Credential;
pub use department::{Department, NewDepartment};
pub use exam::{Exam, NewExam};
pub use student::{NewStudent, Student};
pub use teacher::{NewTeacher, Teacher};
