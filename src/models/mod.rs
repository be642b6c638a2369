mod course;
mod profile;
mod recommendation;

pub use course::{Cost, Course, Level};
pub use profile::UserProfile;
pub use recommendation::{ComponentScores, ScoredCourse, Timeline};
