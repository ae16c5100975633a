pub mod analysis;
pub mod coerce;
pub mod course;
pub mod user;

pub use analysis::{AreaDetail, CvAnalysis, ImprovementArea, Strength, StrengthDetail};
pub use course::{Course, CourseLevel, RawCourse};
pub use user::{OnboardingProfile, UserIdQuery, UserIdentity};
