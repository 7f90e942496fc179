pub mod analysis;
pub mod error;
pub mod grade_scale;
pub mod logbook;

pub use analysis::{AnalysisResult, analyze};
pub use error::{Error, Result};
pub use grade_scale::{GradeScale, Rank};
pub use logbook::{GradedRoute, LogbookEntry, read_logbook, read_logbook_path};
