pub mod etl;
pub mod render;
pub mod stats;

pub use crate::domain::model::{BlogReport, MatchRecord, TeamMatch, TeamSummary};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
