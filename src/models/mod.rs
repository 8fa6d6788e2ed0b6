//! Programme domain models.
//!
//! Provides the data types that flow through a programme analysis:
//! exported rows go in, trade tasks and admin items come out.
//!
//! # Domain Mappings
//!
//! | u-programme | Programme export | Site calendar |
//! |-------------|------------------|---------------|
//! | ScheduleRow | Line item | - |
//! | TradeTask | - | Assignable trade work |
//! | AdminItem | - | Approval / survey / milestone |
//! | AnalysisResult | - | Imported programme |

mod admin;
mod analysis;
mod range;
mod row;
mod task;

pub use admin::{AdminItem, AdminItemType};
pub use analysis::{AnalysisResult, AnalysisSummary, TimelineSummary};
pub use range::DateRange;
pub use row::{ParsedProgramme, ProgrammeBounds, ScheduleRow};
pub use task::{Priority, Trade, TradeTask};
