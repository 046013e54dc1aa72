pub mod config;
pub mod engine;
pub mod record;
pub mod tables;
pub mod validation;

pub use config::{SexTablesConfig, TablesConfig};
pub use engine::{score, RiskScore, ScoreBreakdown, ScoreError};
pub use record::{ParseSexError, RiskRecord, Sex};
pub use tables::{RiskTables, SexTables};
pub use validation::resolve_tables;
