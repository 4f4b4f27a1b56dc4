//! Domain models for procedure data and its aggregates

pub mod aggregates;
pub mod period;
pub mod procedure;

pub use aggregates::{CategoryTotal, MonthlyAdoptionPoint, RegionTotal, SpecialtyTotal};
pub use period::YearMonth;
pub use procedure::{ProcedureRecord, RecordSet};
