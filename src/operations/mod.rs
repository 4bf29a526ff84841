mod analyze;
mod describe_cage;
mod enumerate_cages;

pub use analyze::{analyze, AnalysisReport, RingRecord};
pub use describe_cage::{CageDescriptor, CageRecord};
pub use enumerate_cages::CageEnumerator;
