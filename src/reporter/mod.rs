pub mod csv;
pub mod json;
pub mod terminal;

use crate::findings::AuditReport;

pub trait Reporter {
    fn report(&self, report: &AuditReport) -> String;
}
