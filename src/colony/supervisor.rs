use std::io::{stderr, Stderr, Write};
use std::time::Duration;

use csv::Writer;
use serde::Serialize;

/// One cycle's observability record. Carries no algorithmic weight — only the colony loop's
/// own bookkeeping reaches into it, never the update.
#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    pub cycle: usize,
    pub ants_run: usize,
    pub best_of_cycle_size: usize,
    pub running_best_size: usize,
    pub elapsed: Duration,
}

/// Aggregates `CycleReport`s as the colony runs and serializes each one through a
/// `csv::Writer`. Reports are also kept in memory so a caller can inspect the run after
/// `solve` returns without re-parsing the CSV output.
pub struct Supervisor<W: Write> {
    writer: Writer<W>,
    reports: Vec<CycleReport>,
}

impl<W: Write> Supervisor<W> {
    pub fn new(writer: Writer<W>) -> Self {
        Self {
            writer,
            reports: Vec::new(),
        }
    }

    pub fn record(&mut self, report: CycleReport) {
        if let Err(err) = self.writer.serialize(&report) {
            eprintln!("{:?}", err);
        }
        self.reports.push(report);
    }

    pub fn reports(&self) -> &[CycleReport] {
        &self.reports
    }
}

impl Default for Supervisor<Stderr> {
    fn default() -> Self {
        Supervisor::new(Writer::from_writer(stderr()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_reports_in_order() {
        let mut supervisor = Supervisor::new(Writer::from_writer(Vec::new()));
        supervisor.record(CycleReport {
            cycle: 0,
            ants_run: 4,
            best_of_cycle_size: 2,
            running_best_size: 2,
            elapsed: Duration::from_millis(1),
        });
        supervisor.record(CycleReport {
            cycle: 1,
            ants_run: 4,
            best_of_cycle_size: 3,
            running_best_size: 3,
            elapsed: Duration::from_millis(1),
        });

        assert_eq!(supervisor.reports().len(), 2);
        assert_eq!(supervisor.reports()[1].running_best_size, 3);
    }
}
