//! Paid-vacation consolidation.
//!
//! Paid vacation arrives on the timesheet as ordinary rows with a vacation
//! job code. Runs of consecutive vacation days are summarized per employee;
//! multi-day runs are removed from the working-hours stream so they are not
//! paid as worked time. Single vacation days stay in the stream, as the
//! clock system books them with real hours.

use crate::config::NormalizerConfig;
use crate::models::{TimeRecord, VacationEntry};

/// The retained records and vacation summary from one consolidation pass.
#[derive(Debug)]
pub struct VacationOutcome {
    /// Records remaining in the working-hours stream.
    pub records: Vec<TimeRecord>,
    /// One entry per consecutive vacation run.
    pub vacations: Vec<VacationEntry>,
}

fn is_vacation(record: &TimeRecord, config: &NormalizerConfig) -> bool {
    record.job.as_deref() == Some(config.vacation_job_code.as_str())
}

fn entry_for_run(run: &[TimeRecord]) -> VacationEntry {
    let first = &run[0];
    VacationEntry {
        employee_id: first.employee_id.clone().unwrap_or_default(),
        first_name: first.first_name.clone().unwrap_or_default(),
        last_name: first.last_name.clone().unwrap_or_default(),
        department: first.department.clone(),
        days: run.len() as u32,
    }
}

/// Groups consecutive vacation rows into runs and summarizes them.
///
/// `records` must be identity-filled and ordered per employee. Every run is
/// recorded in the summary; runs longer than one day are dropped from the
/// returned record stream.
pub fn consolidate_vacations(
    records: Vec<TimeRecord>,
    config: &NormalizerConfig,
) -> VacationOutcome {
    let mut retained = Vec::with_capacity(records.len());
    let mut vacations = Vec::new();
    let mut run: Vec<TimeRecord> = Vec::new();

    let mut flush_run = |run: &mut Vec<TimeRecord>, retained: &mut Vec<TimeRecord>| {
        if run.is_empty() {
            return;
        }
        vacations.push(entry_for_run(run));
        if run.len() == 1 {
            retained.append(run);
        } else {
            run.clear();
        }
    };

    for record in records {
        let same_run = run
            .last()
            .is_some_and(|last| last.employee_id == record.employee_id);

        if is_vacation(&record, config) {
            if !same_run {
                flush_run(&mut run, &mut retained);
            }
            run.push(record);
        } else {
            flush_run(&mut run, &mut retained);
            retained.push(record);
        }
    }
    flush_run(&mut run, &mut retained);

    VacationOutcome {
        records: retained,
        vacations,
    }
}
