//! Plain-text search trace.
//!
//! [`ConsoleReporter`] prints the job table, one line per iteration and
//! the best schedule, right-aligning every column to the widest value it
//! will hold:
//!
//! ```text
//! Initial schedule (Id: Pj, Dj, Wj):
//!  2: 16,  67, 45
//! ...
//! Fitness: 42048
//!
//! Iteration step: best schedule, (fitness):
//!   0:  2,  3, 15, ..., (42048)
//!   1:  2,  3, 15, ..., (40880)
//! ...
//!
//! Best schedule:
//! 120: 13, 15,  9, ..., (8373)
//! ```

use std::io::{self, Write};

use crate::model::{Instance, Job, Schedule};
use crate::tabu::SearchObserver;

#[derive(Debug, Clone, Copy)]
struct ColumnWidths {
    id: usize,
    processing_time: usize,
    due_date: usize,
    weight: usize,
}

impl ColumnWidths {
    fn of(instance: &Instance) -> Self {
        let jobs = instance.jobs();
        Self {
            id: width(jobs.iter().map(|j| i64::from(j.id()))),
            processing_time: width(jobs.iter().map(Job::processing_time)),
            due_date: width(jobs.iter().map(Job::due_date)),
            weight: width(jobs.iter().map(Job::weight)),
        }
    }
}

fn width(values: impl Iterator<Item = i64>) -> usize {
    values.map(|v| v.to_string().len()).max().unwrap_or(1)
}

/// Writes the search trace to any [`Write`] sink.
///
/// Lines are written as events arrive. The first I/O error stops all
/// further output and is returned by [`into_inner`](ConsoleReporter::into_inner).
///
/// # Examples
///
/// ```
/// use u_tardiness::model::Instance;
/// use u_tardiness::report::ConsoleReporter;
/// use u_tardiness::tabu::{TabuConfig, TabuRunner};
///
/// let instance = Instance::reference();
/// let config = TabuConfig::default().with_iterations(5);
/// let mut reporter = ConsoleReporter::new(Vec::new(), config.iterations);
/// TabuRunner::run_with_observer(&instance, &config, &mut reporter).unwrap();
///
/// let text = String::from_utf8(reporter.into_inner().unwrap()).unwrap();
/// assert!(text.starts_with("Initial schedule (Id: Pj, Dj, Wj):\n"));
/// ```
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
    iteration_width: usize,
    widths: Option<ColumnWidths>,
    error: Option<io::Error>,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter on standard output.
    pub fn stdout(iterations: usize) -> Self {
        Self::new(io::stdout(), iterations)
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// `iterations` sizes the iteration column.
    pub fn new(out: W, iterations: usize) -> Self {
        Self {
            out,
            iteration_width: iterations.to_string().len(),
            widths: None,
            error: None,
        }
    }

    /// Returns the sink, or the first write error.
    pub fn into_inner(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }

    fn emit(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self
            .out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush())
        {
            self.error = Some(err);
        }
    }

    fn schedule_line(
        &mut self,
        instance: &Instance,
        schedule: &Schedule,
        cost: i64,
        iteration: usize,
    ) -> String {
        let id_width = self
            .widths
            .get_or_insert_with(|| ColumnWidths::of(instance))
            .id;
        let mut line = format!("{:>w$}: ", iteration, w = self.iteration_width);
        for job in schedule.jobs(instance) {
            line.push_str(&format!("{:>w$}, ", job.id(), w = id_width));
        }
        line.push_str(&format!("({cost})\n"));
        line
    }
}

impl<W: Write> SearchObserver for ConsoleReporter<W> {
    fn on_start(&mut self, instance: &Instance, schedule: &Schedule, cost: i64) {
        let w = *self.widths.insert(ColumnWidths::of(instance));
        let mut text = String::from("Initial schedule (Id: Pj, Dj, Wj):\n");
        for job in schedule.jobs(instance) {
            text.push_str(&format!(
                "{:>iw$}: {:>pw$}, {:>dw$}, {:>ww$}\n",
                job.id(),
                job.processing_time(),
                job.due_date(),
                job.weight(),
                iw = w.id,
                pw = w.processing_time,
                dw = w.due_date,
                ww = w.weight,
            ));
        }
        text.push_str(&format!(
            "Fitness: {cost}\n\nIteration step: best schedule, (fitness):\n"
        ));
        text.push_str(&self.schedule_line(instance, schedule, cost, 0));
        self.emit(&text);
    }

    fn on_iteration(
        &mut self,
        iteration: usize,
        instance: &Instance,
        schedule: &Schedule,
        cost: i64,
    ) {
        let line = self.schedule_line(instance, schedule, cost, iteration);
        self.emit(&line);
    }

    fn on_finish(
        &mut self,
        instance: &Instance,
        best: &Schedule,
        best_cost: i64,
        best_iteration: usize,
    ) {
        let mut text = String::from("\nBest schedule:\n");
        text.push_str(&self.schedule_line(instance, best, best_cost, best_iteration));
        self.emit(&text);
    }
}
