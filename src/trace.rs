use std::fmt;

use serde::Serialize;

use crate::reference::{Page, ReferenceString};

const LABEL_WIDTH: usize = 18;
const CELL_WIDTH: usize = 4;

/// Outcome of processing one reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub position: usize,
    pub page: Page,
    pub fault: bool,
    pub victim: Option<Page>,
    /// Slot contents after the step, `None` where unused.
    pub frames: Vec<Option<Page>>,
    /// Faults so far, including this step.
    pub faults: usize,
}

/// Steps of one run in reference order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Trace {
    steps: Vec<Step>,
    faults: usize,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, step: Step) -> &Step {
        debug_assert_eq!(step.position, self.steps.len());
        if step.fault {
            self.faults += 1;
        }
        debug_assert_eq!(step.faults, self.faults);
        self.steps.push(step);
        &self.steps[self.steps.len() - 1]
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn fault_count(&self) -> usize {
        self.faults
    }

    pub fn hit_count(&self) -> usize {
        self.steps.len() - self.faults
    }

    /// Evicted pages in order.
    pub fn victims(&self) -> impl Iterator<Item = Page> + '_ {
        self.steps.iter().filter_map(|s| s.victim)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub cells: Vec<Option<String>>,
}

impl Row {
    fn empty(label: String, width: usize) -> Self {
        Row {
            label,
            cells: vec![None; width],
        }
    }
}

/// Display table of a run: a header with the reference string, one row per
/// frame slot, then the fault and victim rows. One column per reference;
/// columns not yet stepped stay empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceTable {
    pub header: Row,
    pub frames: Vec<Row>,
    pub faults: Row,
    pub victims: Row,
}

impl TraceTable {
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        std::iter::once(&self.header)
            .chain(self.frames.iter())
            .chain([&self.faults, &self.victims])
    }
}

impl fmt::Display for TraceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            write!(f, "{:<LABEL_WIDTH$}", row.label)?;
            for cell in &row.cells {
                write!(f, "{:>CELL_WIDTH$}", cell.as_deref().unwrap_or(" "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Fills a `TraceTable` one step at a time.
#[derive(Debug, Clone)]
pub struct TraceBuilder {
    table: TraceTable,
}

impl TraceBuilder {
    pub fn new(reference: &ReferenceString, capacity: usize) -> Self {
        let width = reference.len();
        let header = Row {
            label: "Reference String".to_owned(),
            cells: reference.pages().iter().map(|p| Some(p.to_string())).collect(),
        };
        let frames = (0..capacity)
            .map(|slot| Row::empty(format!("Physical Frame {slot}"), width))
            .collect();
        TraceBuilder {
            table: TraceTable {
                header,
                frames,
                faults: Row::empty("Page Faults".to_owned(), width),
                victims: Row::empty("Victim Frames".to_owned(), width),
            },
        }
    }

    pub fn push(&mut self, step: &Step) -> &mut Self {
        let col = step.position;
        for (row, page) in self.table.frames.iter_mut().zip(&step.frames) {
            row.cells[col] = page.map(|p| p.to_string());
        }
        if step.fault {
            self.table.faults.cells[col] = Some("F".to_owned());
        }
        self.table.victims.cells[col] = step.victim.map(|p| p.to_string());
        self
    }

    pub fn build(self) -> TraceTable {
        self.table
    }
}
