//! Interactive console session: pick a map, then one route query

use std::io::{BufRead, Write};

use citymap_core::prelude::*;

use crate::error::AppError;
use crate::model::load_graph;
use crate::routing::{normalize_label, warn_if_unknown, write_route};

pub struct Session<R, W> {
    input: R,
    output: W,
    keep_case: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, keep_case: bool) -> Self {
        Session {
            input,
            output,
            keep_case,
        }
    }

    /// Runs one query. With `source` set the graph menu is skipped.
    pub fn run(&mut self, source: Option<GraphSource>) -> Result<(), AppError> {
        let source = match source {
            Some(source) => source,
            None => GraphSource::Sample(self.select_sample()?),
        };
        let graph = load_graph(&source)?;

        writeln!(self.output, "City Map (Graph):")?;
        write!(self.output, "{graph}")?;

        let start = normalize_label(&self.prompt("Enter start location: ")?, self.keep_case);
        let end = normalize_label(&self.prompt("Enter end location: ")?, self.keep_case);
        let weight = self.prompt("Select weight type (distance/time/cost): ")?;

        let dimension = match weight.parse::<WeightDimension>() {
            Ok(dimension) => dimension,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected weight type");
                writeln!(self.output, "Invalid weight type")?;
                self.output.flush()?;
                return Ok(());
            }
        };

        warn_if_unknown(&graph, &start);
        warn_if_unknown(&graph, &end);
        let result = graph.shortest_path(&start, &end, dimension);
        write_route(&mut self.output, dimension, &start, &end, result.as_ref())?;
        self.output.flush()?;
        Ok(())
    }

    fn select_sample(&mut self) -> Result<SampleGraph, AppError> {
        writeln!(self.output, "Select a graph to load:")?;
        for sample in SampleGraph::ALL {
            writeln!(self.output, "{0}. Graph {0}", sample.choice())?;
        }
        let answer = self.prompt("Enter your choice (1-3): ")?;

        match answer.trim().parse().ok().and_then(SampleGraph::from_choice) {
            Some(sample) => Ok(sample),
            None => {
                writeln!(self.output, "Invalid choice. Loading default graph.")?;
                Ok(SampleGraph::default())
            }
        }
    }

    fn prompt(&mut self, message: &str) -> Result<String, AppError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InvalidInput(format!(
                "input ended while waiting for: {}",
                message.trim_end_matches([':', ' '])
            )));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
