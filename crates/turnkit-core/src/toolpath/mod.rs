//! Tool-motion model produced by the generator.
//!
//! A [`ToolpathSequence`] is the complete motion program of one operation, in
//! execution order. Consumers (previews, post-processors) must walk it in
//! order: the order is the physical motion order on the machine.

mod point;

pub use point::TPoint;

use crate::machine::MachineConfig;
use serde::{Deserialize, Serialize};

/// A straight tool move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolpathLine {
    pub start: TPoint,
    pub end: TPoint,
    pub tool_number: u32,
    /// mm/min
    pub feed_rate: f64,
    pub rpm: f64,
}

impl ToolpathLine {
    pub fn new(start: TPoint, end: TPoint, tool_number: u32, feed_rate: f64, rpm: f64) -> Self {
        Self {
            start,
            end,
            tool_number,
            feed_rate,
            rpm,
        }
    }
}

/// One tool motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Toolpath {
    Line(ToolpathLine),
}

impl Toolpath {
    pub fn line(start: TPoint, end: TPoint, tool_number: u32, feed_rate: f64, rpm: f64) -> Self {
        Toolpath::Line(ToolpathLine::new(start, end, tool_number, feed_rate, rpm))
    }

    pub fn start(&self) -> TPoint {
        match self {
            Toolpath::Line(line) => line.start,
        }
    }

    pub fn end(&self) -> TPoint {
        match self {
            Toolpath::Line(line) => line.end,
        }
    }

    pub fn tool_number(&self) -> u32 {
        match self {
            Toolpath::Line(line) => line.tool_number,
        }
    }

    pub fn feed_rate(&self) -> f64 {
        match self {
            Toolpath::Line(line) => line.feed_rate,
        }
    }

    pub fn rpm(&self) -> f64 {
        match self {
            Toolpath::Line(line) => line.rpm,
        }
    }

    pub fn length(&self) -> f64 {
        match self {
            Toolpath::Line(line) => line.start.distance_to(&line.end),
        }
    }

    /// Moves at or above the machine's rapid rate are positioning moves.
    pub fn is_rapid(&self, machine: &MachineConfig) -> bool {
        self.feed_rate() >= machine.rapid_feed_rate
    }
}

/// Ordered, owned list of tool motions for one operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolpathSequence {
    toolpaths: Vec<Toolpath>,
}

impl ToolpathSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toolpath: Toolpath) {
        self.toolpaths.push(toolpath);
    }

    /// Append a straight move.
    pub fn push_line(&mut self, start: TPoint, end: TPoint, tool_number: u32, feed_rate: f64, rpm: f64) {
        self.push(Toolpath::line(start, end, tool_number, feed_rate, rpm));
    }

    pub fn len(&self) -> usize {
        self.toolpaths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toolpaths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Toolpath> {
        self.toolpaths.iter()
    }

    pub fn as_slice(&self) -> &[Toolpath] {
        &self.toolpaths
    }

    pub fn first_point(&self) -> Option<TPoint> {
        self.toolpaths.first().map(Toolpath::start)
    }

    pub fn last_point(&self) -> Option<TPoint> {
        self.toolpaths.last().map(Toolpath::end)
    }

    pub fn total_length(&self) -> f64 {
        self.toolpaths.iter().map(Toolpath::length).sum()
    }

    /// Length of the moves that run below the rapid rate.
    pub fn cutting_length(&self, machine: &MachineConfig) -> f64 {
        self.toolpaths
            .iter()
            .filter(|t| !t.is_rapid(machine))
            .map(Toolpath::length)
            .sum()
    }
}

impl<'a> IntoIterator for &'a ToolpathSequence {
    type Item = &'a Toolpath;
    type IntoIter = std::slice::Iter<'a, Toolpath>;

    fn into_iter(self) -> Self::IntoIter {
        self.toolpaths.iter()
    }
}

impl FromIterator<Toolpath> for ToolpathSequence {
    fn from_iter<I: IntoIterator<Item = Toolpath>>(iter: I) -> Self {
        Self {
            toolpaths: iter.into_iter().collect(),
        }
    }
}
