//! Constrained line breaking
//!
//! Splits a column sequence into lines by dynamic programming over the
//! candidate breakpoints. For every starting column the breaker keeps a table
//! indexed by (breakpoint, number of lines) holding the cheapest way to reach
//! that breakpoint with exactly that many lines. Tables grow lazily as larger
//! line counts are requested.
//!
//! Demerits add up line by line: a line with force `f` after a line with
//! force `p` costs `f² + (p - f)²`, so both loose lines and abrupt changes in
//! density are penalised. Equal demerits keep the earliest predecessor.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::config::BreakingConfig;
use super::line_details::{BreakPermission, LineDetails};
use super::matrix::Matrix;
use super::spacer::SpanCostProvider;
use crate::errors::BreakingError;

/// One cell of the dynamic program
#[derive(Clone, Debug, PartialEq)]
pub struct BreakNode {
    /// Candidate index, relative to the start, where the previous line ended
    pub prev: Option<usize>,
    pub demerits: f64,
    /// The line ending at this cell
    pub details: LineDetails,
}

impl Default for BreakNode {
    fn default() -> Self {
        Self {
            prev: None,
            demerits: f64::INFINITY,
            details: LineDetails::default(),
        }
    }
}

/// A chosen set of lines
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineBreaking {
    /// Boundaries between lines, first and last included
    pub breakpoints: Vec<usize>,
    pub lines: Vec<LineDetails>,
    pub demerits: f64,
}

impl LineBreaking {
    pub fn system_count(&self) -> usize {
        self.lines.len()
    }

    pub fn forces(&self) -> Vec<f64> {
        self.lines.iter().map(|l| l.force).collect()
    }
}

pub struct ConstrainedBreaking<'a, P: SpanCostProvider + ?Sized> {
    provider: &'a P,
    config: BreakingConfig,
    /// Candidate boundaries, ascending
    breaks: Vec<usize>,
    /// `forced[k]`: how many of `breaks[..k]` must break
    forced: Vec<usize>,
    /// Position in `breaks` of each starting column
    start_breaks: Vec<usize>,
    /// `lines[(i, j)]`: one line from candidate `i` to candidate `j`
    lines: Matrix<LineDetails>,
    /// Per start: `(candidate offset, line count)`
    state: Vec<Matrix<BreakNode>>,
}

impl<'a, P: SpanCostProvider + ?Sized> ConstrainedBreaking<'a, P> {
    /// Breaker for the whole piece, starting at the first column
    pub fn new(provider: &'a P, config: BreakingConfig) -> Self {
        let mut breaking = Self::empty(provider, config);
        breaking.start_breaks = vec![0];
        breaking.initialize();
        breaking
    }

    /// Breaker answering queries from several starting boundaries
    ///
    /// Each start must be a candidate breakpoint.
    pub fn with_starts(
        provider: &'a P,
        config: BreakingConfig,
        starts: &[usize],
    ) -> Result<Self, BreakingError> {
        let mut breaking = Self::empty(provider, config);
        let mut start_breaks = Vec::with_capacity(starts.len());
        for &start in starts {
            let idx = breaking
                .breaks
                .binary_search(&start)
                .map_err(|_| BreakingError::UnknownStart(start))?;
            start_breaks.push(idx);
        }
        breaking.start_breaks = start_breaks;
        breaking.initialize();
        Ok(breaking)
    }

    fn empty(provider: &'a P, config: BreakingConfig) -> Self {
        let n = provider.column_count();
        let breaks: Vec<usize> = (0..=n)
            .filter(|&k| k == 0 || k == n || provider.breakpoint(k).permission.allows_break())
            .collect();
        let mut forced = Vec::with_capacity(breaks.len() + 1);
        forced.push(0);
        for &k in &breaks {
            let last = forced.last().copied().unwrap_or(0);
            let force = provider.breakpoint(k).permission == BreakPermission::Force;
            forced.push(last + usize::from(force));
        }
        Self {
            provider,
            config,
            breaks,
            forced,
            start_breaks: Vec::new(),
            lines: Matrix::default(),
            state: Vec::new(),
        }
    }

    fn initialize(&mut self) {
        let count = self.breaks.len();
        self.lines = Matrix::new(count, count, LineDetails::default());
        for i in 0..count {
            for j in i + 1..count {
                self.lines[(i, j)] = self.fill_line_details(i, j);
            }
        }

        self.state = self
            .start_breaks
            .iter()
            .map(|&start| {
                let mut table = Matrix::new(count - start, 1, BreakNode::default());
                table[(0, 0)].demerits = 0.0;
                table
            })
            .collect();

        log::debug!(
            "Line breaking over {} columns: {} candidate breakpoints",
            self.provider.column_count(),
            count
        );
    }

    /// Cost and spacing of one line between candidates `i` and `j`
    fn fill_line_details(&self, i: usize, j: usize) -> LineDetails {
        let (start_col, end_col) = (self.breaks[i], self.breaks[j]);
        let cost = self.provider.span_cost(start_col, end_col);
        let last = j == self.breaks.len() - 1;
        let ragged = self.config.ragged_right || (last && self.config.ragged_last);

        let mut force = cost.force;
        if ragged {
            // Ragged lines sit at natural width, but may not be squeezed
            // unless they hold a single candidate interval.
            force = if !cost.fits || (cost.force < 0.0 && j > i + 1) {
                f64::INFINITY
            } else {
                0.0
            };
        }

        let start_bp = self.provider.breakpoint(start_col);
        let end_bp = self.provider.breakpoint(end_col);
        if (i > 0 && !start_bp.permission.allows_break())
            || (!last && !end_bp.permission.allows_break())
        {
            force = f64::INFINITY;
        }
        // No line runs across a forced break.
        if self.forced[j] > self.forced[i + 1] {
            force = f64::INFINITY;
        }

        let mut details = LineDetails {
            last_column: end_col.checked_sub(1),
            force,
            shape: cost.shape,
            tallness: cost.shape.rest.length(),
            padding: self.config.system_system_padding,
            title_padding: self.config.score_markup_padding,
            min_distance: self.config.system_system_min_distance,
            title_min_distance: self.config.score_markup_min_distance,
            bottom_padding: self.config.last_bottom_padding,
            space: self.config.system_system_space,
            title_space: self.config.score_markup_space,
            break_permission: end_bp.permission,
            page_permission: end_bp.page_permission,
            turn_permission: end_bp.turn_permission,
            break_penalty: end_bp.penalty,
            page_penalty: end_bp.page_penalty,
            turn_penalty: end_bp.turn_penalty,
            ..LineDetails::default()
        };
        details.inverse_hooke = details.full_height() + details.space;
        details
    }

    pub fn combine_demerits(&self, force: f64, prev_force: f64) -> f64 {
        combine_demerits(&self.config, force, prev_force)
    }

    /// Candidate boundaries, ascending
    pub fn breaks(&self) -> &[usize] {
        &self.breaks
    }

    /// Details of the single line between candidates `i` and `j`
    pub fn line(&self, i: usize, j: usize) -> Option<&LineDetails> {
        if i < j {
            self.lines.get(i, j)
        } else {
            None
        }
    }

    /// Candidate indices of a query range
    fn range(&self, start: usize, end: usize) -> Result<(usize, usize), BreakingError> {
        let start_break = *self
            .start_breaks
            .get(start)
            .ok_or(BreakingError::UnknownStart(start))?;
        let end_break = match self.start_breaks.get(end) {
            Some(&b) => b,
            None => self.breaks.len() - 1,
        };
        if end_break <= start_break {
            return Err(BreakingError::EmptyRange { start, end });
        }
        Ok((start_break, end_break))
    }

    /// Extend the table of `start` to cover `systems` lines
    fn ensure_systems(&mut self, start: usize, systems: usize) {
        let start_break = self.start_breaks[start];
        let table = &mut self.state[start];
        let have = table.cols();
        if have > systems {
            return;
        }

        table.resize(table.rows(), systems + 1, BreakNode::default());
        for sys in have..=systems {
            for brk in 0..table.rows() {
                calc_subproblem(&self.lines, table, &self.config, start_break, sys, brk);
            }
        }
    }

    /// Best breaking into exactly `systems` lines
    ///
    /// `start` and `end` index the starting columns; an `end` past the last
    /// one means the end of the piece.
    pub fn solve(
        &mut self,
        start: usize,
        end: usize,
        systems: usize,
    ) -> Result<LineBreaking, BreakingError> {
        if systems == 0 {
            return Err(BreakingError::ZeroSystems);
        }
        let (start_break, end_break) = self.range(start, end)?;
        if systems > end_break - start_break {
            log::warn!(
                "Cannot fit {} systems between candidates {} and {}",
                systems,
                start_break,
                end_break
            );
            return Err(BreakingError::NoSolution { start, end, systems });
        }

        self.ensure_systems(start, systems);
        let node = &self.state[start][(end_break - start_break, systems)];
        if node.demerits.is_infinite() {
            log::warn!("No feasible breaking into {} systems", systems);
            return Err(BreakingError::NoSolution { start, end, systems });
        }

        Ok(self.extract(start, end_break, systems))
    }

    /// Best breaking over every feasible line count
    pub fn best_solution(&mut self, start: usize, end: usize) -> Result<LineBreaking, BreakingError> {
        let Some((min, max)) = self.system_count_bounds(start, end) else {
            self.range(start, end)?;
            log::warn!("No feasible breaking from start {} to end {}", start, end);
            return Err(BreakingError::Infeasible { start, end });
        };
        self.best_solution_in(start, end, min..=max)
    }

    /// Best breaking with a line count in `systems`
    pub fn best_solution_in(
        &mut self,
        start: usize,
        end: usize,
        systems: RangeInclusive<usize>,
    ) -> Result<LineBreaking, BreakingError> {
        let (start_break, end_break) = self.range(start, end)?;
        let lo = (*systems.start()).max(1);
        let hi = (*systems.end()).min(end_break - start_break);
        if hi < lo {
            return Err(BreakingError::Infeasible { start, end });
        }

        self.ensure_systems(start, hi);
        let table = &self.state[start];
        let mut best: Option<(usize, f64)> = None;
        for sys in lo..=hi {
            let demerits = table[(end_break - start_break, sys)].demerits;
            if demerits.is_finite() && best.map_or(true, |(_, d)| demerits < d) {
                best = Some((sys, demerits));
            }
        }

        match best {
            Some((sys, _)) => Ok(self.extract(start, end_break, sys)),
            None => {
                log::warn!(
                    "No feasible breaking with {} to {} systems",
                    systems.start(),
                    systems.end()
                );
                Err(BreakingError::Infeasible { start, end })
            }
        }
    }

    /// Per-line details of [`ConstrainedBreaking::solve`]
    pub fn line_details(
        &mut self,
        start: usize,
        end: usize,
        systems: usize,
    ) -> Result<Vec<LineDetails>, BreakingError> {
        self.solve(start, end, systems).map(|solution| solution.lines)
    }

    /// Fewest lines any feasible breaking uses
    pub fn min_system_count(&self, start: usize, end: usize) -> Option<usize> {
        self.system_count_bounds(start, end).map(|(min, _)| min)
    }

    /// Most lines any feasible breaking uses
    pub fn max_system_count(&self, start: usize, end: usize) -> Option<usize> {
        self.system_count_bounds(start, end).map(|(_, max)| max)
    }

    /// Line-count range by reachability alone, ignoring demerits
    fn system_count_bounds(&self, start: usize, end: usize) -> Option<(usize, usize)> {
        let (start_break, end_break) = self.range(start, end).ok()?;
        let span = end_break - start_break;
        let mut fewest: Vec<Option<usize>> = vec![None; span + 1];
        let mut most: Vec<Option<usize>> = vec![None; span + 1];
        fewest[0] = Some(0);
        most[0] = Some(0);

        for k in 1..=span {
            for p in 0..k {
                let (Some(lo), Some(hi)) = (fewest[p], most[p]) else {
                    continue;
                };
                if !self.lines[(start_break + p, start_break + k)].is_feasible() {
                    continue;
                }
                fewest[k] = Some(fewest[k].map_or(lo + 1, |f| f.min(lo + 1)));
                most[k] = Some(most[k].map_or(hi + 1, |m| m.max(hi + 1)));
            }
        }

        Some((fewest[span]?, most[span]?))
    }

    /// Walk the predecessor chain back from `end_break`
    fn extract(&self, start: usize, end_break: usize, systems: usize) -> LineBreaking {
        let start_break = self.start_breaks[start];
        let table = &self.state[start];
        let mut brk = end_break - start_break;
        let demerits = table[(brk, systems)].demerits;

        let mut breakpoints = vec![self.breaks[end_break]];
        let mut lines = Vec::with_capacity(systems);
        for sys in (1..=systems).rev() {
            let node = &table[(brk, sys)];
            lines.push(node.details.clone());
            let Some(prev) = node.prev else {
                break;
            };
            brk = prev;
            breakpoints.push(self.breaks[start_break + brk]);
        }

        breakpoints.reverse();
        lines.reverse();
        LineBreaking {
            breakpoints,
            lines,
            demerits,
        }
    }
}

/// Badness of a line with `force` following one with `prev_force`
///
/// Ragged-right lines only pay for their own force.
pub fn combine_demerits(config: &BreakingConfig, force: f64, prev_force: f64) -> f64 {
    if config.ragged_right {
        force * force
    } else {
        force * force + (prev_force - force) * (prev_force - force)
    }
}

/// Fill `table[(brk, sys)]` from the cells with one line fewer
fn calc_subproblem(
    lines: &Matrix<LineDetails>,
    table: &mut Matrix<BreakNode>,
    config: &BreakingConfig,
    start_break: usize,
    sys: usize,
    brk: usize,
) {
    if sys == 0 || brk == 0 {
        return;
    }

    let mut best = BreakNode::default();
    for j in 0..brk {
        let prev = &table[(j, sys - 1)];
        if prev.demerits.is_infinite() {
            continue;
        }
        let cur = &lines[(start_break + j, start_break + brk)];
        if !cur.is_feasible() {
            continue;
        }

        let prev_force = if j == 0 { 0.0 } else { prev.details.force };
        let demerits = prev.demerits + combine_demerits(config, cur.force, prev_force);

        if demerits < best.demerits {
            best = BreakNode {
                prev: Some(j),
                demerits,
                details: cur.clone(),
            };
        }
    }
    table[(brk, sys)] = best;
}
