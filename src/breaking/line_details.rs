//! Per-line spacing record
//!
//! One `LineDetails` describes a candidate line: how hard its content had to
//! be stretched, its silhouette, and the spacing and penalty parameters used
//! when lines are later stacked onto pages.

use serde::{Deserialize, Serialize};

use super::line_shape::LineShape;
use crate::geometry::Interval;

/// Whether a break may, may not, or must happen at a boundary
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BreakPermission {
    #[default]
    Allow,
    Forbid,
    Force,
}

impl BreakPermission {
    pub fn allows_break(self) -> bool {
        self != BreakPermission::Forbid
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineDetails {
    /// Index of the column ending the line
    pub last_column: Option<usize>,
    pub force: f64,
    pub shape: LineShape,
    /// Extent of the reference points of every line folded into this one,
    /// relative to the first
    pub refpoint_extent: Interval,
    pub tallness: f64,
    pub padding: f64,
    pub title_padding: f64,
    pub min_distance: f64,
    pub title_min_distance: f64,
    pub bottom_padding: f64,
    pub space: f64,
    pub title_space: f64,
    pub inverse_hooke: f64,

    pub break_permission: BreakPermission,
    pub page_permission: BreakPermission,
    pub turn_permission: BreakPermission,
    pub break_penalty: f64,
    pub page_penalty: f64,
    pub turn_penalty: f64,

    pub title: bool,
    /// Number of lines folded into this record by [`compress_lines`]
    pub compressed_lines_count: usize,
    pub compressed_nontitle_lines_count: usize,
    pub last_markup_line: bool,
    pub first_markup_line: bool,
    /// Ignore the padding above this line when stacking
    pub tight_spacing: bool,
}

impl Default for LineDetails {
    fn default() -> Self {
        Self {
            last_column: None,
            force: f64::INFINITY,
            shape: LineShape::empty(),
            refpoint_extent: Interval::new(0.0, 0.0),
            tallness: 0.0,
            padding: 0.0,
            title_padding: 0.0,
            min_distance: 0.0,
            title_min_distance: 0.0,
            bottom_padding: 0.0,
            space: 0.0,
            title_space: 0.0,
            inverse_hooke: 1.0,
            break_permission: BreakPermission::Allow,
            page_permission: BreakPermission::Allow,
            turn_permission: BreakPermission::Allow,
            break_penalty: 0.0,
            page_penalty: 0.0,
            turn_penalty: 0.0,
            title: false,
            compressed_lines_count: 1,
            compressed_nontitle_lines_count: 1,
            last_markup_line: false,
            first_markup_line: false,
            tight_spacing: false,
        }
    }
}

impl LineDetails {
    /// Height of the whole line, first column included
    pub fn full_height(&self) -> f64 {
        self.shape.extent().length()
    }

    pub fn tallness(&self) -> f64 {
        self.tallness
    }

    pub fn is_feasible(&self) -> bool {
        self.force.is_finite()
    }

    /// Distance between this line's reference point and `next`'s when
    /// `next` is stacked directly below
    pub fn spring_length(&self, next: &LineDetails) -> f64 {
        let (space, padding, min_distance) = if next.title {
            (self.title_space, self.title_padding, self.title_min_distance)
        } else {
            (self.space, self.padding, self.min_distance)
        };
        let padding = if next.tight_spacing { 0.0 } else { padding };

        let clearance = next.shape.elevation(&self.shape) + padding;
        space.max(min_distance).max(clearance)
    }
}

/// Fold every line that may not end a page into the line below it
///
/// The folded record hangs the lower line's shape under the upper one,
/// sums their springs, and counts how many lines it now stands for.
pub fn compress_lines(lines: &[LineDetails]) -> Vec<LineDetails> {
    let mut ret: Vec<LineDetails> = Vec::with_capacity(lines.len());

    for line in lines {
        let fold = ret
            .last()
            .map_or(false, |old| !old.page_permission.allows_break());
        if !fold {
            ret.push(line.clone());
            continue;
        }
        let Some(old) = ret.last_mut() else {
            continue;
        };

        let padding = if line.tight_spacing {
            0.0
        } else if line.title {
            old.title_padding
        } else {
            old.padding
        };

        // Empty shapes give no elevation; stack such lines at the same spot.
        let elevation = line.shape.elevation(&old.shape);
        let drop = if elevation.is_finite() {
            elevation + padding
        } else {
            0.0
        };
        let mut compressed = line.clone();
        compressed.shape = line.shape.piggyback(&old.shape, padding).translated(-drop);
        compressed.refpoint_extent = Interval::new(
            old.refpoint_extent.lo.min(-drop),
            old.refpoint_extent.hi,
        );
        compressed.space += old.space;
        compressed.inverse_hooke += old.inverse_hooke;
        compressed.compressed_lines_count = old.compressed_lines_count + 1;
        compressed.compressed_nontitle_lines_count =
            old.compressed_nontitle_lines_count + usize::from(!line.title);
        // A folded block is a title iff its first line was.
        compressed.title = old.title;

        *old = compressed;
    }

    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(lo: f64, hi: f64) -> LineDetails {
        LineDetails {
            shape: LineShape::new(Interval::new(lo, hi), Interval::new(lo, hi)),
            force: 0.0,
            space: 10.0,
            padding: 1.0,
            min_distance: 4.0,
            title_space: 5.0,
            title_padding: 0.5,
            ..LineDetails::default()
        }
    }

    #[test]
    fn test_spring_length_prefers_largest_constraint() {
        let upper = line(-2.0, 2.0);
        let lower = line(-2.0, 2.0);
        assert_eq!(upper.spring_length(&lower), 10.0);

        let tall = line(-2.0, 20.0);
        // 20 - (-2) + 1
        assert_eq!(upper.spring_length(&tall), 23.0);
    }

    #[test]
    fn test_spring_length_to_title() {
        let upper = line(-2.0, 2.0);
        let mut title = line(-1.0, 1.0);
        title.title = true;
        assert_eq!(upper.spring_length(&title), 5.0);
    }

    #[test]
    fn test_compress_lines_folds_forbidden_page_breaks() {
        let mut first = line(-2.0, 2.0);
        first.page_permission = BreakPermission::Forbid;
        let second = line(-1.0, 1.0);
        let third = line(-1.0, 1.0);

        let compressed = compress_lines(&[first, second, third]);
        assert_eq!(compressed.len(), 2);

        let block = &compressed[0];
        assert_eq!(block.compressed_lines_count, 2);
        assert_eq!(block.compressed_nontitle_lines_count, 2);
        assert_eq!(block.space, 20.0);
        assert_eq!(block.inverse_hooke, 2.0);
        // Second line hangs 1 - (-2) + 1 = 4 below the first.
        assert_eq!(block.refpoint_extent, Interval::new(-4.0, 0.0));
        assert_eq!(block.shape.rest, Interval::new(-5.0, 2.0));
        assert_eq!(block.page_permission, BreakPermission::Allow);
        assert_eq!(compressed[1].compressed_lines_count, 1);
    }

    #[test]
    fn test_full_height() {
        let l = LineDetails {
            shape: LineShape::new(Interval::new(-5.0, 1.0), Interval::new(-2.0, 3.0)),
            ..LineDetails::default()
        };
        assert_eq!(l.full_height(), 8.0);
    }
}
