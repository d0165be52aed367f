//! # Joint Computation
//!
//! Derives connector points between panels: horizontal joints within a
//! row where two panels sit close enough to be linked, and shared
//! joints where a joint line in one row aligns vertically with one in
//! the row directly beneath it. Shared joints only ever link
//! immediately adjacent rows; rows farther apart are never paired,
//! even when perfectly aligned.
//!
//! All joint coordinates are emitted pre-rounded to the crate-wide
//! two-decimal precision, so pairing and deduplication operate on the
//! same values that end up in the output.

use std::collections::HashSet;

use crate::config::LayoutConfig;
use crate::geometry::{round2, Joint, Panel};
use crate::grouping::{group_rows, Row};

/// Computes all joints for a panel layout.
#[derive(Debug, Clone, Copy)]
pub struct JointCalculator {
    config: LayoutConfig,
}

impl JointCalculator {
    pub fn new(config: LayoutConfig) -> Self {
        JointCalculator { config }
    }

    /// All joints for the layout, deduplicated by the rounded
    /// coordinate key and sorted by (x, y).
    pub fn calculate(&self, panels: &[Panel]) -> Vec<Joint> {
        let rows = group_rows(panels, &self.config);
        if rows.is_empty() {
            return Vec::new();
        }

        let mut all_joints: Vec<Joint> = Vec::new();

        for row in &rows {
            all_joints.extend(self.horizontal_joints_in_row(row));
        }

        for pair in rows.windows(2) {
            all_joints.extend(self.shared_joints_between_rows(&pair[0], &pair[1]));
        }

        dedup_joints(all_joints)
    }

    /// Joints between horizontally adjacent panels of one row.
    ///
    /// Each close pair gets two joints at the gap midpoint, one on the
    /// top edge and one on the bottom edge.
    fn horizontal_joints_in_row(&self, row: &Row) -> Vec<Joint> {
        let mut joints: Vec<Joint> = Vec::new();

        for pair in row.panels.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let gap = b.left() - a.right();

            if gap.abs() < self.config.joint_gap_threshold {
                let joint_x = round2((a.right() + b.left()) / 2.0);
                joints.push(Joint::new(joint_x, round2(a.top())));
                joints.push(Joint::new(joint_x, round2(a.bottom())));
            }
        }

        joints
    }

    /// Joints shared between two vertically adjacent rows.
    ///
    /// Only attempted when the rows nearly touch. The top row's
    /// bottom-edge joints are paired against the bottom row's top-edge
    /// joints on round-equal X; each match emits one joint at the
    /// midpoint of both coordinates. Deduplicated within this pairing
    /// step so coinciding candidate pairs emit once.
    fn shared_joints_between_rows(&self, top_row: &Row, bottom_row: &Row) -> Vec<Joint> {
        let (top_first, bottom_first) = match (top_row.panels.first(), bottom_row.panels.first()) {
            (Some(t), Some(b)) => (t, b),
            _ => return Vec::new(),
        };

        if (top_first.bottom() - bottom_first.top()).abs() >= self.config.joint_gap_threshold {
            return Vec::new();
        }

        let threshold = self.config.joint_gap_threshold;

        let top_edge_joints: Vec<Joint> = self
            .horizontal_joints_in_row(top_row)
            .into_iter()
            .filter(|j| (j.position.y - top_first.bottom()).abs() < threshold)
            .collect();

        let bottom_edge_joints: Vec<Joint> = self
            .horizontal_joints_in_row(bottom_row)
            .into_iter()
            .filter(|j| (j.position.y - bottom_first.top()).abs() < threshold)
            .collect();

        let mut shared: Vec<Joint> = Vec::new();
        let mut emitted: HashSet<(i64, i64)> = HashSet::new();

        for joint_t in &top_edge_joints {
            for joint_b in &bottom_edge_joints {
                if round2(joint_t.position.x) != round2(joint_b.position.x) {
                    continue;
                }

                let shared_x = round2((joint_t.position.x + joint_b.position.x) / 2.0);
                let shared_y = round2((joint_t.position.y + joint_b.position.y) / 2.0);
                let joint = Joint::new(shared_x, shared_y);

                if emitted.insert(joint.key()) {
                    shared.push(joint);
                }
            }
        }

        shared
    }
}

/// Deduplicate joints by rounded coordinates, first occurrence wins.
///
/// Result coordinates use the rounded key values, sorted by (x, y) -
/// the same convention as mount deduplication.
pub fn dedup_joints(joints: Vec<Joint>) -> Vec<Joint> {
    let mut seen: HashSet<(i64, i64)> = HashSet::new();
    let mut unique: Vec<Joint> = Vec::new();

    for joint in joints {
        if seen.insert(joint.key()) {
            unique.push(Joint {
                position: joint.position.rounded(),
            });
        }
    }

    unique.sort_by(|a, b| a.key().cmp(&b.key()));
    unique
}
