use crate::types::{CutDemand, Plan, TubeAssignment, TubeInventory};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PackError {
    #[error("tube length must be positive")]
    ZeroTubeLength,
    #[error("cut length must be positive")]
    ZeroCutLength,
}

/// Greedy first-fit assignment of cut lengths to tube stock.
///
/// Tubes are consumed in inventory order, one physical tube at a time.
/// Each tube is filled with a single pass over the remaining demand in
/// demand order, taking as many of each cut length as still fit. No
/// sorting, no lookahead, no backtracking: the result depends on the
/// order the caller supplied the entries in, which makes runs exactly
/// reproducible but not optimal.
pub struct Packer {
    inventory: TubeInventory,
    demand: CutDemand,
}

impl Packer {
    pub fn new(inventory: TubeInventory, demand: CutDemand) -> Self {
        Self { inventory, demand }
    }

    /// Runs the heuristic. The inputs are not mutated; the returned
    /// leftover is the demand with fulfilled quantities subtracted
    /// (entries stay present at quantity zero).
    ///
    /// A zero tube or cut length is rejected up front: a zero-length cut
    /// would fit any tube forever and never reduce its space.
    pub fn pack(&self) -> Result<Plan, PackError> {
        if self.inventory.iter().any(|(length, _)| length == 0) {
            return Err(PackError::ZeroTubeLength);
        }
        if self.demand.iter().any(|(length, _)| length == 0) {
            return Err(PackError::ZeroCutLength);
        }

        let mut remaining = self.demand.clone();
        let mut outstanding = remaining.total();
        let mut assignments = Vec::new();

        if outstanding == 0 {
            return Ok(Plan {
                assignments,
                leftover: remaining,
            });
        }

        'tubes: for (tube_length, count) in self.inventory.iter() {
            for _ in 0..count {
                let mut space = tube_length;
                let mut cuts = Vec::new();

                for (cut, qty) in remaining.entries.iter_mut() {
                    while *qty > 0 && *cut <= space {
                        cuts.push(*cut);
                        space -= *cut;
                        *qty -= 1;
                        outstanding -= 1;
                    }
                }

                // The tube is recorded as used even when nothing fit in it.
                assignments.push(TubeAssignment {
                    tube_length,
                    cuts_made: cuts,
                    remaining_space: space,
                });

                if outstanding == 0 {
                    break 'tubes;
                }
            }
        }

        Ok(Plan {
            assignments,
            leftover: remaining,
        })
    }
}
