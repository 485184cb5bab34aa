use serde::{Deserialize, Deserializer, Serialize};

/// Insertion-ordered mapping from a length (mm) to a count.
///
/// The packing heuristic consumes entries in the order they were supplied,
/// so iteration order must be the insertion order. A hash map would make
/// results depend on hashing and is deliberately not used here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthCounts {
    pub(crate) entries: Vec<(u32, u32)>,
}

/// Required cut lengths and how many of each are needed.
pub type CutDemand = LengthCounts;

/// Available tube lengths and how many of each are in stock.
pub type TubeInventory = LengthCounts;

impl LengthCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (u32, u32)>) -> Self {
        let mut counts = Self::new();
        for (length, qty) in pairs {
            counts.insert(length, qty);
        }
        counts
    }

    /// Adds `qty` to the count for `length`. Repeated lengths are merged
    /// into the existing entry, keeping its original position.
    pub fn insert(&mut self, length: u32, qty: u32) {
        match self.entries.iter_mut().find(|(l, _)| *l == length) {
            Some((_, q)) => *q += qty,
            None => self.entries.push((length, qty)),
        }
    }

    pub fn get(&self, length: u32) -> u32 {
        self.entries
            .iter()
            .find(|(l, _)| *l == length)
            .map_or(0, |(_, q)| *q)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Total count across all lengths.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, q)| *q as u64).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One physical tube consumed from inventory, with the cuts assigned to it
/// in the order they were packed. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TubeAssignment {
    pub tube_length: u32,
    pub cuts_made: Vec<u32>,
    pub remaining_space: u32,
}

impl TubeAssignment {
    pub fn cuts_total(&self) -> u32 {
        self.cuts_made.iter().sum()
    }
}

/// The outcome of one packing run: tubes consumed, in emission order, and
/// whatever demand could not be met.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub assignments: Vec<TubeAssignment>,
    pub leftover: CutDemand,
}

impl Plan {
    /// True when every requested cut was assigned to a tube.
    pub fn is_fulfilled(&self) -> bool {
        self.leftover.total() == 0
    }

    pub fn tube_count(&self) -> usize {
        self.assignments.len()
    }

    /// Total unused length across all consumed tubes.
    pub fn total_remaining_space(&self) -> u64 {
        self.assignments
            .iter()
            .map(|a| a.remaining_space as u64)
            .sum()
    }

    /// One record per individual cut, for tabular and CSV output. Tube
    /// indices are 1-based and follow emission order. A tube that received
    /// no cuts contributes no records, so it is absent from this view even
    /// though it was consumed from inventory.
    pub fn flatten(&self) -> Vec<CutRecord> {
        let mut records = Vec::new();
        for (i, tube) in self.assignments.iter().enumerate() {
            for &cut in &tube.cuts_made {
                records.push(CutRecord {
                    tube_index: i + 1,
                    tube_length: tube.tube_length,
                    cut_length: cut,
                    remaining_space: tube.remaining_space,
                });
            }
        }
        records
    }
}

/// A single cut in the flattened per-cut view of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CutRecord {
    pub tube_index: usize,
    pub tube_length: u32,
    pub cut_length: u32,
    pub remaining_space: u32,
}

/// Accepts a JSON integer or a whole float (spreadsheets and JS clients
/// tend to send 5000.0 for quantities).
pub fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value < 0.0 || value > u32::MAX as f64 || value.fract() != 0.0 {
        return Err(serde::de::Error::custom(format!(
            "expected a non-negative integer, got {value}"
        )));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let counts = LengthCounts::from_pairs([(200, 2), (150, 4), (100, 3)]);
        let lengths: Vec<u32> = counts.iter().map(|(l, _)| l).collect();
        assert_eq!(lengths, vec![200, 150, 100]);
    }

    #[test]
    fn test_insert_merges_repeated_lengths() {
        let counts = LengthCounts::from_pairs([(200, 2), (150, 1), (200, 3)]);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get(200), 5);
        // Merged entry keeps its original position
        let lengths: Vec<u32> = counts.iter().map(|(l, _)| l).collect();
        assert_eq!(lengths, vec![200, 150]);
    }

    #[test]
    fn test_total() {
        let counts = LengthCounts::from_pairs([(200, 2), (150, 4), (100, 0)]);
        assert_eq!(counts.total(), 6);
        assert_eq!(LengthCounts::new().total(), 0);
    }

    #[test]
    fn test_flatten_one_record_per_cut() {
        let plan = Plan {
            assignments: vec![TubeAssignment {
                tube_length: 1000,
                cuts_made: vec![400, 300],
                remaining_space: 300,
            }],
            leftover: CutDemand::new(),
        };
        let records = plan.flatten();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].tube_index, 1);
        assert_eq!(records[0].cut_length, 400);
        assert_eq!(records[1].cut_length, 300);
        assert_eq!(records[1].remaining_space, 300);
    }

    #[test]
    fn test_flatten_drops_tubes_without_cuts() {
        let plan = Plan {
            assignments: vec![
                TubeAssignment {
                    tube_length: 500,
                    cuts_made: vec![],
                    remaining_space: 500,
                },
                TubeAssignment {
                    tube_length: 1000,
                    cuts_made: vec![800],
                    remaining_space: 200,
                },
            ],
            leftover: CutDemand::new(),
        };
        let records = plan.flatten();
        // The empty tube was consumed but does not appear here; indices
        // still count it, so the cut below lands on "Tube 2".
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tube_index, 2);
        assert_eq!(records[0].tube_length, 1000);
    }

    #[test]
    fn test_deserialize_qty_from_float() {
        #[derive(Deserialize)]
        struct Entry {
            #[serde(deserialize_with = "deserialize_u32_from_number")]
            qty: u32,
        }
        let e: Entry = serde_json::from_str(r#"{"qty": 5.0}"#).unwrap();
        assert_eq!(e.qty, 5);
        let e: Entry = serde_json::from_str(r#"{"qty": 5}"#).unwrap();
        assert_eq!(e.qty, 5);
        assert!(serde_json::from_str::<Entry>(r#"{"qty": 5.5}"#).is_err());
        assert!(serde_json::from_str::<Entry>(r#"{"qty": -1}"#).is_err());
    }
}
