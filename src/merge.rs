//! Positional merge of track stubs with full track records.
//!
//! Album track listings only carry stubs (no ISRC, no album). The full
//! records come from a separate batch request over the stub IDs, so the Nth
//! full record belongs to the Nth stub. The merge relies on that order and
//! does not join by ID; it only counts the positions where the IDs disagree
//! so callers can warn about them.

use crate::types::{MergedTrack, Track};

#[derive(Debug, Default)]
pub struct MergeReport {
    pub tracks: Vec<MergedTrack>,
    /// Positions whose stub and full record carry different IDs.
    pub misaligned: usize,
    /// Positions without a full record.
    pub missing: usize,
}

impl MergeReport {
    pub fn is_aligned(&self) -> bool {
        self.misaligned == 0
    }
}

/// Pairs `stubs[i]` with `full[i]`. Stubs drive the output: every stub
/// yields one merged track, with `full` left empty past the end of `full`.
pub fn merge_positional(stubs: Vec<Track>, full: Vec<Option<Track>>) -> MergeReport {
    let mut report = MergeReport::default();
    let mut full = full.into_iter();

    for stub in stubs {
        let record = full.next().flatten();

        match &record {
            None => report.missing += 1,
            Some(record) => {
                if let (Some(a), Some(b)) = (&stub.id, &record.id) {
                    if a != b {
                        report.misaligned += 1;
                    }
                }
            }
        }

        report.tracks.push(MergedTrack {
            stub,
            full: record,
        });
    }

    report
}

impl MergedTrack {
    /// The richest record available for this position.
    pub fn best(&self) -> &Track {
        self.full.as_ref().unwrap_or(&self.stub)
    }
}
