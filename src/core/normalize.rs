//! Input normalization ahead of the residue-table solver

/// A generator set ready for the solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Smallest nonzero value; the residue table modulus
    pub anchor: u64,
    /// Remaining distinct values greater than the anchor, ascending
    pub others: Vec<u64>,
}

impl Normalized {
    /// Anchor followed by the other generators
    pub fn all(&self) -> Vec<u64> {
        let mut values = Vec::with_capacity(self.others.len() + 1);
        values.push(self.anchor);
        values.extend_from_slice(&self.others);
        values
    }
}

/// Drop zeros and split off the anchor
///
/// Returns `None` when fewer than two nonzero values remain. Duplicates count
/// toward that threshold but are removed from the folding list, since a
/// repeated generator never lowers a table slot.
pub fn normalize(values: &[u64]) -> Option<Normalized> {
    let mut nonzero: Vec<u64> = values.iter().copied().filter(|&v| v > 0).collect();
    if nonzero.len() < 2 {
        return None;
    }

    nonzero.sort_unstable();
    nonzero.dedup();

    let anchor = nonzero[0];
    let others = nonzero.split_off(1);
    Some(Normalized { anchor, others })
}
