//! Round-robin residue-table solver
//!
//! For an anchor `a` (the smallest generator), slot `i` of the table holds
//! the smallest representable value congruent to `i` modulo `a`. Folding in
//! generators one at a time only ever lowers slots. Once every generator is
//! folded, the largest slot minus `a` is the Frobenius number.
//!
//! Example with generators `[5, 8, 9]`:
//!
//! ```text
//! Step             | n0 | n1 | n2 | n3 | n4 | Operation
//! -----------------+----+----+----+----+----+---------------------
//! Initial          |  0 |  - |  - |  - |  - | anchor 5
//! Fold 8, step 1   |  0 |  - |  - |  8 |  - | 0+8=8   (mod 5 = 3)
//! Fold 8, step 2   |  0 | 16 |  - |  8 |  - | 8+8=16  (mod 5 = 1)
//! Fold 8, step 3   |  0 | 16 |  - |  8 | 24 | 16+8=24 (mod 5 = 4)
//! Fold 8, step 4   |  0 | 16 | 32 |  8 | 24 | 24+8=32 (mod 5 = 2)
//! Fold 9, step 1   |  0 | 16 | 32 |  8 |  9 | 0+9=9   (mod 5 = 4)
//! Fold 9, step 2   |  0 | 16 | 32 |  8 |  9 | 9+9=18 > 8, continue from 8
//! Fold 9, step 3   |  0 | 16 | 17 |  8 |  9 | 8+9=17  (mod 5 = 2)
//! Fold 9, step 4   |  0 | 16 | 17 |  8 |  9 | 17+9=26 > 16, continue from 16
//! Final            |  0 | 16 | 17 |  8 |  9 | 17 - 5 = 12
//! ```

use tracing::debug;

use crate::core::gcd::{gcd, is_coprime};
use crate::core::normalize::normalize;
use crate::error::{DomainError, FrobeniusError, Result};
use crate::models::Generator;

/// Residue table for one solve
///
/// `None` marks a residue class with no representable value yet.
#[derive(Debug, Clone)]
pub struct ResidueTable {
    anchor: u64,
    slots: Vec<Option<u64>>,
}

impl ResidueTable {
    /// Create a table for `anchor` with only slot 0 reachable
    pub fn new(anchor: u64) -> Result<Self> {
        let size = usize::try_from(anchor).map_err(|_| FrobeniusError::AnchorTooLarge {
            anchor,
            max: usize::MAX as u64,
        })?;
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(size)
            .map_err(|_| FrobeniusError::TableAllocation { anchor })?;
        slots.resize(size, None);
        if let Some(first) = slots.first_mut() {
            *first = Some(0);
        }
        Ok(Self { anchor, slots })
    }

    pub fn anchor(&self) -> u64 {
        self.anchor
    }

    pub fn slots(&self) -> &[Option<u64>] {
        &self.slots
    }

    /// Fold one generator into the table
    pub fn fold(&mut self, generator: u64) -> Result<()> {
        let d = gcd(self.anchor, generator);
        // d divides the anchor, so it fits wherever the table size fits
        let classes = d as usize;
        let steps = self.anchor / d;

        let mut class_min: Vec<Option<u64>> = vec![None; classes];
        for (index, slot) in self.slots.iter().enumerate() {
            if let Some(value) = *slot {
                let entry = &mut class_min[index % classes];
                if entry.map_or(true, |m| value < m) {
                    *entry = Some(value);
                }
            }
        }

        for start in class_min.into_iter().flatten() {
            let mut current = start;
            for _ in 0..steps {
                let Some(next) = current.checked_add(generator) else {
                    // An existing slot is always below a sum wider than u64
                    let index = ((u128::from(current) + u128::from(generator))
                        % u128::from(self.anchor)) as usize;
                    match self.slots[index] {
                        Some(existing) => {
                            current = existing;
                            continue;
                        }
                        None => {
                            return Err(FrobeniusError::Overflow {
                                value: current,
                                generator,
                            })
                        }
                    }
                };
                let index = (next % self.anchor) as usize;
                current = match self.slots[index] {
                    Some(existing) if existing <= next => existing,
                    _ => {
                        self.slots[index] = Some(next);
                        next
                    }
                };
            }
        }

        Ok(())
    }

    /// Largest slot minus the anchor, or `None` if any slot is unreachable
    pub fn frobenius(&self) -> Result<Option<i64>> {
        let mut max = 0u64;
        for slot in &self.slots {
            match slot {
                Some(value) => max = max.max(*value),
                None => return Ok(None),
            }
        }
        let max = i64::try_from(max).map_err(|_| FrobeniusError::ResultOverflow(max))?;
        let anchor =
            i64::try_from(self.anchor).map_err(|_| FrobeniusError::ResultOverflow(self.anchor))?;
        Ok(Some(max - anchor))
    }
}

/// Compute the Frobenius number of a generator set
///
/// Returns `Ok(None)` when fewer than two nonzero generators are given or
/// their overall gcd is not 1. Intermediate sums are checked; a sum that
/// does not fit in `u64` (or a result that does not fit in `i64`) is an
/// error rather than a wrapped value.
pub fn solve(generators: &[u64]) -> Result<Option<i64>> {
    let Some(normalized) = normalize(generators) else {
        debug!("Fewer than two nonzero generators, no finite solution");
        return Ok(None);
    };

    if !is_coprime(&normalized.all()) {
        debug!("Generators are not coprime, no finite solution");
        return Ok(None);
    }

    debug!(
        "Building residue table: anchor={}, generators={}",
        normalized.anchor,
        normalized.others.len() + 1
    );

    let mut table = ResidueTable::new(normalized.anchor)?;
    for &g in &normalized.others {
        table.fold(g)?;
    }
    table.frobenius()
}

/// Compute the Frobenius number of values that still need domain checks
///
/// Every value is validated before any table work; a negative or
/// non-integer value is a `DomainError`.
pub fn try_solve<T>(values: &[T]) -> Result<Option<i64>>
where
    T: Copy,
    Generator: TryFrom<T, Error = DomainError>,
{
    let generators = values
        .iter()
        .map(|&v| Generator::try_from(v).map(u64::from))
        .collect::<std::result::Result<Vec<u64>, DomainError>>()?;
    solve(&generators)
}
