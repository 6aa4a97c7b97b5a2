//! Integration tests for the Frobenius solver

use frobenius::core::{gcd_all, normalize, ResidueTable};
use frobenius::error::DomainError;
use frobenius::{solve, try_solve, FrobeniusError};

mod common;

use common::{large_units, small_primes};

#[test]
fn test_empty_and_single() {
    assert_eq!(solve(&[]).unwrap(), None);
    assert_eq!(solve(&[5]).unwrap(), None);
    assert_eq!(solve(&[0, 0, 0, 0]).unwrap(), None);
}

#[test]
fn test_coprime_pairs() {
    assert_eq!(solve(&[2, 3]).unwrap(), Some(1));
    assert_eq!(solve(&[3, 4]).unwrap(), Some(5));
    // a*b - a - b for coprime pairs
    assert_eq!(solve(&[7, 11]).unwrap(), Some(7 * 11 - 7 - 11));
}

#[test]
fn test_non_coprime() {
    assert_eq!(solve(&[4, 6]).unwrap(), None);
    assert_eq!(solve(&[10000, 20000]).unwrap(), None);
    assert_eq!(solve(&[6, 12, 18]).unwrap(), None);
}

#[test]
fn test_three_generators() {
    assert_eq!(solve(&[6, 9, 20]).unwrap(), Some(43));
    assert_eq!(solve(&[6, 10, 15]).unwrap(), Some(29));
}

#[test]
fn test_order_independence() {
    let expected = Some(4);
    assert_eq!(solve(&[3, 5, 7]).unwrap(), expected);
    assert_eq!(solve(&[7, 5, 3]).unwrap(), expected);
    assert_eq!(solve(&[5, 7, 3]).unwrap(), expected);
}

#[test]
fn test_zeros_and_repeats() {
    assert_eq!(solve(&[0, 3, 5, 7]).unwrap(), solve(&[3, 5, 7]).unwrap());
    assert_eq!(solve(&[3, 3, 5, 7]).unwrap(), Some(4));
    assert_eq!(solve(&[3, 0, 5, 0, 7, 7]).unwrap(), Some(4));
}

#[test]
fn test_domain_errors() {
    let err = try_solve(&[2.5_f64, 3.0]).unwrap_err();
    assert!(matches!(err, FrobeniusError::Domain(DomainError::NotInteger(v)) if v == 2.5));

    let err = try_solve(&[3_i64, -5]).unwrap_err();
    assert!(matches!(err, FrobeniusError::Domain(DomainError::Negative(-5))));
}

#[test]
fn test_domain_error_precedes_empty_check() {
    // a bad value is rejected even when the rest would have no solution
    assert!(try_solve(&[-1_i32]).is_err());
}

#[test]
fn test_large_numbers() {
    assert_eq!(solve(&[9901, 10000, 10099]).unwrap(), Some(49980149));
}

#[test]
fn test_idempotent() {
    let units = [9901, 10000, 10099];
    let first = solve(&units).unwrap();
    let second = solve(&units).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_long_sequence() {
    assert_eq!(solve(&small_primes()).unwrap(), Some(402));
}

#[test]
fn test_long_sequence_large_numbers() {
    let units = large_units();
    assert_eq!(gcd_all(&units), Some(1));
    assert_eq!(solve(&units).unwrap(), Some(27779027777));
}

#[test]
fn test_anchor_is_smallest_value() {
    let normalized = normalize(&[173, 101, 137]).unwrap();
    assert_eq!(normalized.anchor, 101);

    let table = ResidueTable::new(normalized.anchor).unwrap();
    assert_eq!(table.slots().len(), 101);
}

#[test]
fn test_table_values_only_decrease() {
    let mut table = ResidueTable::new(7).unwrap();
    table.fold(12).unwrap();
    let after_first: Vec<Option<u64>> = table.slots().to_vec();

    table.fold(9).unwrap();
    for (before, after) in after_first.iter().zip(table.slots()) {
        let (Some(before), Some(after)) = (before, after) else {
            panic!("all slots should be reachable after folding 12 into 7");
        };
        assert!(after <= before);
    }
}

#[test]
fn test_generator_near_u64_max_with_small_answer() {
    assert_eq!(solve(&[2, 3, u64::MAX]).unwrap(), Some(1));
    assert_eq!(solve(&[u64::MAX, 7, 5]).unwrap(), Some(23));
}

#[test]
fn test_unreachable_residue_past_u64_is_overflow() {
    let err = solve(&[3, u64::MAX - 1]).unwrap_err();
    assert!(matches!(err, FrobeniusError::Overflow { .. }));
}

#[test]
fn test_table_maximum_past_i64_is_result_overflow() {
    let big = (1u64 << 63) + 1;
    let err = solve(&[2, big]).unwrap_err();
    assert!(matches!(err, FrobeniusError::ResultOverflow(v) if v == big));
}

#[test]
fn test_huge_anchor_is_an_error_not_a_panic() {
    let err = solve(&[u64::MAX - 1, u64::MAX]).unwrap_err();
    assert!(matches!(err, FrobeniusError::TableAllocation { anchor } if anchor == u64::MAX - 1));
}
