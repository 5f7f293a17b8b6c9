//! Sequence 单元测试
//!
//! 覆盖基准用例、递推律、确定性、单调性与边界行为


use super::{fib_iter, nth, FibError};
use num_bigint::BigUint;

#[cfg(test)]
mod base_cases {
    use super::*;

    /// Test the first terms of the sequence
    #[test]
    fn test_small_terms() {
        let expected: [u32; 11] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(fib_iter(n as u64), BigUint::from(*want));
        }
    }

    /// Test a handful of mid-range reference values
    #[test]
    fn test_reference_values() {
        assert_eq!(fib_iter(20), BigUint::from(6765u32));
        assert_eq!(fib_iter(30), BigUint::from(832040u32));
        assert_eq!(fib_iter(50), BigUint::from(12586269025u64));
        assert_eq!(fib_iter(90), BigUint::from(2880067194370816120u64));
    }

    /// Test the largest term that still fits in a 64-bit word
    #[test]
    fn test_u64_boundary() {
        assert_eq!(fib_iter(93), BigUint::from(12200160415121876738u64));
        assert!(fib_iter(94) > BigUint::from(u64::MAX));
    }

    /// Test the exact 21-digit value of F(100)
    #[test]
    fn test_f100_exact() {
        let want: BigUint = "354224848179261915075".parse().unwrap();
        assert_eq!(fib_iter(100), want);
    }
}

#[cfg(test)]
mod recurrence {
    use super::*;

    /// Test F(k) == F(k-1) + F(k-2) at several magnitudes
    #[test]
    fn test_recurrence_law() {
        for k in [2u64, 10, 64, 100, 250, 500] {
            assert_eq!(
                fib_iter(k),
                fib_iter(k - 1) + fib_iter(k - 2),
                "recurrence broken at k={}",
                k
            );
        }
    }

    /// Test that repeated calls return bit-identical results
    #[test]
    fn test_deterministic() {
        for n in [0u64, 1, 93, 200] {
            assert_eq!(fib_iter(n), fib_iter(n));
        }
    }

    /// Test monotonic growth of the sequence
    #[test]
    fn test_monotonicity() {
        for n in 1u64..=120 {
            assert!(fib_iter(n) >= fib_iter(n - 1));
            if n >= 3 {
                assert!(fib_iter(n) > fib_iter(n - 1));
            }
        }
    }
}

#[cfg(test)]
mod boundary {
    use super::*;

    /// Test that negative indices fail fast
    #[test]
    fn test_negative_index_rejected() {
        assert_eq!(nth(-1), Err(FibError::InvalidArgument(-1)));
        assert_eq!(nth(i64::MIN), Err(FibError::InvalidArgument(i64::MIN)));
    }

    /// Test that the checked boundary agrees with the pure loop
    #[test]
    fn test_nth_delegates() {
        assert_eq!(nth(0).unwrap(), fib_iter(0));
        assert_eq!(nth(100).unwrap(), fib_iter(100));
    }

    /// Test decimal length at a magnitude far beyond fixed-width range
    #[test]
    fn test_digit_length_at_1000() {
        assert_eq!(fib_iter(1000).to_string().len(), 209);
    }
}
