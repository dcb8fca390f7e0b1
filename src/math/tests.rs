#![cfg(test)]

use std::thread;
use std::time::Duration;

use proptest::prelude::*;
use rand::{Rng, RngCore, SeedableRng};

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_helpers() {
    assert_eq!(difference(3, 10), 7);
    assert_eq!(difference(10, 3), 7);
    assert_eq!(difference(i64::MIN, i64::MAX), u64::MAX, "The difference shouldn't overflow.");

    let (r, theta) = cartesian_to_polar(0.0, 2.0);
    assert_eq!((r, theta), (2.0, 0.0));
    let (r, theta) = cartesian_to_polar(1.0, 0.0);
    assert_eq!(r, 1.0);
    assert!((theta - 90.0).abs() < 1e-9, "Theta should be measured from the y axis.");

    for _ in 0..100 {
        let value = randomise(1.0);
        assert!((0.8..1.2).contains(&value), "{value} should be within 0.2 of 1.");
    }
    assert!(random().random_bool(1.0));
}

#[test]
fn test_stats() {
    assert_eq!(sum([1, 2, 3, 4]), 10.0);
    assert_eq!(sum(Vec::<u64>::new()), 0.0);
    assert_eq!(product([2.0, 0.5, 3.0]), 3.0);
    assert_eq!(product(Vec::<i8>::new()), 1.0);
    assert_eq!(mean([1_u16, 2, 3, 4]), 2.5);
    assert!(mean(Vec::<f32>::new()).is_nan(), "The mean of nothing should be NaN.");
    assert_eq!(stddev([5, 5, 5]), 0.0);
    assert_eq!(stddev([1_i64, 3]), 1.0, "The deviation should be the population one.");
}

#[test]
fn test_time() {
    let start = current_time_millis();
    thread::sleep(Duration::from_millis(20));
    let elapsed = time_difference(start);
    assert!(elapsed >= 20, "At least 20ms should have passed, found {elapsed}.");
    assert!(current_time_millis() >= start, "The clock should never go backwards.");
}

#[test]
fn test_fast_random_sequence() {
    let mut random = FastRandom::new(1);
    // 1 ^ (1 << 21) = 0x200001, which the right shift leaves alone.
    let first = 0x200001_i64 ^ (0x200001 << 4);
    assert_eq!(random.next_long(), first);

    let mut a = FastRandom::new(99);
    let mut b = FastRandom::seed_from_u64(0);
    b.set_seed(99);
    for _ in 0..16 {
        assert_eq!(a.next_long(), b.next_long(), "Equal seeds should give equal sequences.");
    }

    let mut zero = FastRandom::new(0);
    assert_eq!(zero.next_long(), 0, "Zero should be a fixed point.");
    assert_ne!(FastRandom::default().state, 0);

    let from_bytes = FastRandom::from_seed(7_i64.to_le_bytes());
    assert_eq!(from_bytes, FastRandom::new(7));
}

#[test]
fn test_fast_random_ranges() {
    let mut random = FastRandom::new(0x5EED);
    for _ in 0..1000 {
        assert!((0..10).contains(&random.next_long_below(10)));
        assert!((-5..5).contains(&random.next_long_between(-5, 5)));
        assert!((0..3).contains(&random.next_int_below(3)));
        assert!((i32::MIN..i32::MAX).contains(&random.next_int_between(i32::MIN, i32::MAX)));
        assert!((-1.0..=1.0).contains(&random.next_double()));
        assert!((0.0..=1.0).contains(&random.next_abs_double()));
        assert!((10.0..=20.0).contains(&random.next_double_between(10.0, 20.0)));
        assert!((0.0..=1.0).contains(&random.next_abs_float()));
        assert!((-2.0..=2.0).contains(&random.next_float_between(-2.0, 2.0)));
    }
    assert!(
        (0..100).any(|_| random.next_bool()) && (0..100).any(|_| !random.next_bool()),
        "Both booleans should eventually appear."
    );

    let mut bytes = [0_u8; 13];
    random.fill_bytes(&mut bytes);
    assert!(bytes.iter().any(|b| *b != 0));
    assert!((0..6).contains(&random.random_range(0..6)), "FastRandom should work as an Rng.");
}

#[test]
fn test_fast_random_panics() {
    assert_panics!({
        FastRandom::new(1).next_long_below(0);
    });
    assert_panics!({
        FastRandom::new(1).next_int_between(5, 5);
    });
}

proptest! {
    #[test]
    fn prop_bounded_longs(seed in any::<i64>(), min in any::<i64>(), max in any::<i64>()) {
        prop_assume!(min < max);
        let mut random = FastRandom::new(seed);
        let value = random.next_long_between(min, max);
        prop_assert!(min <= value && value < max);
    }
}
