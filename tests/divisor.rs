use amicable::{divisor_sum, is_perfect, proper_divisors};

#[test]
fn perfect_numbers_sum_to_themselves() {
    for n in [6, 28, 496, 8128] {
        assert_eq!(divisor_sum(n), n);
        assert!(is_perfect(n));
    }
    assert!(!is_perfect(12));
    assert!(!is_perfect(0));
}

#[test]
fn canonical_pair_sums_cross() {
    assert_eq!(divisor_sum(220), 284);
    assert_eq!(divisor_sum(284), 220);
}

#[test]
fn one_has_no_proper_divisors() {
    assert_eq!(divisor_sum(1), 0);
    assert!(proper_divisors(1).is_empty());
    assert!(!is_perfect(1));
}

#[test]
fn square_root_counted_once() {
    assert_eq!(divisor_sum(4), 3);
    assert_eq!(divisor_sum(9), 4);
    assert_eq!(divisor_sum(16), 15);
    assert_eq!(proper_divisors(36), vec![1, 2, 3, 4, 6, 9, 12, 18]);
}

#[test]
fn primes_sum_to_one() {
    for p in [2, 3, 5, 7, 11, 9973] {
        assert_eq!(divisor_sum(p), 1);
        assert_eq!(proper_divisors(p), vec![1]);
    }
}

#[test]
fn divisors_listed_in_order() {
    assert_eq!(
        proper_divisors(220),
        vec![1, 2, 4, 5, 10, 11, 20, 22, 44, 55, 110]
    );
    assert_eq!(proper_divisors(284), vec![1, 2, 4, 71, 142]);
}
