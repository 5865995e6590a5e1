use tracing::{debug, info};

use crate::divisor::divisor_sum;

/// Whether `n` forms an amicable pair with some other number.
///
/// Perfect numbers pair only with themselves and are not amicable.
pub fn is_amicable(n: u64) -> bool {
    amicable_partner(n).is_some()
}

/// The other half of the amicable pair containing `n`, if there is one.
pub fn amicable_partner(n: u64) -> Option<u64> {
    let partner = divisor_sum(n);
    if partner == n {
        return None;
    }

    if divisor_sum(partner) == n {
        Some(partner)
    } else {
        None
    }
}

/// Amicable numbers in `[1, limit)`, ascending.
pub fn amicable_numbers_below(limit: u64) -> impl Iterator<Item = u64> {
    (1..limit).filter_map(|n| {
        amicable_partner(n).map(|partner| {
            debug!(n, partner, "Found amicable number");
            n
        })
    })
}

pub fn sum_amicable_below(limit: u64) -> u64 {
    let sum = amicable_numbers_below(limit).sum::<u64>();
    info!(limit, sum, "Summed amicable numbers");
    sum
}
