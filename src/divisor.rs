/// Sum of the proper divisors of `n`, i.e. every positive `d < n` dividing `n`.
///
/// `divisor_sum(1)` is 0, and the root of a perfect square is counted once.
/// `n == 0` also yields 0.
pub fn divisor_sum(n: u64) -> u64 {
    if n < 2 {
        return 0;
    }

    let mut sum = 1;
    let mut x = 2;
    while x * x <= n {
        if n % x == 0 {
            let pair = n / x;
            sum += x;
            if pair != x {
                sum += pair;
            }
        }
        x += 1;
    }

    sum
}

/// Proper divisors of `n` in ascending order.
pub fn proper_divisors(n: u64) -> Vec<u64> {
    if n < 2 {
        return Vec::new();
    }

    let mut low = vec![1];
    let mut high = Vec::new();
    let mut x = 2;
    while x * x <= n {
        if n % x == 0 {
            low.push(x);
            let pair = n / x;
            if pair != x {
                high.push(pair);
            }
        }
        x += 1;
    }

    high.reverse();
    low.extend(high);
    low
}

pub fn is_perfect(n: u64) -> bool {
    n >= 1 && divisor_sum(n) == n
}
