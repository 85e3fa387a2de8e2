use crate::Num;

const MAX_STEPS: usize = 100;

/// Approximates the root of a function using the Newton-Raphson method.
///
/// # Arguments
/// f - The function to approximate the root of.
/// f_prime - The derivative of the function.
/// x0 - The initial guess.
/// epsilon - The maximum error allowed.
///
/// # Returns
/// The approximate root, or `None` if the update step has not dropped
/// below `epsilon` within the step budget.
pub fn newton_approx(
    f: impl Fn(Num) -> Num,
    f_prime: impl Fn(Num) -> Num,
    x0: Num,
    epsilon: Num,
) -> Option<Num> {
    let mut x = x0;

    for _ in 0..MAX_STEPS {
        let x_next = x - f(x) / f_prime(x);

        let error = (x_next - x).abs();

        if error < epsilon {
            return Some(x_next);
        }

        x = x_next;
    }

    None
}

/// Bisection over `[lo, hi]`, which must bracket a root of `f`.
///
/// Narrows to the half interval containing the sign change until the
/// midpoint residual drops below `epsilon`, returning the final
/// midpoint when the step budget runs out first.
pub fn bisect(f: impl Fn(Num) -> Num, mut lo: Num, mut hi: Num, epsilon: Num) -> Num {
    let below = f(lo) < 0.0;
    let mut mid = (lo + hi) / 2.0;

    for _ in 0..MAX_STEPS {
        mid = (lo + hi) / 2.0;
        let f_mid = f(mid);

        if f_mid.abs() < epsilon {
            return mid;
        }

        if (f_mid < 0.0) == below {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    mid
}
