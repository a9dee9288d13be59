/// Final term of the population recurrence after `generations` generations.
///
/// The window starts as `[0, 1]` and slides once per step:
/// `new = litter * oldest + newest`. One generation means no steps, so the
/// initial population of 1 comes straight back.
///
/// No range validation happens here; callers enforce the documented bounds
/// (generations 1-40, litter 1-5) before calling in, which also keeps the
/// arithmetic inside `u64`.
pub fn population(generations: u64, litter: u64) -> u64 {
    let mut window = [0u64, 1];
    for _ in 1..generations {
        let next = litter * window[0] + window[1];
        window = [window[1], next];
    }
    window[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_generation_is_one_for_any_litter() {
        for litter in 1..=5 {
            assert_eq!(population(1, litter), 1);
        }
    }

    #[test]
    fn matches_reference_values() {
        // F(n) = F(n-1) + litter * F(n-2), seeded F(1) = F(2) = 1.
        assert_eq!(population(2, 3), 1);
        assert_eq!(population(3, 3), 4);
        assert_eq!(population(4, 3), 7);
        assert_eq!(population(5, 3), 19);
        assert_eq!(population(6, 3), 40);
    }

    #[test]
    fn litter_of_one_is_plain_fibonacci() {
        assert_eq!(population(10, 1), 55);
        assert_eq!(population(40, 1), 102_334_155);
    }

    #[test]
    fn upper_bounds_stay_within_u64() {
        // Largest request the CLI allows.
        let term = population(40, 5);
        assert!(term > population(39, 5));
    }
}
