//! Test utilities for the maximum-subarray scan.

#[cfg(test)]
mod tests {
    use crate::array::max_subarray::code::*;
    use crate::utils::InputSpec;

    /// O(n^2) reference: scans starts ascending, ends ascending, updates on
    /// strict `>` only, so it shares the leftmost tie-break of the scans.
    fn brute_force(input: &[i32]) -> (i64, usize, usize) {
        let mut best = (i64::MIN, 0, 0);
        for s in 0..input.len() {
            let mut sum = 0i64;
            for e in s..input.len() {
                sum += i64::from(input[e]);
                if sum > best.0 {
                    best = (sum, s, e);
                }
            }
        }
        best
    }

    fn assert_all_strategies(input: &[i32], expected: (i64, usize, usize)) {
        for strategy in ScanStrategy::ALL {
            let result = strategy.run(input).unwrap();
            assert_eq!(
                (result.max_sum(), result.start(), result.end()),
                expected,
                "strategy {}",
                strategy.name()
            );
        }
    }

    #[test]
    fn classic_literature_case() {
        assert_all_strategies(&[-2, 1, -3, 4, -1, 2, 1, -5, 4], (6, 3, 6));
    }

    #[test]
    fn single_element() {
        assert_all_strategies(&[5], (5, 0, 0));
        assert_all_strategies(&[-7], (-7, 0, 0));
    }

    #[test]
    fn all_positive_takes_the_whole_array() {
        assert_all_strategies(&[1, 2, 3, 4, 5], (15, 0, 4));
    }

    #[test]
    fn all_negative_picks_the_largest_element() {
        assert_all_strategies(&[-5, -2, -8, -1, -4], (-1, 3, 3));
    }

    #[test]
    fn all_negative_duplicated_maxima_first_occurrence_wins() {
        assert_all_strategies(&[-3, -1, -2, -1], (-1, 1, 1));
    }

    #[test]
    fn zero_run_beats_negative_runs() {
        assert_all_strategies(&[-2, 0, -1, 0, -3], (0, 1, 1));
    }

    #[test]
    fn dips_worth_crossing() {
        assert_all_strategies(&[5, -3, 5, -3, 5], (9, 0, 4));
    }

    #[test]
    fn equal_sum_runs_leftmost_start_wins() {
        assert_all_strategies(&[1, -1, 1], (1, 0, 0));
        assert_all_strategies(&[5, -5, 5], (5, 0, 0));
        assert_all_strategies(&[2, -2, 2, -2, 2], (2, 0, 0));
    }

    #[test]
    fn maximum_at_the_beginning() {
        assert_all_strategies(&[10, -5, -2, -1], (10, 0, 0));
    }

    #[test]
    fn maximum_at_the_end() {
        assert_all_strategies(&[-5, -2, -1, 10], (10, 3, 3));
    }

    #[test]
    fn empty_input_is_rejected() {
        for strategy in ScanStrategy::ALL {
            assert_eq!(strategy.run(&[]).unwrap_err(), ScanError::EmptyInput);
        }
    }

    #[test]
    fn optimized_survives_large_magnitudes() {
        let element = i32::MAX / 10;
        let input = vec![element; 100];
        let expected_sum = i64::from(element) * 100;

        for result in [
            max_subarray_optimized(&input).unwrap(),
            max_subarray_optimized_early_exit(&input).unwrap(),
        ] {
            assert_eq!(result.max_sum(), expected_sum);
            assert_eq!((result.start(), result.end()), (0, 99));
        }
    }

    #[test]
    fn baseline_wraps_where_optimized_does_not() {
        // Documented limitation: the narrow accumulator cannot represent
        // this sum, so the two variants are allowed to diverge here.
        let input = vec![i32::MAX / 10; 100];

        let baseline = max_subarray_baseline(&input).unwrap();
        let optimized = max_subarray_optimized(&input).unwrap();

        assert!(optimized.max_sum() > i64::from(i32::MAX));
        assert!(baseline.max_sum() <= i64::from(i32::MAX));
        assert_ne!(baseline.max_sum(), optimized.max_sum());
    }

    #[test]
    fn variants_agree_with_brute_force_on_random_inputs() {
        for case in 0..200 {
            let len = 1 + (case * 7) % 64;
            let input = InputSpec::uniform(len, -50, 50).generate(case as u64);
            let expected = brute_force(&input);

            for strategy in ScanStrategy::ALL {
                let result = strategy.run(&input).unwrap();
                assert_eq!(
                    (result.max_sum(), result.start(), result.end()),
                    expected,
                    "strategy {} on input {:?}",
                    strategy.name(),
                    input
                );

                let range_sum: i64 = input[result.start()..=result.end()]
                    .iter()
                    .map(|&v| i64::from(v))
                    .sum();
                assert_eq!(range_sum, result.max_sum());
            }
        }
    }

    #[test]
    fn baseline_counts_are_exact() {
        for n in [1usize, 8, 100, 1023] {
            let input = InputSpec::uniform(n, -1000, 1000).generate(n as u64);
            let result = max_subarray_baseline(&input).unwrap();

            let n = n as u64;
            assert_eq!(result.metrics().comparisons(), 2 * n - 1);
            assert_eq!(result.metrics().array_accesses(), n + 1);
        }
    }

    #[test]
    fn optimized_counts_are_exact() {
        for n in [1usize, 8, 100, 1023] {
            let input = InputSpec::uniform(n, -1000, 1000).generate(n as u64);
            let result = max_subarray_optimized(&input).unwrap();

            let n = n as u64;
            assert_eq!(result.metrics().comparisons(), 2 * n - 1);
            assert_eq!(result.metrics().array_accesses(), n);
        }
    }

    #[test]
    fn early_exit_counts_on_all_negative_input() {
        let input = vec![-4; 256];

        let early_exits: [ScanFn; 2] =
            [max_subarray_baseline_early_exit, max_subarray_optimized_early_exit];
        for func in early_exits {
            let result = func(&input).unwrap();
            // The pre-scan answers directly: one access and one comparison
            // per element, nothing else.
            assert_eq!(result.metrics().comparisons(), 256);
            assert_eq!(result.metrics().array_accesses(), 256);
        }
    }

    #[test]
    fn early_exit_counts_on_mixed_input() {
        // Pre-scan stops at the first non-negative element (index 2, three
        // elements visited), then the general pass runs uncounted-init.
        let input = [-1, -2, 3, -4, 5, -6];

        let baseline = max_subarray_baseline_early_exit(&input).unwrap();
        assert_eq!(baseline.metrics().array_accesses(), 3 + 5);
        assert_eq!(baseline.metrics().comparisons(), 3 + 2 * 5);

        let optimized = max_subarray_optimized_early_exit(&input).unwrap();
        assert_eq!(optimized.metrics().array_accesses(), 3 + 5);
        assert_eq!(optimized.metrics().comparisons(), 3 + 2 * 5);
    }

    #[test]
    fn counts_are_deterministic_per_input() {
        let input = InputSpec::uniform(512, -1000, 1000).generate(3);

        for strategy in ScanStrategy::ALL {
            let first = strategy.run(&input).unwrap();
            let second = strategy.run(&input).unwrap();
            assert_eq!(
                first.metrics().comparisons(),
                second.metrics().comparisons()
            );
            assert_eq!(
                first.metrics().array_accesses(),
                second.metrics().array_accesses()
            );
        }
    }

    #[test]
    fn counts_grow_linearly() {
        let sizes = [1_000usize, 2_000, 4_000];

        for strategy in ScanStrategy::ALL {
            let counts: Vec<(u64, u64)> = sizes
                .iter()
                .map(|&n| {
                    let input = InputSpec::uniform(n, -1000, 1000).generate(17);
                    let result = strategy.run(&input).unwrap();
                    (
                        result.metrics().comparisons(),
                        result.metrics().array_accesses(),
                    )
                })
                .collect();

            for window in counts.windows(2) {
                let cmp_ratio = window[1].0 as f64 / window[0].0 as f64;
                let acc_ratio = window[1].1 as f64 / window[0].1 as f64;
                // Doubling the input should roughly double the work.
                assert!(
                    (1.8..=2.2).contains(&cmp_ratio),
                    "comparison growth {} for {}",
                    cmp_ratio,
                    strategy.name()
                );
                assert!(
                    (1.8..=2.2).contains(&acc_ratio),
                    "access growth {} for {}",
                    acc_ratio,
                    strategy.name()
                );
            }
        }
    }

    #[test]
    fn metrics_capture_the_timer_window() {
        let input = InputSpec::uniform(100_000, -1000, 1000).generate(11);
        let result = max_subarray_baseline(&input).unwrap();

        assert!(result.metrics().elapsed_nanos() > 0);
        assert!(result.metrics().elapsed_millis() > 0.0);
    }

    #[test]
    fn result_renders_sum_and_range() {
        let result = max_subarray_baseline(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]).unwrap();
        assert_eq!(result.to_string(), "MaxSum: 6, Range: [3, 6]");
    }
}
