use proptest::prelude::*;
use wafreport::accumulator::ScoreAccumulator;
use wafreport::stats::{mean, median};
use wafreport::table::{FrequencyTable, Score};

const CEILING: usize = 1000;

// --- STRATEGIES ---

// Lines that no rule accepts: no digits, no leading sentinel.
prop_compose! {
    fn arb_noise_line()(body in "[a-zA-Z /?=&.]{0,30}") -> String {
        body
    }
}

fn sorted_median(samples: &mut [u64]) -> f64 {
    samples.sort_unstable();
    let n = samples.len();
    if n % 2 == 1 {
        samples[n / 2] as f64
    } else {
        (samples[n / 2 - 1] + samples[n / 2]) as f64 / 2.0
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_valid_pair_lands_in_both_tables(a in 0..=CEILING as u64, b in 0..=CEILING as u64) {
        let mut acc = ScoreAccumulator::with_max_score(CEILING);
        let line = format!("{} {}\n", a, b);
        prop_assert!(acc.record(&line), "'{}' should be recognised", line.trim_end());

        let result = acc.finish();
        prop_assert_eq!(result.total, 1);
        prop_assert_eq!(result.inbound.count(a as usize), 1);
        prop_assert_eq!(result.outbound.count(b as usize), 1);
    }

    #[test]
    fn test_noise_never_counts(
        pairs in proptest::collection::vec((0..=CEILING as u64, 0..=CEILING as u64), 0..20),
        noise in proptest::collection::vec(arb_noise_line(), 1..20)
    ) {
        let mut clean = ScoreAccumulator::with_max_score(CEILING);
        let mut noisy = ScoreAccumulator::with_max_score(CEILING);

        for (a, b) in &pairs {
            clean.record(&format!("{} {}", a, b));
        }
        for line in &noise {
            prop_assert!(!noisy.record(line), "'{}' should be discarded", line);
        }
        for (a, b) in &pairs {
            noisy.record(&format!("{} {}", a, b));
        }

        prop_assert_eq!(clean.finish(), noisy.finish());
    }

    #[test]
    fn test_counts_plus_invalid_equal_total(
        raws in proptest::collection::vec((-50i64..2000, -50i64..2000), 0..200)
    ) {
        let mut acc = ScoreAccumulator::with_max_score(CEILING);
        for (a, b) in &raws {
            acc.record(&format!("{} {}", a, b));
        }
        let result = acc.finish();

        prop_assert_eq!(result.total, raws.len() as u64);
        prop_assert_eq!(result.inbound.total(), result.total);
        prop_assert_eq!(result.outbound.total(), result.total);

        let expected_invalid = raws.iter().filter(|(a, _)| *a < 0).count() as u64;
        prop_assert_eq!(result.inbound.invalid(), expected_invalid);
    }

    #[test]
    fn test_median_matches_sorted_samples(
        mut samples in proptest::collection::vec(0..=CEILING as u64, 1..300)
    ) {
        let mut table = FrequencyTable::with_max_score(CEILING);
        for &s in &samples {
            table.increment(Score::Valid(s));
        }
        let total = samples.len() as u64;

        let expected = sorted_median(&mut samples);
        prop_assert_eq!(median(&table, total), Some(expected));
    }

    #[test]
    fn test_mean_matches_samples(
        samples in proptest::collection::vec(0..=CEILING as u64, 1..300)
    ) {
        let mut table = FrequencyTable::with_max_score(CEILING);
        for &s in &samples {
            table.increment(Score::Valid(s));
        }
        let total = samples.len() as u64;
        let expected = samples.iter().sum::<u64>() as f64 / total as f64;

        let got = mean(&table, total).expect("non-empty");
        prop_assert!((got - expected).abs() < 1e-9);
    }
}
