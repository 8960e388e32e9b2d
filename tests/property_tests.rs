use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use randvariate::{
    AliasTable, Categorical, Method, round, sample_binomial, sample_categorical_log,
    sample_categorical_log1p,
};

/// A non-empty probability vector that sums to one.
fn probability_vector() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..10.0, 1..40).prop_map(|w| {
        let total: f64 = w.iter().sum();
        if total == 0.0 {
            vec![1.0 / w.len() as f64; w.len()]
        } else {
            w.iter().map(|x| x / total).collect()
        }
    })
}

fn method() -> impl Strategy<Value = Method> {
    prop_oneof![
        Just(Method::Inversion),
        Just(Method::Alias),
        Just(Method::Auto)
    ]
}

proptest! {
    #[test]
    fn prop_counts_sum_to_n(
        p in probability_vector(),
        method in method(),
        n in 0u64..500,
        seed in any::<u64>()
    ) {
        let dist = Categorical::new(&p, method).unwrap();
        let mut rng = Pcg64::seed_from_u64(seed);
        let counts = dist.sample_counts(&mut rng, n);

        prop_assert_eq!(counts.len(), p.len());
        prop_assert_eq!(counts.iter().sum::<u64>(), n);
    }

    #[test]
    fn prop_zero_probability_never_drawn(
        p in probability_vector(),
        method in method(),
        seed in any::<u64>()
    ) {
        let dist = Categorical::new(&p, method).unwrap();
        let mut rng = Pcg64::seed_from_u64(seed);
        let counts = dist.sample_counts(&mut rng, 200);
        for (i, (&c, &w)) in counts.iter().zip(&p).enumerate() {
            if w == 0.0 {
                prop_assert_eq!(c, 0, "category {} has zero mass", i);
            }
        }
    }

    #[test]
    fn prop_alias_table_preserves_mass(p in probability_vector()) {
        let table = AliasTable::new(&p).unwrap();
        let k = table.len();
        let mut mass = vec![0.0; k];
        for i in 0..k {
            let keep = table.threshold(i).clamp(0.0, 1.0);
            mass[i] += keep / k as f64;
            mass[table.alias(i)] += (1.0 - keep) / k as f64;
        }
        for (m, w) in mass.iter().zip(&p) {
            prop_assert!((m - w).abs() < 1e-9, "mass {} vs {}", m, w);
        }
    }

    #[test]
    fn prop_log_adapters_keep_shape(
        p in probability_vector(),
        n in 0u64..200,
        seed in any::<u64>()
    ) {
        let mut rng = Pcg64::seed_from_u64(seed);
        let log1p: Vec<f64> = p.iter().map(|x| x.ln_1p()).collect();
        let log: Vec<f64> = p
            .iter()
            .map(|&x| if x == 0.0 { f64::NEG_INFINITY } else { x.ln() })
            .collect();

        let a = sample_categorical_log1p(&mut rng, n, &log1p).unwrap();
        let b = sample_categorical_log(&mut rng, n, &log).unwrap();
        prop_assert_eq!(a.len(), p.len());
        prop_assert_eq!(b.len(), p.len());
        prop_assert_eq!(a.iter().sum::<u64>(), n);
        prop_assert_eq!(b.iter().sum::<u64>(), n);
    }

    #[test]
    fn prop_binomial_in_range(
        n in 0u64..200,
        p in 0.0f64..=1.0,
        seed in any::<u64>()
    ) {
        let mut rng = Pcg64::seed_from_u64(seed);
        let k = sample_binomial(&mut rng, n, p).unwrap();
        prop_assert!(k <= n);
    }

    #[test]
    fn prop_round_is_idempotent(x in -1.0e18f64..1.0e18, e in -20i32..20) {
        let once = round(x, e);
        prop_assert_eq!(round(once, e), once);
    }

    #[test]
    fn prop_round_is_idempotent_for_small_magnitudes(
        x in -1.0f64..1.0,
        scale in -12i32..6,
        e in -20i32..20
    ) {
        let x = x * 10f64.powi(scale);
        let once = round(x, e);
        prop_assert_eq!(round(once, e), once);
    }

    #[test]
    fn prop_round_is_odd(x in -1.0e6f64..1.0e6, e in -6i32..6) {
        prop_assert_eq!(round(-x, e), -round(x, e));
    }

    #[test]
    fn prop_round_stays_within_half_a_unit(x in -1.0e6f64..1.0e6, e in -6i32..6) {
        let unit = 10f64.powi(e);
        prop_assert!((round(x, e) - x).abs() <= unit / 2.0 + x.abs() * 1e-12);
    }
}
