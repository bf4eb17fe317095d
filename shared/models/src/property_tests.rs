//! Property-based tests for the report models
//!
//! These cover the arithmetic invariants of the derived rate fields rather
//! than serialization round-trips.

use proptest::option;
use proptest::prelude::*;

use crate::{FunnelStage, KpiCard, Unit};

prop_compose! {
    fn arb_value()(value in -1.0e9..1.0e9f64) -> f64 {
        value
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// KPI rate is present exactly when actual is present and target is present and nonzero.
    #[test]
    fn prop_kpi_rate_presence(
        target in option::of(prop_oneof![Just(0.0), arb_value()]),
        actual in option::of(arb_value()),
    ) {
        let card = KpiCard::new("案件獲得", target, actual, Unit::Count);
        let expected_present = actual.is_some() && matches!(target, Some(t) if t != 0.0);

        prop_assert_eq!(card.achievement_rate.is_some(), expected_present);
        if let (Some(a), Some(t), Some(rate)) = (actual, target, card.achievement_rate) {
            prop_assert_eq!(rate, a / t);
        }
    }

    /// Funnel benchmark is never zero when the fallback is nonzero.
    #[test]
    fn prop_funnel_benchmark_nonzero(
        sheet in option::of(prop_oneof![Just(0.0), arb_value()]),
        actual in option::of(arb_value()),
        fallback in 0.01..1.0f64,
    ) {
        let stage = FunnelStage::new("通電率", actual, sheet, fallback);

        prop_assert!(stage.benchmark != 0.0);
        prop_assert_eq!(stage.achievement_rate.is_some(), actual.is_some());
        match sheet {
            Some(value) if value != 0.0 => prop_assert_eq!(stage.benchmark, value),
            _ => prop_assert_eq!(stage.benchmark, fallback),
        }
    }
}
