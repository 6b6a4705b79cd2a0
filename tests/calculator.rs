//! 핵심 컴플라이언스 계산 시나리오/불변식 회귀 테스트.
use gfi_compliance_calculator::compliance::calculator::{
    annual_results, annual_results_by_name, ComplianceCalcError, ComplianceStatus, FuelSpec,
};
use gfi_compliance_calculator::schedule::PricingAssumptions;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn default_pricing() -> PricingAssumptions {
    PricingAssumptions {
        surplus_price: 380.0,
        tier1_price: 100.0,
        tier2_price: 360.0,
    }
}

#[test]
fn bio_methanol_2028_surplus_scenario() {
    // LHV 19,900 MJ/t, GFI 5.00, 5,000 t/y → 2028년은 surplus
    let fuel = FuelSpec {
        lhv_mj_per_t: 19_900.0,
        gfi_g_per_mj: 5.0,
    };
    let results = annual_results(&fuel, 5000.0, &default_pricing()).expect("calc");
    assert_eq!(results.len(), 8);

    let r = &results[0];
    assert_eq!(r.year, 2028);
    assert_close("attained", r.attained_co2_t, 497.5, 1e-12);
    assert_close("target_gfi_direct", r.target_gfi_direct, 77.439, 1e-9);
    assert_close("target_co2_direct", r.target_co2_direct_t, 7_705.1805, 1e-9);
    assert_close("surplus", r.surplus_t, 7_207.6805, 1e-9);
    assert_close("revenue", r.surplus_revenue, 7_207.6805 * 380.0, 1e-9);
    assert_close("net", r.net_outcome, r.surplus_revenue, 1e-12);
    assert_eq!(r.status, ComplianceStatus::Surplus { exceeds_base: false });
    assert_eq!(r.tier1_deficit_t, 0.0);
    assert_eq!(r.tier2_deficit_t, 0.0);
    assert_eq!(r.tier1_cost, 0.0);
    assert_eq!(r.tier2_cost, 0.0);
}

#[test]
fn hfo_2028_deficit_vs_both_targets() {
    // HFO(GFI 91.00)는 2028년 base/direct 목표를 모두 초과한다.
    let fuel = FuelSpec {
        lhv_mj_per_t: 41_000.0,
        gfi_g_per_mj: 91.0,
    };
    let results = annual_results(&fuel, 5000.0, &default_pricing()).expect("calc");
    let r = &results[0];

    assert_eq!(r.status, ComplianceStatus::DeficitBothTargets);
    assert_close("attained", r.attained_co2_t, 18_655.0, 1e-12);
    assert_close("t1_deficit", r.tier1_deficit_t, 18_655.0 - 15_874.995, 1e-9);
    assert_close("t2_deficit", r.tier2_deficit_t, 18_655.0 - 18_361.44, 1e-6);
    // 2028~2030은 고정 가격이 강제된다.
    assert_eq!(r.tier1_price, 100.0);
    assert_eq!(r.tier2_price, 380.0);
    assert_close("t1_cost", r.tier1_cost, r.tier1_deficit_t * 100.0, 1e-12);
    assert_close("t2_cost", r.tier2_cost, r.tier2_deficit_t * 380.0, 1e-12);
    assert!(r.net_outcome < 0.0);
    assert_eq!(r.surplus_t, 0.0);
    assert_eq!(r.surplus_revenue, 0.0);
}

#[test]
fn deficit_vs_direct_only_keeps_tier2_zero() {
    // GFI 80은 2028년 direct(77.439)와 base(89.568) 사이에 놓인다.
    let fuel = FuelSpec {
        lhv_mj_per_t: 41_000.0,
        gfi_g_per_mj: 80.0,
    };
    let results = annual_results(&fuel, 5000.0, &default_pricing()).expect("calc");
    let r = &results[0];

    assert_eq!(r.status, ComplianceStatus::DeficitDirectOnly);
    assert!(r.tier1_deficit_t > 0.0);
    assert_eq!(r.tier2_deficit_t, 0.0);
    assert_eq!(r.tier2_cost, 0.0);
    assert_close("net", r.net_outcome, -r.tier1_cost, 1e-12);
}

#[test]
fn tier_prices_switch_to_user_input_from_2031() {
    let fuel = FuelSpec {
        lhv_mj_per_t: 41_000.0,
        gfi_g_per_mj: 91.0,
    };
    let pricing = PricingAssumptions {
        surplus_price: 50.0,
        tier1_price: 123.4,
        tier2_price: 567.8,
    };
    let results = annual_results(&fuel, 5000.0, &pricing).expect("calc");
    for r in &results {
        if r.year <= 2030 {
            assert_eq!(r.tier1_price, 100.0, "year {}", r.year);
            assert_eq!(r.tier2_price, 380.0, "year {}", r.year);
        } else {
            assert_eq!(r.tier1_price, 123.4, "year {}", r.year);
            assert_eq!(r.tier2_price, 567.8, "year {}", r.year);
        }
    }
}

#[test]
fn net_outcome_identity_and_mutual_exclusivity() {
    let pricing = default_pricing();
    for gfi in [0.0, 5.0, 68.0, 80.0, 91.0, 120.0] {
        let fuel = FuelSpec {
            lhv_mj_per_t: 41_000.0,
            gfi_g_per_mj: gfi,
        };
        let results = annual_results(&fuel, 8000.0, &pricing).expect("calc");
        for r in &results {
            assert_close(
                "net identity",
                r.net_outcome,
                r.surplus_revenue - r.tier1_cost - r.tier2_cost,
                1e-12,
            );
            // deficit과 surplus는 동시에 발생할 수 없다.
            assert!(
                !(r.tier1_deficit_t > 0.0 && r.surplus_t > 0.0),
                "gfi {gfi}, year {}",
                r.year
            );
            assert_eq!(r.status.is_deficit(), r.tier1_deficit_t > 0.0);
        }
    }
}

#[test]
fn higher_gfi_never_shrinks_deficits_nor_grows_surplus() {
    let pricing = default_pricing();
    let mk = |gfi: f64| FuelSpec {
        lhv_mj_per_t: 41_000.0,
        gfi_g_per_mj: gfi,
    };
    let lo = annual_results(&mk(70.0), 5000.0, &pricing).expect("calc lo");
    let hi = annual_results(&mk(85.0), 5000.0, &pricing).expect("calc hi");
    for (a, b) in lo.iter().zip(hi.iter()) {
        assert!(b.tier1_deficit_t >= a.tier1_deficit_t, "year {}", a.year);
        assert!(b.tier2_deficit_t >= a.tier2_deficit_t, "year {}", a.year);
        assert!(b.surplus_t <= a.surplus_t, "year {}", a.year);
    }
}

#[test]
fn direct_target_is_stricter_every_year() {
    let fuel = FuelSpec {
        lhv_mj_per_t: 19_900.0,
        gfi_g_per_mj: 5.0,
    };
    let results = annual_results(&fuel, 5000.0, &default_pricing()).expect("calc");
    for r in &results {
        assert!(r.target_gfi_direct < r.target_gfi_base, "year {}", r.year);
        assert!(
            r.target_co2_direct_t < r.target_co2_base_t,
            "year {}",
            r.year
        );
    }
}

#[test]
fn zero_gfi_is_valid_and_all_surplus() {
    let fuel = FuelSpec {
        lhv_mj_per_t: 18_600.0,
        gfi_g_per_mj: 0.0,
    };
    let results = annual_results(&fuel, 1000.0, &default_pricing()).expect("calc");
    for r in &results {
        assert_eq!(r.status, ComplianceStatus::Surplus { exceeds_base: false });
        assert!(r.surplus_t > 0.0);
    }
}

#[test]
fn non_positive_tonnes_rejected_without_results() {
    let fuel = FuelSpec {
        lhv_mj_per_t: 41_000.0,
        gfi_g_per_mj: 91.0,
    };
    for tonnes in [0.0, -100.0] {
        let err = annual_results(&fuel, tonnes, &default_pricing()).unwrap_err();
        assert!(matches!(err, ComplianceCalcError::InvalidInput(_)));
    }
}

#[test]
fn non_positive_lhv_rejected() {
    let fuel = FuelSpec {
        lhv_mj_per_t: 0.0,
        gfi_g_per_mj: 91.0,
    };
    let err = annual_results(&fuel, 5000.0, &default_pricing()).unwrap_err();
    assert!(matches!(err, ComplianceCalcError::InvalidInput(_)));
}

#[test]
fn negative_prices_rejected() {
    let fuel = FuelSpec {
        lhv_mj_per_t: 41_000.0,
        gfi_g_per_mj: 91.0,
    };
    let pricing = PricingAssumptions {
        surplus_price: -1.0,
        tier1_price: 100.0,
        tier2_price: 360.0,
    };
    let err = annual_results(&fuel, 5000.0, &pricing).unwrap_err();
    assert!(matches!(err, ComplianceCalcError::InvalidInput(_)));
}

#[test]
fn catalog_lookup_by_name() {
    let by_name = annual_results_by_name("lng", 5000.0, &default_pricing()).expect("lookup");
    let fuel = FuelSpec {
        lhv_mj_per_t: 49_000.0,
        gfi_g_per_mj: 68.0,
    };
    let direct = annual_results(&fuel, 5000.0, &default_pricing()).expect("calc");
    assert_eq!(by_name.len(), direct.len());
    for (a, b) in by_name.iter().zip(direct.iter()) {
        assert_eq!(a.net_outcome, b.net_outcome);
    }

    let err = annual_results_by_name("kerosene", 5000.0, &default_pricing()).unwrap_err();
    assert!(matches!(err, ComplianceCalcError::UnknownFuel(_)));
}

#[test]
fn years_are_ascending_2028_to_2035() {
    let fuel = FuelSpec {
        lhv_mj_per_t: 49_000.0,
        gfi_g_per_mj: 68.0,
    };
    let results = annual_results(&fuel, 5000.0, &default_pricing()).expect("calc");
    let years: Vec<u16> = results.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2028, 2029, 2030, 2031, 2032, 2033, 2034, 2035]);
}
