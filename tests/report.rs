//! 텍스트 보고서/차트 데이터셋 회귀 테스트.
use gfi_compliance_calculator::compliance::calculator::{annual_results, FuelSpec};
use gfi_compliance_calculator::compliance::chart::chart_points;
use gfi_compliance_calculator::compliance::report::{group_thousands, summary_text};
use gfi_compliance_calculator::schedule::PricingAssumptions;

fn pricing() -> PricingAssumptions {
    PricingAssumptions {
        surplus_price: 380.0,
        tier1_price: 100.0,
        tier2_price: 360.0,
    }
}

#[test]
fn group_thousands_formats() {
    assert_eq!(group_thousands(1_234_567.891, 2), "1,234,567.89");
    assert_eq!(group_thousands(-1_234.5, 1), "-1,234.5");
    assert_eq!(group_thousands(999.0, 0), "999");
    assert_eq!(group_thousands(0.0, 2), "0.00");
    assert_eq!(group_thousands(99_500_000.0, 0), "99,500,000");
}

#[test]
fn summary_surfaces_basis_and_per_year_fields() {
    let fuel = FuelSpec {
        lhv_mj_per_t: 19_900.0,
        gfi_g_per_mj: 5.0,
    };
    let results = annual_results(&fuel, 5000.0, &pricing()).expect("calc");
    let text = summary_text("bio-Methanol", &fuel, 5000.0, &pricing(), &results);

    assert!(text.contains("Fuel: bio-Methanol (5,000.00 t/y), Attained GFI: 5.00 gCO₂eq/MJ"));
    assert!(text.contains("Total Energy: 99,500,000 MJ/y"));
    assert!(text.contains("Reference GFI: 93.3 gCO₂eq/MJ"));
    assert!(text.contains("2028-2030 (Fixed): T1=$100.00, T2=$380.00"));
    assert!(text.contains("2031 Onwards (User Input): T1=$100.00, T2=$360.00"));
    assert!(text.contains("--- Annual Results (2028-2035) ---"));
    for year in 2028..=2035 {
        assert!(text.contains(&format!("--- Year {year} ---")), "{year}");
    }
    assert!(text.contains("Status: Surplus vs Direct Target"));
    assert!(text.contains("Net Outcome (Potential Revenue):"));
}

#[test]
fn summary_renders_deficit_costs_with_unit_prices() {
    let fuel = FuelSpec {
        lhv_mj_per_t: 41_000.0,
        gfi_g_per_mj: 91.0,
    };
    let results = annual_results(&fuel, 5000.0, &pricing()).expect("calc");
    let text = summary_text("HFO", &fuel, 5000.0, &pricing(), &results);

    assert!(text.contains("Status: Deficit vs Direct Target & Base Target"));
    assert!(text.contains("Net Outcome (Cost):"));
    assert!(text.contains("@ $100.00/t"));
    assert!(text.contains("@ $380.00/t"));
}

#[test]
fn chart_points_scale_to_millions_with_cost_sign_flip() {
    let fuel = FuelSpec {
        lhv_mj_per_t: 41_000.0,
        gfi_g_per_mj: 91.0,
    };
    let results = annual_results(&fuel, 5000.0, &pricing()).expect("calc");
    let points = chart_points(&results);
    assert_eq!(points.len(), results.len());

    for (p, r) in points.iter().zip(results.iter()) {
        assert_eq!(p.year, r.year);
        assert!((p.net_musd - r.net_outcome / 1e6).abs() < 1e-12);
        assert!((p.tier1_cost_musd + r.tier1_cost / 1e6).abs() < 1e-12);
        assert!((p.tier2_cost_musd + r.tier2_cost / 1e6).abs() < 1e-12);
        assert!(p.su_revenue_musd >= 0.0);
        assert!(p.tier1_cost_musd <= 0.0);
        assert!(p.tier2_cost_musd <= 0.0);
        assert!(p.is_significant());
    }
}

#[test]
fn balanced_chart_point_is_filtered_as_insignificant() {
    // 달성 배출이 direct 목표와 정확히 같으면 모든 성분이 0이다.
    let fuel = FuelSpec {
        lhv_mj_per_t: 41_000.0,
        gfi_g_per_mj: 91.0,
    };
    let zero_pricing = PricingAssumptions {
        surplus_price: 0.0,
        tier1_price: 0.0,
        tier2_price: 0.0,
    };
    let results = annual_results(&fuel, 5000.0, &zero_pricing).expect("calc");
    let points = chart_points(&results);
    // 2031년부터는 가격이 0이라 비용 성분이 전부 0으로 필터링된다.
    for p in points.iter().filter(|p| p.year >= 2031) {
        assert!(!p.is_significant(), "year {}", p.year);
    }
    // 고정 가격 기간은 여전히 유의미하다.
    assert!(points.iter().any(|p| p.year <= 2030 && p.is_significant()));
}
