//! 연도별 결과를 사람이 읽을 수 있는 텍스트 보고서로 조립한다.
//! 보고서 본문은 거래/보고 관행에 맞춰 영어로 출력한다.

use std::fmt::Write as _;

use crate::compliance::calculator::{total_energy_mj, AnnualResult, FuelSpec};
use crate::schedule::{self, PricingAssumptions};

/// 입력 가정을 되풀이하는 머리말 + 연도별 블록으로 구성된 요약 텍스트를 만든다.
pub fn summary_text(
    fuel_name: &str,
    fuel: &FuelSpec,
    tonnes_per_year: f64,
    pricing: &PricingAssumptions,
    results: &[AnnualResult],
) -> String {
    let mut out = String::new();
    let total_energy = total_energy_mj(fuel, tonnes_per_year);

    let _ = writeln!(out, "Calculation Basis:");
    let _ = writeln!(
        out,
        "Fuel: {} ({} t/y), Attained GFI: {:.2} gCO₂eq/MJ",
        fuel_name,
        group_thousands(tonnes_per_year, 2),
        fuel.gfi_g_per_mj
    );
    let _ = writeln!(out, "LHV: {} MJ/t", group_thousands(fuel.lhv_mj_per_t, 1));
    let _ = writeln!(out, "Total Energy: {} MJ/y", group_thousands(total_energy, 0));
    let _ = writeln!(out, "Reference GFI: {:.1} gCO₂eq/MJ", schedule::REFERENCE_GFI);
    out.push('\n');

    let _ = writeln!(
        out,
        "Assumed SU trading price: ${:.2}/t CO₂eq",
        pricing.surplus_price
    );
    let _ = writeln!(out, "RU Prices ($/t CO₂eq):");
    let _ = writeln!(
        out,
        "  2028-{} (Fixed): T1=${:.2}, T2=${:.2}",
        schedule::FIXED_PRICE_FINAL_YEAR,
        schedule::T1_FIXED_PRICE,
        schedule::T2_FIXED_PRICE
    );
    let _ = writeln!(
        out,
        "  {} Onwards (User Input): T1=${:.2}, T2=${:.2}",
        schedule::FIXED_PRICE_FINAL_YEAR + 1,
        pricing.tier1_price,
        pricing.tier2_price
    );
    out.push('\n');

    if let (Some(first), Some(last)) = (results.first(), results.last()) {
        let _ = writeln!(out, "--- Annual Results ({}-{}) ---", first.year, last.year);
        out.push('\n');
    }

    for r in results {
        push_year_block(&mut out, r);
    }
    out
}

fn push_year_block(out: &mut String, r: &AnnualResult) {
    let _ = writeln!(out, "--- Year {} ---", r.year);
    let _ = writeln!(
        out,
        "Targets GFI (Base / Direct): {:.3} ({:.1}%) / {:.3} ({:.1}%) gCO₂eq/MJ",
        r.target_gfi_base, r.base_reduction_pct, r.target_gfi_direct, r.direct_reduction_pct
    );
    let _ = writeln!(
        out,
        "Target CO₂eq (Base / Direct): {} t / {} t",
        group_thousands(r.target_co2_base_t, 1),
        group_thousands(r.target_co2_direct_t, 1)
    );
    let _ = writeln!(
        out,
        "Attained CO₂eq: {} t",
        group_thousands(r.attained_co2_t, 1)
    );
    let _ = writeln!(out, "Status: {}", r.status);

    if r.net_outcome < 0.0 {
        let _ = writeln!(
            out,
            "Deficits (T1 / T2): {} t / {} t CO₂eq",
            group_thousands(r.tier1_deficit_t, 3),
            group_thousands(r.tier2_deficit_t, 3)
        );
        let _ = writeln!(
            out,
            "Net Outcome (Cost): ${}",
            group_thousands(r.net_outcome.abs(), 2)
        );
        if r.tier1_cost > 0.0 {
            let _ = writeln!(
                out,
                "  (T1 RU Cost: ${} @ ${:.2}/t)",
                group_thousands(r.tier1_cost, 2),
                r.tier1_price
            );
        }
        if r.tier2_cost > 0.0 {
            let _ = writeln!(
                out,
                "  (T2 RU Cost: ${} @ ${:.2}/t)",
                group_thousands(r.tier2_cost, 2),
                r.tier2_price
            );
        }
    } else if r.net_outcome > 0.0 {
        let _ = writeln!(
            out,
            "Surplus vs Direct: {} t CO₂eq",
            group_thousands(r.surplus_t, 3)
        );
        let _ = writeln!(
            out,
            "Net Outcome (Potential Revenue): ${}",
            group_thousands(r.net_outcome, 2)
        );
        let _ = writeln!(
            out,
            "  (Potential SU Revenue: ${} @ ${:.2}/t)",
            group_thousands(r.surplus_revenue, 2),
            r.surplus_price
        );
    } else {
        let _ = writeln!(out, "Net Outcome: $0.00");
    }
    out.push('\n');
}

/// 천 단위 구분 쉼표를 넣어 포맷한다. 표준 라이브러리에 해당 기능이 없어 직접 처리.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
