/// IMO MEPC 83 GFI 감축 스케줄과 2단계(RU) 고정 가격 테이블을 제공한다.
/// 값은 2028~2035 규제 연도에 한정되며, 이후 개정은 반영하지 않는다.
use serde::Serialize;

/// 기준 GFI [gCO₂eq/MJ]. 모든 연도별 감축 목표의 기준값.
pub const REFERENCE_GFI: f64 = 93.3;

/// 2028~2030 고정 기간의 Tier 1 RU 가격 [$/t CO₂eq].
pub const T1_FIXED_PRICE: f64 = 100.0;
/// 2028~2030 고정 기간의 Tier 2 RU 가격 [$/t CO₂eq].
pub const T2_FIXED_PRICE: f64 = 380.0;
/// 고정 가격이 적용되는 마지막 연도. 이후에는 사용자 가정 가격을 쓴다.
pub const FIXED_PRICE_FINAL_YEAR: u16 = 2030;

/// 연도별 감축 목표. 기준 GFI 대비 감축률 [%].
#[derive(Debug, Clone, Copy)]
pub struct YearTarget {
    pub year: u16,
    /// Base Target 감축률 [%]
    pub base_reduction_pct: f64,
    /// Direct Compliance Target 감축률 [%]. 항상 base보다 크다.
    pub direct_reduction_pct: f64,
}

impl YearTarget {
    pub const fn new(year: u16, base_reduction_pct: f64, direct_reduction_pct: f64) -> Self {
        Self {
            year,
            base_reduction_pct,
            direct_reduction_pct,
        }
    }

    /// Base Target 절대 GFI [gCO₂eq/MJ].
    pub fn target_gfi_base(&self) -> f64 {
        REFERENCE_GFI * (1.0 - self.base_reduction_pct / 100.0)
    }

    /// Direct Compliance Target 절대 GFI [gCO₂eq/MJ].
    pub fn target_gfi_direct(&self) -> f64 {
        REFERENCE_GFI * (1.0 - self.direct_reduction_pct / 100.0)
    }
}

/// 시장 가격 가정 [$/t CO₂eq]. tier 가격은 2031년 이후 연도에만 적용된다.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PricingAssumptions {
    /// Surplus Unit(SU) 거래 가격
    pub surplus_price: f64,
    /// Tier 1 RU 가격 (2031+)
    pub tier1_price: f64,
    /// Tier 2 RU 가격 (2031+)
    pub tier2_price: f64,
}

/// 전체 감축 스케줄을 연도 오름차순으로 반환한다.
pub fn targets() -> &'static [YearTarget] {
    TARGETS
}

/// 특정 연도의 감축 목표를 찾는다. 스케줄 밖 연도는 None.
pub fn target_for(year: u16) -> Option<&'static YearTarget> {
    TARGETS.iter().find(|t| t.year == year)
}

/// 해당 연도에 적용되는 (Tier 1, Tier 2) RU 가격을 선택한다.
/// 2030년까지는 고정 가격, 2031년부터는 사용자 가정 가격.
pub fn tier_prices(year: u16, pricing: &PricingAssumptions) -> (f64, f64) {
    if year <= FIXED_PRICE_FINAL_YEAR {
        (T1_FIXED_PRICE, T2_FIXED_PRICE)
    } else {
        (pricing.tier1_price, pricing.tier2_price)
    }
}

const TARGETS: &[YearTarget] = &[
    yt(2028, 4.0, 17.0),
    yt(2029, 6.0, 19.0),
    yt(2030, 8.0, 21.0),
    yt(2031, 12.4, 25.4),
    yt(2032, 16.8, 29.8),
    yt(2033, 21.2, 34.2),
    yt(2034, 25.6, 38.6),
    yt(2035, 30.0, 43.0),
];

const fn yt(year: u16, base: f64, direct: f64) -> YearTarget {
    YearTarget::new(year, base, direct)
}

// NOTE:
// - Reduction percentages follow the MEPC 83 two-tier GFI schedule (2028-2035) as adopted; verify against the latest IMO circular before contractual use.
// - Direct Compliance Target reduction exceeds the Base Target reduction in every scheduled year, so the direct target GFI is always the stricter one.
