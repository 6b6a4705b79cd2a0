use serde::Serialize;

use crate::fuel_db::FuelData;
use crate::schedule::{self, PricingAssumptions};

/// 컴플라이언스 계산 오류를 표현한다.
#[derive(Debug)]
pub enum ComplianceCalcError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
    /// 연료 카탈로그에 없는 코드/이름
    UnknownFuel(String),
}

impl std::fmt::Display for ComplianceCalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceCalcError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
            ComplianceCalcError::UnknownFuel(code) => {
                write!(f, "알 수 없는 연료입니다: {code}")
            }
        }
    }
}

impl std::error::Error for ComplianceCalcError {}

/// 계산에 쓰이는 연료 물성. 카탈로그 항목 또는 사용자 직접 입력.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FuelSpec {
    /// 저위 발열량 [MJ/t]
    pub lhv_mj_per_t: f64,
    /// 달성 GFI [gCO₂eq/MJ]
    pub gfi_g_per_mj: f64,
}

impl From<&FuelData> for FuelSpec {
    fn from(value: &FuelData) -> Self {
        Self {
            lhv_mj_per_t: value.lhv_mj_per_t,
            gfi_g_per_mj: value.gfi_g_per_mj,
        }
    }
}

/// 연도별 컴플라이언스 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplianceStatus {
    /// Direct/Base 두 목표 모두 초과 (Tier 1 + Tier 2 부족분)
    DeficitBothTargets,
    /// Direct 목표만 초과 (Tier 1 부족분, Base에는 적합)
    DeficitDirectOnly,
    /// Direct 목표 대비 잉여. exceeds_base는 방어적 플래그로,
    /// 현행 스케줄에서는 direct 목표가 항상 더 엄격해 설정될 수 없다고 보지만
    /// 목표 순서가 뒤집힌 입력에 대비해 유지한다.
    Surplus { exceeds_base: bool },
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceStatus::DeficitBothTargets => {
                write!(f, "Deficit vs Direct Target & Base Target")
            }
            ComplianceStatus::DeficitDirectOnly => {
                write!(f, "Deficit vs Direct Target (Compliant vs Base)")
            }
            ComplianceStatus::Surplus { exceeds_base: false } => {
                write!(f, "Surplus vs Direct Target")
            }
            ComplianceStatus::Surplus { exceeds_base: true } => {
                write!(f, "Surplus vs Direct Target (Warning: Exceeds Base Target)")
            }
        }
    }
}

impl ComplianceStatus {
    pub fn is_deficit(&self) -> bool {
        matches!(
            self,
            ComplianceStatus::DeficitBothTargets | ComplianceStatus::DeficitDirectOnly
        )
    }
}

/// 한 연도의 계산 결과. 생성 후 변경하지 않는다.
#[derive(Debug, Clone, Serialize)]
pub struct AnnualResult {
    pub year: u16,
    /// Base Target 감축률 [%]
    pub base_reduction_pct: f64,
    /// Direct Target 감축률 [%]
    pub direct_reduction_pct: f64,
    /// Base Target 절대 GFI [gCO₂eq/MJ]
    pub target_gfi_base: f64,
    /// Direct Target 절대 GFI [gCO₂eq/MJ]
    pub target_gfi_direct: f64,
    /// 달성 배출량 [t CO₂eq/y]
    pub attained_co2_t: f64,
    /// Base Target 허용 배출량 [t CO₂eq/y]
    pub target_co2_base_t: f64,
    /// Direct Target 허용 배출량 [t CO₂eq/y]
    pub target_co2_direct_t: f64,
    /// Tier 1 부족분 [t CO₂eq]
    pub tier1_deficit_t: f64,
    /// Tier 2 부족분 [t CO₂eq]
    pub tier2_deficit_t: f64,
    /// 잉여분 [t CO₂eq]
    pub surplus_t: f64,
    /// Tier 1 RU 비용 [$]
    pub tier1_cost: f64,
    /// Tier 2 RU 비용 [$]
    pub tier2_cost: f64,
    /// SU 판매 수익 [$]
    pub surplus_revenue: f64,
    /// 순 결과 [$] (양수=수익, 음수=비용)
    pub net_outcome: f64,
    /// 해당 연도에 적용된 Tier 1 가격 [$/t]
    pub tier1_price: f64,
    /// 해당 연도에 적용된 Tier 2 가격 [$/t]
    pub tier2_price: f64,
    /// SU 거래 가격 가정 [$/t]
    pub surplus_price: f64,
    pub status: ComplianceStatus,
}

/// 연간 총 에너지 [MJ/y].
pub fn total_energy_mj(fuel: &FuelSpec, tonnes_per_year: f64) -> f64 {
    tonnes_per_year * fuel.lhv_mj_per_t
}

/// 전체 규제 연도(2028~2035)에 대한 컴플라이언스 결과를 계산한다.
///
/// 입력 검증이 먼저 수행되며, 검증 실패 시 부분 결과 없이 전체가 거부된다.
/// 계산 자체는 연도별로 독립적인 순수 함수이다.
pub fn annual_results(
    fuel: &FuelSpec,
    tonnes_per_year: f64,
    pricing: &PricingAssumptions,
) -> Result<Vec<AnnualResult>, ComplianceCalcError> {
    validate_inputs(fuel, tonnes_per_year, pricing)?;

    let total_energy = total_energy_mj(fuel, tonnes_per_year);
    // g -> t 환산 (1e6)
    let attained_co2_t = total_energy * fuel.gfi_g_per_mj / 1_000_000.0;

    let mut results = Vec::with_capacity(schedule::targets().len());
    for target in schedule::targets() {
        results.push(annual_result(
            target.year,
            target.base_reduction_pct,
            target.direct_reduction_pct,
            total_energy,
            attained_co2_t,
            pricing,
        ));
    }
    Ok(results)
}

/// 카탈로그 코드/이름으로 연료를 찾아 전체 연도 결과를 계산한다.
/// 카탈로그에 없으면 UnknownFuel로 실패한다.
pub fn annual_results_by_name(
    fuel_code: &str,
    tonnes_per_year: f64,
    pricing: &PricingAssumptions,
) -> Result<Vec<AnnualResult>, ComplianceCalcError> {
    let entry = crate::fuel_db::find_fuel(fuel_code)
        .ok_or_else(|| ComplianceCalcError::UnknownFuel(fuel_code.to_string()))?;
    annual_results(&FuelSpec::from(entry), tonnes_per_year, pricing)
}

fn validate_inputs(
    fuel: &FuelSpec,
    tonnes_per_year: f64,
    pricing: &PricingAssumptions,
) -> Result<(), ComplianceCalcError> {
    if !tonnes_per_year.is_finite() || tonnes_per_year <= 0.0 {
        return Err(ComplianceCalcError::InvalidInput(
            "연간 연료 소비량은 0보다 커야 합니다.",
        ));
    }
    if !fuel.lhv_mj_per_t.is_finite() || fuel.lhv_mj_per_t <= 0.0 {
        return Err(ComplianceCalcError::InvalidInput(
            "연료 LHV는 0보다 커야 합니다.",
        ));
    }
    if !fuel.gfi_g_per_mj.is_finite() || fuel.gfi_g_per_mj < 0.0 {
        return Err(ComplianceCalcError::InvalidInput(
            "달성 GFI는 0 이상이어야 합니다.",
        ));
    }
    if !pricing.surplus_price.is_finite()
        || !pricing.tier1_price.is_finite()
        || !pricing.tier2_price.is_finite()
        || pricing.surplus_price < 0.0
        || pricing.tier1_price < 0.0
        || pricing.tier2_price < 0.0
    {
        return Err(ComplianceCalcError::InvalidInput(
            "가격 가정은 0 이상이어야 합니다.",
        ));
    }
    Ok(())
}

/// 단일 연도의 2단계 deficit/surplus 판정과 비용 환산.
fn annual_result(
    year: u16,
    base_reduction_pct: f64,
    direct_reduction_pct: f64,
    total_energy: f64,
    attained_co2_t: f64,
    pricing: &PricingAssumptions,
) -> AnnualResult {
    let target_gfi_base = schedule::REFERENCE_GFI * (1.0 - base_reduction_pct / 100.0);
    let target_gfi_direct = schedule::REFERENCE_GFI * (1.0 - direct_reduction_pct / 100.0);

    let target_co2_base_t = total_energy * target_gfi_base / 1_000_000.0;
    let target_co2_direct_t = total_energy * target_gfi_direct / 1_000_000.0;

    let (tier1_price, tier2_price) = schedule::tier_prices(year, pricing);

    let mut tier1_deficit_t = 0.0;
    let mut tier2_deficit_t = 0.0;
    let mut surplus_t = 0.0;
    let mut tier1_cost = 0.0;
    let mut tier2_cost = 0.0;
    let mut surplus_revenue = 0.0;

    let status = if attained_co2_t > target_co2_direct_t {
        tier1_deficit_t = attained_co2_t - target_co2_direct_t;
        tier1_cost = tier1_deficit_t * tier1_price;
        if attained_co2_t > target_co2_base_t {
            tier2_deficit_t = attained_co2_t - target_co2_base_t;
            tier2_cost = tier2_deficit_t * tier2_price;
            ComplianceStatus::DeficitBothTargets
        } else {
            ComplianceStatus::DeficitDirectOnly
        }
    } else {
        surplus_t = target_co2_direct_t - attained_co2_t;
        surplus_revenue = surplus_t * pricing.surplus_price;
        ComplianceStatus::Surplus {
            exceeds_base: attained_co2_t > target_co2_base_t,
        }
    };

    let net_outcome = surplus_revenue - tier1_cost - tier2_cost;

    AnnualResult {
        year,
        base_reduction_pct,
        direct_reduction_pct,
        target_gfi_base,
        target_gfi_direct,
        attained_co2_t,
        target_co2_base_t,
        target_co2_direct_t,
        tier1_deficit_t,
        tier2_deficit_t,
        surplus_t,
        tier1_cost,
        tier2_cost,
        surplus_revenue,
        net_outcome,
        tier1_price,
        tier2_price,
        surplus_price: pricing.surplus_price,
        status,
    }
}
