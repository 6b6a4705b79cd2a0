use serde::Serialize;

use crate::compliance::calculator::AnnualResult;

/// 0으로 간주할 값의 허용 오차. 부동소수점 비교용.
const ZERO_TOLERANCE: f64 = 1e-9;

/// 차트용 연도별 데이터 포인트. 금액은 백만 달러(MUSD) 단위로 환산하고,
/// 비용 성분은 축 아래에 그리도록 음수로 기록한다.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChartPoint {
    pub year: u16,
    /// SU 판매 수익 [MUSD] (>= 0)
    pub su_revenue_musd: f64,
    /// Tier 1 RU 비용 [MUSD] (<= 0)
    pub tier1_cost_musd: f64,
    /// Tier 2 RU 비용 [MUSD] (<= 0)
    pub tier2_cost_musd: f64,
    /// 순 결과 [MUSD]
    pub net_musd: f64,
}

impl ChartPoint {
    /// 수익/비용 성분 중 하나라도 유의미한 값이면 true.
    pub fn is_significant(&self) -> bool {
        self.su_revenue_musd.abs() > ZERO_TOLERANCE
            || self.tier1_cost_musd.abs() > ZERO_TOLERANCE
            || self.tier2_cost_musd.abs() > ZERO_TOLERANCE
    }
}

/// 연도별 결과를 차트용 데이터셋으로 변환한다.
pub fn chart_points(results: &[AnnualResult]) -> Vec<ChartPoint> {
    results
        .iter()
        .map(|r| ChartPoint {
            year: r.year,
            su_revenue_musd: to_musd(r.surplus_revenue),
            tier1_cost_musd: -to_musd(r.tier1_cost),
            tier2_cost_musd: -to_musd(r.tier2_cost),
            net_musd: to_musd(r.net_outcome),
        })
        .collect()
}

fn to_musd(dollars: f64) -> f64 {
    dollars / 1_000_000.0
}
