//! 여러 연료를 동일한 소비량/가격 가정으로 나란히 계산하는 얇은 오케스트레이션.
//! 추가 알고리즘 없이 calculator 호출 결과에 대한 map + reduce만 수행한다.

use serde::Serialize;

use crate::compliance::calculator::{annual_results, AnnualResult, ComplianceCalcError, FuelSpec};
use crate::fuel_db;
use crate::schedule::PricingAssumptions;

/// 한 연료에 대한 전체 연도 실행 결과.
#[derive(Debug, Clone, Serialize)]
pub struct FuelRun {
    pub fuel_code: String,
    pub fuel: FuelSpec,
    pub results: Vec<AnnualResult>,
}

/// 연료별 순 결과 집계 (8개 연도에 대한 평균/합계).
#[derive(Debug, Clone, Serialize)]
pub struct FuelAggregate {
    pub fuel_code: String,
    pub mean_net_outcome: f64,
    pub total_net_outcome: f64,
}

/// 비교 모드 결과. 알 수 없는 연료는 skipped에 모아 경고로 처리한다.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonOutcome {
    pub runs: Vec<FuelRun>,
    pub aggregates: Vec<FuelAggregate>,
    pub skipped: Vec<String>,
}

/// 선택된 카탈로그 연료들을 동일 조건으로 계산한다.
///
/// 카탈로그에 없는 코드는 해당 연료만 건너뛰고 계속 진행한다.
/// 입력 검증 오류(소비량/LHV 등)는 배치 전체를 거부한다.
pub fn compare_fuels(
    fuel_codes: &[&str],
    tonnes_per_year: f64,
    pricing: &PricingAssumptions,
) -> Result<ComparisonOutcome, ComplianceCalcError> {
    let mut runs = Vec::new();
    let mut skipped = Vec::new();

    for code in fuel_codes {
        let Some(entry) = fuel_db::find_fuel(code) else {
            skipped.push((*code).to_string());
            continue;
        };
        let fuel = FuelSpec::from(entry);
        let results = annual_results(&fuel, tonnes_per_year, pricing)?;
        runs.push(FuelRun {
            fuel_code: entry.code.to_string(),
            fuel,
            results,
        });
    }

    let aggregates = runs.iter().map(aggregate).collect();
    Ok(ComparisonOutcome {
        runs,
        aggregates,
        skipped,
    })
}

fn aggregate(run: &FuelRun) -> FuelAggregate {
    let total: f64 = run.results.iter().map(|r| r.net_outcome).sum();
    let mean = if run.results.is_empty() {
        0.0
    } else {
        total / run.results.len() as f64
    };
    FuelAggregate {
        fuel_code: run.fuel_code.clone(),
        mean_net_outcome: mean,
        total_net_outcome: total,
    }
}
