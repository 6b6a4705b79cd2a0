use std::io::{self, Write};

use serde::Serialize;

use crate::app::AppError;
use crate::compliance::calculator::{annual_results, AnnualResult, FuelSpec};
use crate::compliance::chart::{chart_points, ChartPoint};
use crate::compliance::comparison::{compare_fuels, ComparisonOutcome};
use crate::compliance::report;
use crate::config::Config;
use crate::fuel_db;
use crate::i18n::{keys, Translator};
use crate::schedule::PricingAssumptions;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Compare,
    Catalog,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATE));
    println!("{}", tr.t(keys::MAIN_MENU_COMPARE));
    println!("{}", tr.t(keys::MAIN_MENU_CATALOG));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Compare),
            "3" => return Ok(MenuChoice::Catalog),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// JSON 내보내기 페이로드. 입력 가정과 결과를 함께 담는다.
#[derive(Debug, Serialize)]
struct ExportPayload<'a> {
    fuel_name: &'a str,
    fuel: FuelSpec,
    tonnes_per_year: f64,
    pricing: PricingAssumptions,
    results: &'a [AnnualResult],
    chart: &'a [ChartPoint],
}

/// 단일 연료 계산 메뉴를 처리한다.
pub fn handle_calculate(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));

    let (fuel_name, fuel) = select_fuel(tr)?;
    let tonnes = read_f64_default(tr, keys::PROMPT_TONNES, cfg.defaults.tonnes_per_year)?;
    let pricing = read_pricing(tr, cfg)?;

    let results = annual_results(&fuel, tonnes, &pricing)?;
    println!();
    print!(
        "{}",
        report::summary_text(&fuel_name, &fuel, tonnes, &pricing, &results)
    );

    let points = chart_points(&results);
    print_chart_table(tr, &points);

    let path = read_line(tr.t(keys::PROMPT_EXPORT_PATH))?;
    let path = path.trim();
    if !path.is_empty() {
        let payload = ExportPayload {
            fuel_name: &fuel_name,
            fuel,
            tonnes_per_year: tonnes,
            pricing,
            results: &results,
            chart: &points,
        };
        let json = serde_json::to_string_pretty(&payload)?;
        std::fs::write(path, json)?;
        println!("{} {path}", tr.t(keys::EXPORT_SAVED));
    }
    Ok(())
}

/// 복수 연료 비교 메뉴를 처리한다.
pub fn handle_compare(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COMPARE_HEADING));

    let input = read_line(tr.t(keys::PROMPT_FUEL_CODES))?;
    let codes: Vec<&str> = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    // 빈 입력이면 카탈로그 전체를 비교한다.
    let codes: Vec<&str> = if codes.is_empty() {
        fuel_db::fuels().iter().map(|f| f.code).collect()
    } else {
        codes
    };

    let tonnes = read_f64_default(tr, keys::PROMPT_TONNES, cfg.defaults.tonnes_per_year)?;
    let pricing = read_pricing(tr, cfg)?;

    let outcome = compare_fuels(&codes, tonnes, &pricing)?;
    print_comparison(tr, &outcome);
    Ok(())
}

/// 연료 카탈로그를 출력한다.
pub fn handle_catalog(tr: &Translator) {
    println!("{}", tr.t(keys::CATALOG_HEADING));
    println!("{}", tr.t(keys::CATALOG_TABLE_HEADER));
    for f in fuel_db::fuels() {
        println!(
            "{:<12} {:>11} {:>17.2}   {}",
            f.code,
            report::group_thousands(f.lhv_mj_per_t, 0),
            f.gfi_g_per_mj,
            f.notes
        );
    }
}

/// 설정 메뉴를 처리한다. 엔터 입력 시 기존 값을 유지한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::SETTINGS_HINT_KEEP));

    let fuel = read_line_default(tr, keys::SETTINGS_PROMPT_FUEL, &cfg.defaults.fuel)?;
    if fuel != cfg.defaults.fuel {
        if fuel_db::find_fuel(&fuel).is_some() {
            cfg.defaults.fuel = fuel;
        } else {
            println!("{}", tr.t(keys::SETTINGS_UNKNOWN_FUEL));
        }
    }

    cfg.defaults.tonnes_per_year =
        read_f64_default(tr, keys::PROMPT_TONNES, cfg.defaults.tonnes_per_year)?;
    cfg.defaults.surplus_price =
        read_f64_default(tr, keys::PROMPT_SURPLUS_PRICE, cfg.defaults.surplus_price)?;
    cfg.defaults.tier1_price =
        read_f64_default(tr, keys::PROMPT_T1_PRICE, cfg.defaults.tier1_price)?;
    cfg.defaults.tier2_price =
        read_f64_default(tr, keys::PROMPT_T2_PRICE, cfg.defaults.tier2_price)?;

    let lang = read_line_default(tr, keys::SETTINGS_PROMPT_LANGUAGE, &cfg.language)?;
    cfg.language = lang;

    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 카탈로그 또는 직접 입력으로 연료를 선택한다.
fn select_fuel(tr: &Translator) -> Result<(String, FuelSpec), AppError> {
    println!("{}", tr.t(keys::CALC_FUEL_LIST_TITLE));
    for (idx, f) in fuel_db::fuels().iter().enumerate() {
        println!(
            "{}) {} (LHV: {} MJ/t | GFI: {:.2} gCO₂eq/MJ)",
            idx + 1,
            f.code,
            report::group_thousands(f.lhv_mj_per_t, 1),
            f.gfi_g_per_mj
        );
    }
    println!("{}", tr.t(keys::CALC_CUSTOM_OPTION));

    loop {
        let sel = read_line(tr.t(keys::PROMPT_FUEL_SELECT))?;
        match sel.trim().parse::<usize>() {
            Ok(0) => {
                let lhv = read_f64(tr, tr.t(keys::PROMPT_CUSTOM_LHV))?;
                let gfi = read_f64(tr, tr.t(keys::PROMPT_CUSTOM_GFI))?;
                return Ok((
                    "Custom".to_string(),
                    FuelSpec {
                        lhv_mj_per_t: lhv,
                        gfi_g_per_mj: gfi,
                    },
                ));
            }
            Ok(n) if n <= fuel_db::fuels().len() => {
                let entry = &fuel_db::fuels()[n - 1];
                return Ok((entry.code.to_string(), FuelSpec::from(entry)));
            }
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn read_pricing(tr: &Translator, cfg: &Config) -> Result<PricingAssumptions, AppError> {
    let surplus_price =
        read_f64_default(tr, keys::PROMPT_SURPLUS_PRICE, cfg.defaults.surplus_price)?;
    let tier1_price = read_f64_default(tr, keys::PROMPT_T1_PRICE, cfg.defaults.tier1_price)?;
    let tier2_price = read_f64_default(tr, keys::PROMPT_T2_PRICE, cfg.defaults.tier2_price)?;
    Ok(PricingAssumptions {
        surplus_price,
        tier1_price,
        tier2_price,
    })
}

fn print_chart_table(tr: &Translator, points: &[ChartPoint]) {
    println!("{}", tr.t(keys::CHART_HEADING));
    println!("{}", tr.t(keys::CHART_TABLE_HEADER));
    for p in points {
        if !p.is_significant() {
            continue;
        }
        println!(
            "{:<5} {:>8.3} {:>9.3} {:>9.3} {:>11.3}",
            p.year, p.su_revenue_musd, p.tier1_cost_musd, p.tier2_cost_musd, p.net_musd
        );
    }
}

fn print_comparison(tr: &Translator, outcome: &ComparisonOutcome) {
    if !outcome.skipped.is_empty() {
        println!(
            "{} {}",
            tr.t(keys::COMPARE_SKIPPED_WARNING),
            outcome.skipped.join(", ")
        );
    }
    if outcome.runs.is_empty() {
        println!("{}", tr.t(keys::COMPARE_EMPTY));
        return;
    }

    println!("\n{}", tr.t(keys::COMPARE_NET_TABLE_HEADER));
    print!("{:<6}", "Year");
    for run in &outcome.runs {
        print!("{:>20}", run.fuel_code);
    }
    println!();
    let years = outcome.runs[0].results.len();
    for i in 0..years {
        print!("{:<6}", outcome.runs[0].results[i].year);
        for run in &outcome.runs {
            print!(
                "{:>20}",
                report::group_thousands(run.results[i].net_outcome, 2)
            );
        }
        println!();
    }

    println!("\n{}", tr.t(keys::COMPARE_AGG_TITLE));
    println!("{}", tr.t(keys::COMPARE_AGG_HEADER));
    for agg in &outcome.aggregates {
        println!(
            "{:<12} {:>16} {:>18}",
            agg.fuel_code,
            report::group_thousands(agg.mean_net_outcome, 2),
            report::group_thousands(agg.total_net_outcome, 2)
        );
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 기본값이 있는 숫자 입력. 엔터만 치면 기본값을 돌려준다.
fn read_f64_default(tr: &Translator, key: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{} [{default:.2}]: ", tr.t(key)))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 기본값이 있는 문자열 입력. 엔터만 치면 기본값을 돌려준다.
fn read_line_default(tr: &Translator, key: &str, default: &str) -> Result<String, AppError> {
    let s = read_line(&format!("{} [{default}]: ", tr.t(key)))?;
    let trimmed = s.trim();
    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}
