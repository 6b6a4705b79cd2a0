use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_COMPARE: &str = "main_menu.compare";
    pub const MAIN_MENU_CATALOG: &str = "main_menu.catalog";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const CALC_HEADING: &str = "calc.heading";
    pub const CALC_FUEL_LIST_TITLE: &str = "calc.fuel_list_title";
    pub const CALC_CUSTOM_OPTION: &str = "calc.custom_option";
    pub const PROMPT_FUEL_SELECT: &str = "prompt.fuel_select";
    pub const PROMPT_CUSTOM_LHV: &str = "prompt.custom_lhv";
    pub const PROMPT_CUSTOM_GFI: &str = "prompt.custom_gfi";
    pub const PROMPT_TONNES: &str = "prompt.tonnes";
    pub const PROMPT_SURPLUS_PRICE: &str = "prompt.surplus_price";
    pub const PROMPT_T1_PRICE: &str = "prompt.t1_price";
    pub const PROMPT_T2_PRICE: &str = "prompt.t2_price";
    pub const CHART_HEADING: &str = "chart.heading";
    pub const CHART_TABLE_HEADER: &str = "chart.table_header";
    pub const PROMPT_EXPORT_PATH: &str = "prompt.export_path";
    pub const EXPORT_SAVED: &str = "export.saved";

    pub const COMPARE_HEADING: &str = "compare.heading";
    pub const PROMPT_FUEL_CODES: &str = "prompt.fuel_codes";
    pub const COMPARE_SKIPPED_WARNING: &str = "compare.skipped_warning";
    pub const COMPARE_NET_TABLE_HEADER: &str = "compare.net_table_header";
    pub const COMPARE_AGG_TITLE: &str = "compare.agg_title";
    pub const COMPARE_AGG_HEADER: &str = "compare.agg_header";
    pub const COMPARE_EMPTY: &str = "compare.empty";

    pub const CATALOG_HEADING: &str = "catalog.heading";
    pub const CATALOG_TABLE_HEADER: &str = "catalog.table_header";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_HINT_KEEP: &str = "settings.hint_keep";
    pub const SETTINGS_PROMPT_FUEL: &str = "settings.prompt_fuel";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_UNKNOWN_FUEL: &str = "settings.unknown_fuel";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== IMO MEPC 83 GFI Compliance Calculator ===",
        MAIN_MENU_CALCULATE => "1) 단일 연료 컴플라이언스 비용 계산",
        MAIN_MENU_COMPARE => "2) 복수 연료 비교",
        MAIN_MENU_CATALOG => "3) 연료 카탈로그 보기",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        CALC_HEADING => "\n-- 컴플라이언스 비용 계산 --",
        CALC_FUEL_LIST_TITLE => "연료 선택:",
        CALC_CUSTOM_OPTION => "0) 직접 입력 (LHV/GFI)",
        PROMPT_FUEL_SELECT => "연료 번호: ",
        PROMPT_CUSTOM_LHV => "연료 LHV [MJ/t]: ",
        PROMPT_CUSTOM_GFI => "달성 GFI [gCO₂eq/MJ]: ",
        PROMPT_TONNES => "연간 소비량 [t/y]",
        PROMPT_SURPLUS_PRICE => "SU 거래 가격 가정 [$/t CO₂eq]",
        PROMPT_T1_PRICE => "Tier 1 RU 가격 (2031+) [$/t CO₂eq]",
        PROMPT_T2_PRICE => "Tier 2 RU 가격 (2031+) [$/t CO₂eq]",
        CHART_HEADING => "\n-- 연간 수익(+)/비용(-) [백만 달러] --",
        CHART_TABLE_HEADER => "연도    SU수익    T1비용    T2비용      순결과",
        PROMPT_EXPORT_PATH => "결과를 JSON으로 저장할 경로 (건너뛰려면 엔터): ",
        EXPORT_SAVED => "저장 완료:",
        COMPARE_HEADING => "\n-- 복수 연료 비교 --",
        PROMPT_FUEL_CODES => "연료 코드를 쉼표로 구분해 입력 (예: HFO,LNG,e-Ammonia): ",
        COMPARE_SKIPPED_WARNING => "경고: 카탈로그에 없어 건너뛴 연료:",
        COMPARE_NET_TABLE_HEADER => "연도별 순 결과 [$]",
        COMPARE_AGG_TITLE => "연료별 집계 (2028-2035 순 결과)",
        COMPARE_AGG_HEADER => "연료            평균 [$/y]          합계 [$]",
        COMPARE_EMPTY => "계산할 연료가 없습니다.",
        CATALOG_HEADING => "\n-- 연료 카탈로그 --",
        CATALOG_TABLE_HEADER => "코드          LHV [MJ/t]   GFI [gCO₂eq/MJ]",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_HINT_KEEP => "(값을 유지하려면 엔터)",
        SETTINGS_PROMPT_FUEL => "기본 연료 코드",
        SETTINGS_PROMPT_LANGUAGE => "언어 (ko/en/auto)",
        SETTINGS_UNKNOWN_FUEL => "카탈로그에 없는 연료 코드라 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== IMO MEPC 83 GFI Compliance Calculator ===",
        MAIN_MENU_CALCULATE => "1) Single-fuel compliance cost",
        MAIN_MENU_COMPARE => "2) Multi-fuel comparison",
        MAIN_MENU_CATALOG => "3) Fuel catalog",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        CALC_HEADING => "\n-- Compliance Cost Calculation --",
        CALC_FUEL_LIST_TITLE => "Fuel selection:",
        CALC_CUSTOM_OPTION => "0) Custom (LHV/GFI)",
        PROMPT_FUEL_SELECT => "Fuel number: ",
        PROMPT_CUSTOM_LHV => "Fuel LHV [MJ/t]: ",
        PROMPT_CUSTOM_GFI => "Attained GFI [gCO₂eq/MJ]: ",
        PROMPT_TONNES => "Tonnes consumed per annum [t/y]",
        PROMPT_SURPLUS_PRICE => "Assumed SU trading price [$/t CO₂eq]",
        PROMPT_T1_PRICE => "Tier 1 RU price (2031+) [$/t CO₂eq]",
        PROMPT_T2_PRICE => "Tier 2 RU price (2031+) [$/t CO₂eq]",
        CHART_HEADING => "\n-- Annual Revenue (+) / Cost (-) [Millions USD] --",
        CHART_TABLE_HEADER => "Year  SU Rev.   T1 Cost   T2 Cost       Net",
        PROMPT_EXPORT_PATH => "Path to save results as JSON (enter to skip): ",
        EXPORT_SAVED => "Saved:",
        COMPARE_HEADING => "\n-- Multi-Fuel Comparison --",
        PROMPT_FUEL_CODES => "Fuel codes, comma separated (ex: HFO,LNG,e-Ammonia): ",
        COMPARE_SKIPPED_WARNING => "Warning: skipped fuels not in the catalog:",
        COMPARE_NET_TABLE_HEADER => "Net outcome per year [$]",
        COMPARE_AGG_TITLE => "Per-fuel aggregates (net outcome 2028-2035)",
        COMPARE_AGG_HEADER => "Fuel            Mean [$/y]          Sum [$]",
        COMPARE_EMPTY => "No fuels to calculate.",
        CATALOG_HEADING => "\n-- Fuel Catalog --",
        CATALOG_TABLE_HEADER => "Code          LHV [MJ/t]   GFI [gCO₂eq/MJ]",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_HINT_KEEP => "(press enter to keep current value)",
        SETTINGS_PROMPT_FUEL => "Default fuel code",
        SETTINGS_PROMPT_LANGUAGE => "Language (ko/en/auto)",
        SETTINGS_UNKNOWN_FUEL => "Unknown fuel code; keeping the current one.",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}
