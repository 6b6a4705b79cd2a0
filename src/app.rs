use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 컴플라이언스 계산 오류
    Calc(crate::compliance::ComplianceCalcError),
    /// 결과 JSON 직렬화 오류
    Json(serde_json::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Calc(e) => write!(f, "계산 오류: {e}"),
            AppError::Json(e) => write!(f, "JSON 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<crate::compliance::ComplianceCalcError> for AppError {
    fn from(value: crate::compliance::ComplianceCalcError) -> Self {
        AppError::Calc(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        AppError::Json(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 계산 오류는 루프를 끝내지 않고 메시지만 출력한 뒤 메뉴로 돌아간다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Calculate => report_soft_error(tr, ui_cli::handle_calculate(tr, config))?,
            MenuChoice::Compare => report_soft_error(tr, ui_cli::handle_compare(tr, config))?,
            MenuChoice::Catalog => ui_cli::handle_catalog(tr),
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 계산 단계의 오류는 치명적이지 않으므로 출력만 하고 계속 진행한다.
/// 입출력 오류는 그대로 전파한다.
fn report_soft_error(tr: &Translator, result: Result<(), AppError>) -> Result<(), AppError> {
    match result {
        Err(err @ AppError::Io(_)) => Err(err),
        Err(err) => {
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            Ok(())
        }
        Ok(()) => Ok(()),
    }
}
