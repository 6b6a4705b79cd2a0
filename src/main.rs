use std::path::PathBuf;

use clap::Parser;

use gfi_compliance_calculator::{app, config, i18n};

/// IMO MEPC 83 two-tier GFI 컴플라이언스 비용 계산기 CLI 옵션.
#[derive(Debug, Parser)]
#[command(name = "gfi_compliance_calculator", version, about = "IMO MEPC 83 two-tier GFI compliance cost calculator")]
struct Cli {
    /// 언어 코드 (ko/en/auto)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 설정 파일 경로 (기본: config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default(cli.config.as_deref())?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new(&lang);
    app::run(&mut cfg, &tr)?;
    Ok(())
}
