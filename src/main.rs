use clap::Parser;
use filename_inspector::core::ConfigProvider;
use filename_inspector::domain::model::InspectOutcome;
use filename_inspector::utils::logger;
use filename_inspector::{CliConfig, InspectError, Inspector, LocalDirectory};
use std::io::{self, Write};

fn main() {
    let cli = CliConfig::parse();

    // 合併命令列、設定檔與預設值
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            exit_with(&e);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, config.log_level.as_deref());
    tracing::debug!("Resolved config: {:?}", config);

    let inspector = Inspector::new(
        LocalDirectory::new(),
        config.target_path(),
        config.output_format(),
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // 逐一輸出檔名與十六進位編碼
    match inspector.run(&mut out) {
        Ok(InspectOutcome::PathNotFound(_)) => {}
        Ok(InspectOutcome::Inspected { entries }) => {
            tracing::info!("Inspected {} entries in {}", entries, inspector.target().display());
        }
        Err(e) => {
            let _ = out.flush();
            exit_with(&e);
        }
    }
}

fn exit_with(e: &InspectError) -> ! {
    tracing::error!("❌ Inspection failed: {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
