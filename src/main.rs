use anyhow::Context;
use book_catalog::utils::{logger, validation::Validate};
use book_catalog::{CatalogManager, CliConfig, InMemoryCatalog, Settings, Shell};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 載入並驗證配置
    let settings = match Settings::load(&config).and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("   {}", e);
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(&settings.log_level, settings.verbose, settings.log_format);
    tracing::debug!("Effective settings: {:?}", settings);

    let manager = CatalogManager::new(InMemoryCatalog::new());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), manager).with_prompt(settings.prompt);

    shell.run().context("command loop aborted")?;

    Ok(())
}
