use clap::Parser;
use lfl_etl::utils::error::ErrorPolicy;
use lfl_etl::utils::{logger, validation::Validate};
use lfl_etl::{CliConfig, Command, EtlEngine, LflPipeline, LocalStorage};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger();

    tracing::info!("Starting lfl-etl CLI");

    let Command::Process(args) = config.command;

    // 驗證參數
    if let Err(e) = args.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e.into());
    }

    // 創建存儲和管道
    let storage = LocalStorage::new();
    let pipeline = LflPipeline::new(storage, args);

    // 創建ETL引擎並運行
    let engine = EtlEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ ETL process completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Output saved to: {}", output_path);
            Ok(())
        }
        Err(e) => match e.policy() {
            // 預期中的資料品質問題：記錄後以退出碼 1 結束
            ErrorPolicy::Recover => {
                tracing::error!("❌ ETL process failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            // 結構性錯誤：往外傳播，帶完整診斷鏈結束
            ErrorPolicy::Fault => Err(e.into()),
        },
    }
}
