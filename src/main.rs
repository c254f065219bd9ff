use clap::Parser;
use feedplan::adapters::{self, http::HttpWeightSource};
use feedplan::utils::{logger, validation::Validate};
use feedplan::{
    AdvisorEngine, CliConfig, ConfigProvider, FeedEstimateRequest, FeedEstimateResult, TomlConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting feedplan CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let request = FeedEstimateRequest::new(
        cli.subject_id.clone(),
        cli.current_weight,
        cli.target_weight,
        cli.horizon_days,
    );

    // Settings come from the TOML file when --config is given, from the
    // flags otherwise. The request itself always comes from the flags.
    let outcome = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(file_config) => run_validated(&file_config, request).await,
            Err(e) => Err(e),
        },
        None => run_validated(&cli, request).await,
    };

    match outcome {
        Ok(result) => {
            print_result(&cli.subject_id, cli.horizon_days, &result);
        }
        Err(e) => {
            tracing::error!("❌ Estimation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(if e.is_client_error() { 2 } else { 1 });
        }
    }

    Ok(())
}

async fn run_validated<C: ConfigProvider + Validate>(
    config: &C,
    request: FeedEstimateRequest,
) -> feedplan::Result<FeedEstimateResult> {
    config.validate()?;

    if let Some(model_path) = config.model_path() {
        tracing::debug!("Model artifact path (pass-through): {}", model_path);
    }

    let predictor = adapters::predictor_from_config(config)?;

    if let (true, Some(base_url)) = (config.use_predictor(), config.predictor_base_url()) {
        let source = HttpWeightSource::new(base_url, config.request_timeout_secs())?;
        AdvisorEngine::with_history_source(predictor, Box::new(source))
            .run(request)
            .await
    } else {
        AdvisorEngine::new(predictor).run(request).await
    }
}

fn print_result(subject_id: &str, horizon_days: u32, result: &FeedEstimateResult) {
    println!(
        "✅ {}: {:.2} {} of feed over {} days",
        subject_id, result.recommended_feed, result.unit, horizon_days
    );

    if let Some(confidence) = result.confidence {
        println!("   Confidence: {:.0}%", confidence * 100.0);
    }

    if let Some(breakdown) = &result.breakdown {
        if let Some(first) = breakdown.first() {
            println!(
                "   Daily ration: {:.2} {} ({} periods)",
                first.feed_mass,
                result.unit,
                breakdown.len()
            );
        }
    }
}
