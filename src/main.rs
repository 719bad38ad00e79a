use anyhow::{bail, Context};
use serde_json::json;
use std::env;
use std::fs;
use tickerlens::services::{normalize_ticker, score_fundamentals};
use tickerlens::types::{decode_chart, CompanyInfo};
use tickerlens::{AnalysisConfig, Analyzer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: tickerlens <chart.json> [ticker] [company_info.json]";

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout is reserved for the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tickerlens=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = env::args().skip(1);
    let Some(chart_path) = args.next() else {
        bail!(USAGE);
    };
    let ticker_arg = args.next();
    let info_path = args.next();

    let payload = fs::read_to_string(&chart_path)
        .with_context(|| format!("failed to read chart payload {}", chart_path))?;
    let chart = decode_chart(&payload).context("failed to decode chart payload")?;

    // KOSDAQ codes come from the environment, e.g. TICKERLENS_KOSDAQ=247540,091990
    let kosdaq: Vec<String> = env::var("TICKERLENS_KOSDAQ")
        .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
        .unwrap_or_default();
    let ticker = ticker_arg
        .as_deref()
        .or(chart.symbol.as_deref())
        .and_then(|t| normalize_ticker(t, |code| kosdaq.iter().any(|k| k == code)));

    let config = AnalysisConfig::from_env();
    let analyzer = Analyzer::new(config).context("invalid analysis configuration")?;

    info!(
        "Analyzing {} ({} bars)",
        ticker.as_deref().unwrap_or("unknown"),
        chart.series.len()
    );
    if let Some(at) = chart.series.bars().last().and_then(|bar| bar.datetime()) {
        info!("Latest bar at {}", at);
    }
    let report = analyzer.analyze(&chart.series)?;
    info!(
        "Verdict: {} (score {:+.2}, {} signals)",
        report.verdict.label, report.verdict.total_score, report.verdict.signal_count
    );

    let fundamentals = match info_path {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read company info {}", path))?;
            let info: CompanyInfo =
                serde_json::from_str(&raw).context("failed to decode company info")?;
            let stats = score_fundamentals(&info);
            info!("Fundamentals: {} ({:.1})", stats.grade, stats.total_score);
            Some(json!({ "info": info, "stats": stats }))
        }
        None => None,
    };

    let output = json!({
        "ticker": ticker,
        "report": report,
        "fundamentals": fundamentals,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
