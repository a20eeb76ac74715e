//! Headless render host for the engagement dashboard: constructs one session,
//! then prints the selected chart spec and the metric widgets instead of
//! drawing them.

use clap::Parser;
use pulseboard::{format, ChartKind, ChartSpec, Dashboard, GeneratorConfig, DASHBOARD_TITLE};

#[derive(Debug, Parser)]
#[command(name = "pulseboard", version, about = "User engagement dashboard, rendered to the terminal")]
struct Args {
    /// Chart to render: "User Registrations", "User Activity", or "User Segments".
    #[arg(long, default_value = "User Registrations")]
    chart: String,

    /// Generator seed; defaults to the fixture seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the chart spec and metrics as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match args.seed {
        Some(seed) => GeneratorConfig::with_seed(seed),
        None => GeneratorConfig::default(),
    };
    let dashboard = Dashboard::with_config(&config);

    let spec = dashboard.chart(&args.chart)?;
    let metrics = dashboard.metrics()?;

    if args.json {
        let payload = serde_json::json!({
            "title": DASHBOARD_TITLE,
            "chart": spec,
            "metrics": metrics.entries(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{DASHBOARD_TITLE}");
    println!("{}", "=".repeat(DASHBOARD_TITLE.len()));
    render_chart(&spec);

    println!();
    println!("Engagement Metrics");
    for entry in metrics.entries() {
        println!("  {:<26} {}", entry.label, entry.value);
    }

    Ok(())
}

fn render_chart(spec: &ChartSpec) {
    println!();
    println!("{} ({} chart)", spec.title, spec.kind);

    match spec.kind {
        ChartKind::Pie => {
            for (label, value) in spec.labels.iter().zip(&spec.series[0].values) {
                println!("  {:<16} {}", label, format::format_percent(*value));
            }
        }
        _ => {
            let x_label = spec.x_label.as_deref().unwrap_or("");
            let names: Vec<&str> = spec.series.iter().map(|s| s.name.as_str()).collect();
            println!("  {:<8} {}", x_label, names.join("  "));
            for (row, label) in spec.labels.iter().enumerate() {
                let cells: Vec<String> = spec
                    .series
                    .iter()
                    .map(|s| format::format_number(s.values[row], 0))
                    .collect();
                println!("  {:<8} {}", label, cells.join("  "));
            }
        }
    }
}
