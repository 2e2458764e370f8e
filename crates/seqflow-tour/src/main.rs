use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seqflow_tour::TourConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seqflow_tour=info".into()),
        )
        .init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => TourConfig::load(path)?,
        None => TourConfig::default(),
    };
    config.validate()?;

    for section in seqflow_tour::run(&config)? {
        println!("== {}", section.title);
        for line in &section.lines {
            println!("{line}");
        }
    }
    Ok(())
}
