use anyhow::Result;
use clap::Parser;
use fontdue::{Font, FontSettings};
use std::path::Path;

/// Generates the app icon set for ios/android.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {}

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("ICONGEN_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    Args::parse();

    let font_path = match icongen::download::fetch_font() {
        Ok(path) => path,
        Err(err) => {
            println!("Error downloading font: {}", err);
            println!("Please install Plus Jakarta Sans manually or use a local font.");
            return Ok(());
        }
    };
    let bytes = std::fs::read(&font_path)?;
    let font = Font::from_bytes(bytes.as_slice(), FontSettings::default())
        .map_err(|err| anyhow::anyhow!("failed to parse font: {}", err))?;

    let summary = icongen::generate(Path::new("assets/images"), &font);
    if summary.failed == 0 {
        println!("\n✓ All {} icons generated successfully!", summary.generated);
    } else {
        println!(
            "\n✗ Generated {} icons, {} failed.",
            summary.generated, summary.failed
        );
    }
    println!("\nNext steps:");
    println!("1. Update app.json to reference the icons");
    println!("2. Run 'npx expo prebuild' to apply the icons");
    Ok(())
}
