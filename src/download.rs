use anyhow::Result;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use reqwest::blocking::Client;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Plus Jakarta Sans variable font from the Google Fonts repository.
pub const FONT_URL: &str = "https://github.com/google/fonts/raw/refs/heads/main/ofl/plusjakartasans/PlusJakartaSans%5Bwght%5D.ttf";

pub fn font_path() -> PathBuf {
    std::env::temp_dir().join("PlusJakartaSans.ttf")
}

/// Downloads the font to its fixed temp path, overwriting any previous
/// copy, and returns the path on success.
pub fn fetch_font() -> Result<PathBuf> {
    println!("Downloading Plus Jakarta Sans font...");
    let path = font_path();
    download(FONT_URL, &path)?;
    println!("Font downloaded to {}", path.display());
    Ok(path)
}

fn download(url: &str, dest: &Path) -> Result<()> {
    let pb = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stdout())
        .with_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} {prefix:.bold} [{elapsed}] {wide_bar:.green} {bytes}/{total_bytes} {msg}")?
                .progress_chars("█▇▆▅▄▃▂▁  "),
        );
    let file_name = dest
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    pb.set_prefix(file_name);
    pb.set_message("📥 downloading");

    let client = Client::new();
    let mut resp = client.get(url).send()?;
    anyhow::ensure!(
        resp.status().is_success(),
        "GET {} returned status code {}",
        url,
        resp.status()
    );
    let len = resp.content_length().unwrap_or_default();
    pb.set_length(len);

    let dest = BufWriter::new(File::create(dest)?);
    std::io::copy(&mut resp, &mut pb.wrap_write(dest))?;
    pb.finish_with_message("📥 downloaded");

    Ok(())
}
