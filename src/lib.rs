use anyhow::Result;
use fontdue::Font;
use image::Rgb;
use std::path::Path;

pub mod download;
pub mod render;

use crate::render::Renderer;

pub const BACKGROUND: Rgb<u8> = Rgb([0x8a, 0x3d, 0xff]);
pub const FOREGROUND: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
pub const LETTER: char = 'T';

/// Expo expects these at the asset root.
pub const STANDARD_SIZES: &[(&str, u32)] = &[("icon.png", 1024), ("adaptive-icon.png", 1024)];

pub const IOS_SIZES: &[(&str, u32)] = &[
    ("icon-20.png", 20),
    ("icon-20@2x.png", 40),
    ("icon-20@3x.png", 60),
    ("icon-29.png", 29),
    ("icon-29@2x.png", 58),
    ("icon-29@3x.png", 87),
    ("icon-40.png", 40),
    ("icon-40@2x.png", 80),
    ("icon-40@3x.png", 120),
    ("icon-60@2x.png", 120),
    ("icon-60@3x.png", 180),
    ("icon-76.png", 76),
    ("icon-76@2x.png", 152),
    ("icon-83.5@2x.png", 167),
    ("icon-1024.png", 1024),
];

pub const ANDROID_SIZES: &[(&str, u32)] = &[
    ("mipmap-mdpi/ic_launcher.png", 48),
    ("mipmap-hdpi/ic_launcher.png", 72),
    ("mipmap-xhdpi/ic_launcher.png", 96),
    ("mipmap-xxhdpi/ic_launcher.png", 144),
    ("mipmap-xxxhdpi/ic_launcher.png", 192),
];

pub struct SizeTable {
    pub label: &'static str,
    pub subdir: &'static str,
    pub entries: &'static [(&'static str, u32)],
}

pub const TABLES: &[SizeTable] = &[
    SizeTable {
        label: "standard",
        subdir: "",
        entries: STANDARD_SIZES,
    },
    SizeTable {
        label: "iOS",
        subdir: "ios",
        entries: IOS_SIZES,
    },
    SizeTable {
        label: "Android",
        subdir: "android",
        entries: ANDROID_SIZES,
    },
];

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    pub generated: u32,
    pub failed: u32,
}

/// Renders every icon in [`TABLES`] under `root`, sharing one font across
/// all renders. Per-icon failures are logged and counted rather than
/// aborting the batch; the caller decides what to do with the summary.
pub fn generate(root: &Path, font: &Font) -> Summary {
    let renderer = Renderer::new(font, BACKGROUND, FOREGROUND, LETTER);
    let mut summary = Summary::default();
    for table in TABLES {
        println!("\nGenerating {} icons...", table.label);
        let dir = root.join(table.subdir);
        for (name, size) in table.entries {
            let path = dir.join(name);
            match create_icon(&renderer, *size, &path) {
                Ok(()) => {
                    println!("Created: {} ({}x{})", path.display(), size, size);
                    summary.generated += 1;
                }
                Err(err) => {
                    tracing::error!("failed to create {}: {}", path.display(), err);
                    summary.failed += 1;
                }
            }
        }
    }
    summary
}

fn create_icon(renderer: &Renderer, size: u32, path: &Path) -> Result<()> {
    let img = renderer.render(size);
    render::write_png(&img, path)?;
    Ok(())
}
