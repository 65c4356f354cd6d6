use clap::Parser;
use webp_drop::imaging::{Quality, RustBackend};
use webp_drop::process::ConvertConfig;
use webp_drop::{menu, output};

#[derive(Parser)]
#[command(name = "webp-drop")]
#[command(about = "Interactive PNG/JPEG to WebP converter")]
#[command(long_about = "\
Interactive PNG/JPEG to WebP converter

Drop an image or a folder onto the terminal (or type a path) and webp-drop
writes a sibling .webp next to each source. Existing outputs are never
overwritten, so re-running over the same tree only converts what's new.

Fixed resize rules, applied per image:

  square images        → 800×800 (standardized size, may upscale)
  width/height ≥ 4000  → both edges halved
  width/height ≥ 2000  → both edges scaled to 80%
  smaller              → kept as-is

Menu:

  1  single file   — one path per line; also accepts .webp sources
  2  whole folder  — recursive, converts every .png/.jpg/.jpeg
  3  WebP to JPEG  — same modes, additionally re-encodes each produced
                     .webp to a sibling .jpg

The loop runs until end of input; invalid paths and selections re-prompt.")]
#[command(version)]
struct Cli {
    /// WebP quality for the whole session (1-100)
    #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u32).range(1..=100))]
    quality: u32,

    /// Skip the startup banner
    #[arg(long)]
    no_banner: bool,
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    let quality = Quality::new(cli.quality);
    if !cli.no_banner {
        output::print_banner(quality);
    }

    let backend = RustBackend::new();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    menu::run(
        &backend,
        ConvertConfig::new(quality),
        &mut stdin.lock(),
        &mut stdout,
    )
}
