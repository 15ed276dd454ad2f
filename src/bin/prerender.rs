//! Writes the server-rendered page into the page built by Trunk.
//!
//! ```text
//! trunk build --release hydrate.html
//! prerender --template dist/index.html --out dist/index.html
//! ```

use std::fs;
use std::path::PathBuf;

use clap::Parser;

/// Placeholder replaced by the rendered markup.
const APP_MARKER: &str = "<!-- ethdeck:app -->";

/// Empty mount point, used when a build step stripped the placeholder.
const EMPTY_ROOT: &str = "<div id=\"app\"></div>";

/// Asset links that only Trunk understands.
const TRUNK_LINK: &str = "data-trunk";

#[derive(Debug, Parser)]
#[command(name = "prerender", about = "Prerender the wallet page into an HTML file")]
struct Args {
    /// Page built by `trunk build hydrate.html`.
    #[arg(long, default_value = "dist/index.html")]
    template: PathBuf,

    /// Output file.
    #[arg(long, default_value = "dist/index.html")]
    out: PathBuf,
}

fn inject(template: &str, app: &str) -> Result<String, String> {
    if template.contains(TRUNK_LINK) {
        return Err(format!(
            "template still has {} links; run `trunk build hydrate.html` and pass the built page",
            TRUNK_LINK
        ));
    }
    if template.contains(APP_MARKER) {
        return Ok(template.replacen(APP_MARKER, app, 1));
    }
    if template.contains(EMPTY_ROOT) {
        return Ok(template.replacen(EMPTY_ROOT, &format!("<div id=\"app\">{}</div>", app), 1));
    }
    Err(format!(
        "template has neither the {} placeholder nor an empty #app",
        APP_MARKER
    ))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let template = fs::read_to_string(&args.template)
        .map_err(|e| format!("cannot read {}: {}", args.template.display(), e))?;
    let page = inject(&template, &ethdeck::render_to_html())?;

    if let Some(parent) = args.out.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&args.out, page)?;
    println!("wrote {}", args.out.display());
    Ok(())
}
