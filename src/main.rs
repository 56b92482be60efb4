use std::env;
use std::path::PathBuf;
use translation_bundler::{run, CliOptions};

fn usage() -> ! {
    eprintln!(
        "Usage: translation-bundler [--catalog items.json] [--variants variants.json] \
[--sheets SHEET_DIR] [--out BUNDLE_DIR]"
    );
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut catalog_path = PathBuf::from("catalog/items.json");
    let mut variants_path = PathBuf::from("catalog/variants.json");
    let mut sheets_dir = PathBuf::from("sheets");
    let mut out_dir = PathBuf::from("bundles");

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--catalog" => {
                catalog_path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--catalog requires a path (e.g. --catalog items.json)")
                })?;
            }
            "--variants" => {
                variants_path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--variants requires a path (e.g. --variants variants.json)")
                })?;
            }
            "--sheets" => {
                sheets_dir = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--sheets requires a directory of category CSVs")
                })?;
            }
            "--out" => {
                out_dir = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--out requires an output directory")
                })?;
            }
            "--help" | "-h" => usage(),
            other => return Err(anyhow::anyhow!("Unknown argument {other}")),
        }
    }

    Ok(CliOptions {
        catalog_path,
        variants_path,
        sheets_dir,
        out_dir,
    })
}

fn main() -> anyhow::Result<()> {
    let opts = parse_args()?;
    run(opts)
}
