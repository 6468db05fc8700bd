use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_DIR: &str = "assets/css";
const CSS_ENTRY: &str = "assets/css/main.css";
const BUNDLE_OUT: &str = "assets/dist/bundle.css";

fn main() {
    watch_dir(CSS_DIR);
    watch_dir("assets/images");
    println!("cargo:rerun-if-changed=assets/site.json");

    if let Err(err) = write_bundle(Path::new(CSS_ENTRY), Path::new(BUNDLE_OUT)) {
        panic!("stylesheet bundle failed: {err}");
    }
}

/// Rerun on edits to any file in `dir`, not just on entries being added or removed
fn watch_dir(dir: &str) {
    println!("cargo:rerun-if-changed={dir}");

    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_file() {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}

/// Follows the `@import` chain from `entry`, minifies, and writes one file
fn write_bundle(entry: &Path, out: &Path) -> Result<(), String> {
    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(entry)
        .map_err(|err| format!("bundling {}: {err:?}", entry.display()))?;

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|err| format!("minifying: {err:?}"))?;

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|err| format!("printing: {err:?}"))?;

    if let Some(dir) = out.parent() {
        fs::create_dir_all(dir).map_err(|err| format!("creating {}: {err}", dir.display()))?;
    }
    fs::write(out, css.code).map_err(|err| format!("writing {}: {err}", out.display()))
}
