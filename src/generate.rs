//! Static prerender.
//!
//! Renders every route in both locales, in the initial presentation state
//! (agency theme, header hidden on home), into a directory that any static
//! host can serve. The browser runtime then boots on top of the markup.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Home, Arabic
//! ├── 404.html                   # Not found, Arabic
//! ├── ar/
//! │   ├── about/index.html
//! │   └── ...
//! ├── en/
//! │   ├── index.html             # Home, English
//! │   ├── 404.html
//! │   ├── about/index.html
//! │   └── ...
//! ├── assets/
//! │   └── site.3f9a1c2e.css      # Palette + stylesheet, content-hashed
//! ├── assets/Media/...           # Copied from the public directory
//! └── logos/clients/...
//! ```
//!
//! Each page's head goes through the same [`MetadataManager`](crate::head::MetadataManager)
//! the browser uses, applied to a [`MemoryHead`](crate::head::MemoryHead).
//!
//! Pages are rendered in parallel with rayon; the thread count comes from
//! `[processing] max_processes`.

use crate::config::{self, ConfigError, SiteConfig};
use crate::gallery::Gallery;
use crate::head::MetaDefaults;
use crate::render::{self, layout};
use crate::store::PresentationState;
use crate::types::{Locale, Route, Theme};
use chrono::{Datelike, Utc};
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/site.css");

/// Hex digits of the content hash kept in the stylesheet name.
const FINGERPRINT_LEN: usize = 8;

/// One written page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub route: Route,
    pub locale: Locale,
    /// Relative to the output directory.
    pub path: PathBuf,
    /// Full document title.
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub pages: Vec<GeneratedPage>,
    /// Relative to the output directory.
    pub stylesheet: PathBuf,
    /// Files copied from the public directory.
    pub assets_copied: usize,
}

/// Load `config.toml` from `source` and prerender into `output_dir`.
///
/// When `public_dir` is `None`, `source/public` is copied if it exists.
pub fn build(
    source: &Path,
    output_dir: &Path,
    public_dir: Option<&Path>,
) -> Result<GenerateReport, GenerateError> {
    let config = config::load_config(source)?;
    let public = public_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| source.join("public"));
    generate(&config, output_dir, Some(&public))
}

pub fn generate(
    config: &SiteConfig,
    output_dir: &Path,
    public_dir: Option<&Path>,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let assets_copied = match public_dir {
        Some(dir) if dir.is_dir() => copy_public(dir, output_dir)?,
        _ => 0,
    };

    let css = stylesheet();
    let stylesheet = PathBuf::from("assets").join(format!("site.{}.css", fingerprint(&css)));
    write_file(&output_dir.join(&stylesheet), &css)?;
    let href = format!("/{}", stylesheet.to_string_lossy().replace('\\', "/"));

    let year = current_year();
    let pages = page_plan()
        .par_iter()
        .map(|&(route, locale)| render_page(config, output_dir, route, locale, &href, year))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        pages = pages.len(),
        assets = assets_copied,
        output = %output_dir.display(),
        "site generated"
    );
    Ok(GenerateReport {
        pages,
        stylesheet,
        assets_copied,
    })
}

/// Every `(route, locale)` pair that gets a document, in output order.
pub fn page_plan() -> Vec<(Route, Locale)> {
    Locale::ALL
        .into_iter()
        .flat_map(|locale| {
            Route::ALL
                .into_iter()
                .chain([Route::NotFound])
                .map(move |route| (route, locale))
        })
        .collect()
}

/// Where the document for `route` in `locale` is written.
pub fn output_path(route: Route, locale: Locale) -> PathBuf {
    let prefix = match locale {
        Locale::Ar => PathBuf::new(),
        Locale::En => PathBuf::from("en"),
    };
    match (route, locale) {
        (Route::Home, _) => prefix.join("index.html"),
        (Route::NotFound, _) => prefix.join("404.html"),
        (route, locale) => PathBuf::from(locale.as_str())
            .join(route.slug())
            .join("index.html"),
    }
}

fn render_page(
    config: &SiteConfig,
    output_dir: &Path,
    route: Route,
    locale: Locale,
    stylesheet: &str,
    year: i32,
) -> Result<GeneratedPage, GenerateError> {
    let state = PresentationState {
        locale,
        ..PresentationState::with_route(route)
    };
    let view = render::page(route, Theme::Agency, locale, &Gallery::default(), config);
    let title = MetaDefaults::from(&config.meta).full_title(&view.meta.title);
    let document = layout::document(&state, &view, config, stylesheet, year)?;

    let path = output_path(route, locale);
    write_file(&output_dir.join(&path), &document.into_string())?;
    debug!(route = ?route, locale = locale.as_str(), path = %path.display(), "page written");

    Ok(GeneratedPage {
        route,
        locale,
        path,
        title,
    })
}

/// Palette custom properties followed by the static stylesheet.
pub fn stylesheet() -> String {
    format!("{}\n\n{}", config::generate_palette_css(), CSS_STATIC)
}

/// Leading hex digits of the SHA-256 of `content`.
pub fn fingerprint(content: &str) -> String {
    let digest = format!("{:x}", Sha256::digest(content.as_bytes()));
    digest[..FINGERPRINT_LEN].to_string()
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

/// Copy every file under `src` into `dst`, keeping relative paths.
fn copy_public(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &target)?;
        copied += 1;
    }
    debug!(files = copied, from = %src.display(), "public assets copied");
    Ok(copied)
}

/// Year of the current UTC date, for the footer copyright.
pub fn current_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    // =========================================================================
    // Layout
    // =========================================================================

    #[test]
    fn output_paths() {
        assert_eq!(output_path(Route::Home, Locale::Ar), PathBuf::from("index.html"));
        assert_eq!(output_path(Route::Home, Locale::En), PathBuf::from("en/index.html"));
        assert_eq!(output_path(Route::NotFound, Locale::Ar), PathBuf::from("404.html"));
        assert_eq!(
            output_path(Route::About, Locale::Ar),
            PathBuf::from("ar/about/index.html")
        );
        assert_eq!(
            output_path(Route::Terms, Locale::En),
            PathBuf::from("en/terms/index.html")
        );
    }

    #[test]
    fn plan_covers_every_route_in_both_locales() {
        let plan = page_plan();
        assert_eq!(plan.len(), 20);
        assert_eq!(plan[0], (Route::Home, Locale::Ar));
        assert_eq!(plan[10], (Route::Home, Locale::En));
    }

    #[test]
    fn copyright_year_is_current() {
        assert!(current_year() >= 2026);
        let tmp = TempDir::new().unwrap();
        generate(&SiteConfig::default(), tmp.path(), None).unwrap();
        let home = fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert!(home.contains(&format!("© {}", current_year())));
    }

    #[test]
    fn fingerprint_is_stable_prefix() {
        assert_eq!(fingerprint("abc"), "ba7816bf");
        assert_eq!(fingerprint(&stylesheet()).len(), FINGERPRINT_LEN);
    }

    // =========================================================================
    // Generation
    // =========================================================================

    #[test]
    fn generate_writes_pages_and_stylesheet() {
        let tmp = TempDir::new().unwrap();
        let report = generate(&SiteConfig::default(), tmp.path(), None).unwrap();

        assert_eq!(report.pages.len(), 20);
        assert_eq!(report.assets_copied, 0);
        let css = fs::read_to_string(tmp.path().join(&report.stylesheet)).unwrap();
        assert!(css.contains("--color-agency: #ebe125;"));

        let home = fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert!(home.contains("dir=\"rtl\""));
        assert!(home.contains(&format!(
            "href=\"/{}\"",
            report.stylesheet.to_string_lossy()
        )));

        let about = fs::read_to_string(tmp.path().join("en/about/index.html")).unwrap();
        assert!(about.contains("<title>About Us — Effect Wave | موجة تأثير</title>"));
        assert!(tmp.path().join("404.html").exists());
    }

    #[test]
    fn report_titles_follow_meta() {
        let tmp = TempDir::new().unwrap();
        let report = generate(&SiteConfig::default(), tmp.path(), None).unwrap();
        let home = report
            .pages
            .iter()
            .find(|p| p.route == Route::Home && p.locale == Locale::Ar)
            .unwrap();
        assert_eq!(home.title, "Effect Wave | موجة تأثير");
        let contact = report
            .pages
            .iter()
            .find(|p| p.route == Route::Contact && p.locale == Locale::Ar)
            .unwrap();
        assert_eq!(contact.title, "تواصل معنا — Effect Wave | موجة تأثير");
    }

    #[test]
    fn build_copies_public_tree_and_reads_config() {
        let source = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(
            source.path().join("config.toml"),
            "[site]\nbase_url = \"https://staging.effectwaveco.com\"\n",
        )
        .unwrap();
        let media = source.path().join("public/assets/Media");
        fs::create_dir_all(&media).unwrap();
        fs::write(media.join("studio-session.jpg"), b"jpg").unwrap();

        let report = build(source.path(), out.path(), None).unwrap();
        assert_eq!(report.assets_copied, 1);
        assert!(out.path().join("assets/Media/studio-session.jpg").exists());

        let privacy = fs::read_to_string(out.path().join("ar/privacy/index.html")).unwrap();
        assert!(privacy.contains("https://staging.effectwaveco.com/privacy"));
    }

    #[test]
    fn build_rejects_invalid_config() {
        let source = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(source.path().join("config.toml"), "[site]\nbase_url = \"ftp://x\"\n").unwrap();
        let err = build(source.path(), out.path(), None).unwrap_err();
        assert!(matches!(err, GenerateError::Config(ConfigError::Validation(_))));
    }
}
