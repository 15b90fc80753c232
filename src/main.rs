use clap::{Parser, Subcommand};
use effect_wave::{config, content, generate, output};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

fn version_string() -> &'static str {
    let on_tag = env!("SITE_ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("SITE_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "effect-wave")]
#[command(about = "Prerender the Effect Wave site")]
#[command(long_about = "\
Prerender the Effect Wave site

Every page is rendered in Arabic and English into a static directory. The
browser runtime (built separately with wasm-pack) boots on top of it and
takes over routing, theme, locale, gallery and animation.

Source structure:

  site/
  ├── config.toml                  # Optional, layered over stock defaults
  └── public/                      # Copied verbatim to the output root
      ├── EF logo.png
      ├── assets/Media/            # Gallery images
      ├── logos/clients/           # Client logos 01.png .. 13.png
      └── pkg/                     # wasm-pack output (effect_wave.js)

Output:

  dist/
  ├── index.html                   # Home, Arabic
  ├── 404.html
  ├── ar/<page>/index.html
  ├── en/index.html
  ├── en/<page>/index.html
  └── assets/site.<hash>.css

Run 'effect-wave gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Source directory holding config.toml and public/
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Log debug output from the build
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page into the output directory
    Build {
        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,

        /// Static files to copy (default: <source>/public)
        #[arg(long)]
        public: Option<PathBuf>,
    },
    /// Validate config and audit the content tables without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print the route table
    Routes,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build {
            output: out_dir,
            public,
        } => {
            let site_config = config::load_config(&cli.source)?;
            init_thread_pool(&site_config.processing);
            println!("==> Building {} → {}", cli.source.display(), out_dir.display());
            let report = generate::build(&cli.source, &out_dir, public.as_deref())?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", out_dir.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let audit = content::audit();
            output::print_check(&site_config, &audit);
            if !audit.issues().is_empty() {
                return Err(format!("{} content problems", audit.issues().len()).into());
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Routes => {
            output::print_routes();
        }
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,effect_wave=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize the rayon thread pool based on processing config.
///
/// Capped at the number of available CPU cores.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
