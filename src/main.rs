use clap::{Parser, Subcommand};
use mulyam::{catalog, config, generate, output, serve};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "mulyam")]
#[command(about = "Static site generator for the Mulyam Jewels storefront")]
#[command(long_about = "\
Static site generator for the Mulyam Jewels storefront

Renders eight pages into plain HTML:

  /                       Home
  /collections/           All collections
  /collections/women/     Women's collection
  /collections/kids/      Kids collection
  /collections/pets/      Pet jewelry
  /about/                 Brand story
  /size-guide/            Pet size guide
  /contact/               Contact channels and order form

Products and page copy are compiled into the binary. site.toml (optional)
sets the brand name, ordering channels, form target and colors. Files in
the assets directory next to it are copied to the output root.

Run 'mulyam gen-config' to generate a documented site.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site config file
    #[arg(long, default_value = "site.toml", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the site into the output directory
    Build,
    /// Validate config and render every page in memory without writing
    Check,
    /// Print the route table
    Routes,
    /// Print all display data as JSON
    Catalog,
    /// Print a stock site.toml with all options documented
    GenConfig,
    /// Preview the built site over HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to serve (defaults to --output)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.config)?;
            let assets = assets_dir(&cli.config, &site_config);
            println!("==> Building {}", cli.output.display());
            let report = generate::generate(
                &site_config,
                Some(&assets),
                &cli.output,
                generate::current_year(),
            )?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.config.display());
            let site_config = config::load_config(&cli.config)?;
            let report = generate::check(&site_config, generate::current_year())?;
            output::print_check_output(&report);
            println!("==> Site is valid");
        }
        Command::Routes => {
            output::print_routes();
        }
        Command::Catalog => {
            let site_config = config::load_config(&cli.config)?;
            let json = serde_json::to_string_pretty(&catalog::snapshot(&site_config))?;
            println!("{}", json);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Serve { port, dir } => {
            let dir = dir.unwrap_or(cli.output);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(serve::run(port, &dir))?;
        }
    }

    Ok(())
}

/// Resolve the assets directory relative to the config file.
fn assets_dir(config_path: &Path, site_config: &config::SiteConfig) -> PathBuf {
    config_path
        .parent()
        .unwrap_or(Path::new("."))
        .join(&site_config.assets_dir)
}
