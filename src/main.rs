use clap::{Parser, Subcommand};
use folio::slideshow::Slideshow;
use folio::{config, content, generate, output};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Static site generator for a portfolio and blog")]
#[command(long_about = "\
Static site generator for a portfolio and blog

Content structure:

  content/
  ├── config.toml                  # Site config (optional, overrides stock defaults)
  ├── assets/                      # Images, favicon → copied to output
  └── data/
      ├── projects.json            # Portfolio grid and slideshows
      ├── blog.json                # Blog posts (Markdown or HTML bodies)
      └── testimonials.json        # Carousel entries

Each document loads independently: a missing or broken file shows an
inline error in its own section and the rest of the site still builds.

Run 'folio gen-config' to generate a documented config.toml.")]
#[command(version = env!("FOLIO_BUILD_VERSION"))]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load content and write the site
    Build,
    /// Validate content without building; fails if any document does not load
    Check,
    /// List the slides of one project's slideshow
    Slides {
        /// Project id as it appears in projects.json
        project_id: String,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "folio=debug" } else { "folio=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let content = content::load(&cli.source)?;

            println!("==> Generating HTML → {}", cli.output.display());
            let report = generate::generate(&content, &cli.source, &cli.output)?;
            output::print_build_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let content = content::load(&cli.source)?;
            output::print_check_output(&content, &cli.source);
            let failures = content.failures();
            if !failures.is_empty() {
                let names: Vec<&str> = failures.iter().map(|(name, _)| *name).collect();
                return Err(format!("content failed to load: {}", names.join(", ")).into());
            }
            println!("==> Content is valid");
        }
        Command::Slides { project_id } => {
            let content = content::load(&cli.source)?;
            if let Some(reason) = content.projects.error() {
                return Err(format!("projects failed to load: {reason}").into());
            }
            let mut slideshow = Slideshow::new(content.projects.items().to_vec());
            if !slideshow.open_key(&project_id) {
                return Err(format!("no project with id {project_id}").into());
            }
            info!(project = %project_id, "walking slideshow");
            output::print_slides_output(&mut slideshow);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
