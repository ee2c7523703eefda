use adorna_site::appointment::{self, AppointmentRequest};
use adorna_site::presenter::{CatalogView, CategoryFilter, Searchable};
use adorna_site::{config, generate, output, scan};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::{Level, subscriber::set_global_default};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "adorna-site")]
#[command(about = "Static site generator for a handcrafted jewelry and skincare studio")]
#[command(long_about = "\
Static site generator for a handcrafted jewelry and skincare studio

The studio's data files are the source. Earring attributes and artist
statements are joined into the jewelry catalog, products and market
locations are read from JSON, and about.md becomes the artist page.

Content structure:

  content/
  ├── config.toml                   # Site config (optional)
  ├── about.md                      # Artist page (optional)
  ├── data/
  │   ├── earring_attributes.csv    # Filename,Material,Size,Color Palette,Theme or Motif
  │   ├── earring_descriptions.txt  # filename: artist statement
  │   ├── soap_products.json        # Skincare products
  │   └── locations.json            # Markets and stores (optional)
  └── images/                       # Copied to dist/images/
      └── compressed/               # Carousel previews

A view whose data cannot be loaded falls back to placeholder items and
shows a notice instead of an empty page.

Run 'adorna-site gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (catalog manifest)
    #[arg(long, default_value = ".adorna-temp", global = true)]
    temp_dir: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Decrease log verbosity
    #[arg(short = 'q', action = clap::ArgAction::Count, global = true)]
    quiet: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load and join the data files into a catalog manifest
    Scan,
    /// Produce the HTML site from the catalog manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate the content directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Show one gallery view with search, category, and load-more applied
    Browse {
        /// Which gallery to show
        #[arg(long, value_enum, default_value_t = View::Jewelry)]
        view: View,
        /// Search term (matches title, materials, statement, scent, ingredients)
        #[arg(long, default_value = "")]
        search: String,
        /// Category tag, or "all"
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
        /// Number of times to press "Load More"
        #[arg(long, default_value_t = 0)]
        more: usize,
    },
    /// Submit an appointment request
    Appointment {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        phone: Option<String>,
        /// Preferred date, free-form
        #[arg(long)]
        date: Option<String>,
        /// One of the offered services
        #[arg(long)]
        service: Option<String>,
        /// Write the request into this directory instead of the configured notifier
        #[arg(long)]
        outbox: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum View {
    Jewelry,
    Skincare,
}

/// Map -q/-v to a tracing level on stderr. Default WARN; RUST_LOG still applies.
fn init_tracing(verbosity: i16) {
    let level = match verbosity {
        i16::MIN..=-1 => Level::ERROR,
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();

    let _ = set_global_default(subscriber);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(i16::from(cli.verbose) - i16::from(cli.quiet));

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            scan::write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("catalog.json");
            let report = generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_output(&report);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            let manifest_path = scan::write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let report = generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Browse {
            view,
            search,
            category,
            more,
        } => {
            let manifest = scan::scan(&cli.source)?;
            let gallery = &manifest.config.gallery;
            match view {
                View::Jewelry => {
                    let mut presenter =
                        CatalogView::new(manifest.jewelry.items, gallery.jewelry_page_size);
                    browse(&mut presenter, search, category.for_collections(), more);
                    output::print_browse_output("Jewelry", "pieces", &presenter, |i| {
                        i.title.as_str()
                    });
                }
                View::Skincare => {
                    let mut presenter =
                        CatalogView::new(manifest.skincare.items, gallery.skincare_page_size);
                    browse(&mut presenter, search, category, more);
                    output::print_browse_output("Skincare", "products", &presenter, |p| {
                        p.name.as_str()
                    });
                }
            }
        }
        Command::Appointment {
            name,
            email,
            message,
            phone,
            date,
            service,
            outbox,
        } => {
            let site_config = load_site_config(&cli.source)?;
            let request = AppointmentRequest {
                name,
                email,
                phone,
                preferred_date: date,
                service,
                message,
            };
            let notifier = appointment::notifier_from_config(
                &site_config.appointments,
                &cli.source,
                outbox.as_deref(),
            );
            let receipt = appointment::submit(&request, notifier.as_ref())?;
            output::print_receipt(&receipt);
        }
    }

    Ok(())
}

fn browse<T: Searchable>(
    presenter: &mut CatalogView<T>,
    search: String,
    category: CategoryFilter,
    more: usize,
) {
    presenter.set_search(search);
    presenter.set_category(category);
    for _ in 0..more {
        if !presenter.load_more() {
            break;
        }
    }
}

/// Site config for commands that don't need a full scan. A missing content
/// directory just means stock defaults.
fn load_site_config(source: &Path) -> Result<config::SiteConfig, config::ConfigError> {
    if source.is_dir() {
        config::load_config(source)
    } else {
        Ok(config::SiteConfig::default())
    }
}
