//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::adapters::console_report::{
    render_bakeries, render_bakery, render_cart, render_categories, render_dashboard,
    render_menu, render_recommendations,
};
use crate::adapters::csv_cart_adapter::CsvCartAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_dataset_adapter::{DEFAULT_SAMPLE_DATA_PATH, JsonDatasetAdapter};
use crate::domain::bakery::{self, bakery_menu, find_bakery};
use crate::domain::cart::{Cart, QuantityChange};
use crate::domain::catalog::{self, MenuItem};
use crate::domain::config_validation::{
    unknown_keys, validate_config, validate_forecast_config, validate_pricing_config,
};
use crate::domain::dashboard::{Dashboard, Tab};
use crate::domain::error::DessertError;
use crate::domain::forecast::MergeMode;
use crate::domain::pricing::{DEFAULT_DELIVERY_FEE, DEFAULT_TAX_RATE, PricingPolicy};
use crate::domain::recommendations::{sample_events, seasonal_items, upcoming};
use crate::ports::cart_port::CartPort;
use crate::ports::config_port::ConfigPort;
use crate::ports::forecast_port::ForecastPort;

#[derive(Parser, Debug)]
#[command(
    name = "dessertdash",
    about = "Dessert storefront cart pricing and sales forecast dashboard"
)]
pub struct Cli {
    /// INI configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the sample menu
    Menu {
        #[arg(long, default_value = catalog::ALL_CATEGORIES)]
        category: String,
        /// List the menu's categories instead of its items
        #[arg(long)]
        categories: bool,
    },
    /// Price a cart
    Cart {
        /// Cart CSV with columns id,name,bakery,price,quantity
        #[arg(short, long)]
        items: Option<PathBuf>,
        /// Add one unit of a menu item
        #[arg(long = "add", value_name = "MENU_ID")]
        add: Vec<u32>,
        #[arg(long = "increment", value_name = "ID")]
        increment: Vec<u32>,
        #[arg(long = "decrement", value_name = "ID")]
        decrement: Vec<u32>,
        #[arg(long = "remove", value_name = "ID")]
        remove: Vec<u32>,
    },
    /// Show the forecast dashboard from the sample data file
    Dashboard {
        #[arg(short, long)]
        data: Option<PathBuf>,
        #[arg(short, long, default_value = "overview")]
        tab: Tab,
    },
    /// Upload a sales CSV to the forecast service and show the result
    Upload {
        #[arg(short, long)]
        file: PathBuf,
        #[arg(long)]
        endpoint: Option<String>,
        #[arg(short, long, default_value = "overview")]
        tab: Tab,
    },
    /// Validate the configuration file
    Validate,
    /// List nearby bakeries with their offers
    Bakeries,
    /// Show one bakery's details, opening hours and menu
    Bakery {
        #[arg(long)]
        id: u32,
    },
    /// Upcoming seasonal events and what to stock for them
    Recommendations {
        /// Only events on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
    },
}

/// Cart edits applied in order: adds, increments, decrements, removals.
#[derive(Debug, Clone, Default)]
pub struct CartOps {
    pub add: Vec<u32>,
    pub increment: Vec<u32>,
    pub decrement: Vec<u32>,
    pub remove: Vec<u32>,
}

pub fn run(cli: Cli) -> ExitCode {
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Dispatch a parsed command line. Output goes to stdout; errors are returned.
pub fn execute(cli: Cli) -> Result<(), DessertError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Menu {
            category,
            categories,
        } => run_menu(&category, categories),
        Command::Cart {
            items,
            add,
            increment,
            decrement,
            remove,
        } => {
            let ops = CartOps {
                add,
                increment,
                decrement,
                remove,
            };
            run_cart(&config, items.as_deref(), &ops)
        }
        Command::Dashboard { data, tab } => run_dashboard(&config, data.as_deref(), tab),
        Command::Upload {
            file,
            endpoint,
            tab,
        } => run_upload(&config, &file, endpoint.as_deref(), tab),
        Command::Validate => run_validate(&config, cli.config.as_deref()),
        Command::Bakeries => run_bakeries(),
        Command::Bakery { id } => run_bakery(id),
        Command::Recommendations { from } => run_recommendations(from.as_deref()),
    }
}

/// Load the INI file, or an empty config when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<FileConfigAdapter, DessertError> {
    match path {
        None => Ok(FileConfigAdapter::empty()),
        Some(path) => FileConfigAdapter::from_file(path),
    }
}

pub const DEFAULT_LOG_FILTER: &str = "info";

/// First directive that parses: `RUST_LOG`, then `[logging] filter`, then `info`.
pub fn filter_directive(env: Option<&str>, configured: Option<&str>) -> String {
    [env, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .find(|d| EnvFilter::try_new(d).is_ok())
        .unwrap_or(DEFAULT_LOG_FILTER)
        .to_string()
}

/// Install the stderr log subscriber.
pub fn init_logging(config_path: Option<&Path>) {
    let configured = config_path
        .and_then(|p| FileConfigAdapter::from_file(p).ok())
        .and_then(|c| c.get_string("logging", "filter"));
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    let directive = filter_directive(env.as_deref(), configured.as_deref());
    let filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn build_pricing_policy(config: &dyn ConfigPort) -> Result<PricingPolicy, DessertError> {
    validate_pricing_config(config)?;
    Ok(PricingPolicy {
        delivery_fee: config.get_double("pricing", "delivery_fee", DEFAULT_DELIVERY_FEE),
        tax_rate: config.get_double("pricing", "tax_rate", DEFAULT_TAX_RATE),
    })
}

pub fn build_merge_mode(config: &dyn ConfigPort) -> Result<MergeMode, DessertError> {
    validate_forecast_config(config)?;
    Ok(config
        .get_string("forecast", "merge_mode")
        .and_then(|m| m.parse().ok())
        .unwrap_or_default())
}

/// `--data`, then `[forecast] sample_data`, then the bundled default location.
pub fn resolve_sample_data_path(config: &dyn ConfigPort, override_path: Option<&Path>) -> PathBuf {
    match override_path {
        Some(p) => p.to_path_buf(),
        None => config
            .get_trimmed("forecast", "sample_data")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SAMPLE_DATA_PATH)),
    }
}

/// Build a cart from an optional source and apply edits.
pub fn build_cart(
    source: Option<&dyn CartPort>,
    menu: &[MenuItem],
    ops: &CartOps,
) -> Result<Cart, DessertError> {
    let mut cart = match source {
        Some(port) => Cart::from_items(port.load_items()?),
        None => Cart::new(),
    };

    for &id in &ops.add {
        let item = catalog::find(menu, id).ok_or(DessertError::UnknownItem { id })?;
        cart.add(item);
    }
    for &id in &ops.increment {
        report_change(id, cart.increment(id));
    }
    for &id in &ops.decrement {
        report_change(id, cart.decrement(id));
    }
    for &id in &ops.remove {
        if cart.remove(id).is_none() {
            tracing::warn!(id, "remove: item not in cart");
        }
    }
    Ok(cart)
}

fn report_change(id: u32, change: QuantityChange) {
    match change {
        QuantityChange::Updated => {}
        QuantityChange::Ignored => tracing::info!(id, "quantity already at minimum"),
        QuantityChange::NotFound => tracing::warn!(id, "item not in cart"),
    }
}

/// Upload the selected file and render the requested tab.
pub fn upload_and_render(
    dashboard: &mut Dashboard,
    service: &dyn ForecastPort,
    tab: Tab,
) -> Result<String, DessertError> {
    dashboard.upload(service)?;
    dashboard.set_tab(tab);
    Ok(render_dashboard(dashboard))
}

fn run_menu(category: &str, list_categories: bool) -> Result<(), DessertError> {
    let menu = catalog::sample_menu();
    if list_categories {
        print!("{}", render_categories(&catalog::categories(&menu)));
    } else {
        print!("{}", render_menu(&catalog::filter_by_category(&menu, category)));
    }
    Ok(())
}

fn run_bakeries() -> Result<(), DessertError> {
    print!("{}", render_bakeries(&bakery::sample_bakeries()));
    Ok(())
}

fn run_bakery(id: u32) -> Result<(), DessertError> {
    let bakeries = bakery::sample_bakeries();
    let found = find_bakery(&bakeries, id).ok_or(DessertError::UnknownBakery { id })?;
    let menu = catalog::sample_menu();
    print!("{}", render_bakery(found, &bakery_menu(found, &menu)));
    Ok(())
}

fn run_recommendations(from: Option<&str>) -> Result<(), DessertError> {
    let events = sample_events();
    let listed = upcoming(&events, from);
    print!("{}", render_recommendations(&listed, seasonal_items(&listed)));
    Ok(())
}

fn run_cart(
    config: &dyn ConfigPort,
    items: Option<&Path>,
    ops: &CartOps,
) -> Result<(), DessertError> {
    let policy = build_pricing_policy(config)?;

    let adapter = items.map(|p| CsvCartAdapter::new(p.to_path_buf()));
    let source = adapter.as_ref().map(|a| a as &dyn CartPort);
    let menu = catalog::sample_menu();

    let cart = build_cart(source, &menu, ops)?;
    print!("{}", render_cart(&cart, &cart.summary(&policy)));
    Ok(())
}

fn run_dashboard(
    config: &dyn ConfigPort,
    data: Option<&Path>,
    tab: Tab,
) -> Result<(), DessertError> {
    let merge_mode = build_merge_mode(config)?;

    let path = resolve_sample_data_path(config, data);
    let source = JsonDatasetAdapter::new(path);
    let mut dashboard = Dashboard::load(&source, merge_mode);
    dashboard.set_tab(tab);
    print!("{}", render_dashboard(&dashboard));
    Ok(())
}

fn run_upload(
    config: &dyn ConfigPort,
    file: &Path,
    endpoint: Option<&str>,
    tab: Tab,
) -> Result<(), DessertError> {
    let merge_mode = build_merge_mode(config)?;

    let mut dashboard = Dashboard::new(merge_mode);
    dashboard.select_file(file)?;

    #[cfg(feature = "http")]
    {
        use crate::adapters::http_forecast_adapter::HttpForecastAdapter;

        let adapter = match endpoint {
            Some(url) => HttpForecastAdapter::new(url)?,
            None => HttpForecastAdapter::from_config(config)?,
        };
        let text = upload_and_render(&mut dashboard, &adapter, tab)?;
        print!("{text}");
        Ok(())
    }

    #[cfg(not(feature = "http"))]
    {
        let _ = (endpoint, tab, &mut dashboard);
        Err(DessertError::ForecastRequest {
            reason: "http feature is required for upload".into(),
        })
    }
}

fn run_validate(config: &dyn ConfigPort, path: Option<&Path>) -> Result<(), DessertError> {
    let path = path.ok_or_else(|| DessertError::ConfigMissing {
        section: "cli".into(),
        key: "--config".into(),
    })?;
    validate_config(config)?;
    for (section, key) in unknown_keys(config) {
        tracing::warn!(section = %section, key = %key, "unrecognised config key");
    }
    eprintln!("{}: configuration is valid", path.display());
    Ok(())
}
