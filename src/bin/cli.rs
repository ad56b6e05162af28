//! DineDash CLI
//!
//! Command-line interface over the dashboard core:
//! - Browse the overview, restaurants, anomalies and analytics
//! - Export data as CSV or JSON
//! - Read and switch the persisted theme mode
//! - Replay scripted dashboard sessions

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

use dinedash::analytics::{option_label, AnalyticsOptions, AnalyticsView, StatCard};
use dinedash::export::{export_anomalies, export_restaurants, ExportFormat};
use dinedash::format::{currency, price, thousands};
use dinedash::model::{Anomaly, Restaurant};
use dinedash::overview::{Overview, QUICK_ACTIONS};
use dinedash::provider::{provider_for, DataProvider};
use dinedash::session::Command as SessionCommand;
use dinedash::theme::{FilePreferences, Palette, ThemeMode, ThemeService};
use dinedash::view::PAGE_SIZE_OPTIONS;
use dinedash::{
    generate_default_config, AnomalyAction, Config, Dashboard, Page,
};
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dinedash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Restaurant platform admin dashboard")]
#[command(long_about = "DineDash manages restaurant partners, platform analytics and AI anomaly alerts.\nAll changes live in memory for the duration of one command or session.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: platform config dir, then ./dinedash.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the dashboard overview
    Overview,

    /// Browse restaurants
    Restaurants {
        #[command(subcommand)]
        action: RestaurantCommand,
    },

    /// Browse the anomaly feed
    Anomalies {
        #[command(subcommand)]
        action: AnomalyCommand,
    },

    /// Show analytics charts as tables
    Analytics {
        #[arg(long, default_value = "all")]
        city: String,
        #[arg(long, default_value = "all")]
        cuisine: String,
        #[arg(long, default_value = "all")]
        partner: String,
    },

    /// Export restaurants or anomalies
    Export {
        /// What to export (restaurants, anomalies)
        #[arg(default_value = "restaurants")]
        entity: String,
        /// File format (csv, json)
        #[arg(long = "as", default_value = "csv")]
        export_as: String,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Read or change the theme mode
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommand>,
    },

    /// Dump the built-in seed data as JSON
    Seed {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run dashboard commands from a script (default: stdin)
    Session {
        script: Option<PathBuf>,
        /// Print the restaurant table and anomaly feed afterwards
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
pub enum RestaurantCommand {
    /// List restaurants, one page at a time
    List {
        #[arg(long, default_value = "all")]
        city: String,
        #[arg(long, default_value = "all")]
        cuisine: String,
        #[arg(long, default_value = "all")]
        partner: String,
        #[arg(long, default_value = "all")]
        status: String,
        /// Page number, starting at 1
        #[arg(long, default_value = "1")]
        page: usize,
        /// Rows per page (default from config)
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Show a restaurant's details and menu
    Show { id: u32 },
}

#[derive(Subcommand)]
pub enum AnomalyCommand {
    /// List anomalies (filter: all, a severity or a status)
    List {
        #[arg(long, default_value = "all")]
        filter: String,
    },
    /// Show an anomaly's investigation details
    Show { id: String },
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    /// Print the current mode
    Get,
    /// Set the mode (light, dark)
    Set { mode: String },
    /// Switch between light and dark
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    fn parse(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => bail!("Unknown output format: {} (expected table, json or csv)", other),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config decides the final log setup, so its own events go to a
    // bootstrap subscriber
    let config = tracing::subscriber::with_default(bootstrap_subscriber(std::io::stderr), || {
        match &cli.config {
            Some(path) => Config::load_with_env(path)
                .with_context(|| format!("loading config {}", path.display())),
            None => Ok(Config::load_default()),
        }
    })?;
    init_logging(&config);

    let format = OutputFormat::parse(&cli.format)?;

    match cli.command {
        Commands::Config { output } => {
            write_output(&generate_default_config(), output.as_deref())?;
        }

        Commands::Seed { output } => {
            let json = serde_json::to_string_pretty(&dinedash::SeedProvider.bundle())?;
            write_output(&json, output.as_deref())?;
        }

        Commands::Theme { action } => {
            let path = config.preferences.resolved_path();
            let mut service = ThemeService::new(FilePreferences::new(path.clone()));
            match action.unwrap_or(ThemeCommand::Get) {
                ThemeCommand::Get => {}
                ThemeCommand::Set { mode } => {
                    let mode: ThemeMode = mode.parse()?;
                    service
                        .set(mode)
                        .with_context(|| format!("saving theme to {}", path.display()))?;
                }
                ThemeCommand::Toggle => {
                    service
                        .toggle()
                        .with_context(|| format!("saving theme to {}", path.display()))?;
                }
            }
            print_theme(service.get(), format)?;
        }

        command => {
            let provider = provider_for(config.data.seed_path.as_deref())?;
            let dashboard = Dashboard::with_config(provider.as_ref(), &config);
            run_dashboard_command(command, dashboard, &config, format)?;
        }
    }

    Ok(())
}

fn bootstrap_subscriber<W>(writer: W) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dinedash=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("dinedash={}", config.logging.level)),
    );

    // stdout carries command output; logs go to stderr
    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run_dashboard_command(
    command: Commands,
    mut dashboard: Dashboard,
    config: &Config,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match command {
        Commands::Overview => {
            let overview = dashboard.overview();
            match format {
                OutputFormat::Json => print_json(&overview)?,
                _ => print_overview(&overview),
            }
        }

        Commands::Restaurants { action } => match action {
            RestaurantCommand::List {
                city,
                cuisine,
                partner,
                status,
                page,
                page_size,
            } => {
                for (key, selection) in [
                    ("city", &city),
                    ("cuisine", &cuisine),
                    ("partner", &partner),
                    ("status", &status),
                ] {
                    dashboard.set_restaurant_filter(key, selection)?;
                }
                let size = page_size.unwrap_or(config.data.page_size);
                if !PAGE_SIZE_OPTIONS.contains(&size) {
                    tracing::warn!(size, "page size is not one of the table options");
                }
                dashboard.set_page_size(size);
                dashboard.set_page(page.saturating_sub(1));

                let page = dashboard.restaurant_page();
                match format {
                    OutputFormat::Json => print_json(&page)?,
                    OutputFormat::Csv => {
                        let rows: Vec<Restaurant> = page.items.iter().map(|r| (*r).clone()).collect();
                        print!("{}", export_restaurants(&rows, ExportFormat::Csv)?);
                    }
                    OutputFormat::Table => print_restaurant_table(&page),
                }
            }
            RestaurantCommand::Show { id } => {
                let Some(restaurant) = dashboard.restaurant(id) else {
                    bail!("Restaurant {} not found", id);
                };
                match format {
                    OutputFormat::Json => print_json(restaurant)?,
                    _ => print_restaurant_details(restaurant),
                }
            }
        },

        Commands::Anomalies { action } => match action {
            AnomalyCommand::List { filter } => {
                dashboard.set_anomaly_filter(&filter)?;
                let visible: Vec<Anomaly> =
                    dashboard.visible_anomalies().into_iter().cloned().collect();
                match format {
                    OutputFormat::Json => print_json(&visible)?,
                    OutputFormat::Csv => print!("{}", export_anomalies(&visible, ExportFormat::Csv)?),
                    OutputFormat::Table => {
                        let banner = dashboard.overview().banner;
                        println!("Critical Anomalies: {}", banner.message());
                        println!();
                        print_anomaly_table(&visible);
                    }
                }
            }
            AnomalyCommand::Show { id } => {
                let Some(anomaly) = dashboard.anomalies().get(&id) else {
                    bail!("Anomaly {} not found", id);
                };
                match format {
                    OutputFormat::Json => print_json(anomaly)?,
                    _ => print_anomaly_details(anomaly),
                }
            }
        },

        Commands::Analytics {
            city,
            cuisine,
            partner,
        } => {
            dashboard.set_analytics_filter("city", &city)?;
            dashboard.set_analytics_filter("cuisine", &cuisine)?;
            dashboard.set_analytics_filter("partner", &partner)?;
            let view = dashboard.analytics_view();
            match format {
                OutputFormat::Json => print_json(&view)?,
                _ => print_analytics(&view, &dashboard.analytics_options(), &dashboard),
            }
        }

        Commands::Export {
            entity,
            export_as,
            output,
        } => {
            let export_format: ExportFormat = export_as.parse()?;
            let content = match entity.as_str() {
                "restaurants" => export_restaurants(dashboard.restaurants().list(), export_format)?,
                "anomalies" => export_anomalies(dashboard.anomalies().list(), export_format)?,
                other => bail!("Cannot export '{}' (expected restaurants or anomalies)", other),
            };
            write_output(&content, output.as_deref())?;
        }

        Commands::Session { script, show } => {
            let text = match &script {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("reading session script {}", path.display()))?,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };
            run_session(&mut dashboard, &text);

            if show {
                println!();
                match format {
                    OutputFormat::Json => {
                        print_json(&serde_json::json!({
                            "section": dashboard.section(),
                            "restaurants": dashboard.restaurant_page(),
                            "anomalies": dashboard.visible_anomalies(),
                        }))?;
                    }
                    _ => {
                        println!("Section: {}", dashboard.section().title());
                        println!();
                        print_restaurant_table(&dashboard.restaurant_page());
                        println!();
                        let visible: Vec<Anomaly> =
                            dashboard.visible_anomalies().into_iter().cloned().collect();
                        print_anomaly_table(&visible);
                    }
                }
            }
        }

        Commands::Theme { .. } | Commands::Seed { .. } | Commands::Config { .. } => {
            unreachable!("handled before the dashboard is built")
        }
    }

    Ok(())
}

/// Apply each script line, reporting failures without stopping
fn run_session(dashboard: &mut Dashboard, script: &str) {
    for (number, line) in script.lines().enumerate() {
        let result = SessionCommand::parse(line)
            .and_then(|command| command.map(|c| dashboard.apply(c)).transpose());
        match result {
            Ok(Some(message)) => println!("{}", message),
            Ok(None) => {}
            Err(e) => eprintln!("line {}: {}", number + 1, e),
        }
    }
}

fn write_output(content: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Written to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_theme(mode: ThemeMode, format: OutputFormat) -> anyhow::Result<()> {
    let palette = Palette::for_mode(mode);
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({ "mode": mode, "palette": palette })),
        _ => {
            println!("Theme: {}", mode);
            println!("Primary: {}  Secondary: {}", palette.primary, palette.secondary);
            println!("Background: {}  Paper: {}", palette.background, palette.paper);
            Ok(())
        }
    }
}

fn print_stat_cards(cards: &[StatCard]) {
    for card in cards {
        println!("  {:<20} {:>10}  ({})", card.title, card.value, card.change);
    }
}

fn print_overview(overview: &Overview) {
    println!("System Status: {}", overview.banner.message());
    println!();
    print_stat_cards(&overview.stats);

    println!();
    println!("Recent Activity");
    for entry in &overview.activity {
        println!("  {:<24} {:<46} {}", entry.title, entry.description, entry.time);
    }

    println!();
    println!("Top Performing Restaurants");
    for top in &overview.top_performers {
        println!(
            "  #{} {:<26} {:<14} {:>10}  {:.1}★  {:>5.1}%",
            top.rank,
            top.name,
            top.city,
            currency(top.revenue),
            top.rating,
            top.progress
        );
    }

    println!();
    println!("Quick Actions");
    for action in QUICK_ACTIONS {
        println!("  {:<16} {:<24} -> {}", action.label, action.caption, action.section.title());
    }
}

fn print_restaurant_table(page: &Page<&Restaurant>) {
    if page.is_empty() {
        println!("No restaurants match the current filters");
        return;
    }

    println!(
        "{:<4} | {:<24} | {:<14} | {:<10} | {:<16} | {:<8} | {:>10} | {:>6} | {:>6}",
        "ID", "Name", "City", "Cuisine", "Partner", "Status", "Revenue", "Rating", "Orders"
    );
    println!("{}", "-".repeat(124));
    for r in &page.items {
        println!(
            "{:<4} | {:<24} | {:<14} | {:<10} | {:<16} | {:<8} | {:>10} | {:>6.1} | {:>6}",
            r.id,
            r.name,
            r.city,
            r.cuisine,
            r.partner,
            r.status.as_str(),
            currency(r.revenue),
            r.rating,
            thousands(u64::from(r.orders))
        );
    }
    println!();
    println!(
        "Rows per page: {}   {}   (page {} of {})",
        page.page_size,
        page.label(),
        page.page + 1,
        page.page_count.max(1)
    );
}

fn print_restaurant_details(r: &Restaurant) {
    println!("{}", r.name);
    println!("{}", "=".repeat(r.name.chars().count()));
    println!("Address:  {}", r.location_line());
    println!("Phone:    {}", r.phone.as_deref().unwrap_or("Phone not provided"));
    println!("Email:    {}", r.email.as_deref().unwrap_or("Email not provided"));
    if let Some(manager) = &r.manager {
        println!("Manager:  {}", manager);
    }
    println!("Partner:  {}   Status: {}", r.partner, r.status);
    println!();
    println!(
        "Revenue: {}   Rating: {:.1}   Orders: {}",
        currency(r.revenue),
        r.rating,
        thousands(u64::from(r.orders))
    );
    println!();

    match &r.menu {
        Some(menu) if !menu.is_empty() => {
            println!("Menu");
            for category in menu {
                println!("  {}", category.category);
                for item in &category.items {
                    println!("    {:<24} {:>6}  {}", item.name, price(item.price), item.description);
                }
            }
        }
        _ => println!("Menu information not available"),
    }
}

fn print_anomaly_table(anomalies: &[Anomaly]) {
    if anomalies.is_empty() {
        println!("No anomalies match the current filter");
        return;
    }

    println!(
        "{:<4} | {:<8} | {:<13} | {:<26} | {:<24} | {:>5} | {:<10} | Actions",
        "ID", "Severity", "Status", "Title", "Restaurant", "Conf.", "Detected"
    );
    println!("{}", "-".repeat(126));
    for a in anomalies {
        let actions: Vec<&str> = AnomalyAction::available(a.status)
            .iter()
            .map(|action| action.as_str())
            .chain(std::iter::once("dismiss"))
            .collect();
        println!(
            "{:<4} | {:<8} | {:<13} | {:<26} | {:<24} | {:>4}% | {:<10} | {}",
            a.id,
            a.severity.as_str().to_uppercase(),
            a.status.as_str().to_uppercase(),
            a.title,
            format!("{}, {}", a.restaurant, a.city),
            a.confidence,
            a.timestamp,
            actions.join(" ")
        );
    }
}

fn print_anomaly_details(a: &Anomaly) {
    println!("{} [{} / {}]", a.title, a.severity.as_str().to_uppercase(), a.status.as_str().to_uppercase());
    println!("{}", a.description);
    println!("{}, {} · impact {} · confidence {}% · {}", a.restaurant, a.city, a.impact, a.confidence, a.timestamp);

    let detail = &a.detail;
    if !detail.affected_metrics.is_empty() {
        println!();
        println!("Affected Metrics");
        for m in &detail.affected_metrics {
            println!("  {:<16} {:>10} -> {:<10} {}", m.metric, m.before, m.after, m.change);
        }
    }
    if !detail.timeline.is_empty() {
        println!();
        println!("Timeline");
        for event in &detail.timeline {
            println!("  {}  {}", event.time, event.event);
        }
    }
    if !detail.recommendations.is_empty() {
        println!();
        println!("Recommendations");
        for rec in &detail.recommendations {
            println!("  - {}", rec);
        }
    }
    if !detail.technical_details.is_empty() {
        println!();
        println!("Technical: {}", detail.technical_details);
    }
    if !detail.estimated_resolution.is_empty() {
        println!("Estimated resolution: {}", detail.estimated_resolution);
    }

    let actions: Vec<&str> = AnomalyAction::available(a.status)
        .iter()
        .map(|action| action.label())
        .collect();
    println!();
    println!("Available actions: {}", actions.join(", "));
}

fn print_analytics(view: &AnalyticsView, options: &AnalyticsOptions, dashboard: &Dashboard) {
    let filters = dashboard.analytics_filters();
    println!(
        "Filters: {} · {} · {}",
        option_label("city", filters.city.as_str()),
        option_label("cuisine", filters.cuisine.as_str()),
        option_label("partner", filters.partner.as_str())
    );
    println!(
        "Options: {} cities, {} cuisines, {} partner tiers",
        options.cities.len() - 1,
        options.cuisines.len() - 1,
        options.partners.len() - 1
    );
    println!();
    print_stat_cards(&view.kpis);

    println!();
    println!("Revenue by City");
    for c in &view.revenue_by_city {
        println!(
            "  {:<14} {:>10}  {:>6} orders  {:>3} restaurants",
            c.city,
            currency(c.revenue),
            thousands(u64::from(c.orders)),
            c.restaurants
        );
    }

    println!();
    println!("Cuisine Distribution");
    for c in &view.cuisine_share {
        println!("  {:<10} {:>3}%  {}", c.name, c.value, "#".repeat(c.value as usize));
    }

    println!();
    println!("Monthly Revenue Trends");
    for m in &view.monthly_trends {
        println!(
            "  {:<4} {:>10}  {:>6} orders  {:>3} partners",
            m.month,
            currency(m.revenue),
            thousands(u64::from(m.orders)),
            m.partners
        );
    }

    println!();
    println!("Partner Performance");
    for p in &view.partner_performance {
        println!(
            "  {:<18} {:>10}  {:>3} partners  {:.1}★",
            p.tier,
            currency(p.revenue),
            p.count,
            p.avg_rating
        );
    }
}
