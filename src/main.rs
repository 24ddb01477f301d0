//! Sitenav CLI
//!
//! Command-line interface for the site navigation and theme preferences:
//! - Print the navigation outline for a page
//! - Look up page info
//! - Show, toggle or set the persisted theme
//! - List and switch styles

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sitenav::config::{generate_default_config, Config, LoggingConfig};
use sitenav::nav::{set_active, EntryState, Label, NavView, RawNavNode, ViewEntry};
use sitenav::theme::{FileStorage, HeadlessDocument, Theme, ThemeController};

#[derive(Parser)]
#[command(name = "sitenav")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Site navigation menu and theme preferences")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the navigation outline
    Tree {
        /// Page to mark as current
        #[arg(short, long)]
        active: Option<String>,
        /// Include entries inside collapsed folders
        #[arg(long)]
        all: bool,
    },

    /// Print a page's definition as JSON
    Lookup {
        /// Page or folder name
        name: String,
    },

    /// Show or change the theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// List or switch styles
    Style {
        #[command(subcommand)]
        action: Option<StyleAction>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the theme that would be applied
    Show,
    /// Flip between light and dark
    Toggle,
    /// Set light or dark
    Set { theme: Theme },
}

#[derive(Subcommand)]
pub enum StyleAction {
    /// List registered styles, marking the active one
    List,
    /// Switch to a registered style
    Set { key: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging);

    match cli.command {
        Commands::Tree { active, all } => {
            let tree = Arc::new(config.navigation.tree()?);
            let mut view = NavView::from_tree(tree);
            if let Some(page) = active.as_deref() {
                if set_active(&mut view, page).current.is_none() {
                    eprintln!("Page not in navigation: {}", page);
                }
            }
            print!("{}", render_outline(&view, all));
        }

        Commands::Lookup { name } => {
            let tree = config.navigation.tree()?;
            match tree.page_info(&name) {
                Some(node) => {
                    println!("{}", serde_json::to_string_pretty(&RawNavNode::from(node))?);
                }
                None => {
                    eprintln!("Page not found: {}", name);
                    std::process::exit(1);
                }
            }
        }

        Commands::Theme { action } => {
            let mut controller = theme_controller(&config);
            controller.init_theme_toggle()?;

            match action.unwrap_or(ThemeAction::Show) {
                ThemeAction::Show => {}
                ThemeAction::Toggle => {
                    controller.toggle_theme();
                }
                ThemeAction::Set { theme } => controller.choose_theme(theme),
            }
            println!("{}", controller.theme());
        }

        Commands::Style { action } => {
            let mut controller = theme_controller(&config);
            controller.init_theme_toggle()?;

            match action.unwrap_or(StyleAction::List) {
                StyleAction::List => {
                    let active = controller.dropdown().and_then(|d| d.active());
                    for (key, sheet) in controller.styles().iter() {
                        let marker = if Some(key) == active { "*" } else { " " };
                        println!("{} {:<12} {:<16} {}", marker, key, sheet.name, sheet.url);
                    }
                }
                StyleAction::Set { key } => {
                    if !controller.apply_style(&key) {
                        eprintln!("Unknown style: {}", key);
                        std::process::exit(1);
                    }
                    println!("{}", key);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("sitenav={}", logging.level))
    });
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn theme_controller(config: &Config) -> ThemeController<FileStorage, HeadlessDocument> {
    let path = config.preferences.storage_path();
    tracing::debug!("Preferences file: {:?}", path);

    ThemeController::new(
        FileStorage::new(path),
        HeadlessDocument::new(),
        config.styles.registry(),
    )
    .with_default_style(config.styles.default_style.clone())
}

fn render_outline(view: &NavView, all: bool) -> String {
    let mut out = String::new();

    let entries: Box<dyn Iterator<Item = &ViewEntry>> = if all {
        Box::new(view.entries().iter())
    } else {
        Box::new(view.visible_entries())
    };

    for entry in entries {
        let Some(node) = view.node(entry.id) else {
            continue;
        };

        let marker = match entry.state {
            EntryState::Folder { expanded: true } => "▾",
            EntryState::Folder { expanded: false } => "▸",
            EntryState::Link { current: true } => "●",
            EntryState::Link { current: false } => "·",
        };
        let label = match &node.label {
            Label::Key(key) => format!("[{}]", key),
            Label::Text(text) => text.clone(),
        };
        let target = entry.href.as_deref().unwrap_or("");

        out.push_str(&format!(
            "{}{} {:<24} {}\n",
            "  ".repeat(entry.depth()),
            marker,
            label,
            target
        ));
    }

    out
}
