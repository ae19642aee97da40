use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use edhrand_core::{
    generate_deck, DeckConfig, GeneratedDeck, RngState, ThemeChoice, ThemeSelector,
    ThemeSettings,
};
use edhrand_data::{load_themes, ScryfallClient, TaggerClient};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeMode {
    /// Pick one of the preset theme queries
    Preset,
    /// Derive the theme from the commander's keywords, tags and types
    Auto,
    /// No theme; every card comes from the unfiltered search
    #[value(name = "none")]
    Unthemed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "edhrand")]
#[command(about = "Random commander deck generator backed by Scryfall", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for every random choice (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Theme query used as-is, e.g. "(otag:synergy-artifact or t:artifact)"
    #[arg(long, conflicts_with = "theme_mode")]
    theme: Option<String>,

    /// Where the theme comes from when --theme is not given
    #[arg(long, value_enum, default_value_t = ThemeMode::Preset)]
    theme_mode: ThemeMode,

    /// JSON array of theme queries replacing the preset list (preset mode only)
    #[arg(long, conflicts_with = "theme")]
    themes_file: Option<PathBuf>,

    /// Extra search terms for picking the commander
    #[arg(long)]
    commander_query: Option<String>,

    /// Keywords sampled into a derived theme
    #[arg(long, default_value_t = 1)]
    keyword_amount: usize,

    /// Oracle tags sampled into a derived theme
    #[arg(long, default_value_t = 1)]
    otag_amount: usize,

    /// Illustration tags sampled into a derived theme
    #[arg(long, default_value_t = 1)]
    atag_amount: usize,

    /// Subtypes sampled into a derived theme
    #[arg(long, default_value_t = 1)]
    type_amount: usize,

    /// Delay before every search request, in milliseconds
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,

    /// Decklist output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Log only warnings and errors
    #[arg(long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn theme_settings(&self) -> ThemeSettings {
        ThemeSettings {
            keyword_amount: self.keyword_amount,
            otag_amount: self.otag_amount,
            atag_amount: self.atag_amount,
            type_amount: self.type_amount,
        }
    }

    fn theme_choice(&self) -> Result<ThemeChoice> {
        if let Some(theme) = &self.theme {
            return Ok(ThemeChoice::Explicit(theme.clone()));
        }
        if self.themes_file.is_some() && self.theme_mode != ThemeMode::Preset {
            bail!("--themes-file only applies to --theme-mode preset");
        }
        Ok(match self.theme_mode {
            ThemeMode::Preset => {
                let selector = match &self.themes_file {
                    Some(path) => ThemeSelector::new(load_themes(path)?),
                    None => ThemeSelector::default(),
                };
                ThemeChoice::Preset(selector)
            }
            ThemeMode::Auto => ThemeChoice::Auto,
            ThemeMode::Unthemed => ThemeChoice::Unthemed,
        })
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    // reqwest and its stack are chatty at debug
    builder.filter_module("reqwest", log::LevelFilter::Warn);
    builder.filter_module("hyper", log::LevelFilter::Warn);
    builder.filter_module("rustls", log::LevelFilter::Warn);
    builder.target(env_logger::Target::Stderr).init();
}

fn render(deck: &GeneratedDeck, format: OutputFormat) -> Result<String> {
    let list = deck.decklist();
    Ok(match format {
        OutputFormat::Text => list.render_text(),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&list).context("serialize decklist")?;
            out.push('\n');
            out
        }
    })
}

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let mut rng = match cli.seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    log::info!("seed: {}", rng.seed());

    let choice = cli.theme_choice()?;
    let config = DeckConfig {
        theme: cli.theme_settings(),
        ..DeckConfig::default()
    };
    let mut search = ScryfallClient::new(Duration::from_millis(cli.delay_ms))
        .context("create search client")?;
    let mut tags = TaggerClient::new().context("create tagger client")?;

    let deck = generate_deck(
        &mut search,
        &mut tags,
        &choice,
        cli.commander_query.as_deref(),
        &config,
        &mut rng,
    )
    .context("generate deck")?;

    print_stdout(&render(&deck, cli.format)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    run(cli)
}
