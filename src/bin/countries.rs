use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use country_explorer::app::{App, Event};
use country_explorer::config::{Config, map_locale};
use country_explorer::storage::{self, JsonFileStore};
use country_explorer::{Client, SortKey, render};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "countries",
    version,
    about = "Browse, filter, sort & favorite countries from the REST Countries API"
)]
struct Cli {
    /// Base URL of the REST Countries API (env: COUNTRIES_API_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Directory holding settings.json with favorites and theme (env: COUNTRIES_DATA_DIR).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Locale for number grouping: en, de, fr, es, it, pt, nl (env: COUNTRIES_LOCALE).
    #[arg(long, global = true)]
    locale: Option<String>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List countries (optionally filtered, sorted, and saved).
    List(ListArgs),
    /// Suggest country names matching a partial query.
    Suggest {
        query: String,
    },
    /// Show details and life-index scores for one country.
    Show {
        name: String,
    },
    /// Toggle a country in the favorites list.
    Favorite {
        name: String,
    },
    /// Toggle between light and dark theme.
    Theme,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortArg {
    Name,
    Population,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Part of the country name (case-insensitive)
    #[arg(short, long)]
    name: Option<String>,
    /// Exact 2- or 3-letter country code (case-insensitive)
    #[arg(short, long)]
    code: Option<String>,
    /// Part of the capital name (case-insensitive)
    #[arg(long)]
    capital: Option<String>,
    /// Exact region, e.g. Europe, Asia, Americas, Africa, Oceania
    #[arg(short, long)]
    region: Option<String>,
    /// Sort order
    #[arg(short, long, value_enum)]
    sort: Option<SortArg>,
    /// Only favorites
    #[arg(long, default_value_t = false, conflicts_with = "top")]
    favorites: bool,
    /// Only the 10 most populated countries
    #[arg(long, default_value_t = false)]
    top: bool,
    /// Save the listed countries to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut cfg = Config::from_env();
    if let Some(url) = cli.api_url {
        cfg.api_url = url;
    }
    if let Some(dir) = cli.data_dir {
        cfg.data_dir = dir;
    }
    if let Some(locale) = cli.locale {
        cfg.locale = locale;
    }

    let store = JsonFileStore::open(cfg.settings_path())?;
    let mut app = App::new(store, map_locale(&cfg.locale));

    match cli.cmd {
        Command::List(args) => cmd_list(&mut app, &cfg, args),
        Command::Suggest { query } => {
            load(&mut app, &cfg)?;
            app.dispatch(Event::NameInput(query));
            for name in app.suggestions() {
                println!("{}", name);
            }
            Ok(())
        }
        Command::Show { name } => {
            load(&mut app, &cfg)?;
            app.dispatch(Event::CardClick(name.clone()));
            let detail = app
                .detail()
                .with_context(|| format!("no country named {:?}", name))?;
            print!("{}", render::detail(detail));
            Ok(())
        }
        Command::Favorite { name } => {
            let was = app.favorites().is_favorite(&name);
            app.dispatch(Event::ToggleFavorite(name.clone()));
            let now = app.favorites().is_favorite(&name);
            if was == now {
                anyhow::bail!("{}", app.status());
            }
            if now {
                println!("Added {} to favorites", name);
            } else {
                println!("Removed {} from favorites", name);
            }
            Ok(())
        }
        Command::Theme => {
            let before = app.theme();
            app.dispatch(Event::ToggleTheme);
            if app.theme() == before {
                anyhow::bail!("could not save theme");
            }
            println!("Theme: {}", app.theme().as_str());
            Ok(())
        }
    }
}

fn load(app: &mut App<JsonFileStore>, cfg: &Config) -> Result<()> {
    let client = Client::with_base_url(&cfg.api_url);
    app.load(&client)
        .with_context(|| format!("load countries from {}", cfg.api_url))?;
    Ok(())
}

fn cmd_list(app: &mut App<JsonFileStore>, cfg: &Config, args: ListArgs) -> Result<()> {
    load(app, cfg)?;

    if let Some(v) = args.name {
        app.dispatch(Event::NameInput(v));
    }
    if let Some(v) = args.code {
        app.dispatch(Event::CodeInput(v));
    }
    if let Some(v) = args.capital {
        app.dispatch(Event::CapitalInput(v));
    }
    if let Some(v) = args.region {
        app.dispatch(Event::RegionChange(v));
    }
    if let Some(s) = args.sort {
        app.dispatch(Event::SortChange(match s {
            SortArg::Name => SortKey::NameAsc,
            SortArg::Population => SortKey::PopulationDesc,
        }));
    }
    if args.favorites {
        app.dispatch(Event::ShowFavorites);
    }
    if args.top {
        app.dispatch(Event::ShowTop10);
    }

    print!("{}", render::list(&app.list_view()));

    if let Some(path) = args.out.as_ref() {
        let countries = app.visible();
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&countries, path)?,
            "json" => storage::save_json(&countries, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} countries to {}", countries.len(), path.display());
    }

    Ok(())
}
