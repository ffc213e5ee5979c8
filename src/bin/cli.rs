//! MyWebComic CLI
//!
//! Headless tools around the site state machine:
//! - List and search chapters
//! - Show the character roster
//! - Replay scripted UI events and inspect the resulting state
//! - Inspect or reset the persisted survey flag
//! - Generate a default config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use webcomic::catalog::Catalog;
use webcomic::config::{generate_default_config, Config, LoggingConfig};
use webcomic::site::{Effect, SiteController, SiteEvent, SiteState};
use webcomic::store::{FileStore, KeyValueStore, MemoryStore};
use webcomic::survey::SurveyGate;

#[derive(Parser)]
#[command(name = "webcomic-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Headless tools for the MyWebComic site")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", value_parser = ["table", "json"], global = true)]
    pub format: String,

    /// Print debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List chapters, optionally filtered by a case-insensitive search
    Chapters {
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Show the character roster
    Characters,

    /// Replay a JSON-lines script of site events and print the final state
    Simulate {
        /// Script file, one event per line, e.g. {"type":"select_chapter","id":3}
        #[arg(short, long)]
        script: PathBuf,
        /// URL fragment the page is loaded at
        #[arg(long, default_value = "")]
        fragment: String,
        /// Use a throwaway store instead of the persistent one
        #[arg(long)]
        fresh: bool,
    },

    /// Inspect or reset the persisted survey flag
    Survey {
        #[command(subcommand)]
        action: SurveyAction,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum SurveyAction {
    /// Show whether the survey would auto-open on the next visit
    Status,
    /// Clear the flag so the next visit counts as a first visit
    Reset,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load_default();
    let config = loaded.config.clone();
    webcomic::logging::init(&logging_for(&config.logging, cli.verbose));
    loaded.log();

    let catalog = Catalog::placeholder();
    let json = cli.format == "json";

    match cli.command {
        Commands::Chapters { search } => {
            let chapters = catalog.filter_chapters(&search);
            if json {
                println!("{}", serde_json::to_string_pretty(&chapters)?);
            } else if chapters.is_empty() {
                println!("No chapters found.");
            } else {
                println!("{:<4} TITLE", "ID");
                for chapter in chapters {
                    println!("{:<4} {}", chapter.id, chapter.title);
                }
            }
        }

        Commands::Characters => {
            if json {
                println!("{}", serde_json::to_string_pretty(&catalog.characters)?);
            } else {
                for character in &catalog.characters {
                    println!("{}\n  {}\n", character.name, character.bio);
                }
            }
        }

        Commands::Simulate {
            script,
            fragment,
            fresh,
        } => {
            let text = std::fs::read_to_string(&script)
                .with_context(|| format!("Failed to read script {:?}", script))?;
            let events = parse_script(&text)?;

            let store: Box<dyn KeyValueStore> = if fresh {
                Box::new(MemoryStore::new())
            } else {
                Box::new(
                    FileStore::open_in_dir(&config.storage.data_dir)
                        .context("Failed to open local storage")?,
                )
            };

            let report = simulate(&config, catalog, store, &fragment, events);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }

        Commands::Survey { action } => {
            let mut store = FileStore::open_in_dir(&config.storage.data_dir)
                .context("Failed to open local storage")?;
            let key = config.survey.storage_key.as_str();

            match action {
                SurveyAction::Status => {
                    let gate = SurveyGate::load(&store, key)?;
                    if json {
                        println!("{}", serde_json::json!({ "gate": gate, "store": store.path() }));
                    } else if gate.is_eligible() {
                        println!("Survey will auto-open on the next visit ({:?})", store.path());
                    } else {
                        println!("Survey already shown ({:?})", store.path());
                    }
                }
                SurveyAction::Reset => {
                    SurveyGate::reset(&mut store, key)?;
                    println!("Survey flag cleared");
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// `--verbose` raises the level to debug; otherwise the configured level stands
fn logging_for(configured: &LoggingConfig, verbose: bool) -> LoggingConfig {
    let mut logging = configured.clone();
    if verbose {
        logging.level = "debug".to_string();
    }
    logging
}

/// Parse one event per line. Blank lines and `#` comments are skipped.
fn parse_script(text: &str) -> anyhow::Result<Vec<SiteEvent>> {
    let mut events = Vec::new();
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(line)
            .with_context(|| format!("Invalid event on line {}: {}", n + 1, line))?;
        events.push(event);
    }
    if events.is_empty() {
        bail!("Script contains no events");
    }
    Ok(events)
}

#[derive(serde::Serialize)]
struct Step {
    event: SiteEvent,
    effects: Vec<Effect>,
}

#[derive(serde::Serialize)]
struct Report {
    mount_effects: Vec<Effect>,
    steps: Vec<Step>,
    state: SiteState,
    visible_chapters: Vec<u32>,
}

fn simulate(
    config: &Config,
    catalog: Catalog,
    store: Box<dyn KeyValueStore>,
    fragment: &str,
    events: Vec<SiteEvent>,
) -> Report {
    let mut site = SiteController::new(
        config.reader.clone(),
        config.survey.clone(),
        catalog,
        store,
        fragment,
    );

    let mount_effects = site.mount();
    let steps = events
        .into_iter()
        .map(|event| Step {
            effects: site.dispatch(event.clone()),
            event,
        })
        .collect();

    Report {
        mount_effects,
        steps,
        visible_chapters: site.filtered_chapters().iter().map(|c| c.id).collect(),
        state: site.state().clone(),
    }
}

fn print_report(report: &Report) {
    println!("mount -> {:?}", report.mount_effects);
    for (i, step) in report.steps.iter().enumerate() {
        if step.effects.is_empty() {
            println!("{:>3}. {:?}", i + 1, step.event);
        } else {
            println!("{:>3}. {:?} -> {:?}", i + 1, step.event, step.effects);
        }
    }

    let state = &report.state;
    println!();
    println!("view:             {}", state.route);
    println!("theme:            {:?}", state.theme);
    println!("reader mode:      {:?}", state.reader_mode);
    println!("selected chapter: {}", state.selected_chapter);
    println!("pages loaded:     {}", state.pages_loaded);
    println!("search:           {:?} -> {:?}", state.search, report.visible_chapters);
    println!("sidebar:          {:?}", state.sidebar);
    println!("survey:           {:?}", state.survey);
}

#[cfg(test)]
mod tests {
    use super::*;
    use webcomic::route::Route;

    #[test]
    fn test_configured_log_level_survives_without_verbose() {
        let configured = LoggingConfig {
            level: "trace".to_string(),
            format: "json".to_string(),
        };

        let quiet = logging_for(&configured, false);
        assert_eq!(quiet.level, "trace");
        assert_eq!(quiet.format, "json");

        let verbose = logging_for(&configured, true);
        assert_eq!(verbose.level, "debug");
        assert_eq!(verbose.format, "json");
    }

    #[test]
    fn test_parse_script_skips_comments() {
        let text = "# open chapter three\n{\"type\":\"select_chapter\",\"id\":3}\n\n{\"type\":\"toggle_theme\"}\n";
        let events = parse_script(text).unwrap();
        assert_eq!(
            events,
            vec![SiteEvent::SelectChapter { id: 3 }, SiteEvent::ToggleTheme]
        );
    }

    #[test]
    fn test_parse_script_reports_line() {
        let err = parse_script("{\"type\":\"toggle_theme\"}\n{\"type\":\"fly\"}\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_parse_empty_script_fails() {
        assert!(parse_script("# nothing\n").is_err());
    }

    #[test]
    fn test_simulate_first_visit() {
        let events = parse_script(
            "{\"type\":\"sentinel_intersected\",\"ratio\":1.0}\n\
             {\"type\":\"sentinel_intersected\",\"ratio\":1.0}\n\
             {\"type\":\"survey_timer_fired\"}\n\
             {\"type\":\"search\",\"query\":\"zzz\"}\n",
        )
        .unwrap();

        let report = simulate(
            &Config::default(),
            Catalog::placeholder(),
            Box::new(MemoryStore::new()),
            "",
            events,
        );

        assert_eq!(report.mount_effects.len(), 2);
        assert_eq!(report.state.route, Route::Home);
        assert_eq!(report.state.pages_loaded, 5);
        assert!(report.state.survey.is_visible());
        assert!(report.visible_chapters.is_empty());
    }
}
