use std::{
    env,
    io::{self, Write},
    process::{Command, Stdio},
};

use anyhow::Context;

use kalender::{
    calendar::{MonthKey, validate},
    storage::config::{Config, OutputFormat},
    sync::loader::CalendarLoader,
    ui::{html, text},
};

pub const USAGE: &str =
    "Usage: kalender [--source PATH|URL] [--html|--text] [--month YYYY-MM]... [--check] [--no-pager]";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub source: Option<String>,
    pub format: Option<OutputFormat>,
    pub months: Vec<MonthKey>,
    pub no_pager: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CliMode {
    Render(CliOptions),
    Check(CliOptions),
    Help,
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    parse_args(env::args().skip(1))
}

pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliMode, String> {
    let mut options = CliOptions::default();
    let mut check = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--source" => {
                let location = args.next().ok_or("--source needs a path or URL")?;
                options.source = Some(location);
            }
            "--month" => {
                let value = args.next().ok_or("--month needs a YYYY-MM value")?;
                let key = MonthKey::parse(&value)
                    .map_err(|_| format!("Invalid month '{}'. Use YYYY-MM.", value))?;
                options.months.push(key);
            }
            "--html" => options.format = Some(OutputFormat::Html),
            "--text" => options.format = Some(OutputFormat::Text),
            "--no-pager" => options.no_pager = true,
            "--check" => check = true,
            "--help" => return Ok(CliMode::Help),
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    if check {
        Ok(CliMode::Check(options))
    } else {
        Ok(CliMode::Render(options))
    }
}

fn apply_overrides(mut config: Config, options: &CliOptions) -> Config {
    if let Some(source) = &options.source {
        config.source.location = source.clone();
    }
    if let Some(format) = options.format {
        config.render.format = format;
    }
    if options.no_pager {
        config.render.use_pager = false;
    }
    config
}

pub async fn run_render_mode(config: Config, options: &CliOptions) -> anyhow::Result<()> {
    let config = apply_overrides(config, options);
    let loader = CalendarLoader::from_config(&config)?.with_months(options.months.clone());

    let output = match loader.load().await {
        Ok(view) => match config.render.format {
            OutputFormat::Html => html::render_page(&view).into_string(),
            OutputFormat::Text => text::render_calendar(&view, config.render.width),
        },
        Err(e) => {
            let message = match config.render.format {
                OutputFormat::Html => html::render_load_error().into_string(),
                OutputFormat::Text => text::render_load_error(config.render.width),
            };
            eprintln!("{message}");
            return Err(e).context(format!("loading {}", config.source.location));
        }
    };

    write_output(&output, config.render.use_pager && config.render.format == OutputFormat::Text)?;
    Ok(())
}

/// Returns `true` when at least one event has an error.
pub async fn run_check_mode(config: Config, options: &CliOptions) -> anyhow::Result<bool> {
    let config = apply_overrides(config, options);
    let loader = CalendarLoader::from_config(&config)?;
    let document = loader
        .fetch_document()
        .await
        .with_context(|| format!("loading {}", config.source.location))?;

    let issues = validate::validate_events(&document.events);
    if issues.is_empty() {
        println!("{} event(s), no problems found.", document.events.len());
    }
    for issue in &issues {
        println!("{issue}");
    }

    Ok(validate::has_errors(&issues))
}

/// External program the text calendar is piped through, taken from `$PAGER`.
#[derive(Debug, Clone, PartialEq)]
struct Pager {
    program: String,
    args: Vec<String>,
}

impl Pager {
    const DEFAULT: &'static str = "less";

    fn from_env() -> Option<Self> {
        Self::parse(&env::var("PAGER").unwrap_or_else(|_| Self::DEFAULT.to_string()))
    }

    /// `None` for a blank value, which disables paging.
    fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self { program, args: parts.collect() })
    }

    /// Falls back to stdout when the program cannot be started.
    fn show(&self, text: &str) -> Result<(), io::Error> {
        let mut child = match Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                tracing::debug!("Pager '{}' unavailable: {}", self.program, e);
                print!("{text}");
                return Ok(());
            }
        };

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }
        child.wait()?;
        Ok(())
    }
}

fn write_output(text: &str, paged: bool) -> Result<(), io::Error> {
    match Pager::from_env().filter(|_| paged) {
        Some(pager) => pager.show(text),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_renders_with_config() {
        assert_eq!(parse_args(args(&[])), Ok(CliMode::Render(CliOptions::default())));
    }

    #[test]
    fn months_are_collected_in_order() {
        let mode = parse_args(args(&["--month", "2024-05", "--month", "2024-03"])).unwrap();

        let CliMode::Render(options) = mode else { panic!("expected render mode") };
        assert_eq!(
            options.months,
            vec![MonthKey::new(2024, 5).unwrap(), MonthKey::new(2024, 3).unwrap()]
        );
    }

    #[test]
    fn malformed_month_is_usage_error() {
        let result = parse_args(args(&["--month", "mei"]));
        assert_eq!(result, Err("Invalid month 'mei'. Use YYYY-MM.".to_string()));
    }

    #[test]
    fn check_flag_selects_check_mode() {
        let mode = parse_args(args(&["--check", "--source", "kalender.json"])).unwrap();

        let CliMode::Check(options) = mode else { panic!("expected check mode") };
        assert_eq!(options.source.as_deref(), Some("kalender.json"));
    }

    #[test]
    fn source_without_value_is_error() {
        assert!(parse_args(args(&["--source"])).is_err());
    }

    #[test]
    fn unknown_argument_is_error() {
        assert_eq!(parse_args(args(&["--agenda"])), Err("Unknown argument: --agenda".to_string()));
    }

    #[test]
    fn pager_value_splits_program_and_arguments() {
        assert_eq!(
            Pager::parse("less -R -S"),
            Some(Pager { program: "less".to_string(), args: vec!["-R".to_string(), "-S".to_string()] })
        );
    }

    #[test]
    fn blank_pager_disables_paging() {
        assert_eq!(Pager::parse("   "), None);
    }

    #[test]
    fn overrides_replace_config_values() {
        let options = CliOptions {
            source: Some("https://example.org/kalender.json".to_string()),
            format: Some(OutputFormat::Html),
            months: Vec::new(),
            no_pager: true,
        };

        let config = apply_overrides(Config::default(), &options);

        assert_eq!(config.source.location, "https://example.org/kalender.json");
        assert_eq!(config.render.format, OutputFormat::Html);
        assert!(!config.render.use_pager);
    }
}
