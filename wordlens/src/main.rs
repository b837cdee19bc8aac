use argh::FromArgs;
use tracing::debug;

use wordlens::config::DEFAULT_CONFIG_PATH;
use wordlens::{App, Config, Error, telemetry};
use wordlens_core::Lookup;

/// Translate text and look up the pronunciation of English words.
#[derive(Debug, FromArgs)]
struct Opts {
    /// path to config file
    #[argh(option, default = "String::from(DEFAULT_CONFIG_PATH)")]
    config_path: String,
    /// print results as JSON
    #[argh(switch)]
    json: bool,
    #[argh(subcommand)]
    command: Command,
}

#[derive(Debug, FromArgs)]
#[argh(subcommand)]
enum Command {
    Translate(TranslateCommand),
    Pronounce(PronounceCommand),
    Define(DefineCommand),
}

/// Translate text, with pronunciations for single English words.
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "translate")]
struct TranslateCommand {
    /// language to translate from, overriding the settings
    #[argh(option)]
    from: Option<String>,
    /// language to translate to, overriding the settings
    #[argh(option)]
    to: Option<String>,
    /// the text to translate
    #[argh(positional)]
    text: Vec<String>,
}

/// Look up the pronunciation of an English word.
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "pronounce")]
struct PronounceCommand {
    /// the word to look up
    #[argh(positional)]
    word: String,
}

/// Look up the dictionary definitions of an English word.
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "define")]
struct DefineCommand {
    /// the word to look up
    #[argh(positional)]
    word: String,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Parse command-line arguments
    let opts: Opts = argh::from_env();

    // Load the config file, then initialize logging
    let config = Config::load(&opts.config_path)?;
    let _guard = telemetry::try_init(&config.tracing)?;

    debug!(config_path = %opts.config_path, "loaded config");

    let lookup = Lookup::try_new(config.http.timeout)
        .map_err(Error::HttpClient)?
        .probe_timeout(config.http.probe_timeout);
    let app = App::new(lookup, config.settings, opts.json);

    let output = match opts.command {
        Command::Translate(command) => {
            app.translate(&command.text, command.from, command.to)
                .await?
        }
        Command::Pronounce(command) => app.pronounce(&command.word).await?,
        Command::Define(command) => app.define(&command.word).await?,
    };

    print!("{output}");

    Ok(())
}
