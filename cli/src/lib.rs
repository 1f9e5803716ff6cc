//! Command-line front end for `glossa-translator`.

use std::io::Read;
use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use glossa_translator::CancellationToken;
use glossa_translator::TranslateHandler;
use glossa_translator::TranslateMessage;
use glossa_translator::TranslateMode;
use glossa_translator::TranslateQuery;
use glossa_translator::TranslationError;
use glossa_translator::Translator;
use glossa_translator::TranslatorConfig;
use glossa_translator::lang;

/// Exit status after a user interrupt, matching shells' 128 + SIGINT.
const EXIT_ABORTED: u8 = 130;

#[derive(Debug, Parser)]
#[command(
    name = "glossa",
    version,
    about = "Translate, polish, summarize or explain text with an OpenAI-compatible model"
)]
pub struct Cli {
    /// Text to process, or `-` to read from stdin.
    #[arg(required_unless_present = "list_languages")]
    pub text: Option<String>,

    /// translate, polishing, summarize, analyze or explain-code.
    #[arg(short, long, default_value = "translate")]
    pub mode: TranslateMode,

    /// Source language code.
    #[arg(short, long, default_value = "auto")]
    pub from: String,

    /// Target language code. Defaults to the configured target language.
    #[arg(short, long)]
    pub to: Option<String>,

    /// Provider preset (openai, deepseek, ollama, ...).
    #[arg(long)]
    pub provider: Option<String>,

    /// API base URL, without `/v1`.
    #[arg(long)]
    pub api_url: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    /// Print one JSON result instead of streaming text.
    #[arg(long)]
    pub json: bool,

    /// Print supported language codes and exit.
    #[arg(long)]
    pub list_languages: bool,
}

impl Cli {
    /// Layer command-line overrides on top of the file configuration.
    pub fn apply_overrides(&self, config: &mut TranslatorConfig) {
        if let Some(provider) = &self.provider {
            config.provider = provider.clone();
        }
        if let Some(api_url) = &self.api_url {
            config.api_url = Some(api_url.clone());
        }
        if let Some(model) = &self.model {
            config.model = Some(model.clone());
        }
    }
}

/// Writes streamed content to `out` as it arrives.
pub struct StreamPrinter<W: Write> {
    out: W,
    wrote_any: bool,
    error: Option<String>,
    finish_reason: Option<String>,
}

impl<W: Write> StreamPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            wrote_any: false,
            error: None,
            finish_reason: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.finish_reason.as_deref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TranslateHandler for StreamPrinter<W> {
    fn on_message(&mut self, message: TranslateMessage) {
        if message.content.is_empty() {
            return;
        }
        if let Err(e) = self
            .out
            .write_all(message.content.as_bytes())
            .and_then(|()| self.out.flush())
        {
            tracing::warn!("failed to write output: {e}");
        }
        self.wrote_any = true;
    }

    fn on_error(&mut self, error: String) {
        self.error = Some(error);
    }

    fn on_finish(&mut self, reason: String) {
        if self.wrote_any {
            let _ = writeln!(self.out);
        }
        self.finish_reason = Some(reason);
    }
}

pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("GLOSSA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_text(arg: &str) -> anyhow::Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read text from stdin")?;
    Ok(text.trim_end_matches(['\r', '\n']).to_string())
}

pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    if cli.list_languages {
        for (code, name) in lang::supported_languages() {
            println!("{code}\t{name}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = TranslatorConfig::load();
    cli.apply_overrides(&mut config);
    let settings = config
        .resolve()
        .context("translator is not configured")?;

    let text = read_text(cli.text.as_deref().unwrap_or("-"))?;
    let to = cli
        .to
        .clone()
        .unwrap_or_else(|| config.default_target_language.clone());

    let cancel = CancellationToken::new();
    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("interrupt received, cancelling");
            ctrl_c_cancel.cancel();
        }
    });

    let translator = Translator::new(settings);
    let query = TranslateQuery::new(text, cli.from.clone(), to, cli.mode).with_cancel(cancel);

    let error = if cli.json {
        let result = translator.translate_to_result(query).await?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        result.error
    } else {
        let mut printer = StreamPrinter::new(std::io::stdout().lock());
        translator.translate(query, &mut printer).await?;
        printer.error().map(str::to_string)
    };

    Ok(match error {
        None => ExitCode::SUCCESS,
        Some(e) if TranslationError::is_aborted_message(&e) => ExitCode::from(EXIT_ABORTED),
        Some(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    })
}
