#![deny(warnings)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use dairy_translate_core::cache::TranslationCache;
use dairy_translate_core::config::{
    default_prefs_path, resolve_optional_string, resolve_string_with_default, resolve_timeout,
    AppConfig, Env, ProviderEndpoints, StdEnv, DEFAULT_GOOGLE_TRANSLATE_URL,
    DEFAULT_LIBRETRANSLATE_URL, DEFAULT_MYMEMORY_URL, ENV_GOOGLE_TRANSLATE_URL,
    ENV_LIBRETRANSLATE_URL, ENV_MYMEMORY_URL, ENV_PREFS_PATH, ENV_TRANSLATE_TIMEOUT_MS,
};
use dairy_translate_core::content::ContentTree;
use dairy_translate_core::context::LanguageContext;
use dairy_translate_core::language::LanguageCode;
use dairy_translate_core::prefs::FileStore;
use dairy_translate_core::resolver::TranslationResolver;
use dairy_translate_core::translate::{http_client, standard_chain};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dairy-translate")]
#[command(about = "Translate dairy assistant UI copy with curated phrases and free providers")]
struct Args {
    #[arg(long, default_value = "info")]
    log_level: String,

    #[arg(long)]
    prefs_path: Option<PathBuf>,

    #[arg(long)]
    mymemory_url: Option<String>,

    #[arg(long)]
    libretranslate_url: Option<String>,

    #[arg(long)]
    google_translate_url: Option<String>,

    /// Per-request provider timeout; requests wait indefinitely when unset.
    #[arg(long)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported languages.
    Languages,
    /// Print the saved language.
    Language,
    /// Save a new language.
    SetLanguage { code: String },
    /// Translate free text through the provider chain.
    Translate {
        #[arg(long)]
        lang: Option<String>,
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Look up a phrase key without touching the network.
    Lookup {
        #[arg(long)]
        lang: Option<String>,
        #[arg(long)]
        fallback: Option<String>,
        key: String,
    },
    /// Translate every short text node of a JSON page snapshot.
    Page {
        #[arg(long)]
        lang: Option<String>,
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let env = StdEnv;
    let cfg = build_config(&args, &env)?;

    tracing::debug!(
        prefs = %cfg.prefs_path.display(),
        timeout_ms = cfg.request_timeout.map(|t| t.as_millis() as u64),
        "config loaded"
    );

    let ctx = build_context(&cfg)?;
    run(args.command, &ctx).await
}

fn build_context(cfg: &AppConfig) -> anyhow::Result<LanguageContext> {
    let client = http_client(cfg.request_timeout).context("building http client")?;
    let chain = standard_chain(&cfg.endpoints, client);
    let resolver = TranslationResolver::new(Arc::new(chain), Arc::new(TranslationCache::new()));
    let store = Arc::new(FileStore::new(cfg.prefs_path.clone()));
    Ok(LanguageContext::new(resolver, store))
}

async fn run(command: Command, ctx: &LanguageContext) -> anyhow::Result<()> {
    match command {
        Command::Languages => {
            let current = ctx.language();
            for code in LanguageCode::ALL {
                let marker = if code == current { "*" } else { " " };
                println!("{marker} {code}  {}", code.native_name());
            }
        }
        Command::Language => {
            let current = ctx.language();
            println!("{current}  {}", current.native_name());
        }
        Command::SetLanguage { code } => {
            let lang: LanguageCode = code.parse()?;
            ctx.set_language(lang);
            println!("{lang}  {}", lang.native_name());
        }
        Command::Translate { lang, text } => {
            apply_language(ctx, lang.as_deref())?;
            for source in text {
                println!("{}", ctx.t(&source, None).await);
            }
        }
        Command::Lookup { lang, fallback, key } => {
            apply_language(ctx, lang.as_deref())?;
            println!("{}", ctx.t_sync(&key, fallback.as_deref()));
        }
        Command::Page { lang, file } => {
            apply_language(ctx, lang.as_deref())?;
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let tree = ContentTree::from_json(&raw)
                .with_context(|| format!("parsing page snapshot {}", file.display()))?;

            let report = ctx.translate_visible_text(&tree).await;
            tracing::info!(
                lang = %ctx.language(),
                eligible = report.eligible,
                replaced = report.replaced,
                skipped = report.skipped,
                "page translated"
            );
            println!("{}", tree.to_json_pretty()?);
        }
    }
    Ok(())
}

/// A `--lang` override applies to this invocation only; the saved language is
/// untouched.
fn apply_language(ctx: &LanguageContext, lang: Option<&str>) -> anyhow::Result<()> {
    if let Some(code) = lang {
        let lang: LanguageCode = code.parse()?;
        if lang != ctx.language() {
            ctx.use_language(lang);
        }
    }
    Ok(())
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(
            level
                .parse()
                .with_context(|| format!("invalid --log-level: {level}"))?,
        )
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn build_config(args: &Args, env: &impl Env) -> anyhow::Result<AppConfig> {
    let endpoints = ProviderEndpoints::new(
        &resolve_string_with_default(
            args.mymemory_url.clone(),
            ENV_MYMEMORY_URL,
            env,
            DEFAULT_MYMEMORY_URL,
        ),
        &resolve_string_with_default(
            args.libretranslate_url.clone(),
            ENV_LIBRETRANSLATE_URL,
            env,
            DEFAULT_LIBRETRANSLATE_URL,
        ),
        &resolve_string_with_default(
            args.google_translate_url.clone(),
            ENV_GOOGLE_TRANSLATE_URL,
            env,
            DEFAULT_GOOGLE_TRANSLATE_URL,
        ),
    )?;

    let prefs_path = resolve_optional_string(
        args.prefs_path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned()),
        ENV_PREFS_PATH,
        env,
    )
    .map(PathBuf::from)
    .unwrap_or_else(default_prefs_path);

    let request_timeout = resolve_timeout(args.timeout_ms, ENV_TRANSLATE_TIMEOUT_MS, env)?;

    Ok(AppConfig {
        endpoints,
        prefs_path,
        request_timeout,
    })
}
