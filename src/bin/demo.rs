//! Demo binary - resolves the host locale against a sample table and
//! prints localized strings without needing any host UI framework.
//!
//! Usage:
//!   cargo run --bin demo              # Resolve from the system locale
//!   cargo run --bin demo -- ja        # Pin an override language
//!
//! Optional environment variables:
//! - DEMO_LANGUAGE (same effect as the positional argument)

use anyhow::{Context, Result};
use tracing::info;

use l10n_table::{
    AliasRule, LanguageStrings, Localization, StringTable, TableValidator,
};

fn sample_table() -> Result<StringTable> {
    let languages = vec![
        LanguageStrings::new(
            "en",
            [
                ("hello", "Hello!"),
                ("description", "A small string-table localization library."),
            ],
        ),
        LanguageStrings::new(
            "es",
            [
                ("hello", "¡Hola!"),
                ("description", "Una pequeña biblioteca de localización."),
            ],
        ),
        LanguageStrings::new(
            "fr",
            [
                ("hello", "Bonjour!"),
                ("description", "Une petite bibliothèque de localisation."),
            ],
        ),
        LanguageStrings::new(
            "de",
            [
                ("hello", "Hallo!"),
                ("description", "Eine kleine Lokalisierungsbibliothek."),
            ],
        ),
        LanguageStrings::new(
            "ja",
            [
                ("hello", "こんにちは！"),
                ("description", "小さな文字列テーブルのローカライズライブラリです。"),
            ],
        ),
        LanguageStrings::new(
            "zh-Hans",
            [("hello", "你好"), ("description", "一个小型字符串表本地化库。")],
        ),
        LanguageStrings::new(
            "zh-Hant",
            [("hello", "你好"), ("description", "一個小型字符串表本地化庫。")],
        ),
    ];

    let aliases = vec![
        AliasRule::new("^en-", "en")?,
        AliasRule::new("^es-", "es")?,
        AliasRule::new("^fr-", "fr")?,
        AliasRule::new("^de-", "de")?,
        AliasRule::new("^ja-", "ja")?,
        AliasRule::new("^zh-Hans", "zh-Hans")?,
        AliasRule::new("^zh-Hant", "zh-Hant")?,
        AliasRule::new("^zh$", "zh-Hans")?,
        AliasRule::new("^zh-(TW|HK|MO)", "zh-Hant")?,
        AliasRule::new("^zh-(CN|SG)", "zh-Hans")?,
    ];

    Ok(StringTable::new(languages, aliases)?)
}

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("l10n_table=debug".parse()?),
        )
        .init();

    let table = sample_table()?;

    let report = TableValidator::validate(&table);
    if !report.is_clean() {
        for error in &report.errors {
            eprintln!("table error: {}", error);
        }
        for warning in &report.warnings {
            eprintln!("table warning: {}", warning);
        }
    }

    let localization = Localization::new(table, Some("en"))?;

    let override_language = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DEMO_LANGUAGE").ok());
    if let Some(language) = override_language {
        localization
            .set_language(Some(&language))
            .with_context(|| format!("cannot pin language '{}'", language))?;
        info!("pinned override language: {}", language);
    }

    println!("resolved language: {}", localization.current_language());
    println!("{}", localization.string("hello")?);
    println!("{}", localization.string("description")?);

    // An override change is visible on the very next lookup.
    let hello = localization.localized("hello");
    localization.set_language(Some("ja"))?;
    println!("after switching to ja: {}", hello.render()?);
    localization.set_language(None)?;
    println!("back to host locale: {}", hello.render()?);

    info!(
        "lookup metrics: {}",
        serde_json::to_string(&localization.metrics_report())?
    );
    Ok(())
}
