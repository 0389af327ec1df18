use agri_translate::translate::{
    HttpTranslateProvider, MockMode, MockTranslator, TranslationProvider, extract_strings,
    translate_data,
};
use clap::{Arg, Command};
use std::io::Read;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("agri-translate")
        .version("0.1.0")
        .about("Translate every string inside a JSON payload, keeping its structure intact")
        .arg(
            Arg::new("json")
                .help("JSON payload to translate (use '-' to read from stdin)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("target-locale")
                .help("Target language code (e.g., hi, ta, fr)")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .short('e')
                .help("Translation service URL (default: TRANSLATE_SERVICE_URL or localhost)"),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use mock translator instead of the translation service")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show the flattened string map before translating")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let json_arg = matches.get_one::<String>("json").unwrap();
    let target_locale = matches.get_one::<String>("target-locale").unwrap();
    let use_mock = matches.get_flag("mock");
    let verbose = matches.get_flag("verbose");

    // 1. Read payload
    let raw = if json_arg == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        json_arg.clone()
    };

    let data: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("❌ Invalid JSON payload: {}", e);
            return Err(e.into());
        }
    };

    if verbose {
        let flat = extract_strings(&data);
        println!("📦 {} string leaves to translate → {}", flat.len(), target_locale);
        for (path, text) in &flat {
            let shown = if path.is_empty() { "(root)" } else { path.as_str() };
            println!("   {} = \"{}\"", shown, text);
        }
        println!();
    }

    // 2. Pick a provider
    let provider: Box<dyn TranslationProvider> = if use_mock {
        Box::new(MockTranslator::new(MockMode::Suffix))
    } else {
        let http = match matches.get_one::<String>("endpoint") {
            Some(endpoint) => HttpTranslateProvider::new(endpoint.clone()),
            None => HttpTranslateProvider::from_env(),
        };
        match http {
            Ok(provider) => Box::new(provider),
            Err(e) => {
                eprintln!("❌ Failed to initialize translation provider: {}", e);
                return Err(e.into());
            }
        }
    };

    if verbose {
        println!("🌍 Provider: {}", provider.provider_name());
    }

    // 3. Translate and print
    let translated = match translate_data(provider.as_ref(), target_locale, &data).await {
        Ok(value) => value,
        Err(e) => {
            eprintln!("❌ Translation failed: {}", e);
            return Err(e.into());
        }
    };

    println!("{}", serde_json::to_string_pretty(&translated)?);

    Ok(())
}
