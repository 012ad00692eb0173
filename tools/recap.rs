//! recap — fetch one event and print its voice-over script.
//!
//! Usage: recap --event <code> [--season <year>] [--seed <n>]
//!              [--phrases <file.ron>] [--host <name>]
//!
//! Credentials come from the FTC_API_USERNAME and FTC_API_TOKEN
//! environment variables.

use std::path::Path;

use ftc_recap::api::client::DEFAULT_SEASON;
use ftc_recap::api::EventsClient;
use ftc_recap::core::composer::ScriptWriter;
use ftc_recap::core::phrasebook::PhraseBook;
use ftc_recap::core::snapshot::EventSnapshot;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut event_code = None;
    let mut season: u16 = DEFAULT_SEASON;
    let mut seed: u64 = 0;
    let mut phrases_path = None;
    let mut host = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--event" if i + 1 < args.len() => {
                i += 1;
                event_code = Some(args[i].clone());
            }
            "--season" if i + 1 < args.len() => {
                i += 1;
                season = args[i].parse().unwrap_or(DEFAULT_SEASON);
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(0);
            }
            "--phrases" if i + 1 < args.len() => {
                i += 1;
                phrases_path = Some(args[i].clone());
            }
            "--host" if i + 1 < args.len() => {
                i += 1;
                host = Some(args[i].clone());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let Some(event_code) = event_code else {
        eprintln!("--event is required");
        print_usage();
        std::process::exit(1);
    };

    let username = match std::env::var("FTC_API_USERNAME") {
        Ok(v) => v,
        Err(_) => {
            eprintln!("FTC_API_USERNAME is not set");
            std::process::exit(1);
        }
    };
    let token = match std::env::var("FTC_API_TOKEN") {
        Ok(v) => v,
        Err(_) => {
            eprintln!("FTC_API_TOKEN is not set");
            std::process::exit(1);
        }
    };

    let mut phrases = PhraseBook::default();
    if let Some(ref path) = phrases_path {
        match PhraseBook::load_from_ron(Path::new(path)) {
            Ok(loaded) => phrases.merge(loaded),
            Err(e) => {
                eprintln!("ERROR loading phrases {}: {}", path, e);
                std::process::exit(1);
            }
        }
    }

    let client = EventsClient::with_season(username, token, season);
    let snapshot = match EventSnapshot::fetch(&client, &event_code) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("ERROR fetching {}: {}", event_code, e);
            std::process::exit(1);
        }
    };

    let mut writer = ScriptWriter::new(snapshot)
        .with_seed(seed)
        .with_phrase_book(phrases);
    if let Some(host) = host {
        writer = writer.with_host(host);
    }

    match writer.write() {
        Ok(script) => println!("{}", script),
        Err(e) => {
            eprintln!("ERROR narrating {}: {}", event_code, e);
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("recap — fetch one FTC event and print its voice-over script.");
    println!();
    println!("Usage: recap --event <code> [--season <year>] [--seed <n>] [--phrases <file.ron>] [--host <name>]");
    println!();
    println!("  --event <code>       Event code, e.g. USCHSCMP");
    println!("  --season <year>      API season (default: {})", DEFAULT_SEASON);
    println!("  --seed <n>           RNG seed for phrase variation (default: 0)");
    println!("  --phrases <file>     Extra phrase pools, RON format");
    println!("  --host <name>        Host name read out in the greeting");
    println!();
    println!("Credentials: FTC_API_USERNAME and FTC_API_TOKEN environment variables.");
}
