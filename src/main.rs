use oche::achievements::view::AchievementView;
use oche::achievements::AchievementCategory;
use oche::build_info;
use oche::{AchievementEngine, EngineConfig, LoadOutcome};

const USAGE: &str = "\
Oche - darts achievement engine

Usage: oche [--verbose] <command>

Commands:
  catalog            List every achievement
  status <player>    Show a player's locally cached achievements
  sync <player>      Merge with the remote store and replay pending unlocks

Options:
  --verbose  Debug logging (RUST_LOG overrides)
  --version  Show version information
  --help     Show this help message";

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose");
    args.retain(|a| a != "--verbose");

    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let command = args.first().map(String::as_str);
    match command {
        Some("--version") | Some("-v") => {
            println!("oche {}", build_info::version_string());
        }
        Some("--help") | Some("-h") | None => {
            println!("{USAGE}");
        }
        Some("catalog") => {
            let engine = AchievementEngine::from_config(&EngineConfig::load());
            print_catalog(&engine);
        }
        Some("status") => {
            let Some(player) = args.get(1) else {
                eprintln!("Missing player id. Run 'oche --help' for usage.");
                std::process::exit(2);
            };
            let mut engine = AchievementEngine::from_config(&EngineConfig::load());
            engine.hydrate(player);
            print_status(&engine, player);
        }
        Some("sync") => {
            let Some(player) = args.get(1) else {
                eprintln!("Missing player id. Run 'oche --help' for usage.");
                std::process::exit(2);
            };
            let mut engine = AchievementEngine::from_config(&EngineConfig::load());
            if !run_sync(&mut engine, player) {
                std::process::exit(1);
            }
        }
        Some(other) => {
            eprintln!("Unknown command: {other}");
            eprintln!("Run 'oche --help' for usage.");
            std::process::exit(2);
        }
    }
}

fn print_catalog(engine: &AchievementEngine) {
    for category in AchievementCategory::ALL {
        println!("{}", category.name());
        for def in engine.catalog().by_category(category) {
            let view = AchievementView::new(def, None);
            println!(
                "  {} {:<24} {:<8} {:>4} pts  {}",
                view.icon,
                view.name,
                view.tier.name(),
                view.points,
                view.description
            );
        }
    }
    println!("{} achievements", engine.catalog().len());
}

fn print_status(engine: &AchievementEngine, player: &str) {
    println!(
        "{player}: {} points, {:.0}% unlocked",
        engine.total_points(player),
        engine.unlock_percentage(player)
    );
    for (category, unlocked, total) in engine.category_summary(player) {
        println!("  {:<12} {unlocked}/{total}", category.name());
    }
    for view in engine.unlocked_views(player) {
        let date = view
            .unlocked_at
            .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        println!("  {} {} ({date})", view.icon, view.name);
    }
    let pending = engine.reconciler().cache().pending(player).len();
    if pending > 0 {
        println!("  {pending} unlock(s) waiting to sync");
    }
}

fn run_sync(engine: &mut AchievementEngine, player: &str) -> bool {
    let report = engine.start_session(player);
    match report.load {
        LoadOutcome::Merged {
            remote_added,
            requeued,
        } => println!("Merged: {remote_added} from remote, {requeued} re-queued"),
        LoadOutcome::LocalFallback => println!("Remote store unavailable, local cache kept"),
    }
    println!(
        "Replayed: {} confirmed, {} still pending",
        report.replay.confirmed, report.replay.remaining
    );

    match engine.push_progress(player) {
        Ok(count) => println!("Progress: {count} entries sent"),
        Err(e) => tracing::warn!(player, error = %e, "Progress push failed"),
    }
    engine.wait_for_sync();
    matches!(report.load, LoadOutcome::Merged { .. })
}
