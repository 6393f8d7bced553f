use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use situation_bank::config::{get_group_name, IngestConfig};
use situation_bank::{db, paths, services};

const USAGE: &str = "usage: situation_bank [ingest | preview [OUT] | summary]";

fn main() -> ExitCode {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "situation_bank=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let args: Vec<String> = std::env::args().skip(1).collect();
  let config = IngestConfig::load();

  let result = match args.first().map(String::as_str) {
    None | Some("ingest") => ingest(&config),
    Some("preview") => preview(&config, args.get(1).map(PathBuf::from)),
    Some("summary") => summary(&config),
    Some(other) => {
      eprintln!("Unknown command '{}'\n{}", other, USAGE);
      return ExitCode::from(2);
    }
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      tracing::error!("{}", e);
      eprintln!("{}", e.user_message());
      ExitCode::FAILURE
    }
  }
}

fn ingest(config: &IngestConfig) -> Result<(), services::IngestError> {
  let mut conn = db::init_db(&config.database_path)?;
  let summary = services::run_ingestion(&mut conn, config)?;
  println!("{}", summary);
  Ok(())
}

fn preview(config: &IngestConfig, out: Option<PathBuf>) -> Result<(), services::IngestError> {
  let out = out.unwrap_or_else(|| PathBuf::from(paths::preview_path()));
  let preview = services::build_preview(config);
  services::write_preview(&preview, &out)?;
  println!(
    "{} block(s), {} importable, written to {}",
    preview.total_blocks,
    preview.importable_blocks,
    out.display()
  );
  Ok(())
}

fn summary(config: &IngestConfig) -> Result<(), services::IngestError> {
  let conn = db::init_db(&config.database_path)?;
  let totals = db::group_level_totals(&conn)?;
  if totals.is_empty() {
    println!("No situational questions stored");
  }
  for (group_id, level, count) in totals {
    println!("{:<10} level {:>2}: {} question(s)", get_group_name(group_id), level, count);
  }
  println!(
    "Total: {} question(s), {} answer(s)",
    db::count_questions(&conn)?,
    db::count_answers(&conn)?
  );
  Ok(())
}
