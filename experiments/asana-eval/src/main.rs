use {
    anyhow::{Context, Result},
    asana::{IdealAngleTable, Registry},
    asana_eval::{evaluate_frames, parse_recording},
    base::log,
};

fn main() -> Result<()> {
    // stdout carries the JSON lines, so logs go to stderr.
    base::init_stderr_logger(base::parse_level(
        &std::env::var("ASANA_LOG").unwrap_or_else(|_| "info".to_string()),
    ));

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: asana-eval <posture-id> <frames.json> [angle-table.csv]");
        eprintln!("Example: asana-eval TADASANA recording.json");
        std::process::exit(1);
    }
    let id = &args[1];

    let mut registry = Registry::builtin();
    if let Some(table_path) = args.get(3) {
        let table = IdealAngleTable::load(table_path)
            .with_context(|| format!("failed to load angle table {table_path}"))?;
        registry = registry.with_angle_table(id, id, table);
    }
    if !registry.contains(id) {
        eprintln!("Unknown posture {id}. Available: {}", registry.ids().join(", "));
        std::process::exit(1);
    }

    let json = std::fs::read_to_string(&args[2])
        .with_context(|| format!("failed to read {}", args[2]))?;
    let frames = parse_recording(&json)?;
    log::info!("evaluating {} frames as {id}", frames.len());

    let stats = evaluate_frames(&registry, id, &frames, &mut std::io::stdout().lock())?;
    log::info!(
        "{} of {} frames correct ({:.1}%)",
        stats.perfect_frames,
        stats.frames,
        stats.perfect_ratio()
    );
    Ok(())
}
