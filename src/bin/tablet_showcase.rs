use tablet_showcase::{Showcase, ShowcaseConfig, TabletCatalog};

fn main() {
    // RUST_LOG overrides the default level; logs go to stderr
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    if let Err(err) = run() {
        eprintln!("tablet_showcase: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), tablet_showcase::ShowcaseError> {
    let showcase = Showcase::new(ShowcaseConfig::default())?;
    let mut catalog = TabletCatalog::standard();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = showcase.run(&mut catalog, &mut out)?;

    log::info!(
        "showcase finished: {} quotes, {} checks, switched {}",
        summary.quotes.len(),
        summary.compatibility_checks,
        summary.swapped_model
    );
    Ok(())
}
