use anyhow::Context;
use planar_engine::logging::{init_logging, LoggingConfig};
use planar_viewer::controller::HELP;
use planar_viewer::Viewer;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║       PLANAR  3D viewer                ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();
    println!("{HELP}");
    println!();

    Viewer::new()
        .title("planar viewer")
        .size(1000.0, 700.0)
        .run()
        .context("planar viewer failed")?;

    log::info!("bye");
    Ok(())
}
