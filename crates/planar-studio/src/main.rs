use anyhow::Context;
use planar_editor::Studio;
use planar_engine::logging::{init_logging, LoggingConfig};

const CONTROLS: &str = "\
  DRAWING TOOLS
    1  point (1 click)        2  line (2 clicks)
    3  rectangle (2 corners)  4  ellipse (2 bounding corners)

  COLOR            R G B W Y M C
  STROKE WIDTH     + / =  thicker     -  thinner

  TRANSFORM
    T translate   O rotate   S scale   P toggle custom pivot (click to place)
    click a shape to select it, then use the arrow keys:
      translate  up / down / left / right
      rotate     left / right (10 degrees)
      scale      up grow, down shrink, left / right horizontal

  WINDOWING & CLIPPING
    Q or Ctrl+W   define the window (click 2 corners)
    V             toggle clipping         N  disable the window
    F1-F4         move window up / down / left / right
    F5 / F6       shrink / grow window    L  toggle Cohen-Sutherland / Liang-Barsky

  OTHER
    Delete / Backspace  clear all shapes    Escape  quit
";

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║     PLANAR  2D drawing & clipping      ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();
    println!("{CONTROLS}");

    Studio::new()
        .title("planar")
        .size(800.0, 600.0)
        .run()
        .context("planar studio failed")?;

    log::info!("bye");
    Ok(())
}
