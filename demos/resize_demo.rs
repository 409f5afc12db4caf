//! Seeds a layout from the current terminal size and prints resolved tiles
//! for a few simulated resizes. Events are logged as JSON lines to stderr
//! when `--log` is passed.

use std::io::{self, Write};

use room_tiles::logging::{LogEvent, LogSink, LoggingResult};
use room_tiles::{Layout, LayoutConfig, LogLevel, Logger, Result, Size, TileId};

struct StderrSink;

impl LogSink for StderrSink {
    fn log(&self, event: &LogEvent) -> LoggingResult<()> {
        let line = serde_json::to_string(event)?;
        writeln!(io::stderr(), "{line}")?;
        Ok(())
    }
}

fn main() -> Result<()> {
    let mut config = LayoutConfig::default().with_log_target("resize_demo");
    if std::env::args().any(|arg| arg == "--log") {
        config = config.with_logger(Logger::new(StderrSink).with_min_level(LogLevel::Debug));
    }
    config.enable_metrics();
    let mut layout = Layout::with_config(config);

    let screen = layout.new_root();
    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    layout.set_size(screen, i32::from(cols), i32::from(rows));

    let header = layout.new_named_subtile(screen, "header");
    layout.set_size(header, 0, 1);
    let main = layout.new_named_subtile(screen, "main");
    let status = layout.new_named_subtile(screen, "status");
    layout.set_size(status, 0, 1);
    layout.join_vertical(&[header, main, status]);

    let sidebar = layout.new_named_subtile(main, "sidebar");
    layout.set_size(sidebar, 24, 0);
    let timeline = layout.new_named_subtile(main, "timeline");
    let details = layout.new_named_subtile(main, "details");
    layout.join_horizontal(&[sidebar, timeline, details]);

    layout.on_recalculate(screen, || println!("-- layout invalidated --"));

    print_tiles(&mut layout, screen)?;
    for (width, height) in [(120, 40), (60, 20), (33, 9)] {
        layout.set_size(screen, width, height);
        layout.recalculate(screen);
        print_tiles(&mut layout, screen)?;
    }

    layout.log_metrics();
    Ok(())
}

fn print_tiles(layout: &mut Layout, screen: TileId) -> Result<()> {
    let main = layout.subtile(screen, "main")?;
    let names = ["header", "status"];
    let panes = ["sidebar", "timeline", "details"];

    println!("screen {}", describe(layout.size(screen)));
    for name in names {
        let tile = layout.subtile(screen, name)?;
        println!("  {name:<9} {}", describe(layout.size(tile)));
    }
    println!("  {:<9} {}", "main", describe(layout.size(main)));
    for name in panes {
        let tile = layout.subtile(main, name)?;
        println!("    {name:<9} {}", describe(layout.size(tile)));
    }
    Ok(())
}

fn describe(size: Size) -> String {
    format!("{}x{}", size.width, size.height)
}
