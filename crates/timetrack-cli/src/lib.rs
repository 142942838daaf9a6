//! CLI logic for the TimeTrack timeline tool.
//!
//! Every invocation loads the data file, applies one [`Command`], and when
//! the records changed saves them back and refreshes the configured SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use std::{
    cell::Cell,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    rc::Rc,
};

use log::{debug, info, warn};

use timetrack::{
    Focus, Timeline, TimetrackError,
    config::StorageConfig,
    store::StoreEvent,
};
use timetrack_parser::error::ParseError;

/// SVG path used by `render` when neither `-o` nor `render.output` is set.
const DEFAULT_SVG_OUTPUT: &str = "timeline.svg";

/// Run the TimeTrack CLI application, printing to stdout.
///
/// # Errors
///
/// Returns `TimetrackError` for:
/// - Configuration loading errors
/// - Unreadable or invalid data files
/// - Invalid records
/// - File I/O and rendering errors
pub fn run(args: &Args) -> Result<(), TimetrackError> {
    let stdout = io::stdout();
    run_to(args, &mut stdout.lock())
}

/// Run the TimeTrack CLI application, printing to `out`.
///
/// # Errors
///
/// See [`run`].
pub fn run_to(args: &Args, out: &mut dyn Write) -> Result<(), TimetrackError> {
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(data) = &args.data {
        app_config = app_config.with_storage(StorageConfig::new(data));
    }

    info!(data_file:? = app_config.storage().data_file(); "Opening timeline");

    let mut timeline = Timeline::new(app_config);
    timeline.load()?;

    let dirty = Rc::new(Cell::new(false));
    let flag = Rc::clone(&dirty);
    timeline.subscribe(move |event: &StoreEvent| {
        debug!(event:?; "Records changed");
        flag.set(true);
    });

    match &args.command {
        Command::Add {
            name,
            born,
            died,
            description,
        } => {
            let record = timeline.add(name, *born, *died, description)?;
            writeln!(out, "Added {record}")?;
        }
        Command::List => list(&timeline, out)?,
        Command::Import { file } => import(&mut timeline, file, out)?,
        Command::Export { file } => {
            timeline.export_csv_file(file)?;
            writeln!(out, "Exported {} people to {}", timeline.records().len(), file.display())?;
        }
        Command::Render {
            output,
            focus,
            viewport,
        } => {
            let path = output
                .clone()
                .or_else(|| timeline.config().render().output().map(Path::to_path_buf))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SVG_OUTPUT));
            let focus = focus.as_deref().map(|name| Focus::new(name, *viewport));

            timeline.write_svg(&path, focus)?;
            info!(output_file:? = path; "SVG exported successfully");
        }
        Command::Clear => {
            let count = timeline.records().len();
            timeline.clear();
            writeln!(out, "Removed {count} people")?;
        }
    }

    if dirty.get() {
        timeline.save()?;
        if let Some(output) = timeline.config().render().output() {
            timeline.write_svg(output, None)?;
            info!(output_file:? = output; "SVG refreshed");
        }
    }

    Ok(())
}

fn list(timeline: &Timeline, out: &mut dyn Write) -> io::Result<()> {
    for record in timeline.records() {
        match record.age_at_death() {
            Some(age) => writeln!(out, "{record}, died aged {age}")?,
            None => writeln!(out, "{record}")?,
        }
        if !record.description().is_empty() {
            writeln!(out, "    {}", record.description())?;
        }
    }
    Ok(())
}

fn import(timeline: &mut Timeline, file: &Path, out: &mut dyn Write) -> Result<(), TimetrackError> {
    let source = fs::read_to_string(file)?;
    let report = timeline.import_csv(&source);

    writeln!(
        out,
        "{} added, {} duplicates skipped, {} rows rejected",
        report.added(),
        report.duplicates(),
        report.rejected()
    )?;

    if !report.diagnostics().is_empty() {
        let err = TimetrackError::new_parse_error(
            ParseError::new(report.into_diagnostics()),
            source,
        );
        for rendered in error_adapter::render_reports(&err) {
            warn!("{rendered}");
        }
    }

    Ok(())
}
