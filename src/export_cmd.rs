//! Export command: write a plan and its progress to a file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, info_span};

use lectio_export::{export, export_file_name};

use crate::cli::ExportArgs;
use crate::config::LectioConfig;
use crate::convert;
use crate::session::Session;

/// Render the plan in the requested format and write it out.
pub fn run(args: ExportArgs, config: &LectioConfig) -> Result<()> {
    let _cmd = info_span!("export").entered();
    let format = convert::parse_format(args.format.as_deref().unwrap_or(&config.export.format))?;
    let session = Session::open(&args.source, config)?;
    let now = Utc::now();

    let text = export(session.plan(), session.progress(), format, now)
        .with_context(|| format!("failed to export {}", session.label()))?;

    let path = match args.output {
        Some(path) => path,
        None => {
            let name = export_file_name(session.plan().duration(), format, now.date_naive());
            match &config.export.dir {
                Some(dir) => {
                    std::fs::create_dir_all(dir).with_context(|| {
                        format!("failed to create export dir: {}", dir.display())
                    })?;
                    dir.join(name)
                }
                None => PathBuf::from(name),
            }
        }
    };
    std::fs::write(&path, text)
        .with_context(|| format!("failed to write export: {}", path.display()))?;
    info!(path = %path.display(), %format, "export written");
    println!("{}", path.display());
    Ok(())
}
