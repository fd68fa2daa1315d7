use std::fs;

use anyhow::{Context, Result};
use comfy_table::Table;
use ordersheet_ingest::process_upload_path;
use ordersheet_map::FIELD_ALIASES;
use ordersheet_model::{FileUploadResult, IdSource, SequentialIdSource, UuidIdSource};
use tracing::{info, info_span};

use crate::cli::IngestArgs;
use crate::summary::apply_table_style;

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Aliases"]);
    apply_table_style(&mut table);
    for (field, aliases) in FIELD_ALIASES {
        table.add_row(vec![field.to_string(), aliases.join(", ")]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_ingest(args: &IngestArgs) -> Result<FileUploadResult> {
    let span = info_span!("ingest", file = %args.file.display());
    let _guard = span.enter();

    let mut sequential = SequentialIdSource::default();
    let mut random = UuidIdSource;
    let ids: &mut dyn IdSource = if args.stable_ids {
        &mut sequential
    } else {
        &mut random
    };

    let result = process_upload_path(&args.file, ids);
    info!(success = result.success, items = result.items().len(), "ingest finished");

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&result).context("serialize result")?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        info!(output = %path.display(), "wrote result file");
    }
    Ok(result)
}
