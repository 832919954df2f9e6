use crate::domain::site::RenderedSite;
use crate::domain::template::{ExportFlow, TemplateSelector};
use crate::utils::error::{ExportError, Result};
use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::{CompressionMethod, DateTime};

/// Fixed timestamp so the same site always packs to the same bytes.
fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644)
}

/// Download name for the archive: `jane-q.-public-portfolio.zip` for "Jane Q. Public".
pub fn archive_file_name(name: &str, flow: ExportFlow, template: TemplateSelector) -> String {
    let slug = name
        .split_whitespace()
        .map(|part| part.to_lowercase().replace(&['/', '\\'][..], "-"))
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        flow.fallback_archive_name(template)
    } else {
        format!("{}-portfolio.zip", slug)
    }
}

/// Zips every artifact of `site` as a top-level entry.
pub fn package_site(site: &RenderedSite) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    for (name, contents) in site.artifacts() {
        tracing::debug!("Adding {} ({} bytes)", name, contents.len());
        zip.start_file(name, entry_options())?;
        zip.write_all(contents.as_bytes())?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Runs [`package_site`] on the blocking pool; compression can be slow for large sites.
pub async fn package_site_in_background(site: RenderedSite) -> Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || package_site(&site))
        .await
        .map_err(|e| ExportError::TaskError {
            message: e.to_string(),
        })?
}
