//! Collection import: paginate the user's remote collection and append
//! previously-unseen identifiers as bare rows for the enrichment loop to
//! fill in later.

use crate::client::CatalogClient;
use crate::config;
use crate::error::Result;
use crate::layout::{Column, Layout};
use crate::settings::Settings;
use crate::sheet::{CellValue, Worksheet};

/// Import the user's collection, appending one row per new identifier in
/// page order. Returns the number of rows appended.
///
/// With no username configured this is a no-op. A page fetch error halts the
/// import; nothing needs recovery since appended ids are idempotently
/// re-checked on the next run.
pub fn load_user_collection<S, C>(sheet: &mut S, client: &C, layout: &Layout) -> Result<usize>
where
    S: Worksheet,
    C: CatalogClient,
{
    let settings = Settings::load(sheet, layout)?;
    let Some(username) = settings.username else {
        return Ok(0);
    };

    // Known ids, by linear scan of the identifier column.
    let mut known: Vec<String> = layout
        .data_rows(sheet)
        .into_iter()
        .filter_map(|r| layout.read_row(sheet, r).release_id)
        .collect();

    let id_col = layout.col(Column::ReleaseId);
    let mut next_row = layout.first_empty_row(sheet);
    let mut appended = 0;

    let mut next_url = Some(config::collection_url(&username));
    while let Some(url) = next_url {
        let page = client.collection_page(&url)?;
        for release in page.releases {
            let id = release.id.to_string();
            if known.iter().any(|existing| *existing == id) {
                continue;
            }
            sheet.write_value(next_row, id_col, CellValue::Text(id.clone()));
            known.push(id);
            next_row += 1;
            appended += 1;
        }
        next_url = page.pagination.urls.next;
    }

    sheet.flush()?;
    Ok(appended)
}
