//! Terminal output formatting for search results.

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use reel_index::{FilmHit, ResultPage};

/// Maximum overview length shown in table cells before truncation.
const SNIPPET_LEN: usize = 60;

/// Prints one page of results as a table, with a pagination footer.
pub fn print_result_page(page: &ResultPage) {
    if page.total == 0 {
        println!("No films matched.");
        return;
    }

    println!("{}", films_table(&page.films, true));

    let shown_from = page.page * page.page_size + 1;
    let shown_to = page.page * page.page_size + page.films.len();
    if page.films.is_empty() {
        println!("Page {} is past the end ({} matches).", page.page, page.total);
    } else {
        println!(
            "Showing {shown_from}-{shown_to} of {} (page {})",
            page.total, page.page
        );
    }
}

/// Prints suggestions as a table without scores.
pub fn print_suggestions(hits: &[FilmHit]) {
    if hits.is_empty() {
        println!("No suggestions.");
        return;
    }
    println!("{}", films_table(hits, false));
}

/// Builds the shared films table.
fn films_table(hits: &[FilmHit], with_score: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    let mut header = vec!["Title", "Released", "Runtime", "Vote", "Overview"];
    if with_score {
        header.push("Score");
    }
    table.set_header(header);

    for hit in hits {
        let released = hit
            .release_date
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        let mut row = vec![
            Cell::new(&hit.title),
            Cell::new(released),
            Cell::new(format!("{} min", hit.runtime)),
            Cell::new(format!("{:.1}", hit.vote_average)),
            Cell::new(snippet(&hit.overview)),
        ];
        if with_score {
            row.push(Cell::new(format!("{:.3}", hit.score)));
        }
        table.add_row(row);
    }

    table
}

/// Truncates an overview to a single-cell snippet on a character boundary.
fn snippet(text: &str) -> String {
    if text.chars().count() <= SNIPPET_LEN {
        return text.to_string();
    }
    let cut: String = text.chars().take(SNIPPET_LEN).collect();
    format!("{}…", cut.trim_end())
}
