use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static HEADER_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th").expect("valid selector"));
static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("valid selector"));
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("valid selector"));
static DATA_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("valid selector"));
static HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, h4").expect("valid selector"));

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Remove every `<...>` tag and trim the remainder. `None` becomes `""`.
#[must_use]
pub fn strip_html_tags(html: Option<&str>) -> String {
    html.map_or_else(String::new, |s| TAG.replace_all(s, "").trim().to_string())
}

/// Read the value cell that follows a labelled header in an HTML table fragment.
///
/// Finds the first `th` whose text contains `label` and returns the trimmed
/// text of its next element sibling, provided that sibling is a `td`.
/// Fragments holding bare rows are wrapped in a `table` before parsing.
#[must_use]
pub fn labelled_cell(fragment: &str, label: &str) -> Option<String> {
    let doc = if fragment.to_ascii_lowercase().contains("<table") {
        Html::parse_fragment(fragment)
    } else {
        Html::parse_fragment(&format!("<table>{fragment}</table>"))
    };

    let header = doc
        .select(&HEADER_CELL)
        .find(|th| th.text().collect::<String>().contains(label))?;
    let value = header.next_siblings().find_map(ElementRef::wrap)?;
    (value.value().name() == "td").then(|| value.text().collect::<String>().trim().to_string())
}

/// Trimmed `td` texts of every row of the `index`-th table of a page.
///
/// Header rows made of `th` cells come back empty; callers skip them by
/// position. A missing table yields no rows.
#[must_use]
pub fn html_table_rows(page: &str, index: usize) -> Vec<Vec<String>> {
    let doc = Html::parse_document(page);
    doc.select(&TABLE).nth(index).map_or_else(Vec::new, |table| {
        table
            .select(&ROW)
            .map(|tr| tr.select(&DATA_CELL).map(element_text).collect())
            .collect()
    })
}

/// True when a heading (`h1` to `h4`) of the page contains `text`.
#[must_use]
pub fn html_has_heading(page: &str, text: &str) -> bool {
    Html::parse_document(page)
        .select(&HEADING)
        .any(|h| element_text(h).contains(text))
}
