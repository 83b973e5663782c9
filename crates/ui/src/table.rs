//! Generic data table: column schema + rows -> [`TableView`].
//!
//! Rendering is a pure function of `(rows, columns, options)`. The same input
//! always produces an equal `TableView`, which is what the HTML writer and the
//! JSON endpoints consume.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cell::Cell;
use crate::html::{HtmlWriter, classes};
use crate::key_path::KeyPath;

pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// Placeholder rows shown while loading, regardless of the data.
pub const SKELETON_ROWS: usize = 5;

/// Custom cell content: `(resolved value, row, row index) -> cell`.
pub type CellRenderer<T> = Arc<dyn Fn(Option<&Value>, &T, usize) -> Cell + Send + Sync>;

/// Row click callback: `(row, row index)`.
pub type RowClickHandler<T> = Arc<dyn Fn(&T, usize) + Send + Sync>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// Left is the implicit default and carries no class.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Left => None,
            Self::Center => Some("text-center"),
            Self::Right => Some("text-right"),
        }
    }
}

/// One column of the schema. Display order is the order columns are given in.
pub struct Column<T> {
    key: KeyPath,
    header: String,
    width: Option<String>,
    align: Align,
    render: Option<CellRenderer<T>>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            width: self.width.clone(),
            align: self.align,
            render: self.render.clone(),
        }
    }
}

impl<T> core::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("render", &self.render.is_some())
            .finish()
    }
}

impl<T> Column<T> {
    /// Column reading the dotted `key` from each row.
    pub fn new(key: &str, header: impl Into<String>) -> Self {
        Self::with_key(KeyPath::new(key), header)
    }

    pub fn with_key(key: KeyPath, header: impl Into<String>) -> Self {
        Self {
            key,
            header: header.into(),
            width: None,
            align: Align::default(),
            render: None,
        }
    }

    /// Width class passed through to the header cell.
    pub fn width(mut self, class: impl Into<String>) -> Self {
        self.width = Some(class.into());
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(Option<&Value>, &T, usize) -> Cell + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn key(&self) -> &KeyPath {
        &self.key
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    fn header_cell(&self) -> HeaderCell {
        HeaderCell {
            label: self.header.clone(),
            width: self.width.clone(),
            align: self.align,
        }
    }

    fn cell(&self, data: &Value, row: &T, index: usize) -> CellView {
        let value = self.key.resolve(data);
        let content = match &self.render {
            Some(render) => render(value, row, index),
            None => Cell::from_value(value),
        };
        CellView {
            align: self.align,
            content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub align: Align,
    pub content: Cell,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub index: usize,
    /// Set only when a click handler is configured.
    pub clickable: bool,
    pub cells: Vec<CellView>,
}

/// Rendered table: skeleton, empty placeholder, or data rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TableView {
    Loading {
        headers: Vec<HeaderCell>,
        placeholder_rows: usize,
    },
    Empty {
        caption: Option<String>,
        headers: Vec<HeaderCell>,
        message: String,
        colspan: usize,
    },
    Rows {
        caption: Option<String>,
        headers: Vec<HeaderCell>,
        rows: Vec<RowView>,
    },
}

/// Column schema plus display options and an optional row click handler.
pub struct DataTable<T> {
    columns: Vec<Column<T>>,
    caption: Option<String>,
    loading: bool,
    empty_message: String,
    on_row_click: Option<RowClickHandler<T>>,
}

impl<T> Clone for DataTable<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            caption: self.caption.clone(),
            loading: self.loading,
            empty_message: self.empty_message.clone(),
            on_row_click: self.on_row_click.clone(),
        }
    }
}

impl<T> DataTable<T> {
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            caption: None,
            loading: false,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            on_row_click: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn with_row_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&T, usize) + Send + Sync + 'static,
    {
        self.on_row_click = Some(Arc::new(handler));
        self
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn is_clickable(&self) -> bool {
        self.on_row_click.is_some()
    }

    /// Deliver a click on the row at `index`.
    ///
    /// Returns `true` when a handler ran (exactly once). Without a handler, or
    /// for an index past the end, nothing happens.
    pub fn click(&self, rows: &[T], index: usize) -> bool {
        match (&self.on_row_click, rows.get(index)) {
            (Some(handler), Some(row)) => {
                handler(row, index);
                true
            }
            _ => false,
        }
    }

    fn headers(&self) -> Vec<HeaderCell> {
        self.columns.iter().map(Column::header_cell).collect()
    }
}

impl<T: Serialize> DataTable<T> {
    pub fn render(&self, rows: &[T]) -> TableView {
        if self.loading {
            return TableView::Loading {
                headers: self.headers(),
                placeholder_rows: SKELETON_ROWS,
            };
        }

        if rows.is_empty() {
            return TableView::Empty {
                caption: self.caption.clone(),
                headers: self.headers(),
                message: self.empty_message.clone(),
                colspan: self.columns.len(),
            };
        }

        let clickable = self.is_clickable();
        let rows = rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let data = serde_json::to_value(row).unwrap_or_else(|e| {
                    tracing::warn!(index, error = %e, "row is not representable as JSON; cells will be empty");
                    Value::Null
                });
                RowView {
                    index,
                    clickable,
                    cells: self
                        .columns
                        .iter()
                        .map(|column| column.cell(&data, row, index))
                        .collect(),
                }
            })
            .collect();

        TableView::Rows {
            caption: self.caption.clone(),
            headers: self.headers(),
            rows,
        }
    }
}

impl TableView {
    pub fn headers(&self) -> &[HeaderCell] {
        match self {
            Self::Loading { headers, .. } | Self::Empty { headers, .. } | Self::Rows { headers, .. } => {
                headers
            }
        }
    }

    /// Body rows as displayed (skeleton rows and the placeholder row included).
    pub fn row_count(&self) -> usize {
        match self {
            Self::Loading { placeholder_rows, .. } => *placeholder_rows,
            Self::Empty { .. } => 1,
            Self::Rows { rows, .. } => rows.len(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut w = HtmlWriter::new();
        w.open("div", &[("class", Some("table-container"))]);
        w.open("table", &[]);

        match self {
            Self::Loading {
                headers,
                placeholder_rows,
            } => {
                w.open("thead", &[]);
                w.open("tr", &[]);
                for h in headers {
                    w.open("th", &[("class", h.width.as_deref())]);
                    w.raw(r#"<div class="skeleton skeleton-header"></div>"#);
                    w.close("th");
                }
                w.close("tr");
                w.close("thead");

                w.open("tbody", &[]);
                for _ in 0..*placeholder_rows {
                    w.open("tr", &[]);
                    for _ in headers {
                        w.raw(r#"<td><div class="skeleton"></div></td>"#);
                    }
                    w.close("tr");
                }
                w.close("tbody");
            }
            Self::Empty {
                caption,
                headers,
                message,
                colspan,
            } => {
                write_caption(&mut w, caption.as_deref());
                write_headers(&mut w, headers);
                w.open("tbody", &[]);
                w.open("tr", &[]);
                let colspan = colspan.to_string();
                w.element(
                    "td",
                    &[("colspan", Some(colspan.as_str())), ("class", Some("table-empty"))],
                    message,
                );
                w.close("tr");
                w.close("tbody");
            }
            Self::Rows {
                caption,
                headers,
                rows,
            } => {
                write_caption(&mut w, caption.as_deref());
                write_headers(&mut w, headers);
                w.open("tbody", &[]);
                for row in rows {
                    let index = row.index.to_string();
                    if row.clickable {
                        w.open(
                            "tr",
                            &[("data-row-index", Some(index.as_str())), ("class", Some("cursor-pointer"))],
                        );
                    } else {
                        w.open("tr", &[]);
                    }
                    for cell in &row.cells {
                        w.open("td", &[("class", cell.align.class())]);
                        cell.content.write_html(&mut w);
                        w.close("td");
                    }
                    w.close("tr");
                }
                w.close("tbody");
            }
        }

        w.close("table");
        w.close("div");
        w.finish()
    }
}

fn write_caption(w: &mut HtmlWriter, caption: Option<&str>) {
    if let Some(caption) = caption {
        w.element("caption", &[], caption);
    }
}

fn write_headers(w: &mut HtmlWriter, headers: &[HeaderCell]) {
    w.open("thead", &[]);
    w.open("tr", &[]);
    for h in headers {
        let class = classes([h.width.as_deref(), h.align.class()]);
        w.element("th", &[("class", class.as_deref())], &h.label);
    }
    w.close("tr");
    w.close("thead");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Badge, BadgeVariant};
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Person {
        id: u32,
        user: Profile,
    }

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Profile {
        name: String,
    }

    fn person(id: u32, name: &str) -> Person {
        Person {
            id,
            user: Profile {
                name: name.to_string(),
            },
        }
    }

    fn columns() -> Vec<Column<Person>> {
        vec![
            Column::new("id", "ID").width("w-[60px]"),
            Column::new("user.name", "Name"),
            Column::new("user.missing", "Missing").align(Align::Right),
        ]
    }

    fn cell_texts(view: &TableView) -> Vec<Vec<String>> {
        match view {
            TableView::Rows { rows, .. } => rows
                .iter()
                .map(|r| r.cells.iter().map(|c| c.content.text().to_string()).collect())
                .collect(),
            other => panic!("expected rows, got {other:?}"),
        }
    }

    #[test]
    fn empty_rows_render_default_message() {
        let view = DataTable::new(columns()).render(&[]);
        assert_eq!(
            view,
            TableView::Empty {
                caption: None,
                headers: DataTable::new(columns()).headers(),
                message: "No data available".to_string(),
                colspan: 3,
            }
        );
        assert_eq!(view.row_count(), 1);
    }

    #[test]
    fn custom_empty_message_is_used() {
        let view = DataTable::new(columns())
            .with_empty_message("Nobody here")
            .render(&[]);
        assert!(matches!(view, TableView::Empty { ref message, .. } if message == "Nobody here"));
    }

    #[test]
    fn loading_renders_five_placeholder_rows_ignoring_data() {
        let rows: Vec<Person> = (0..12).map(|i| person(i, "x")).collect();
        let view = DataTable::new(columns()).with_loading(true).render(&rows);

        assert_eq!(view.row_count(), SKELETON_ROWS);
        assert_eq!(view.headers().len(), 3);
        assert!(matches!(view, TableView::Loading { placeholder_rows: 5, .. }));
    }

    #[test]
    fn nested_keys_resolve_and_missing_keys_show_dash() {
        let view = DataTable::new(columns()).render(&[person(1, "A")]);
        assert_eq!(cell_texts(&view), vec![vec!["1", "A", "-"]]);
    }

    #[test]
    fn custom_renderer_receives_value_row_and_index() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let table = DataTable::new(vec![Column::new("user.name", "Name").render(
            move |value: Option<&Value>, row: &Person, index| {
                sink.lock().unwrap().push((value.cloned(), row.id, index));
                Cell::Badge(Badge::new(format!("#{index}"), BadgeVariant::Info))
            },
        )]);

        let view = table.render(&[person(7, "A"), person(8, "B")]);

        assert_eq!(cell_texts(&view), vec![vec!["#0"], vec!["#1"]]);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![(Some(json!("A")), 7, 0), (Some(json!("B")), 8, 1)]
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let table = DataTable::new(columns()).with_caption("People");
        let rows = vec![person(1, "A"), person(2, "B")];
        assert_eq!(table.render(&rows), table.render(&rows));
        assert_eq!(table.render(&rows).to_html(), table.render(&rows).to_html());
    }

    #[test]
    fn click_invokes_handler_once_with_row_and_index() {
        let clicks = Arc::new(Mutex::new(Vec::new()));
        let sink = clicks.clone();
        let table = DataTable::new(columns()).with_row_click(move |row: &Person, index| {
            sink.lock().unwrap().push((row.clone(), index));
        });
        let rows = vec![person(1, "A"), person(2, "B")];

        assert!(table.click(&rows, 1));
        assert_eq!(*clicks.lock().unwrap(), vec![(person(2, "B"), 1)]);

        assert!(!table.click(&rows, 2));
        assert_eq!(clicks.lock().unwrap().len(), 1);
    }

    #[test]
    fn rows_are_not_clickable_without_handler() {
        let table = DataTable::new(columns());
        let rows = vec![person(1, "A")];
        let view = table.render(&rows);

        assert!(!table.click(&rows, 0));
        match &view {
            TableView::Rows { rows, .. } => assert!(rows.iter().all(|r| !r.clickable)),
            other => panic!("expected rows, got {other:?}"),
        }
        let html = view.to_html();
        assert!(!html.contains("cursor-pointer"));
        assert!(!html.contains("data-row-index"));
    }

    #[test]
    fn html_wires_clickable_rows_and_alignment() {
        let table = DataTable::new(columns())
            .with_caption("People & friends")
            .with_row_click(|_: &Person, _| {});
        let html = table.render(&[person(1, "<A>")]).to_html();

        assert!(html.contains("<caption>People &amp; friends</caption>"));
        assert!(html.contains(r#"<th class="w-[60px]">ID</th>"#));
        assert!(html.contains(r#"<th class="text-right">Missing</th>"#));
        assert!(html.contains(r#"<tr data-row-index="0" class="cursor-pointer">"#));
        assert!(html.contains("<td>&lt;A&gt;</td>"));
        assert!(html.contains(r#"<td class="text-right">-</td>"#));
    }

    #[test]
    fn empty_html_spans_all_columns() {
        let html = DataTable::new(columns()).render(&[]).to_html();
        assert!(html.contains(r#"<td colspan="3" class="table-empty">No data available</td>"#));
    }

    #[test]
    fn serializes_with_state_tag() {
        let view = DataTable::new(columns()).with_loading(true).render(&[]);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["state"], "loading");
        assert_eq!(json["placeholder_rows"], 5);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: loading always shows the fixed skeleton.
            #[test]
            fn loading_row_count_is_fixed(n in 0usize..50) {
                let rows: Vec<Person> = (0..n as u32).map(|i| person(i, "x")).collect();
                let view = DataTable::new(columns()).with_loading(true).render(&rows);
                prop_assert_eq!(view.row_count(), SKELETON_ROWS);
            }

            /// Property: one view row per data row, one cell per column, in order.
            #[test]
            fn shape_follows_rows_and_columns(names in prop::collection::vec("[A-Za-z]{1,8}", 1..20)) {
                let rows: Vec<Person> = names.iter().enumerate().map(|(i, n)| person(i as u32, n)).collect();
                let view = DataTable::new(columns()).render(&rows);
                let texts = cell_texts(&view);

                prop_assert_eq!(texts.len(), rows.len());
                for (i, row) in texts.iter().enumerate() {
                    prop_assert_eq!(row.len(), 3);
                    prop_assert_eq!(&row[1], &names[i]);
                }
                prop_assert_eq!(view.clone(), DataTable::new(columns()).render(&rows));
            }
        }
    }
}
