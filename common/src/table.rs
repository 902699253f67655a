//! Column derivation and cell rendering rules of the data browser.
//!
//! Submitted records of one form type do not share a fixed schema, so the
//! table is built from what was actually fetched: a few fixed leading
//! columns, then the union of every field key seen on the page (first-seen
//! order), then an actions column.

use crate::error::ClientError;
use crate::model::submission::{FieldValue, FormSubmission};
use crate::notification::Notification;
use crate::requests::Page;
use std::collections::HashSet;

pub const FIXED_HEADERS: [&str; 4] = ["ID", "Title", "Status", "Submitted At"];
pub const ACTIONS_HEADER: &str = "Actions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub header: String,
    pub signature: bool,
}

/// What a single field cell shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Blank,
    Text(String),
    /// Thumbnail that opens the full image; holds a displayable data URI.
    Signature(String),
}

/// Union of field keys across `records`, in the order they are first seen.
pub fn field_columns(records: &[FormSubmission]) -> Vec<Column> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();
    for record in records {
        for key in record.fields.keys() {
            if seen.insert(key.as_str()) {
                columns.push(Column {
                    key: key.clone(),
                    header: humanize(key),
                    signature: is_signature_key(key),
                });
            }
        }
    }
    columns
}

/// Every header of the table, fixed and dynamic, including actions.
pub fn headers(columns: &[Column]) -> Vec<String> {
    FIXED_HEADERS
        .iter()
        .map(|h| h.to_string())
        .chain(columns.iter().map(|c| c.header.clone()))
        .chain(std::iter::once(ACTIONS_HEADER.to_string()))
        .collect()
}

/// `vendorSignature` → `Vendor Signature`, `tax_id` → `Tax Id`.
pub fn humanize(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn is_signature_key(key: &str) -> bool {
    key.to_lowercase().contains("signature")
}

/// Displayable image URI held by a signature value, if any.
///
/// Only `data:image/...` URIs count; any other text under a signature key
/// (a date, a printed name) renders as plain text. Groups are searched for
/// the first member holding such a URI.
pub fn signature_uri(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Text(text) => {
            let text = text.trim();
            let is_image = text
                .get(..IMAGE_URI_PREFIX.len())
                .is_some_and(|p| p.eq_ignore_ascii_case(IMAGE_URI_PREFIX));
            is_image.then(|| text.to_string())
        }
        FieldValue::Group(members) => members.values().find_map(signature_uri),
        _ => None,
    }
}

const IMAGE_URI_PREFIX: &str = "data:image/";

pub fn cell(record: &FormSubmission, column: &Column) -> Cell {
    let Some(value) = record.fields.get(&column.key) else {
        return Cell::Blank;
    };
    if column.signature {
        if let Some(uri) = signature_uri(value) {
            return Cell::Signature(uri);
        }
    }
    if value.is_empty() {
        return Cell::Blank;
    }
    Cell::Text(value.display())
}

/// `(column header, image uri)` for each signature present on the row; one
/// "view signature" action is rendered per entry.
pub fn row_signatures(record: &FormSubmission, columns: &[Column]) -> Vec<(String, String)> {
    columns
        .iter()
        .filter(|c| c.signature)
        .filter_map(|c| match cell(record, c) {
            Cell::Signature(uri) => Some((c.header.clone(), uri)),
            _ => None,
        })
        .collect()
}

/// Offset pagination window computed from the server-reported total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub limit: u32,
    pub count: u64,
}

impl PageWindow {
    pub fn new(page: u32, limit: u32, count: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            count,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.count.div_ceil(u64::from(self.limit)).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) * u64::from(self.limit) < self.count
    }

    /// `"11 to 20 of 25"`; `"0 to 0 of 0"` for an empty result. A page that
    /// starts past `count` shows `"0 to 0 of {count}"`.
    pub fn range_text(&self) -> String {
        let start = u64::from(self.page - 1) * u64::from(self.limit) + 1;
        if start > self.count {
            return format!("0 to 0 of {}", self.count);
        }
        let end = (u64::from(self.page) * u64::from(self.limit)).min(self.count);
        format!("{} to {} of {}", start, end, self.count)
    }
}

/// Rows currently shown by the data browser plus the bookkeeping needed to
/// drop stale responses and apply optimistic deletes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    pub rows: Vec<FormSubmission>,
    pub count: u64,
    request_seq: u64,
}

impl DataTable {
    /// Starts a new fetch and returns its sequence number.
    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.request_seq
    }

    /// Applies a page unless a newer request was issued since `seq`.
    pub fn apply_page(&mut self, seq: u64, page: Page<FormSubmission>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.rows = page.data;
        self.count = page.count;
        true
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.request_seq
    }

    /// Empties the view without touching the request counter, so responses
    /// still in flight stay distinguishable from later ones.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.count = 0;
    }

    /// Page to show after a delete: one back when the current page ran out
    /// of rows and is not the first.
    pub fn page_after_delete(&self, page: u32) -> u32 {
        if self.rows.is_empty() && page > 1 {
            page - 1
        } else {
            page
        }
    }

    pub fn columns(&self) -> Vec<Column> {
        field_columns(&self.rows)
    }

    /// Removes the row whatever the server answered. The next fetch is the
    /// source of truth; a failure only produces a dismissible note.
    pub fn apply_delete(
        &mut self,
        id: &str,
        outcome: Result<(), ClientError>,
    ) -> Option<Notification> {
        let before = self.rows.len();
        self.rows.retain(|r| r.id != id);
        if self.rows.len() < before {
            self.count = self.count.saturating_sub(1);
        }
        match outcome {
            Ok(()) => None,
            Err(err) => Some(Notification::error(format!(
                "The record was removed from this view, but the server reported: {}",
                err
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::submission::Fields;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    fn record(id: &str, fields: &[(&str, FieldValue)]) -> FormSubmission {
        FormSubmission {
            id: id.to_string(),
            form_type: "USForm7".to_string(),
            title: format!("Vendor Contract - {}", id),
            status: "submitted".to_string(),
            submitted_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            submitted_by: "rep@example.com".to_string(),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<Fields>(),
        }
    }

    fn keys(columns: &[Column]) -> HashSet<String> {
        columns.iter().map(|c| c.key.clone()).collect()
    }

    #[test]
    fn columns_are_the_union_of_field_keys() {
        let rows = vec![
            record("1", &[("a", "x".into()), ("b", "y".into())]),
            record("2", &[("b", "z".into()), ("c", "w".into())]),
        ];
        let columns = field_columns(&rows);
        let expected: HashSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(keys(&columns), expected);
        assert_eq!(columns.len(), 3);

        assert_eq!(cell(&rows[1], &columns[0]), Cell::Blank);
        assert_eq!(cell(&rows[0], &columns[0]), Cell::Text("x".into()));
    }

    #[test]
    fn empty_field_sets_leave_only_fixed_columns() {
        let rows = vec![record("1", &[]), record("2", &[])];
        let columns = field_columns(&rows);
        assert!(columns.is_empty());
        assert_eq!(
            headers(&columns),
            vec!["ID", "Title", "Status", "Submitted At", "Actions"]
        );
    }

    #[test]
    fn headers_are_humanized() {
        assert_eq!(humanize("vendorSignature"), "Vendor Signature");
        assert_eq!(humanize("bizName"), "Biz Name");
        assert_eq!(humanize("tax_id"), "Tax Id");
        assert_eq!(humanize("ein"), "Ein");
        assert_eq!(humanize("hasFleetAccounts"), "Has Fleet Accounts");
    }

    #[test]
    fn signature_with_image_renders_thumbnail() {
        let uri = "data:image/png;base64,iVBORw0KGgo=";
        let rows = vec![record("1", &[("vendorSignature", uri.into())])];
        let columns = field_columns(&rows);
        assert!(columns[0].signature);
        assert_eq!(cell(&rows[0], &columns[0]), Cell::Signature(uri.into()));
        assert_eq!(
            row_signatures(&rows[0], &columns),
            vec![("Vendor Signature".to_string(), uri.to_string())]
        );
    }

    #[test]
    fn empty_or_null_signature_renders_blank() {
        let rows = vec![
            record("1", &[("vendorSignature", "".into())]),
            record("2", &[("vendorSignature", FieldValue::Null)]),
        ];
        let columns = field_columns(&rows);
        assert_eq!(cell(&rows[0], &columns[0]), Cell::Blank);
        assert_eq!(cell(&rows[1], &columns[0]), Cell::Blank);
        assert!(row_signatures(&rows[0], &columns).is_empty());
    }

    #[test]
    fn signature_nested_in_group_is_found() {
        let mut group = BTreeMap::new();
        group.insert("image".to_string(), FieldValue::from("data:image/jpeg;base64,AAA"));
        group.insert("signedBy".to_string(), FieldValue::Null);
        let value = FieldValue::Group(group);
        assert_eq!(signature_uri(&value), Some("data:image/jpeg;base64,AAA".into()));
    }

    #[test]
    fn plain_text_under_signature_keys_is_not_an_image() {
        let mut printed = BTreeMap::new();
        printed.insert("name".to_string(), FieldValue::from("Alice"));
        let rows = vec![record(
            "1",
            &[
                ("signatureDate", FieldValue::from("2024-05-01")),
                ("vendorSignature", FieldValue::Group(printed)),
            ],
        )];
        let columns = field_columns(&rows);
        assert!(columns.iter().all(|c| c.signature));
        assert_eq!(cell(&rows[0], &columns[0]), Cell::Text("2024-05-01".into()));
        assert_eq!(
            cell(&rows[0], &columns[1]),
            Cell::Text(r#"{"name":"Alice"}"#.into())
        );
        assert!(row_signatures(&rows[0], &columns).is_empty());
        assert_eq!(signature_uri(&FieldValue::from("AAA")), None);
        assert_eq!(signature_uri(&FieldValue::from("data:text/plain,hi")), None);
    }

    #[test]
    fn scalar_values_use_generic_rendering() {
        let rows = vec![record(
            "1",
            &[
                ("acceptsTerms", FieldValue::Bool(true)),
                ("autoRenew", FieldValue::Bool(false)),
                ("bays", FieldValue::Number(4.0)),
                ("parts", FieldValue::List(vec!["Oil".into(), "Filters".into()])),
            ],
        )];
        let columns = field_columns(&rows);
        let rendered: Vec<Cell> = columns.iter().map(|c| cell(&rows[0], c)).collect();
        assert_eq!(
            rendered,
            vec![
                Cell::Text("Yes".into()),
                Cell::Text("No".into()),
                Cell::Text("4".into()),
                Cell::Text("Oil, Filters".into()),
            ]
        );
    }

    #[test]
    fn second_page_of_twenty_five() {
        let window = PageWindow::new(2, 10, 25);
        assert!(window.has_previous());
        assert!(window.has_next());
        assert_eq!(window.range_text(), "11 to 20 of 25");
        assert_eq!(window.total_pages(), 3);
    }

    #[test]
    fn bounds_disable_navigation() {
        let first = PageWindow::new(1, 10, 25);
        assert!(!first.has_previous());
        let last = PageWindow::new(3, 10, 25);
        assert!(!last.has_next());
        assert_eq!(last.range_text(), "21 to 25 of 25");
        let empty = PageWindow::new(1, 10, 0);
        assert!(!empty.has_next());
        assert_eq!(empty.range_text(), "0 to 0 of 0");
    }

    #[test]
    fn deleting_the_last_row_of_the_last_page_steps_back() {
        let mut table = DataTable::default();
        let seq = table.begin_request();
        table.apply_page(
            seq,
            Page {
                data: vec![record("21", &[])],
                count: 21,
            },
        );
        assert!(table.apply_delete("21", Ok(())).is_none());
        assert_eq!(table.count, 20);

        let stale = PageWindow::new(3, 10, table.count);
        assert_eq!(stale.range_text(), "0 to 0 of 20");
        assert!(!stale.has_next());

        let page = table.page_after_delete(3);
        assert_eq!(page, 2);
        let window = PageWindow::new(page, 10, table.count);
        assert_eq!(window.range_text(), "11 to 20 of 20");
        assert!(window.has_previous());
        assert!(!window.has_next());
    }

    #[test]
    fn rows_left_on_the_page_keep_it() {
        let mut table = DataTable::default();
        let seq = table.begin_request();
        table.apply_page(
            seq,
            Page {
                data: vec![record("11", &[]), record("12", &[])],
                count: 12,
            },
        );
        table.apply_delete("12", Ok(()));
        assert_eq!(table.page_after_delete(2), 2);
        table.apply_delete("11", Ok(()));
        assert_eq!(table.page_after_delete(1), 1);
    }

    #[test]
    fn clearing_keeps_stale_responses_out() {
        let mut table = DataTable::default();
        let first = table.begin_request();
        table.apply_page(
            first,
            Page {
                data: vec![record("1", &[])],
                count: 1,
            },
        );
        let in_flight = table.begin_request();
        table.clear();
        assert!(table.rows.is_empty());
        assert_eq!(table.count, 0);

        let next = table.begin_request();
        assert_ne!(next, in_flight);
        let late = Page {
            data: vec![record("old", &[])],
            count: 1,
        };
        assert!(!table.apply_page(in_flight, late));
        assert!(table.rows.is_empty());
    }

    #[test]
    fn delete_removes_row_even_when_the_server_fails() {
        let mut table = DataTable::default();
        let seq = table.begin_request();
        table.apply_page(
            seq,
            Page {
                data: vec![record("1", &[]), record("2", &[])],
                count: 2,
            },
        );

        let note = table.apply_delete(
            "1",
            Err(ClientError::Server {
                status: 500,
                message: "Internal Server Error".into(),
            }),
        );

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].id, "2");
        assert_eq!(table.count, 1);
        assert!(note.unwrap().message.contains("Internal Server Error"));

        assert_eq!(table.apply_delete("2", Ok(())), None);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut table = DataTable::default();
        let old = table.begin_request();
        let new = table.begin_request();

        assert!(table.apply_page(new, Page { data: vec![record("new", &[])], count: 1 }));
        assert!(!table.apply_page(old, Page { data: vec![record("old", &[])], count: 9 }));
        assert_eq!(table.rows[0].id, "new");
        assert_eq!(table.count, 1);
    }
}
