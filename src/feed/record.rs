// src/feed/record.rs

use crate::core::html::RawRow;

/// Rows with fewer cells than this are headers/separators, not bookings.
pub const MIN_CELLS: usize = 2;

/// One booking, by fixed column position:
/// start date, end date, weekday, start time, end time, subject, info.
/// Column headers are never consulted; position is the contract.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingRecord {
    pub start_date: String,
    pub end_date: String,
    pub weekday: String,
    pub start_time: String,
    pub end_time: String,
    pub subject: String,
    pub info: String,
}

/// Positional mapping; missing trailing columns become "". No validation.
pub fn map_row(row: &RawRow) -> Option<BookingRecord> {
    if row.len() < MIN_CELLS {
        return None;
    }
    let col = |i: usize| row.get(i).cloned().unwrap_or_default();
    Some(BookingRecord {
        start_date: col(0),
        end_date: col(1),
        weekday: col(2),
        start_time: col(3),
        end_time: col(4),
        subject: col(5),
        info: col(6),
    })
}

pub fn map_rows(rows: &[RawRow]) -> Vec<BookingRecord> {
    let records: Vec<_> = rows.iter().filter_map(map_row).collect();
    let skipped = rows.len() - records.len();
    if skipped > 0 {
        logd!("Skipped {skipped} row(s) with fewer than {MIN_CELLS} cells");
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawRow {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn short_rows_are_skipped() {
        assert!(map_row(&row(&[])).is_none());
        assert!(map_row(&row(&["only"])).is_none());
        assert!(map_row(&row(&["a", "b"])).is_some());
    }

    #[test]
    fn three_cells_default_the_rest() {
        let r = map_row(&row(&["2025-01-10", "2025-01-11", "Fri"])).unwrap();
        assert_eq!(r.start_date, "2025-01-10");
        assert_eq!(r.end_date, "2025-01-11");
        assert_eq!(r.weekday, "Fri");
        for empty in [&r.start_time, &r.end_time, &r.subject, &r.info] {
            assert_eq!(empty, "");
        }
    }

    #[test]
    fn extra_columns_are_ignored() {
        let r = map_row(&row(&["d", "e", "w", "s", "t", "subj", "info", "extra"])).unwrap();
        assert_eq!(r.subject, "subj");
        assert_eq!(r.info, "info");
    }

    #[test]
    fn values_pass_through_unchanged() {
        let r = map_row(&row(&["not a date", "", "", "25:99"])).unwrap();
        assert_eq!(r.start_date, "not a date");
        assert_eq!(r.start_time, "25:99");
    }

    #[test]
    fn map_rows_keeps_one_record_per_data_row() {
        let rows = vec![row(&["hdr"]), row(&["a", "b"]), row(&[]), row(&["c", "d", "e"])];
        let recs = map_rows(&rows);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].start_date, "a");
        assert_eq!(recs[1].weekday, "e");
    }
}
