use criterion::{Criterion, black_box, criterion_group, criterion_main};

use booking_feed::config::options::FeedOptions;
use booking_feed::core::html::{DomExtractor, TableExtractor, TagScanExtractor};
use booking_feed::runner::generate;
use chrono::{TimeZone, Utc};

// A season's worth of bookings, one table, mixed valid/invalid dates.
fn sample(rows: usize) -> String {
    let mut html = String::from(
        "<html><body><table class=\"ExportGrid\">\n<tr><th>Startdatum</th><th>Slutdatum</th></tr>\n",
    );
    for i in 0..rows {
        let day = i % 28 + 1;
        let date = if i % 10 == 0 { String::from("&nbsp;") } else { format!("2025-03-{day:02}") };
        html.push_str(&format!(
            "<tr class=\"RowStyle\"><td>{date}</td><td>{date}</td><td>Sat</td><td>{:02}:00</td><td>{:02}:30</td>\
             <td><span>Arena&nbsp;{}</span></td><td>Pass &amp; tr&#228;ning {i}</td></tr>\n",
            8 + i % 12,
            8 + i % 12,
            (b'A' + (i % 4) as u8) as char,
        ));
    }
    html.push_str("</table></body></html>");
    html
}

fn bench_generate(c: &mut Criterion) {
    let doc = sample(500);
    let opts = FeedOptions::default();
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();

    c.bench_function("extract_scan", |b| {
        b.iter(|| black_box(TagScanExtractor.extract_rows(black_box(&doc))).len())
    });

    c.bench_function("extract_dom", |b| {
        b.iter(|| black_box(DomExtractor.extract_rows(black_box(&doc))).len())
    });

    c.bench_function("generate_scan", |b| {
        b.iter(|| generate(black_box(&doc), &opts, now).map(|g| g.items))
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
