//! Plain-text rendering of recommendation results for the terminal shell.

use std::fmt::Write;

use crate::evaluate::ResultRow;

pub const BLANK_QUERY_PROMPT: &str = "Please enter a review or preference first.";
pub const NO_MATCH_MESSAGE: &str = "No products match the filter.";

const HEADERS: [&str; 5] = ["Product", "Category", "Price", "Rating", "Similarity"];

/// `65000` -> `"65,000"`
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn cells(row: &ResultRow) -> [String; 5] {
    [
        row.product_name.clone(),
        row.category.clone(),
        format!("Rp {}", format_price(row.price)),
        format!("{:.1}", row.rating),
        format!("{:.3}", row.similarity),
    ]
}

fn pad(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    for _ in text.chars().count()..width {
        out.push(' ');
    }
}

/// Table of name, category, price, rating and similarity
pub fn render_table(rows: &[ResultRow]) -> String {
    let body: Vec<[String; 5]> = rows.iter().map(cells).collect();
    let mut widths = HEADERS.map(|h| h.chars().count());
    for line in &body {
        for (w, cell) in widths.iter_mut().zip(line.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_line(&mut out, HEADERS.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_line(&mut out, rule.iter().map(String::as_str), &widths);
    for line in &body {
        write_line(&mut out, line.iter().map(String::as_str), &widths);
    }
    out
}

fn write_line<'a>(out: &mut String, cols: impl Iterator<Item = &'a str>, widths: &[usize]) {
    for (i, (col, w)) in cols.zip(widths.iter()).enumerate() {
        if i > 0 {
            out.push_str(" | ");
        }
        pad(out, col, *w);
    }
    out.truncate(out.trim_end().len());
    out.push('\n');
}

/// Horizontal bar chart of similarity keyed by product name.
/// The best row gets a bar `width` characters long.
pub fn render_bar_chart(rows: &[ResultRow], width: usize) -> String {
    let label_width = rows
        .iter()
        .map(|r| r.product_name.chars().count())
        .max()
        .unwrap_or(0);
    let max = rows.iter().map(|r| r.similarity).fold(0.0_f64, f64::max);

    let mut out = String::new();
    for row in rows {
        let len = if max > 0.0 {
            (row.similarity / max * width as f64).round() as usize
        } else {
            0
        };
        pad(&mut out, &row.product_name, label_width);
        let _ = writeln!(out, " | {} {:.3}", "█".repeat(len), row.similarity);
    }
    out
}

/// One text block per row
pub fn render_details(rows: &[ResultRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(out, "{}", row.product_name);
        let _ = writeln!(out, "  Category:   {}", row.category);
        let _ = writeln!(out, "  Price:      Rp {}", format_price(row.price));
        let _ = writeln!(out, "  Rating:     {:.1}", row.rating);
        let _ = writeln!(out, "  Similarity: {:.3}", row.similarity);
        out.push('\n');
    }
    out
}

/// Everything the shell prints for one answered query
pub fn render_results(rows: &[ResultRow], bar_width: usize) -> String {
    if rows.is_empty() {
        return format!("{NO_MATCH_MESSAGE}\n");
    }
    format!(
        "{}\n{}\nDetails:\n\n{}",
        render_table(rows),
        render_bar_chart(rows, bar_width),
        render_details(rows)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, similarity: f64) -> ResultRow {
        ResultRow {
            product_id: 1,
            product_name: name.to_string(),
            category: "Minuman".to_string(),
            price: 65_000,
            rating: 4.8,
            similarity,
        }
    }

    #[test]
    fn price_gets_thousands_separators() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(999), "999");
        assert_eq!(format_price(1_000), "1,000");
        assert_eq!(format_price(65_000), "65,000");
        assert_eq!(format_price(1_234_567), "1,234,567");
    }

    #[test]
    fn table_has_header_rule_and_rows() {
        let table = render_table(&[row("Kopi", 0.25), row("Teh Hijau", 0.1)]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Product  "));
        assert!(lines[1].starts_with("---------"));
        assert!(lines[2].contains("Rp 65,000"));
        assert!(lines[2].ends_with("0.250"));
        assert!(lines[3].contains("4.8"));
    }

    #[test]
    fn bars_scale_to_the_best_row() {
        let chart = render_bar_chart(&[row("A", 0.5), row("B", 0.25), row("C", 0.0)], 10);
        let bars: Vec<usize> = chart.lines().map(|l| l.matches('█').count()).collect();
        assert_eq!(bars, vec![10, 5, 0]);
    }

    #[test]
    fn all_zero_similarity_draws_no_bars() {
        let chart = render_bar_chart(&[row("A", 0.0)], 10);
        assert!(!chart.contains('█'));
    }

    #[test]
    fn empty_result_prints_no_match() {
        assert_eq!(render_results(&[], 40), format!("{NO_MATCH_MESSAGE}\n"));
    }

    #[test]
    fn details_block_per_row() {
        let details = render_details(&[row("Kopi", 0.123_456)]);
        assert!(details.contains("Kopi\n"));
        assert!(details.contains("Rp 65,000"));
        assert!(details.contains("Similarity: 0.123"));
    }
}
