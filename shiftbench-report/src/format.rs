//! Output Formatting
//!
//! Fixed-width terminal table for summary rows, columns matching the
//! report surface: Size, Avg Count, Coeff Count, Avg Time, Coeff Time.
//! Means print with 2 decimals; coefficients print with 2 decimals and a
//! `%` suffix.

use crate::report::SizeSummary;

const TABLE_WIDTH: usize = 66;

/// Format summary rows for human-readable terminal display.
pub fn format_summary_table(title: &str, rows: &[SizeSummary]) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str(title);
    output.push('\n');
    output.push_str(&"=".repeat(TABLE_WIDTH));
    output.push('\n');

    output.push_str(&format!(
        "{:>8}  {:>14}  {:>11}  {:>14}  {:>11}\n",
        "Size", "Avg Count", "Coeff Count", "Avg Time", "Coeff Time"
    ));
    output.push_str(&"-".repeat(TABLE_WIDTH));
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "{:>8}  {:>14.2}  {:>10.2}%  {:>14.2}  {:>10.2}%\n",
            row.size, row.mean_count, row.coeff_var_count, row.mean_time_ns, row.coeff_var_time
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<SizeSummary> {
        vec![
            SizeSummary {
                size: 500,
                mean_count: 62134.5,
                coeff_var_count: 3.21,
                mean_time_ns: 102345.0,
                coeff_var_time: 8.4,
            },
            SizeSummary {
                size: 1500,
                mean_count: 561002.0,
                coeff_var_count: 2.0,
                mean_time_ns: 870112.25,
                coeff_var_time: 5.05,
            },
        ]
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let table = format_summary_table("Iterative insertion sort", &sample_rows());

        assert!(table.contains("Iterative insertion sort"));
        for column in ["Size", "Avg Count", "Coeff Count", "Avg Time", "Coeff Time"] {
            assert!(table.contains(column), "missing column {column}");
        }
        assert!(table.contains("500"));
        assert!(table.contains("1500"));
    }

    #[test]
    fn test_two_decimal_percent_formatting() {
        let table = format_summary_table("t", &sample_rows());
        assert!(table.contains("3.21%"));
        assert!(table.contains("8.40%"));
        assert!(table.contains("62134.50"));
    }

    #[test]
    fn test_empty_rows_still_renders_header() {
        let table = format_summary_table("t", &[]);
        assert!(table.contains("Size"));
    }
}
