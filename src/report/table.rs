//! Bordered text table rendering.
//!
//! Rendering is a pure function from headers and rows to a string,
//! independent of where the data came from or where it is printed.

use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

/// `+---+` borders, `|` column separators, a dashed header rule and no
/// rules between data rows.
///
/// Component order follows `comfy_table::TableComponent`; a space omits
/// the component.
const BORDERED_ASCII: &str = "||--+-++|    ++++++";

/// Render `headers` and `rows` as a bordered table with centred cells.
///
/// When a cell cannot be centred exactly, the spare space goes to the
/// right of odd-length text and to the left of even-length text, the
/// way PrettyTable lays it out. The result has no trailing newline.
///
/// # Example
///
/// ```ignore
/// let out = render(&["Address"], &[vec!["1.1.1.1"]]);
/// // +---------+
/// // | Address |
/// // +---------+
/// // | 1.1.1.1 |
/// // +---------+
/// ```
pub fn render<H, C>(headers: &[H], rows: &[Vec<C>]) -> String
where
    H: AsRef<str>,
    C: AsRef<str>,
{
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            rows.iter()
                .filter_map(|row| row.get(idx))
                .map(|cell| text_width(cell.as_ref()))
                .fold(text_width(header.as_ref()), usize::max)
        })
        .collect();

    let mut table = Table::new();
    table
        .load_preset(BORDERED_ASCII)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(
            headers
                .iter()
                .zip(&widths)
                .map(|(h, &w)| centred(h.as_ref(), w)),
        );

    for row in rows {
        table.add_row(row.iter().zip(&widths).map(|(c, &w)| centred(c.as_ref(), w)));
    }

    table.to_string()
}

fn text_width(content: &str) -> usize {
    content.chars().count()
}

/// Pad `content` to `width` and pin it left so comfy-table adds nothing.
fn centred(content: &str, width: usize) -> Cell {
    let len = text_width(content);
    let excess = width.saturating_sub(len);
    let (left, right) = if excess % 2 == 1 && len % 2 == 1 {
        (excess / 2, excess - excess / 2)
    } else {
        (excess - excess / 2, excess / 2)
    };
    let padded = format!("{}{}{}", " ".repeat(left), content, " ".repeat(right));
    Cell::new(padded).set_alignment(CellAlignment::Left)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_rule(line: &str) -> bool {
        line.starts_with('+') && line.ends_with('+') && line.chars().all(|c| c == '+' || c == '-')
    }

    #[test]
    fn test_render_single_column() {
        let out = render(&["Address"], &[vec!["1.1.1.1"]]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "+---------+",
                "| Address |",
                "+---------+",
                "| 1.1.1.1 |",
                "+---------+",
            ]
        );
    }

    #[test]
    fn test_render_odd_padding_like_prettytable() {
        let out = render(&["Address"], &[vec!["2001:4860::1"]]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "+--------------+",
                "|   Address    |",
                "+--------------+",
                "| 2001:4860::1 |",
                "+--------------+",
            ]
        );

        let out = render(&["IPv4", "IPv6"], &[vec!["10ms", "N/A"]]);
        assert!(out.lines().any(|l| l == "| 10ms | N/A  |"));
    }

    #[test]
    fn test_render_even_text_odd_padding_leans_left() {
        let out = render(&["Host"], &[vec!["ab"], vec!["abcde"]]);
        assert!(out.lines().any(|l| l == "|  Host |"));
        assert!(out.lines().any(|l| l == "|   ab  |"));
        assert!(out.lines().any(|l| l == "| abcde |"));
    }

    #[test]
    fn test_render_two_columns_structure() {
        let rows = vec![
            vec!["10ms", "N/A"],
            vec!["12ms", "N/A"],
            vec!["11ms", "N/A"],
            vec!["13ms", "N/A"],
        ];
        let out = render(&["IPv4", "IPv6"], &rows);
        let lines: Vec<&str> = out.lines().collect();

        // top rule, header, header rule, 4 rows, bottom rule
        assert_eq!(lines.len(), 8);
        assert!(is_rule(lines[0]));
        assert!(is_rule(lines[2]));
        assert!(is_rule(lines[7]));
        assert!(lines[1].contains("IPv4") && lines[1].contains("IPv6"));
        for (line, row) in lines[3..7].iter().zip(&rows) {
            assert!(line.starts_with('|') && line.ends_with('|'));
            assert_eq!(line.matches('|').count(), 3);
            assert!(line.contains(row[0]) && line.contains(row[1]));
        }
    }

    #[test]
    fn test_render_no_rows() {
        let out = render::<_, String>(&["Address"], &[]);
        let lines: Vec<&str> = out.lines().collect();
        assert!(is_rule(lines[0]));
        assert_eq!(lines[1], "| Address |");
        assert!(lines[2..].iter().all(|l| is_rule(l)));
    }

    #[test]
    fn test_render_empty_cell_keeps_row() {
        let out = render(&["Address"], &[vec!["8.8.8.8"], vec![""]]);
        let data_rows = out.lines().filter(|l| l.starts_with('|')).count();
        assert_eq!(data_rows, 3);
    }

    #[test]
    fn test_render_is_deterministic() {
        let rows = vec![vec!["2001:4860::1"]];
        assert_eq!(render(&["Address"], &rows), render(&["Address"], &rows));
    }
}
