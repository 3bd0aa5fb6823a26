//! Static HTML table markup for a labeled 8x8 board.
//!
//! The class names and the `space-` id prefix are consumed by the stylesheet
//! and the scripts that place pieces, so they are fixed.

use std::fmt;
use std::io;

use crate::types::{File, Rank, Square};

pub const BOARD_CLASS: &str = "board";
pub const FILE_HEADER_CLASS: &str = "board-header file";
pub const RANK_HEADER_CLASS: &str = "board-header rank";
pub const SQUARE_CLASS: &str = "board-space";
pub const SQUARE_MARKER_CLASS: &str = "square";
pub const ELEMENT_ID_PREFIX: &str = "space-";

/// The board document. Its `Display` output is the full markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardMarkup;

impl BoardMarkup {
    fn write_file_row(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  <tr>")?;
        writeln!(f, "    <td></td>")?;
        for file in File::ALL {
            writeln!(f, "    <th class=\"{FILE_HEADER_CLASS}\">{file}</th>")?;
        }
        writeln!(f, "    <td></td>")?;
        writeln!(f, "  </tr>")
    }

    fn write_rank_row(f: &mut fmt::Formatter<'_>, rank: Rank) -> fmt::Result {
        writeln!(f, "  <tr>")?;
        writeln!(f, "    <th class=\"{RANK_HEADER_CLASS}\">{rank}</th>")?;
        for file in File::ALL {
            let square = Square::new(file, rank);
            writeln!(
                f,
                "    <td id=\"{}\" class=\"{SQUARE_CLASS} {} {SQUARE_MARKER_CLASS}\"></td>",
                square.element_id(),
                square.shade()
            )?;
        }
        writeln!(f, "    <th class=\"{RANK_HEADER_CLASS}\">{rank}</th>")?;
        writeln!(f, "  </tr>")
    }
}

impl fmt::Display for BoardMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<table class=\"{BOARD_CLASS}\">")?;
        Self::write_file_row(f)?;
        // Rank 8 at the top, white at the bottom.
        for rank in Rank::ALL.into_iter().rev() {
            Self::write_rank_row(f, rank)?;
        }
        Self::write_file_row(f)?;
        writeln!(f, "</table>")
    }
}

/// Render the board markup to a string.
pub fn generate() -> String {
    BoardMarkup.to_string()
}

/// Write the board markup to `out`. Writer errors are returned unchanged.
pub fn write_board<W: io::Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", BoardMarkup)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank_rows(markup: &str) -> Vec<Vec<&str>> {
        let mut rows = Vec::new();
        let mut current: Option<Vec<&str>> = None;
        for line in markup.lines() {
            match line.trim() {
                "<tr>" => current = Some(Vec::new()),
                "</tr>" => rows.extend(current.take()),
                cell => {
                    if let Some(row) = current.as_mut() {
                        row.push(cell);
                    }
                }
            }
        }
        rows
    }

    fn square_ids(row: &[&str]) -> Vec<String> {
        row.iter()
            .filter_map(|cell| cell.strip_prefix("<td id=\""))
            .filter_map(|rest| rest.split('"').next())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_every_square_id_appears_once() {
        let markup = generate();
        for square in Square::all_in_display_order() {
            let needle = format!("id=\"{}\"", square.element_id());
            assert_eq!(markup.matches(&needle).count(), 1, "{needle}");
        }
        assert_eq!(markup.matches(ELEMENT_ID_PREFIX).count(), 64);
    }

    #[test]
    fn test_corner_square_classes() {
        let markup = generate();
        assert!(markup.contains(r#"<td id="space-a1" class="board-space dark square"></td>"#));
        assert!(markup.contains(r#"<td id="space-h1" class="board-space light square"></td>"#));
        assert!(markup.contains(r#"<td id="space-a8" class="board-space light square"></td>"#));
        assert!(markup.contains(r#"<td id="space-h8" class="board-space dark square"></td>"#));
    }

    #[test]
    fn test_file_labels_top_and_bottom() {
        let markup = generate();
        let rows = rank_rows(&markup);
        let expected: Vec<String> = File::ALL
            .iter()
            .map(|file| format!("<th class=\"board-header file\">{file}</th>"))
            .collect();

        for row in [&rows[0], &rows[9]] {
            assert_eq!(row.len(), 10);
            assert_eq!(row[0], "<td></td>");
            assert_eq!(row[9], "<td></td>");
            let headers: Vec<String> = row[1..9].iter().map(|cell| cell.to_string()).collect();
            assert_eq!(headers, expected);
        }
        for label in &expected {
            assert_eq!(markup.matches(label.as_str()).count(), 2);
        }
    }

    #[test]
    fn test_rank_labels_descend_on_both_sides() {
        let markup = generate();
        let rows = rank_rows(&markup);
        let labels: Vec<(&str, &str)> = rows[1..9]
            .iter()
            .map(|row| (row[0], row[9]))
            .collect();

        for (i, (left, right)) in labels.iter().enumerate() {
            let label = format!("<th class=\"board-header rank\">{}</th>", 8 - i);
            assert_eq!(*left, label);
            assert_eq!(*right, label);
            assert_eq!(markup.matches(label.as_str()).count(), 2);
        }
    }

    #[test]
    fn test_table_shape() {
        let markup = generate();
        assert!(markup.starts_with("<table class=\"board\">\n"));
        assert!(markup.ends_with("</table>\n"));
        assert_eq!(markup.matches("<tr>").count(), 10);
        assert_eq!(markup.matches("</tr>").count(), 10);

        let rows = rank_rows(&markup);
        assert_eq!(rows.len(), 10);
        for row in &rows[1..9] {
            assert_eq!(row.len(), 10);
            assert_eq!(square_ids(row).len(), 8);
        }
        assert_eq!(markup.matches("class=\"board-space ").count(), 64);
    }

    #[test]
    fn test_top_rank_is_a8_through_h8() {
        let markup = generate();
        let rows = rank_rows(&markup);
        assert_eq!(
            square_ids(&rows[1]),
            vec![
                "space-a8", "space-b8", "space-c8", "space-d8", "space-e8", "space-f8", "space-g8",
                "space-h8"
            ]
        );
        assert_eq!(square_ids(&rows[8])[0], "space-a1");
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate(), generate());
    }

    #[test]
    fn test_write_board_matches_generate() {
        let mut buf = Vec::new();
        write_board(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), generate());
    }

    struct BrokenPipe;

    impl io::Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_propagates() {
        let err = write_board(&mut BrokenPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
