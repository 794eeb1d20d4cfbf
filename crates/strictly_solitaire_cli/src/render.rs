//! Plain-text rendering of a table view.

use std::time::Duration;
use strictly_solitaire::{CardFace, CardId, TableView};

const COLUMN: usize = 6;

/// Formats elapsed play time as `Time: MM:SS`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("Time: {:02}:{:02}", secs / 60, secs % 60)
}

fn slot(card: Option<CardId>) -> String {
    match card {
        Some(id) => format!("[{}]", id),
        None => "[  ]".to_string(),
    }
}

fn face(face: &CardFace) -> String {
    match face {
        CardFace::Hidden => "##".to_string(),
        CardFace::Shown(id) => id.to_string(),
    }
}

fn top_row(view: &TableView) -> String {
    let stock = if *view.stock().face_down() { "[##]" } else { "[  ]" };
    let mut line = format!(
        "{:<width$}{:<width$}{:width$}",
        stock,
        slot(*view.waste_top()),
        "",
        width = COLUMN
    );
    for top in view.foundations() {
        line.push_str(&format!("{:<width$}", slot(*top), width = COLUMN));
    }
    line.push_str(&format!(" stock: {}", view.stock().count()));
    line
}

fn tableau_rows(view: &TableView) -> Vec<String> {
    let header: String = (1..=view.tableau().len())
        .map(|i| format!("{:<width$}", format!(" T{}", i), width = COLUMN))
        .collect();

    let depth = view.tableau().iter().map(Vec::len).max().unwrap_or(0);
    let rows = (0..depth).map(|row| {
        let line: String = view
            .tableau()
            .iter()
            .map(|pile| {
                let text = pile.get(row).map(face).unwrap_or_default();
                format!(" {:<width$}", text, width = COLUMN - 1)
            })
            .collect();
        line.trim_end().to_string()
    });

    std::iter::once(header.trim_end().to_string()).chain(rows).collect()
}

/// Renders the table: header with the timer, the top row (stock, waste,
/// foundations), the tableau columns, and the drag in progress if any.
pub fn render(view: &TableView, elapsed: Duration) -> String {
    let mut lines = vec![format_elapsed(elapsed), top_row(view)];
    lines.extend(tableau_rows(view));

    if let Some(drag) = view.drag() {
        let cards: Vec<String> = drag.cards().iter().map(CardId::to_string).collect();
        lines.push(format!("Dragging {} from {}", cards.join(" "), drag.source()));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_solitaire::{Offset, Press, Session, Table};

    #[test]
    fn test_timer_format() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "Time: 00:00");
        assert_eq!(format_elapsed(Duration::from_secs(75)), "Time: 01:15");
        assert_eq!(format_elapsed(Duration::from_secs(3600)), "Time: 60:00");
    }

    #[test]
    fn test_render_dealt_table() {
        let text = render(&TableView::of_table(&Table::from_seed(8)), Duration::from_secs(5));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Time: 00:05");
        assert!(lines[1].starts_with("[##]  [  ]"));
        assert!(lines[1].ends_with("stock: 24"));
        assert!(lines[2].contains("T7"));
        // Seven tableau rows, the first showing every pile's bottom card.
        assert_eq!(lines.len(), 3 + 7);
        assert_eq!(lines[3].matches("##").count(), 6);
        // Only the seventh pile reaches the last row.
        assert!(lines[9].starts_with(&" ".repeat(6 * COLUMN)));
        assert!(!lines[9].contains("##"));
    }

    #[test]
    fn test_render_empty_table() {
        let text = render(&TableView::of_table(&Table::default()), Duration::from_secs(61));
        assert_eq!(
            text,
            "Time: 01:01\n\
             [  ]  [  ]        [  ]  [  ]  [  ]  [  ]   stock: 0\n\
             \x20T1    T2    T3    T4    T5    T6    T7\n"
        );
    }

    #[test]
    fn test_render_drag_line() {
        let (session, _) = Session::new(Table::from_seed(8)).press(Press::Stock, Offset::default());
        let (session, _) = session.press(Press::Waste, Offset::default());
        let text = render(&session.view(), Duration::ZERO);
        assert!(text.lines().last().is_some_and(|line| line.starts_with("Dragging ") && line.ends_with("from waste")));
        assert!(text.lines().nth(1).is_some_and(|line| line.starts_with("[##]  [  ]")));
    }
}
