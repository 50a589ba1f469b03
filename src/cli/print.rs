use colored::Colorize;
use kantan::{BoardName, Card};

pub fn success(message: &str) {
    println!("{}", message.green());
}

pub fn info(message: &str) {
    println!("{}", message.cyan());
}

pub fn error(message: &str) {
    eprintln!("{}", message.red());
}

/// Prints a board's cards as a table
pub fn card_table(name: &BoardName, cards: &[Card], show_date: bool, show_tags: bool) {
    println!("\n{}\n", format!("board - {}:", name).cyan().bold());

    let lines = render_table(cards, show_date, show_tags);
    let Some((header, rows)) = lines.split_first() else {
        return;
    };
    let rule = "-".repeat(header.chars().count());

    println!("{}", header.cyan().bold());
    println!("{}", rule.cyan());
    for row in rows {
        println!("{}", row.cyan());
    }
    println!("{}\n", rule.cyan());
}

const ID_WIDTH: usize = 4;
const DATE_HEADER: &str = "Creation Date";

/// Lays out the header line followed by one line per card.
///
/// The tags column appears only when requested and at least one card has tags.
pub fn render_table(cards: &[Card], show_date: bool, show_tags: bool) -> Vec<String> {
    let show_tags = show_tags && cards.iter().any(|c| !c.tags().is_empty());
    let date_width = cards
        .iter()
        .map(|c| c.creation_date.chars().count())
        .chain(std::iter::once(DATE_HEADER.len()))
        .max()
        .unwrap_or(DATE_HEADER.len());
    let tags_width = cards
        .iter()
        .map(|c| c.tags().chars().count())
        .chain(std::iter::once("Tags".len()))
        .max()
        .unwrap_or(0);

    let line = |id: &str, date: &str, tags: &str, title: &str| {
        let mut line = format!("{:<width$}", id, width = ID_WIDTH);
        if show_date {
            line.push_str(&format!("| {:<date_width$} ", date));
        }
        if show_tags {
            line.push_str(&format!("| {:<tags_width$} ", tags));
        }
        line.push_str(&format!("| {}", title));
        line
    };

    let mut lines = vec![line("ID", DATE_HEADER, "Tags", "Title")];
    lines.extend(
        cards
            .iter()
            .enumerate()
            .map(|(i, c)| line(&i.to_string(), &c.creation_date, c.tags(), &c.title)),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, date: &str, tags: &str) -> Card {
        let mut card = Card::new(title.to_string(), tags);
        card.creation_date = date.to_string();
        card
    }

    #[test]
    fn test_minimal_table() {
        let cards = vec![card("Buy milk", "01/01/2026 10:00:00", "")];
        let lines = render_table(&cards, false, false);

        assert_eq!(lines, vec!["ID  | Title", "0   | Buy milk"]);
    }

    #[test]
    fn test_table_with_dates() {
        let cards = vec![card("Buy milk", "01/01/2026 10:00:00", "")];
        let lines = render_table(&cards, true, false);

        assert_eq!(lines[0], "ID  | Creation Date       | Title");
        assert_eq!(lines[1], "0   | 01/01/2026 10:00:00 | Buy milk");
    }

    #[test]
    fn test_tags_column_needs_tagged_cards() {
        let untagged = vec![card("Buy milk", "01/01/2026 10:00:00", "")];
        assert!(!render_table(&untagged, false, true)[0].contains("Tags"));

        let tagged = vec![
            card("Buy milk", "01/01/2026 10:00:00", ""),
            card("Call mom", "01/01/2026 11:00:00", "urgent"),
        ];
        let lines = render_table(&tagged, false, true);
        assert_eq!(lines[0], "ID  | Tags   | Title");
        assert_eq!(lines[1], "0   |        | Buy milk");
        assert_eq!(lines[2], "1   | urgent | Call mom");
    }
}
