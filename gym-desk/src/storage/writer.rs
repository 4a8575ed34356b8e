//! Member file writer

use gym_table::{Cell, TableBuilder};
use shared::models::{GymMember, PremiumMember, RegularMember};

use super::schema::{BORDER_WIDTH, PREMIUM_SCHEMA, REGULAR_SCHEMA, TableSchema, status_label};
use crate::money::{format_money, format_whole};

/// Render the regular member file
pub fn render_regular<'a>(members: impl IntoIterator<Item = &'a RegularMember>) -> String {
    let rows: Vec<Vec<Cell>> = members.into_iter().map(regular_row).collect();
    render_table(&REGULAR_SCHEMA, &rows)
}

/// Render the premium member file
pub fn render_premium<'a>(members: impl IntoIterator<Item = &'a PremiumMember>) -> String {
    let rows: Vec<Vec<Cell>> = members.into_iter().map(premium_row).collect();
    render_table(&PREMIUM_SCHEMA, &rows)
}

fn render_table(schema: &TableSchema, rows: &[Vec<Cell>]) -> String {
    let mut table = TableBuilder::new(BORDER_WIDTH);
    table
        .border()
        .banner(schema.title, schema.banner_indent)
        .border()
        .header(schema.columns)
        .border()
        .blank_line();

    for row in rows {
        table.row(schema.columns, row);
    }

    table
        .blank_line()
        .border()
        .footer(&schema.footer(rows.len()), schema.footer_width)
        .border();
    table.finalize()
}

fn regular_row(m: &RegularMember) -> Vec<Cell> {
    vec![
        Cell::number(m.id().to_string()),
        Cell::text(m.name()),
        Cell::text(m.location()),
        Cell::text(m.phone()),
        Cell::text(m.email()),
        Cell::text(m.membership_start_date()),
        Cell::text(m.plan().as_str()),
        Cell::number(format_money(m.price())),
        Cell::number(m.attendance().to_string()),
        Cell::text(status_label(m.is_active())),
    ]
}

fn premium_row(m: &PremiumMember) -> Vec<Cell> {
    vec![
        Cell::number(m.id().to_string()),
        Cell::text(m.name()),
        Cell::text(m.location()),
        Cell::text(m.phone()),
        Cell::text(m.personal_trainer()),
        Cell::text(m.membership_start_date()),
        Cell::text(m.plan().as_str()),
        Cell::number(format_money(m.premium_charge())),
        Cell::number(format_whole(m.loyalty_points())),
        Cell::text(status_label(m.is_active())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::MemberProfile;

    fn regular(id: i64, name: &str) -> RegularMember {
        RegularMember::new(
            MemberProfile {
                id,
                name: name.to_string(),
                location: "Kathmandu".to_string(),
                phone: "9800000000".to_string(),
                email: "a@gym.test".to_string(),
                gender: "Female".to_string(),
                date_of_birth: "2000-1-1".to_string(),
                membership_start_date: "2025-4-12".to_string(),
            },
            "friend",
        )
    }

    #[test]
    fn test_layout() {
        let text = render_regular([&regular(1, "Alice")]);
        let lines: Vec<&str> = text.lines().collect();

        let border = format!("+{}+", "-".repeat(171));
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], border);
        assert!(lines[1].starts_with(&format!("|{}REGULAR MEMBERS LIST", " ".repeat(37))));
        assert_eq!(lines[1].chars().count(), border.chars().count());
        assert_eq!(lines[2], border);
        assert!(lines[3].starts_with("| ID    | Name            | Location     |"));
        assert_eq!(lines[4], border);
        assert_eq!(lines[5], "");
        assert_eq!(
            lines[6],
            "| 1     | Alice           | Kathmandu    | 9800000000 | a@gym.test           | 2025-4-12       | basic    | 6500.00 | 0     | Inactive |"
        );
        assert_eq!(lines[7], "");
        assert_eq!(lines[8], border);
        assert_eq!(lines[9], format!("| {:<83} |", "Total Regular Members: 1"));
        assert_eq!(lines[10], border);
    }

    #[test]
    fn test_long_name_truncated() {
        let text = render_regular([&regular(1, "Maximilian Alexander")]);
        assert!(text.contains("| Maximilian A... |"));
    }

    #[test]
    fn test_pipe_in_text_is_replaced() {
        let text = render_regular([&regular(1, "A|B")]);
        assert!(text.contains("| A/B             |"));
    }

    #[test]
    fn test_premium_row() {
        let mut m = PremiumMember::new(
            MemberProfile {
                id: 7,
                name: "Bob".to_string(),
                location: "Pokhara".to_string(),
                phone: "9811111111".to_string(),
                ..Default::default()
            },
            "Coach Ram",
            "poster",
            50000.0,
        );
        m.add_loyalty_points(12.0);
        m.activate_membership();

        let text = render_premium([&m]);
        assert!(text.contains(
            "| 7     | Bob             | Pokhara      | 9811111111 | Coach Ram       |                 | basic    | 50000.00   | 12      | Active  |"
        ));
        assert!(text.contains(&format!("| {:<93} |", "Total Premium Members: 1")));
    }

    #[test]
    fn test_empty_table() {
        let text = render_premium(std::iter::empty());
        assert!(text.contains("Total Premium Members: 0"));
        assert_eq!(text.lines().count(), 10);
    }

    #[test]
    fn test_premium_banner_indent() {
        let text = render_premium(std::iter::empty());
        let banner = text.lines().nth(1).unwrap();
        assert!(banner.starts_with(&format!("|{}PREMIUM MEMBERS LIST", " ".repeat(39))));
        assert_eq!(banner.chars().count(), BORDER_WIDTH + 2);
    }

    #[test]
    fn test_points_round_half_up() {
        let mut m = PremiumMember::new(
            MemberProfile {
                id: 8,
                name: "Ana".to_string(),
                ..Default::default()
            },
            "Coach",
            "poster",
            50000.0,
        );
        m.add_loyalty_points(12.5);

        let text = render_premium([&m]);
        assert!(text.contains("| 50000.00   | 13      |"));
    }
}
