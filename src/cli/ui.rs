use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use rust_decimal::Decimal;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    TotalValue,
    Warning,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Warning => style(text).yellow().bold(),
        StyleType::Error => style(text).red().bold(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Two-decimal rendering used for every amount.
pub fn money(value: Decimal) -> String {
    format!("{value:.2}")
}

pub fn percent(value: Decimal) -> String {
    format!("{value:.2}%")
}

/// Right-aligned amount cell.
pub fn amount_cell(value: Decimal) -> Cell {
    Cell::new(money(value)).set_alignment(CellAlignment::Right)
}

/// PAID in green, PENDING in yellow.
pub fn status_cell(is_paid: bool) -> Cell {
    if is_paid {
        Cell::new("PAID").fg(Color::Green)
    } else {
        Cell::new("PENDING").fg(Color::Yellow)
    }
}

/// Section heading followed by a rule of the same width.
pub fn heading(title: &str) -> String {
    let rule = "=".repeat(title.chars().count().max(40));
    format!("{}\n{}\n", style_text(title, StyleType::Title), rule)
}

/// "1 day" or "N days".
pub fn days(count: i64) -> String {
    if count.abs() == 1 {
        format!("{count} day")
    } else {
        format!("{count} days")
    }
}
