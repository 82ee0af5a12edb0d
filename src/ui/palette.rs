use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear};

use super::{rule, ACCENT};
use crate::app::AppState;
use crate::filter::DisplayRow;

const TITLE: &str = " Kitty Shortcut Palette ";
const FOOTER: &str = "↑/↓ Navigate  •  c Copy  •  ? Help  •  Enter/Esc Exit";
const MIN_WIDTH: u16 = 50;
const MAX_WIDTH: u16 = 90;
const MIN_HEIGHT: u16 = 12;
/// Top border, filter line, rule, footer rule, bottom border.
const CHROME_ROWS: u16 = 5;
const COMBO_COLUMN: usize = 24;

/// Centred box sized for `row_count` display rows, never larger than `area`.
pub fn palette_area(area: Rect, row_count: usize) -> Rect {
    let width = area
        .width
        .saturating_sub(4)
        .clamp(MIN_WIDTH, MAX_WIDTH)
        .min(area.width);
    let wanted = u16::try_from(row_count)
        .unwrap_or(u16::MAX)
        .saturating_add(CHROME_ROWS)
        .max(MIN_HEIGHT);
    let height = wanted.min(area.height.saturating_sub(2));
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

pub fn viewport_height(area: Rect, row_count: usize) -> usize {
    palette_area(area, row_count).height.saturating_sub(CHROME_ROWS) as usize
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let rows = &state.filtered.rows;
    let area = palette_area(frame.area(), rows.len());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(TITLE).bold().centered());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 3 || inner.width < 3 {
        return;
    }

    let text_line = |y: u16| Rect::new(inner.x + 1, y, inner.width - 2, 1);

    let filter_text = if state.query.is_empty() {
        "Filter: (type to search)".to_string()
    } else {
        format!("Filter: {}", state.query)
    };
    frame.render_widget(Line::from(filter_text).dim(), text_line(inner.y));
    frame.render_widget(rule(inner.width), Rect::new(inner.x, inner.y + 1, inner.width, 1));

    let viewport = inner.height as usize - 3;
    let selected = state.selected_row();
    for (offset, idx) in state.selection.visible_range(viewport, rows.len()).enumerate() {
        let y = inner.y + 2 + offset as u16;
        frame.render_widget(row_line(rows[idx], selected == Some(idx)), text_line(y));
    }

    let footer_y = inner.bottom() - 1;
    frame.render_widget(rule(inner.width), Rect::new(inner.x, footer_y, inner.width, 1));
    let footer = Line::from(FOOTER).dim();
    let footer_width = (footer.width() as u16).min(inner.width);
    let footer_x = inner.x + (inner.width - footer_width) / 2;
    frame.render_widget(footer, Rect::new(footer_x, footer_y, footer_width, 1));
}

fn row_line(row: DisplayRow, is_selected: bool) -> Line<'static> {
    match row {
        DisplayRow::Category(name) => Line::from(format!(" {name} "))
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        DisplayRow::Empty(message) => Line::from(message).dim(),
        DisplayRow::Item { combo, description } => {
            let line = Line::from(format!("{:<width$} {}", combo, description, width = COMBO_COLUMN));
            if is_selected {
                line.style(Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD))
            } else {
                line
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn box_is_centred_and_bounded() {
        let area = Rect::new(0, 0, 120, 40);
        assert_eq!(palette_area(area, 3), Rect::new(15, 14, 90, 12));
        assert_eq!(palette_area(area, 100), Rect::new(15, 1, 90, 38));
        assert_eq!(viewport_height(area, 100), 33);
    }

    #[test]
    fn narrow_screens_never_overflow() {
        let area = Rect::new(0, 0, 30, 6);
        let palette = palette_area(area, 10);
        assert_eq!(palette.width, 30);
        assert_eq!(palette.height, 4);
        assert_eq!(viewport_height(area, 10), 0);
        assert_eq!(palette_area(Rect::new(0, 0, 10, 1), 10).height, 0);
    }
}
