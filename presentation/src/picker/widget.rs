//! Picker widget: header, match list, preview pane and query line

use super::state::PickerState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct PickerWidget<'a> {
    state: &'a PickerState,
}

impl<'a> PickerWidget<'a> {
    pub fn new(state: &'a PickerState) -> Self {
        Self { state }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(Span::styled(
            self.state.header(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(line).render(area, buf);
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Concepts ")
            .style(Style::default().fg(Color::White));
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        if height == 0 {
            return;
        }

        // Scroll so the cursor stays on screen
        let cursor = self.state.cursor();
        let offset = cursor.saturating_sub(height - 1);

        let lines: Vec<Line> = self
            .state
            .matches()
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .filter_map(|(pos, &index)| {
                let word = self.state.item(index)?;
                let line = if pos == cursor {
                    Line::from(vec![
                        Span::styled("▶ ", Style::default().fg(Color::Cyan)),
                        Span::styled(
                            word,
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ])
                } else {
                    Line::from(vec![Span::raw("  "), Span::raw(word)])
                };
                Some(line)
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_preview(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Preview ")
            .style(Style::default().fg(Color::White));

        let text = self.state.preview().unwrap_or_default();
        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_prompt(&self, area: Rect, buf: &mut Buffer) {
        let counter = format!("{}/{}", self.state.matches().len(), self.state.total());
        let [query_area, counter_area] = Layout::horizontal([
            Constraint::Min(1),
            Constraint::Length(counter.len() as u16 + 1),
        ])
        .areas(area);

        let prompt = Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Green)),
            Span::raw(self.state.query()),
        ]);
        Paragraph::new(prompt).render(query_area, buf);
        Paragraph::new(Span::styled(counter, Style::default().fg(Color::DarkGray)))
            .render(counter_area, buf);
    }
}

impl<'a> Widget for PickerWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header_area, body_area, prompt_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let [list_area, preview_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(body_area);

        self.render_header(header_area, buf);
        self.render_list(list_area, buf);
        self.render_preview(preview_area, buf);
        self.render_prompt(prompt_area, buf);
    }
}
