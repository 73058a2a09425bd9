//! 通用 UI 组件
//!
//! 对话框、幻灯片、按钮等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::models::Slide;

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 单张幻灯片：带边框的标题和可滚动正文。返回正文换行后的行数。
pub fn render_slide_widget(frame: &mut Frame, area: Rect, slide: &Slide, scroll: u16) -> usize {
    if area.width == 0 || area.height == 0 {
        return 0;
    }

    let block = Block::default()
        .title(slide.title.as_str())
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL);

    let body = Paragraph::new(slide.body.as_str()).wrap(Wrap { trim: false });
    let wrapped_lines = body.line_count(block.inner(area).width);

    frame.render_widget(body.scroll((scroll, 0)).block(block), area);
    wrapped_lines
}

/// [组件] 导航按钮，禁用时变暗
pub fn render_button_widget(frame: &mut Frame, area: Rect, label: &str, enabled: bool) {
    let style = if enabled {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(button, area);
}
