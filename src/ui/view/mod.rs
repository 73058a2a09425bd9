//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件。可见的页、指示点、页码和按钮状态
//! 都从控制器的协作者（视口、导航按钮）读取。

pub mod components;
pub mod layouts;

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, AppMode, HitAreas};
use components::{render_button_widget, render_dialog_framework, render_slide_widget};
use layouts::{centered_rect, sliding_split};

const PREV_LABEL: &str = "◀ 上一页";
const NEXT_LABEL: &str = "下一页 ▶";

const HELP_TEXT: &str = "\
→ / 空格 / PageDown   下一页
← / PageUp            上一页
Home / End            第一页 / 最后一页
1-9                   跳到对应页
↑ / ↓                 滚动正文
f                     切换全屏
Esc                   退出全屏
Ctrl+H / ?            显示或关闭帮助
q                     退出

鼠标：左右拖动翻页，横向滚轮翻页，点击按钮或指示点";

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    render_at(frame, app, Instant::now());
}

fn render_at(frame: &mut Frame, app: &mut App, now: Instant) {
    let area = frame.area();
    if app.fullscreen {
        app.hit_areas = HitAreas::default();
        let measured = render_slides(frame, app, area, now);
        update_scroll_limit(app, measured);
    } else {
        let indicator_height = if app.show_indicators { 1 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                // 标题
                Constraint::Min(5),                   // 幻灯片
                Constraint::Length(indicator_height), // 指示点
                Constraint::Length(3),                // 按钮和页码
            ])
            .split(area);

        render_title(frame, app, chunks[0]);
        let measured = render_slides(frame, app, chunks[1], now);
        update_scroll_limit(app, measured);
        app.hit_areas.indicators = if app.show_indicators {
            render_indicators(frame, app, chunks[2])
        } else {
            Vec::new()
        };
        render_footer(frame, app, chunks[3]);
    }

    if app.mode == AppMode::Help {
        render_help_dialog(frame);
    }
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let heading = app.deck.meta.heading();
    let text = if heading.is_empty() {
        "slidedeck".to_string()
    } else {
        heading
    };

    let title = Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

/// 静止时只画当前页；动画期间左右两页按滚动位置分割区域。
///
/// 静止时返回当前页正文换行后的行数。
fn render_slides(frame: &mut Frame, app: &App, area: Rect, now: Instant) -> Option<usize> {
    let viewport = app.controller.renderer();
    let (left_index, left, right) = sliding_split(area, viewport.scroll_position(now));

    let resting = right.width == 0 && left_index == viewport.active_slide();
    let scroll = if resting { app.body_scroll } else { 0 };

    let wrapped_lines = app
        .deck
        .slide(left_index)
        .map(|slide| render_slide_widget(frame, left, slide, scroll));
    if right.width > 0 {
        if let Some(slide) = app.deck.slide(left_index + 1) {
            render_slide_widget(frame, right, slide, 0);
        }
    }
    wrapped_lines.filter(|_| resting)
}

fn update_scroll_limit(app: &mut App, wrapped_lines: Option<usize>) {
    let Some(lines) = wrapped_lines else {
        return;
    };
    app.body_scroll_limit = u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX);
    app.body_scroll = app.body_scroll.min(app.body_scroll_limit);
}

/// 每页一个指示点，返回 `(页索引, 点所在区域)`。
///
/// 点数超过宽度时只显示以当前页为中心的一段，当前页的点始终可见。
fn render_indicators(frame: &mut Frame, app: &App, area: Rect) -> Vec<(usize, Rect)> {
    let viewport = app.controller.renderer();
    let total = viewport.total();
    let active = viewport.active_indicator();

    // 每个点占两列：点和间隔
    let capacity = usize::from(area.width.saturating_add(1) / 2);
    if capacity == 0 || area.height == 0 {
        return Vec::new();
    }
    let shown = total.min(capacity);
    let first = active.saturating_sub(shown / 2).min(total - shown);

    let width = u16::try_from(shown * 2 - 1).unwrap_or(area.width).min(area.width);
    let start_x = area.x + (area.width - width) / 2;

    let mut spans = Vec::with_capacity(shown * 2);
    let mut areas = Vec::with_capacity(shown);
    for (slot, index) in (first..first + shown).enumerate() {
        let (symbol, style) = if index == active {
            ("●", Style::default().fg(Color::Yellow))
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };
        if slot > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(symbol, style));

        let offset = u16::try_from(slot * 2).unwrap_or(u16::MAX);
        areas.push((index, Rect::new(start_x + offset, area.y, 1, 1)));
    }

    let line_area = Rect {
        x: start_x,
        width,
        ..area
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), line_area);
    areas
}

fn render_footer(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Min(0),
            Constraint::Length(12),
        ])
        .split(inner);

    let buttons = *app.controller.controls();
    render_button_widget(frame, chunks[0], PREV_LABEL, buttons.prev_enabled);
    render_button_widget(frame, chunks[2], NEXT_LABEL, buttons.next_enabled);

    let counter = Paragraph::new(format!(
        "{}    [Ctrl+H] 帮助",
        app.controller.renderer().counter_label()
    ))
    .style(Style::default().fg(Color::Gray))
    .alignment(Alignment::Center);
    frame.render_widget(counter, chunks[1]);

    app.hit_areas.prev = chunks[0];
    app.hit_areas.next = chunks[2];
}

fn render_help_dialog(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());
    let inner = render_dialog_framework(frame, area, "快捷键");

    let help = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::White));
    frame.render_widget(help, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use ratatui::{Terminal, backend::TestBackend};

    use crate::config::Config;
    use crate::models::{Deck, DeckData, DeckMeta, Slide};
    use crate::ui::actions::Action;

    fn app(transition_ms: u64) -> App {
        app_with(9, transition_ms)
    }

    fn app_with(count: usize, transition_ms: u64) -> App {
        let slides = (1..=count)
            .map(|n| Slide {
                title: format!("Slide {n}"),
                body: format!("body {n}"),
            })
            .collect();
        let deck = Deck::from_data(
            DeckData {
                meta: DeckMeta {
                    title: "Demo".to_string(),
                    ..DeckMeta::default()
                },
                slides,
            },
            "test",
        )
        .unwrap();
        let config = Config {
            transition_ms,
            ..Config::default()
        };
        App::new(deck, &config)
    }

    fn draw(app: &mut App, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render_at(frame, app, now)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn shows_active_slide_and_counter() {
        let mut app = app(0);
        app.dispatch(Action::GoToSlide(2));

        let screen = draw(&mut app, Instant::now());
        assert!(screen.contains("Slide 3"));
        assert!(screen.contains("body 3"));
        assert!(screen.contains("3 / 9"));
        assert!(screen.contains("Demo"));
        assert!(!screen.contains("Slide 2"));
    }

    #[test]
    fn records_click_targets() {
        let mut app = app(0);
        draw(&mut app, Instant::now());

        assert_eq!(app.hit_areas.indicators.len(), 9);
        assert!(app.hit_areas.prev.width > 0);
        assert!(app.hit_areas.next.width > 0);
        assert_ne!(app.hit_areas.prev, app.hit_areas.next);
    }

    #[test]
    fn large_deck_keeps_active_indicator_visible() {
        let mut app = app_with(60, 0);
        app.dispatch(Action::GoToSlide(50));

        let screen = draw(&mut app, Instant::now());
        assert_eq!(screen.matches('●').count(), 1);
        assert_eq!(app.hit_areas.indicators.len(), 40);

        let (_, dot) = app
            .hit_areas
            .indicators
            .iter()
            .copied()
            .find(|(index, _)| *index == 50)
            .unwrap();
        assert_eq!(
            app.hit_areas.action_at(dot.as_position()),
            Some(Action::GoToSlide(50))
        );

        app.dispatch(Action::LastSlide);
        let screen = draw(&mut app, Instant::now());
        assert_eq!(screen.matches('●').count(), 1);
        assert_eq!(app.hit_areas.indicators.last().map(|(index, _)| *index), Some(59));
    }

    #[test]
    fn long_paragraph_scrolls_to_its_wrapped_end() {
        let mut app = app_with(1, 0);
        app.deck = Deck::from_data(
            DeckData {
                meta: DeckMeta::default(),
                slides: vec![Slide {
                    title: "Long".to_string(),
                    body: "word ".repeat(100),
                }],
            },
            "test",
        )
        .unwrap();
        app.body_scroll_limit = 0;

        draw(&mut app, Instant::now());
        // 500 个字符在 78 列宽的正文区换成至少 6 行
        assert!(app.body_scroll_limit >= 5);

        app.dispatch(Action::ScrollBody(5));
        assert_eq!(app.body_scroll, 5);
        app.dispatch(Action::ScrollBody(100));
        assert_eq!(app.body_scroll, app.body_scroll_limit);
    }

    #[test]
    fn fullscreen_hides_chrome() {
        let mut app = app(0);
        app.dispatch(Action::ToggleFullscreen);

        let screen = draw(&mut app, Instant::now());
        assert!(screen.contains("Slide 1"));
        assert!(!screen.contains("1 / 9"));
        assert!(!screen.contains("Demo"));
        assert_eq!(app.hit_areas, HitAreas::default());
    }

    #[test]
    fn hidden_indicators_are_not_clickable() {
        let mut app = app(0);
        app.show_indicators = false;
        draw(&mut app, Instant::now());
        assert!(app.hit_areas.indicators.is_empty());
    }

    #[test]
    fn help_overlay_lists_shortcuts() {
        let mut app = app(0);
        assert!(!draw(&mut app, Instant::now()).contains("PageDown"));

        app.dispatch(Action::ToggleHelp);
        assert!(draw(&mut app, Instant::now()).contains("PageDown"));
    }

    #[test]
    fn transition_shows_both_slides() {
        let mut app = app(10_000);
        app.dispatch(Action::NextSlide);

        let screen = draw(&mut app, Instant::now() + Duration::from_millis(2_000));
        assert!(screen.contains("Slide 1"));
        assert!(screen.contains("Slide 2"));

        let settled = draw(&mut app, Instant::now() + Duration::from_secs(11));
        assert!(!settled.contains("Slide 1"));
        assert!(settled.contains("Slide 2"));
    }
}
