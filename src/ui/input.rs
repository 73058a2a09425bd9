//! 输入事件映射 (Input -> Action)
//!
//! 将按键、鼠标拖动、滚轮和点击转换为 Action

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::actions::Action;
use super::state::{App, AppMode};
use crate::gesture::{SwipeDirection, WheelIntent, classify_wheel};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: &AppMode, key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => return Some(Action::Quit),
        KeyCode::Char('h') | KeyCode::Char('H') if ctrl => return Some(Action::ToggleHelp),
        // 其余组合键不触发翻页
        _ if ctrl => return None,
        _ => {}
    }

    match mode {
        AppMode::Presenting => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::PageDown => Some(Action::NextSlide),
            KeyCode::Left | KeyCode::PageUp => Some(Action::PreviousSlide),
            KeyCode::Home => Some(Action::FirstSlide),
            KeyCode::End => Some(Action::LastSlide),
            KeyCode::Char(c @ '1'..='9') => Some(Action::GoToSlide(digit_index(c))),
            KeyCode::Down => Some(Action::ScrollBody(1)),
            KeyCode::Up => Some(Action::ScrollBody(-1)),
            KeyCode::Char('f') | KeyCode::Char('F') => Some(Action::ToggleFullscreen),
            KeyCode::Esc => Some(Action::ExitFullscreen),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            _ => None,
        },
        AppMode::Help => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Esc | KeyCode::Char('?') => Some(Action::CloseHelp),
            _ => None,
        },
    }
}

/// 数字键 n 对应第 n 页（从 0 开始为 n - 1）
fn digit_index(c: char) -> usize {
    c.to_digit(10).map_or(0, |n| n as usize - 1)
}

/// 根据鼠标事件获取对应的 Action，同时更新拖动状态
pub fn get_mouse_action(app: &mut App, mouse: MouseEvent) -> Option<Action> {
    if app.mode != AppMode::Presenting {
        return None;
    }

    let x = f32::from(mouse.column) * app.px_per_column;
    let position = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.swipe.begin(x);
            app.press_at = Some(position);
            None
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let pressed = app.press_at.take();
            match app.swipe.end(x) {
                Some(SwipeDirection::Left) => Some(Action::NextSlide),
                Some(SwipeDirection::Right) => Some(Action::PreviousSlide),
                None => click_action(app, pressed, position),
            }
        }
        MouseEventKind::ScrollRight => wheel_action(1.0, 0.0),
        MouseEventKind::ScrollLeft => wheel_action(-1.0, 0.0),
        MouseEventKind::ScrollDown => wheel_action(0.0, 1.0),
        MouseEventKind::ScrollUp => wheel_action(0.0, -1.0),
        _ => None,
    }
}

/// 按下和松开落在同一个可点击区域才算点击
fn click_action(app: &App, pressed: Option<Position>, released: Position) -> Option<Action> {
    let pressed = pressed?;
    let action = app.hit_areas.action_at(released)?;
    (app.hit_areas.action_at(pressed).as_ref() == Some(&action)).then_some(action)
}

fn wheel_action(delta_x: f32, delta_y: f32) -> Option<Action> {
    match classify_wheel(delta_x, delta_y) {
        WheelIntent::Next => Some(Action::NextSlide),
        WheelIntent::Previous => Some(Action::PreviousSlide),
        WheelIntent::PassThrough if delta_y > 0.0 => Some(Action::ScrollBody(1)),
        WheelIntent::PassThrough if delta_y < 0.0 => Some(Action::ScrollBody(-1)),
        WheelIntent::PassThrough => None,
    }
}

/// 处理终端事件，返回 true 表示退出
pub fn handle_event(app: &mut App, event: Event) -> bool {
    let action = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => get_action(&app.mode, key),
        Event::Mouse(mouse) => get_mouse_action(app, mouse),
        _ => None,
    };

    match action {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
