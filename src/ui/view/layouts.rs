use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 在 `area` 中居中，宽高按百分比
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// 切换动画中两页的位置。
///
/// `position` 是以幻灯片为单位的滚动位置，例如 1.25 表示第 1 页左移了四分之一，
/// 第 2 页从右侧进入。返回 `(左侧页索引, 左侧区域, 右侧区域)`，静止时右侧区域宽度为 0。
pub fn sliding_split(area: Rect, position: f32) -> (usize, Rect, Rect) {
    let position = position.max(0.0);
    let left_index = position.floor() as usize;
    let fraction = position - position.floor();

    let shift = ((f32::from(area.width) * fraction).round() as u16).min(area.width);
    let left = Rect {
        width: area.width - shift,
        ..area
    };
    let right = Rect {
        x: area.x + left.width,
        width: shift,
        ..area
    };
    (left_index, left, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_position_uses_full_width() {
        let area = Rect::new(0, 0, 80, 20);
        let (index, left, right) = sliding_split(area, 3.0);
        assert_eq!(index, 3);
        assert_eq!(left, area);
        assert_eq!(right.width, 0);
    }

    #[test]
    fn fractional_position_splits_area() {
        let area = Rect::new(2, 1, 80, 20);
        let (index, left, right) = sliding_split(area, 1.25);
        assert_eq!(index, 1);
        assert_eq!(left, Rect::new(2, 1, 60, 20));
        assert_eq!(right, Rect::new(62, 1, 20, 20));
    }
}
