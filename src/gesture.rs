//! 拖动与滚轮手势识别
//!
//! 只做分类，不关心终端事件本身；由 `ui::input` 把分类结果映射为 Action。

/// 拖动翻页的默认阈值（像素）
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// 拖动方向：向左拖动翻到下一页，向右拖动回到上一页
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// `diff = start_x - end_x`，只有 `|diff| > threshold` 才算一次拖动
pub fn classify_swipe(start_x: f32, end_x: f32, threshold: f32) -> Option<SwipeDirection> {
    let diff = start_x - end_x;
    if diff.abs() <= threshold {
        return None;
    }
    if diff > 0.0 {
        Some(SwipeDirection::Left)
    } else {
        Some(SwipeDirection::Right)
    }
}

/// 记录一次拖动的起点
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// 结束拖动并分类；没有起点时返回 None
    pub fn end(&mut self, x: f32) -> Option<SwipeDirection> {
        let start_x = self.start_x.take()?;
        classify_swipe(start_x, x, self.threshold)
    }
}

/// 滚轮事件的意图
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelIntent {
    Next,
    Previous,
    /// 纵向为主，不翻页，交给正文滚动
    PassThrough,
}

pub fn classify_wheel(delta_x: f32, delta_y: f32) -> WheelIntent {
    if delta_x.abs() <= delta_y.abs() {
        return WheelIntent::PassThrough;
    }
    if delta_x > 0.0 {
        WheelIntent::Next
    } else {
        WheelIntent::Previous
    }
}

/// 每列对应的像素宽度。终端未报告像素尺寸时使用 `fallback`。
pub fn pixels_per_column(width_px: u16, columns: u16, fallback: u16) -> f32 {
    if width_px == 0 || columns == 0 {
        return f32::from(fallback.max(1));
    }
    f32::from(width_px) / f32::from(columns)
}
