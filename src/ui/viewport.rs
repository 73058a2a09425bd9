//! 终端视口与导航按钮
//!
//! `SlideController` 的两个协作者在终端里的实现。它们只记录状态，
//! 真正的绘制由 `view` 在下一帧完成。

use std::time::{Duration, Instant};

use crate::controller::{NavigationControls, SlidePosition, ViewportRenderer};

/// 正在进行的切换动画
#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    /// 起始位置（以幻灯片为单位，可以是小数）
    from: f32,
    started: Instant,
}

/// 终端视口
#[derive(Debug, Clone)]
pub struct SlideViewport {
    offset_percent: i64,
    active_slide: usize,
    active_indicator: usize,
    counter: usize,
    total: usize,
    transition: Option<Transition>,
    transition_duration: Duration,
    initialized: bool,
}

impl SlideViewport {
    pub fn new(transition_duration: Duration) -> Self {
        Self {
            offset_percent: 0,
            active_slide: 0,
            active_indicator: 0,
            counter: 1,
            total: 1,
            transition: None,
            transition_duration,
            initialized: false,
        }
    }

    pub fn active_slide(&self) -> usize {
        self.active_slide
    }

    pub fn active_indicator(&self) -> usize {
        self.active_indicator
    }

    /// 页码文字，例如 `3 / 9`
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.counter, self.total)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// 当前滚动位置（以幻灯片为单位）。动画期间位于两页之间。
    pub fn scroll_position(&self, now: Instant) -> f32 {
        let target = -(self.offset_percent as f32) / 100.0;
        let Some(transition) = self.transition else {
            return target;
        };

        let elapsed = now.saturating_duration_since(transition.started);
        if elapsed >= self.transition_duration {
            return target;
        }
        let t = elapsed.as_secs_f32() / self.transition_duration.as_secs_f32();
        transition.from + (target - transition.from) * ease_out_cubic(t)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition.is_some_and(|transition| {
            now.saturating_duration_since(transition.started) < self.transition_duration
        })
    }

    fn render_at(&mut self, position: SlidePosition, now: Instant) {
        let animate = self.initialized
            && !self.transition_duration.is_zero()
            && position.index != self.active_slide;
        self.transition = if animate {
            Some(Transition {
                from: self.scroll_position(now),
                started: now,
            })
        } else {
            None
        };

        self.offset_percent = position.offset_percent();
        self.active_slide = position.index;
        self.active_indicator = position.index;
        self.counter = position.counter();
        self.total = position.total.get();
        self.initialized = true;
    }
}

impl ViewportRenderer for SlideViewport {
    fn render(&mut self, position: SlidePosition) {
        self.render_at(position, Instant::now());
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(3)
}

/// 底部的「上一页」「下一页」按钮状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavButtons {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl NavigationControls for NavButtons {
    fn update(&mut self, prev_enabled: bool, next_enabled: bool) {
        self.prev_enabled = prev_enabled;
        self.next_enabled = next_enabled;
    }
}
