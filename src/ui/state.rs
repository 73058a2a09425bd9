//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use ratatui::layout::{Position, Rect};

use super::actions::Action;
use super::viewport::{NavButtons, SlideViewport};
use crate::config::Config;
use crate::controller::SlideController;
use crate::gesture::SwipeTracker;
use crate::models::{Deck, Slide};

/// 应用状态
pub struct App {
    pub deck: Deck,
    pub controller: SlideController<SlideViewport, NavButtons>,
    pub mode: AppMode,
    pub fullscreen: bool,
    pub show_indicators: bool,
    pub body_scroll: u16,
    pub body_scroll_limit: u16, // 正文最多能滚动的行数，绘制时按换行结果更新
    pub swipe: SwipeTracker,
    pub px_per_column: f32,
    pub press_at: Option<Position>, // 鼠标按下的位置，用于识别点击
    pub hit_areas: HitAreas,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Presenting,
    Help,
}

/// 上一帧中可点击区域的位置
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitAreas {
    pub prev: Rect,
    pub next: Rect,
    pub indicators: Vec<(usize, Rect)>, // (页索引, 区域)
}

impl HitAreas {
    /// 点击位置对应的 Action
    pub fn action_at(&self, position: Position) -> Option<Action> {
        if self.prev.contains(position) {
            return Some(Action::PreviousSlide);
        }
        if self.next.contains(position) {
            return Some(Action::NextSlide);
        }
        self.indicators
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(index, _)| Action::GoToSlide(*index))
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new(deck: Deck, config: &Config) -> Self {
        let controller = SlideController::new(
            deck.len(),
            SlideViewport::new(config.transition_duration()),
            NavButtons::default(),
        );
        let body_scroll_limit = raw_scroll_limit(deck.slide(0));
        Self {
            deck,
            controller,
            mode: AppMode::Presenting,
            fullscreen: config.start_fullscreen,
            show_indicators: config.show_indicators,
            body_scroll: 0,
            body_scroll_limit,
            swipe: SwipeTracker::new(config.swipe_threshold),
            px_per_column: f32::from(config.cell_width_px.max(1)),
            press_at: None,
            hit_areas: HitAreas::default(),
        }
    }

    /// 获取当前幻灯片
    pub fn current_slide(&self) -> Option<&Slide> {
        self.deck.slide(self.controller.current_index())
    }
}

/// 尚未绘制时按原始行数估计滚动上限
pub fn raw_scroll_limit(slide: Option<&Slide>) -> u16 {
    let lines = slide.map_or(0, Slide::line_count);
    u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
}
