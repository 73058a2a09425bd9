//! 业务逻辑处理 (Update/Dispatch)
//!
//! 翻页全部委托给 `SlideController`，这里只处理演示模式和正文滚动

use tracing::{debug, info};

use super::actions::Action;
use super::state::{App, AppMode, raw_scroll_limit};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::NextSlide => {
                let changed = self.controller.advance();
                self.after_navigation(changed);
            }
            Action::PreviousSlide => {
                let changed = self.controller.retreat();
                self.after_navigation(changed);
            }
            Action::FirstSlide => {
                let changed = self.controller.jump_to(0);
                self.after_navigation(changed);
            }
            Action::LastSlide => {
                let changed = self.controller.jump_to_last();
                self.after_navigation(changed);
            }
            Action::GoToSlide(index) => {
                let changed = self.controller.jump_to(index);
                self.after_navigation(changed);
            }

            Action::ToggleFullscreen => self.set_fullscreen(!self.fullscreen),
            Action::ExitFullscreen => self.set_fullscreen(false),

            Action::ToggleHelp => {
                self.mode = match self.mode {
                    AppMode::Presenting => AppMode::Help,
                    AppMode::Help => AppMode::Presenting,
                };
            }
            Action::CloseHelp => self.mode = AppMode::Presenting,

            Action::ScrollBody(delta) => self.scroll_body(delta),
        }
        false
    }

    // ============ 翻页相关 ============

    /// 换页后正文回到顶部
    fn after_navigation(&mut self, changed: bool) {
        if changed {
            self.body_scroll = 0;
            self.body_scroll_limit = raw_scroll_limit(self.current_slide());
        }
    }

    // ============ 演示模式相关 ============

    fn set_fullscreen(&mut self, fullscreen: bool) {
        if self.fullscreen != fullscreen {
            info!(fullscreen, "切换全屏");
        }
        self.fullscreen = fullscreen;
    }

    // ============ 正文滚动 ============

    /// 滚动当前页正文，范围限制在换行后的正文行数内
    pub fn scroll_body(&mut self, delta: i16) {
        self.body_scroll = self
            .body_scroll
            .saturating_add_signed(delta)
            .min(self.body_scroll_limit);
        debug!(scroll = self.body_scroll, "滚动正文");
    }
}
