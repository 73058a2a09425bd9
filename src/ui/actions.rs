//! Action 枚举定义 (Intent)
//!
//! 键盘、拖动、滚轮和点击都转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 翻页
    NextSlide,
    PreviousSlide,
    FirstSlide,
    LastSlide,
    GoToSlide(usize), // 从 0 开始

    // 演示模式
    ToggleFullscreen,
    ExitFullscreen,
    ToggleHelp,
    CloseHelp,

    ScrollBody(i16), // 纵向滚动正文，正数向下
}
