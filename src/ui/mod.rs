//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): App 结构体，持有 SlideController
//! - View (view/): 根据视口和按钮状态绘制界面
//! - Intent (actions.rs): 按键、拖动、滚轮转化为语义化 Action
//!
//! viewport.rs 是控制器的两个协作者在终端中的实现

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;
pub mod viewport;

// Re-export for convenience
pub use input::handle_event;
pub use state::App;
pub use view::render;
