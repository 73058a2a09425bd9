//! 幻灯片索引状态机
//!
//! `SlideController` 独占当前索引，所有操作都做边界检查：
//! 越界请求被静默丢弃，索引始终位于 `[0, total_slides - 1]`。
//! 渲染和导航按钮通过构造时注入的两个 trait 接收通知。

use std::num::NonZeroUsize;

use tracing::debug;

/// 一次渲染通知携带的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidePosition {
    pub index: usize,
    pub total: NonZeroUsize,
}

impl SlidePosition {
    /// 容器的水平偏移，单位为视口宽度的百分比
    pub fn offset_percent(&self) -> i64 {
        -(self.index as i64) * 100
    }

    /// 从 1 开始的页码
    pub fn counter(&self) -> usize {
        self.index + 1
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total.get()
    }
}

/// 视口：根据位置切换可见的幻灯片、指示点和页码
pub trait ViewportRenderer {
    fn render(&mut self, position: SlidePosition);
}

/// 导航按钮：第一页禁用「上一页」，最后一页禁用「下一页」
pub trait NavigationControls {
    fn update(&mut self, prev_enabled: bool, next_enabled: bool);
}

pub struct SlideController<R, N> {
    current_index: usize,
    total_slides: NonZeroUsize,
    renderer: R,
    controls: N,
}

impl<R: ViewportRenderer, N: NavigationControls> SlideController<R, N> {
    /// 创建控制器并立即通知一次，使视口显示第一页
    pub fn new(total_slides: NonZeroUsize, renderer: R, controls: N) -> Self {
        let mut controller = Self {
            current_index: 0,
            total_slides,
            renderer,
            controls,
        };
        controller.notify();
        controller
    }

    /// 下一页，最后一页时无操作。返回索引是否改变。
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.set_index(self.current_index + 1)
    }

    /// 上一页，第一页时无操作
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.set_index(self.current_index - 1)
    }

    /// 跳转到指定页，越界请求被丢弃
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.total_slides.get() {
            debug!(index, total = self.total_slides.get(), "丢弃越界跳转");
            return false;
        }
        self.set_index(index)
    }

    pub fn jump_to_last(&mut self) -> bool {
        self.jump_to(self.total_slides.get() - 1)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_slides(&self) -> usize {
        self.total_slides.get()
    }

    pub fn is_first(&self) -> bool {
        self.position().is_first()
    }

    pub fn is_last(&self) -> bool {
        self.position().is_last()
    }

    pub fn position(&self) -> SlidePosition {
        SlidePosition {
            index: self.current_index,
            total: self.total_slides,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn controls(&self) -> &N {
        &self.controls
    }

    fn set_index(&mut self, index: usize) -> bool {
        if index == self.current_index {
            return false;
        }
        debug!(from = self.current_index, to = index, "切换幻灯片");
        self.current_index = index;
        self.notify();
        true
    }

    fn notify(&mut self) {
        let position = self.position();
        self.renderer.render(position);
        self.controls.update(!position.is_first(), !position.is_last());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingViewport {
        rendered: Vec<SlidePosition>,
    }

    impl ViewportRenderer for RecordingViewport {
        fn render(&mut self, position: SlidePosition) {
            self.rendered.push(position);
        }
    }

    #[derive(Default)]
    struct RecordingControls {
        prev_enabled: bool,
        next_enabled: bool,
        updates: usize,
    }

    impl NavigationControls for RecordingControls {
        fn update(&mut self, prev_enabled: bool, next_enabled: bool) {
            self.prev_enabled = prev_enabled;
            self.next_enabled = next_enabled;
            self.updates += 1;
        }
    }

    fn controller(total: usize) -> SlideController<RecordingViewport, RecordingControls> {
        SlideController::new(
            NonZeroUsize::new(total).unwrap(),
            RecordingViewport::default(),
            RecordingControls::default(),
        )
    }

    #[test]
    fn starts_at_first_slide_and_notifies_once() {
        let c = controller(3);
        assert_eq!(c.current_index(), 0);
        assert!(c.is_first());
        assert!(!c.is_last());
        assert_eq!(c.renderer().rendered.len(), 1);
        assert!(!c.controls().prev_enabled);
        assert!(c.controls().next_enabled);
    }

    #[test]
    fn advance_saturates_at_last_slide() {
        let mut c = controller(5);
        for _ in 0..5 {
            c.advance();
        }
        assert_eq!(c.current_index(), 4);
        assert!(c.is_last());
        assert!(!c.advance());
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn retreat_saturates_at_first_slide() {
        let mut c = controller(5);
        for _ in 0..10 {
            assert!(!c.retreat());
        }
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn out_of_range_jumps_are_dropped() {
        let mut c = controller(5);
        c.jump_to(2);

        assert!(!c.jump_to(5));
        assert!(!c.jump_to(usize::MAX));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn valid_jump_sets_index_exactly() {
        let mut c = controller(5);
        for k in [3, 0, 4, 1] {
            assert!(c.jump_to(k));
            assert_eq!(c.current_index(), k);
        }
        assert!(c.jump_to_last());
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn no_op_does_not_notify() {
        let mut c = controller(2);
        c.retreat();
        c.jump_to(0);
        c.jump_to(7);
        assert_eq!(c.renderer().rendered.len(), 1);
        assert_eq!(c.controls().updates, 1);

        c.advance();
        c.advance();
        assert_eq!(c.renderer().rendered.len(), 2);
    }

    #[test]
    fn nine_slides_right_eight_times_disables_next() {
        let mut c = controller(9);
        for _ in 0..8 {
            c.advance();
        }
        assert_eq!(c.current_index(), 8);
        assert!(c.is_last());
        assert!(!c.controls().next_enabled);
        assert!(c.controls().prev_enabled);

        c.advance();
        assert_eq!(c.current_index(), 8);
        let last = c.renderer().rendered.last().copied().unwrap();
        assert_eq!(last.offset_percent(), -800);
        assert_eq!(last.counter(), 9);
    }

    #[test]
    fn single_slide_disables_both_controls() {
        let mut c = controller(1);
        assert!(c.is_first() && c.is_last());
        assert!(!c.controls().prev_enabled);
        assert!(!c.controls().next_enabled);
        assert!(!c.advance());
        assert!(!c.retreat());
        assert!(!c.jump_to_last());
    }

    #[test]
    fn index_stays_in_bounds_for_any_sequence() {
        let mut c = controller(7);
        let mut seed: u64 = 0x5eed;
        for _ in 0..2_000 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            match (seed >> 33) % 3 {
                0 => {
                    c.advance();
                }
                1 => {
                    c.retreat();
                }
                _ => {
                    c.jump_to(((seed >> 40) % 12) as usize);
                }
            }
            assert!(c.current_index() < 7);
            let last = c.renderer().rendered.last().copied().unwrap();
            assert_eq!(last.index, c.current_index());
        }
    }
}
