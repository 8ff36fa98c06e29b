use prism_engine::coords::Viewport;
use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::input::Key;
use prism_engine::render::shapes::line::LineRenderer;
use prism_engine::scene::DrawList;
use prism_scene::{DirectionInput, Game};

use crate::keys::KeyboardDirections;
use crate::surface::DrawListSurface;

/// Drives a [`Game`] from the engine runtime.
///
/// Each frame: update from the keyboard, lay out against the window size,
/// record the game's draw calls into a draw list, then replay it on the GPU
/// in the game's logical viewport.
pub struct GameHost<G> {
    game: G,
    draw_list: DrawList,
    lines: LineRenderer,
}

impl<G: Game> GameHost<G> {
    pub fn new(game: G) -> Self {
        Self {
            game,
            draw_list: DrawList::new(),
            lines: LineRenderer::new(),
        }
    }

    /// One tick on the CPU side. Returns the logical size the frame was laid out at.
    fn record_frame(&mut self, input: &dyn DirectionInput, outer: (u32, u32)) -> (u32, u32) {
        self.game.update(input);

        let (width, height) = self.game.layout(outer.0, outer.1);
        self.draw_list.clear();
        let mut surface = DrawListSurface::new(&mut self.draw_list, width, height);
        self.game.draw(&mut surface);

        (width, height)
    }
}

impl<G: Game> App for GameHost<G> {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input.key_down(Key::Escape) {
            return AppControl::Exit;
        }

        let outer = ctx.window.logical_size();
        let (width, height) = self.record_frame(&KeyboardDirections::new(ctx.input), outer);

        log::trace!(
            "frame {} dt {:.4}s: {} lines at {}x{}",
            ctx.time.frame_index,
            ctx.time.dt,
            self.draw_list.len(),
            width,
            height
        );

        let list = &self.draw_list;
        let lines = &mut self.lines;
        ctx.render(Viewport::from_size(width, height), list.clear_color(), |rctx, target| {
            lines.render(rctx, target, list);
        })
    }

    fn on_close(&mut self) {
        log::info!("viewer closed");
    }
}
