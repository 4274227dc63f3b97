//! QuizView: maps a `core::SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SessionSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Main panel width including border.
pub const MAIN_PANEL_W: u16 = 60;
/// Panel height including border.
pub const PANEL_H: u16 = 17;
/// History panel width including border.
pub const HISTORY_PANEL_W: u16 = 46;
/// Columns between the main and history panels.
pub const PANEL_GAP: u16 = 2;

const TIME_BAR_W: u16 = 24;

const BG: Rgb = Rgb::new(18, 18, 24);
const PRIMARY: Rgb = Rgb::new(25, 118, 210);
const SECONDARY: Rgb = Rgb::new(220, 0, 78);
const SUCCESS: Rgb = Rgb::new(90, 200, 110);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Placement of the panels for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub main_x: u16,
    pub main_y: u16,
    /// Left column of the history panel, None when the viewport is too narrow.
    pub history_x: Option<u16>,
}

/// Renderer for the quiz screen: statement panel plus history panel.
pub struct QuizView {
    anchor_y: AnchorY,
    show_history: bool,
}

impl Default for QuizView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
            show_history: true,
        }
    }
}

impl QuizView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_history(mut self, show_history: bool) -> Self {
        self.show_history = show_history;
        self
    }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        let wide_w = MAIN_PANEL_W + PANEL_GAP + HISTORY_PANEL_W;
        let with_history = self.show_history && viewport.width >= wide_w;
        let total_w = if with_history { wide_w } else { MAIN_PANEL_W };

        let main_x = viewport.width.saturating_sub(total_w) / 2;
        let main_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(PANEL_H) / 2,
            AnchorY::Top => 0,
        };
        let history_x = with_history.then_some(main_x + MAIN_PANEL_W + PANEL_GAP);

        Layout {
            main_x,
            main_y,
            history_x,
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport when needed.
    pub fn render_into(&self, snap: &SessionSnapshot<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(200, 200, 200), BG).into_cell(' '));

        let layout = self.layout(viewport);
        self.draw_main_panel(fb, snap, layout.main_x, layout.main_y);
        if let Some(hx) = layout.history_x {
            self.draw_history_panel(fb, snap, hx, layout.main_y);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_main_panel(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot<'_>, x: u16, y: u16) {
        let border = CellStyle::new(Rgb::new(200, 200, 200), BG);
        let label = CellStyle::new(Rgb::new(220, 220, 220), BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BG);
        let hint = value.dim();

        fb.draw_border(x, y, MAIN_PANEL_W, PANEL_H, border);

        let inner_x = x + 2;
        let inner_w = MAIN_PANEL_W - 4;

        fb.put_str_centered(x + 1, y + 1, MAIN_PANEL_W - 2, "Mattespel", label);

        // Status line: score, level, mode.
        let cx = fb.put_str(inner_x, y + 3, "Korrekt: ", label);
        fb.put_u32(cx, y + 3, snap.score, value);
        let cx = fb.put_str(inner_x + 18, y + 3, "Nivå: ", label);
        fb.put_u32(cx, y + 3, snap.level, value);
        let cx = fb.put_str(inner_x + 34, y + 3, "Läge: ", label);
        fb.put_str(cx, y + 3, snap.mode.as_str(), value);

        fb.put_str_centered(inner_x, y + 5, inner_w, "Är detta korrekt?", label);

        match (snap.round, snap.active) {
            (Some(round), true) => {
                let expr = CellStyle::new(Rgb::new(255, 255, 255), BG).bold();
                fb.put_str_centered(inner_x, y + 7, inner_w, &round.expression(), expr);
            }
            (Some(round), false) => {
                // Last statement of the finished attempt, with its answer.
                let verdict = if round.is_actually_correct {
                    "(rätt)"
                } else {
                    "(fel)"
                };
                let line = format!("{}  {}", round.expression(), verdict);
                fb.put_str_centered(inner_x, y + 7, inner_w, &line, value.dim());
            }
            (None, _) => {
                fb.put_str_centered(inner_x, y + 7, inner_w, "Tryck Enter för att börja", value);
            }
        }

        self.draw_time_bar(fb, snap, inner_x, y + 9);

        // Judgment buttons.
        let yes = CellStyle::new(SUCCESS, BG).bold();
        let no = CellStyle::new(SECONDARY, BG).bold();
        let (yes, no) = if snap.active {
            (yes, no)
        } else {
            (yes.dim(), no.dim())
        };
        fb.put_str(inner_x + 6, y + 11, "[✔ Ja  ← / y]", yes);
        fb.put_str(inner_x + 30, y + 11, "[✘ Nej  → / n]", no);

        if let Some(feedback) = snap.feedback {
            let style = CellStyle::new(SECONDARY, BG).bold();
            fb.put_str_clipped(inner_x, y + 13, &feedback.message(), inner_w, style);
        }

        let hints = if snap.active {
            "q: avsluta"
        } else {
            "Enter: starta   1/2/3/m: läge   q: avsluta"
        };
        fb.put_str_centered(inner_x, y + PANEL_H - 2, inner_w, hints, hint);
    }

    fn draw_time_bar(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot<'_>, x: u16, y: u16) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), BG).bold();
        let cx = fb.put_str(x, y, "Tid: ", label);

        let filled = time_bar_fill(snap.time_remaining, snap.time_limit, TIME_BAR_W);
        let color = if snap.time_remaining <= 1 {
            SECONDARY
        } else {
            PRIMARY
        };
        let full = CellStyle::new(color, BG);
        let empty = CellStyle::new(Rgb::new(70, 70, 80), BG).dim();

        fb.put_char(cx, y, '[', label);
        for i in 0..TIME_BAR_W {
            if i < filled {
                fb.put_char(cx + 1 + i, y, '█', full);
            } else {
                fb.put_char(cx + 1 + i, y, '·', empty);
            }
        }
        let after = cx + 1 + TIME_BAR_W;
        fb.put_char(after, y, ']', label);

        let value = CellStyle::new(Rgb::new(200, 200, 200), BG);
        let end = fb.put_u32(after + 2, y, snap.time_remaining, value);
        fb.put_char(end, y, 's', value);
    }

    fn draw_history_panel(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot<'_>, x: u16, y: u16) {
        let border = CellStyle::new(Rgb::new(200, 200, 200), BG);
        let label = CellStyle::new(Rgb::new(220, 220, 220), BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BG);

        fb.draw_border(x, y, HISTORY_PANEL_W, PANEL_H, border);
        fb.put_str(x + 2, y + 1, "Historia", label);

        let inner_w = HISTORY_PANEL_W - 4;
        let rows = PANEL_H.saturating_sub(4) as usize;
        if snap.history.is_empty() {
            fb.put_str_clipped(x + 2, y + 3, "Inga försök än", inner_w, value.dim());
            return;
        }

        // Newest entries that fit, oldest of them first.
        let skip = snap.history.len().saturating_sub(rows);
        for (i, entry) in snap.history.iter().skip(skip).enumerate() {
            let row = y + 3 + i as u16;
            let end = fb.put_str_clipped(x + 2, row, &entry.line(), inner_w, value);
            let used = end - (x + 2);
            let tag = entry.mode.as_str();
            if used + 1 + tag.len() as u16 <= inner_w {
                fb.put_str(end + 1, row, tag, value.dim());
            }
        }
    }
}

/// Number of filled cells in a `width`-cell bar showing `remaining / limit`.
pub fn time_bar_fill(remaining: u32, limit: u32, width: u16) -> u16 {
    if limit == 0 {
        return 0;
    }
    let remaining = remaining.min(limit) as u64;
    ((remaining * width as u64) / limit as u64) as u16
}
