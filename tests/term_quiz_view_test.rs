use mattespel::core::{RoundEngine, ScriptedRng};
use mattespel::term::quiz_view::{HISTORY_PANEL_W, MAIN_PANEL_W, PANEL_GAP, PANEL_H};
use mattespel::term::{AnchorY, FrameBuffer, QuizView, Viewport};
use mattespel::types::Mode;

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

/// Engine whose first round is "2 + 1 = 3" (correct).
fn scripted_engine() -> RoundEngine<ScriptedRng> {
    RoundEngine::with_rng(ScriptedRng::new(vec![1, 0, 0, 0]), Mode::Easy)
}

#[test]
fn term_view_renders_border_corners() {
    let engine = RoundEngine::new(1);
    let view = QuizView::default().with_anchor_y(AnchorY::Top);

    let fb = view.render(&engine.snapshot(), Viewport::new(MAIN_PANEL_W, PANEL_H));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(MAIN_PANEL_W - 1, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, PANEL_H - 1).unwrap().ch, '└');
    assert_eq!(fb.get(MAIN_PANEL_W - 1, PANEL_H - 1).unwrap().ch, '┘');
}

#[test]
fn term_view_centers_panel_on_tall_viewports() {
    let engine = RoundEngine::new(1);
    let view = QuizView::default();

    let fb = view.render(&engine.snapshot(), Viewport::new(MAIN_PANEL_W, PANEL_H + 8));

    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_idle_screen_shows_title_and_start_hint() {
    let engine = RoundEngine::new(1);
    let fb = QuizView::default().render(&engine.snapshot(), Viewport::new(80, 24));
    let all = screen_text(&fb);

    assert!(all.contains("Mattespel"));
    assert!(all.contains("Korrekt: 0"));
    assert!(all.contains("Är detta korrekt?"));
    assert!(all.contains("Tryck Enter för att börja"));
    assert!(all.contains("Enter: starta"));
}

#[test]
fn term_view_shows_expression_score_and_time() {
    let mut engine = scripted_engine();
    engine.start_session(Mode::Hard);
    engine.tick();

    let fb = QuizView::default().render(&engine.snapshot(), Viewport::new(80, 24));
    let all = screen_text(&fb);

    assert!(all.contains("2 + 1 = 3"));
    assert!(all.contains("Nivå: 1"));
    assert!(all.contains("Läge: hard"));
    assert!(all.contains("] 2s"));
    assert!(all.contains("Ja"));
    assert!(all.contains("Nej"));
}

#[test]
fn term_view_shows_failure_message_after_wrong_judgment() {
    let mut engine = scripted_engine();
    engine.start_session(Mode::Easy);
    engine.judge(false);

    let fb = QuizView::default().render(&engine.snapshot(), Viewport::new(80, 24));
    let all = screen_text(&fb);

    assert!(all.contains("Fel, försök igen. Du hade 0 rätta svar denna gång."));
    assert!(all.contains("2 + 1 = 3  (rätt)"));
}

#[test]
fn term_view_draws_history_panel_when_wide_enough() {
    let mut engine = RoundEngine::new(9);
    engine.start_session(Mode::Medium);
    while engine.active() {
        engine.tick();
    }

    let wide = MAIN_PANEL_W + PANEL_GAP + HISTORY_PANEL_W;
    let fb = QuizView::default().render(&engine.snapshot(), Viewport::new(wide, 24));
    let all = screen_text(&fb);

    assert!(all.contains("Historia"));
    assert!(all.contains(": 0 rätta svar medium"));
    assert!(all.contains("Tiden är ute!"));

    // Too narrow: no history panel.
    let fb = QuizView::default().render(&engine.snapshot(), Viewport::new(wide - 1, 24));
    assert!(!screen_text(&fb).contains("Historia"));
}

#[test]
fn term_view_history_keeps_newest_entries() {
    let mut engine = RoundEngine::new(4);
    for _ in 0..20 {
        engine.start_session(Mode::Hard);
        while engine.active() {
            engine.tick();
        }
    }

    let wide = MAIN_PANEL_W + PANEL_GAP + HISTORY_PANEL_W;
    let fb = QuizView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&engine.snapshot(), Viewport::new(wide, PANEL_H));
    let all = screen_text(&fb);

    let shown = all.matches("rätta svar").count();
    // The feedback message also contains "rätta svar".
    assert_eq!(shown, (PANEL_H - 4) as usize + 1);
}
