//! Text rendering of a session.

use crate::config::DisplayConfig;
use hotseat_core::Square;
use hotseat_engine::{GameStatus, Session};
use std::fmt::Write;

/// Draws the board with the selection and its destinations marked.
///
/// The selected square is wrapped in brackets. Destinations show `*` when
/// empty and the target in parentheses when it would be a capture.
pub fn render_board(session: &Session, display: &DisplayConfig) -> String {
    let board = session.game().board();
    let selection = session.selection();
    let mut out = String::new();

    for row in (0..8u8).rev() {
        if display.coordinates {
            let _ = write!(out, "{} ", row + 1);
        }
        for col in 0..8u8 {
            let Some(square) = Square::new(row, col) else {
                continue;
            };
            let piece = board.piece_at(square).map(|p| {
                if display.unicode {
                    p.glyph()
                } else {
                    p.symbol()
                }
            });
            let marked = display.show_destinations && selection.is_destination(square);

            let cell = match (piece, selection.current() == Some(square), marked) {
                (Some(c), true, _) => format!("[{}]", c),
                (Some(c), false, true) => format!("({})", c),
                (Some(c), false, false) => format!(" {} ", c),
                (None, _, true) => " * ".to_string(),
                (None, _, false) => " . ".to_string(),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }

    if display.coordinates {
        out.push_str("  ");
        for col in 0..8u8 {
            let _ = write!(out, " {} ", (b'a' + col) as char);
        }
        out.push('\n');
    }
    out
}

/// One-line status for the side to move.
pub fn render_status(session: &Session) -> String {
    let game = session.game();
    let side = game.active_side();
    match game.status() {
        GameStatus::Ongoing => format!("{} to move", side),
        GameStatus::Check => format!("{} to move, in check", side),
        GameStatus::Checkmate => format!("Checkmate: {} wins", side.opposite()),
        GameStatus::Stalemate => format!("Stalemate: {} has no legal move", side),
    }
}

/// Describes the most recent move, if any.
pub fn render_last_move(session: &Session) -> Option<String> {
    let last = session.game().last_move()?;
    let mut text = format!("{} {} {}-{}", last.piece.side, last.piece.kind, last.from, last.to);
    if let Some(captured) = last.captured {
        let _ = write!(text, " takes {}", captured.kind);
    }
    if last.castle.is_some() {
        text.push_str(" (castles)");
    }
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotseat_engine::InputEvent;

    fn ascii() -> DisplayConfig {
        DisplayConfig {
            unicode: false,
            coordinates: false,
            show_destinations: true,
        }
    }

    fn click(s: &str) -> InputEvent {
        InputEvent::Click(Square::from_algebraic(s).unwrap())
    }

    #[test]
    fn initial_board_ascii() {
        let session = Session::new();
        let text = render_board(&session, &ascii());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], " r  n  b  q  k  b  n  r ");
        assert_eq!(lines[7], " R  N  B  Q  K  B  N  R ");
    }

    #[test]
    fn selection_and_destinations_are_marked() {
        let mut session = Session::new();
        session.handle(click("e2"));
        let text = render_board(&session, &ascii());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[6], " P  P  P  P [P] P  P  P ");
        assert_eq!(lines[5], " .  .  .  .  *  .  .  . ");
        assert_eq!(lines[4], " .  .  .  .  *  .  .  . ");
    }

    #[test]
    fn coordinates_frame_the_board() {
        let display = DisplayConfig {
            coordinates: true,
            ..ascii()
        };
        let text = render_board(&Session::new(), &display);
        assert!(text.starts_with("8  r "));
        assert!(text.ends_with("   a  b  c  d  e  f  g  h \n"));
    }

    #[test]
    fn status_lines() {
        let mut session = Session::new();
        assert_eq!(render_status(&session), "White to move");
        assert_eq!(render_last_move(&session), None);

        session.handle(click("e2"));
        session.handle(click("e4"));
        assert_eq!(render_status(&session), "Black to move");
        assert_eq!(
            render_last_move(&session).as_deref(),
            Some("White Pawn e2-e4")
        );
    }
}
