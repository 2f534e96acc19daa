//! Unit tests for cursor and screen control sequences

use clikit::terminal::{build, Cursor, Screen, BEGIN_CHAR, END_CHAR};

#[test]
fn build_prefixes_csi() {
    assert_eq!(build("2J", ""), "\x1b[2J");
    assert_eq!(BEGIN_CHAR, "\x1b[");
    assert_eq!(END_CHAR, "\x1b[0m");
}

#[test]
fn cursor_visibility_sequences() {
    assert_eq!(Cursor::Hide.sequence(), "\x1b[?25l");
    assert_eq!(Cursor::Show.sequence(), "\x1b[?25h");
}

#[test]
fn cursor_position_save_and_restore() {
    assert_eq!(Cursor::SavePosition.sequence(), "\x1b[s");
    assert_eq!(Cursor::RestorePosition.sequence(), "\x1b[u");
    assert_eq!(Cursor::ToTop.sequence(), "\x1b[H");
}

#[test]
fn cursor_relative_moves_carry_the_count() {
    assert_eq!(Cursor::Up(3).sequence(), "\x1b[3A");
    assert_eq!(Cursor::Down(1).sequence(), "\x1b[1B");
    assert_eq!(Cursor::Forward(10).sequence(), "\x1b[10C");
    assert_eq!(Cursor::Backward(2).sequence(), "\x1b[2D");
    assert_eq!(Cursor::ToPrevLineStart(2).sequence(), "\x1b[2F");
    assert_eq!(Cursor::ToNextLineStart(4).sequence(), "\x1b[4E");
}

#[test]
fn cursor_absolute_positioning() {
    assert_eq!(Cursor::ToColumn(5).sequence(), "\x1b[5;0H");
    assert_eq!(
        Cursor::Coordinate { col: 7, row: None }.sequence(),
        "\x1b[7G"
    );
    assert_eq!(
        Cursor::Coordinate {
            col: 7,
            row: Some(3)
        }
        .sequence(),
        "\x1b[7;3H"
    );
}

#[test]
fn screen_clear_sequences() {
    assert_eq!(Screen::Clear.sequence(), "\x1b[2J");
    assert_eq!(Screen::ClearToBegin.sequence(), "\x1b[1J");
    assert_eq!(Screen::ClearLine.sequence(), "\x1b[2K");
    assert_eq!(Screen::ClearToLineBegin.sequence(), "\x1b[1K");
    assert_eq!(Screen::ClearToLineEnd.sequence(), "\x1b[0K");
}

#[test]
fn screen_scroll_and_buffer_switch() {
    assert_eq!(Screen::ScrollUp(3).sequence(), "\x1b[3S");
    assert_eq!(Screen::ScrollDown(2).sequence(), "\x1b[2T");
    assert_eq!(Screen::ShowSecondary.sequence(), "\x1b[?47h");
    assert_eq!(Screen::ShowPrimary.sequence(), "\x1b[?47l");
}

#[test]
fn display_renders_the_full_sequence() {
    assert_eq!(Cursor::Up(1).to_string(), "\x1b[1A");
    assert_eq!(Screen::ClearLine.to_string(), "\x1b[2K");
}
