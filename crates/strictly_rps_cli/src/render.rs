//! Text shown to the player.
//!
//! Every function returns a ready-to-write string, newlines included,
//! so the game loop only has to push bytes.

use strictly_rps::{Move, ScoreState, Verdict};
use strum::IntoEnumIterator;

/// Main move prompt. Written without a trailing newline.
pub const MOVE_PROMPT: &str = "Выберите: камень (к), ножницы (н), бумага (б) или 'выход': ";

/// Exit confirmation prompt. Written without a trailing newline.
pub const CONFIRM_PROMPT: &str = "Подтвердите выход (д/н): ";

/// Width of the rule under the score block.
const RULE_WIDTH: usize = 30;

/// Greeting printed once at session start.
pub fn banner() -> String {
    "🎮 Камень, Ножницы, Бумага!\n👉 Для выхода введите 'выход'\n\n".to_string()
}

/// Shows both moves of a round.
pub fn reveal(player: Move, computer: Move) -> String {
    format!("\n👉 Вы: {player}\n💻 Компьютер: {computer}\n")
}

/// Announces the round outcome.
pub fn verdict(verdict: &Verdict) -> String {
    format!("\n{}\n", verdict.message())
}

/// Current standings after a round.
pub fn score(state: &ScoreState) -> String {
    format!(
        "\nТекущий счет:\nИгрок: {} побед\nКомпьютер: {} побед\nНичьи: {}\n{}\n",
        state.player_wins(),
        state.computer_wins(),
        state.draws(),
        "=".repeat(RULE_WIDTH)
    )
}

/// Diagnostic for a token that is neither a move nor an exit command.
pub fn invalid_move() -> String {
    let tokens: Vec<&str> = Move::iter().map(Move::token).collect();
    format!("❌ Допустимые значения: {}\n", tokens.join(", "))
}

/// Diagnostic for a failed read from the input stream.
pub fn input_error(err: &impl std::fmt::Display) -> String {
    format!("⚠️ Ошибка ввода: {err}. Попробуйте еще раз.\n")
}

/// Goodbye line printed on exit.
pub fn farewell() -> String {
    "\n🖐️ До свидания!\n".to_string()
}
