//! End-to-end tests for the game session loop.

use std::fs;
use std::io::{self, Cursor, Write};
use tempfile::TempDir;

use strictly_rps_cli::{
    ExitReason, GameSession, InputReader, Move, Phase, RoundOutcome, ScoreLog, ScoreState,
    ScriptedOpponent, SessionSummary,
};

/// Runs a full session over scripted input and opponent moves. Returns the
/// temp dir (must stay in scope to keep the log alive), the summary, the
/// terminal output and the log contents.
fn play(input: &[u8], opponent: &[Move]) -> (TempDir, SessionSummary, String, String) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let log_path = dir.path().join("scores.txt");

    let mut output = Vec::new();
    let session = GameSession::new(
        ScriptedOpponent::new(opponent.iter().copied()).expect("Empty script"),
        InputReader::with_max_errors(Cursor::new(input.to_vec()), 3),
        &mut output,
        ScoreLog::new(&log_path),
    );
    let summary = session.run().expect("Session failed");

    let log = fs::read_to_string(&log_path).unwrap_or_default();
    let output = String::from_utf8(output).expect("Output not UTF-8");
    (dir, summary, output, log)
}

#[test]
fn test_two_rounds_then_exit() {
    let input = "к\nб\nвыход\nда\n";
    let (_dir, summary, output, log) =
        play(input.as_bytes(), &[Move::Scissors, Move::Scissors]);

    assert_eq!(
        summary.outcomes(),
        &vec![RoundOutcome::PlayerWin, RoundOutcome::ComputerWin]
    );
    assert_eq!(*summary.score(), ScoreState::new(1, 1, 0));
    assert_eq!(*summary.exit(), ExitReason::Confirmed);

    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(" | 1 | 1 | 0"), "got {:?}", lines[0]);

    assert!(output.starts_with("🎮 Камень, Ножницы, Бумага!"));
    assert!(output.contains("🎉 Вы победили!"));
    assert!(output.contains("💻 Компьютер победил!"));
    assert!(output.contains("🖐️ До свидания!"));
}

#[test]
fn test_invalid_input_does_not_count() {
    let input = "banana\n\n   \nн\nq\ny\n";
    let (_dir, summary, output, log) = play(input.as_bytes(), &[Move::Scissors]);

    assert_eq!(summary.outcomes(), &vec![RoundOutcome::Draw]);
    assert_eq!(*summary.score(), ScoreState::new(0, 0, 1));
    assert_eq!(output.matches("❌ Допустимые значения: к, н, б").count(), 3);
    assert!(log.trim_end().ends_with(" | 0 | 0 | 1"));
}

#[test]
fn test_declined_exit_keeps_playing() {
    let input = "quit\nno\nк\nexit\nда\n";
    let (_dir, summary, output, _log) = play(input.as_bytes(), &[Move::Paper]);

    assert_eq!(summary.outcomes(), &vec![RoundOutcome::ComputerWin]);
    assert_eq!(output.matches("Подтвердите выход (д/н): ").count(), 2);
    assert_eq!(output.matches("🖐️ До свидания!").count(), 1);
}

#[test]
fn test_score_shown_after_every_round() {
    let input = "к\nк\nк\nвыход\nд\n";
    let (_dir, summary, output, _log) =
        play(input.as_bytes(), &[Move::Rock, Move::Scissors, Move::Paper]);

    assert_eq!(*summary.score(), ScoreState::new(1, 1, 1));
    assert_eq!(output.matches("Текущий счет:").count(), 3);
    assert!(output.contains("Игрок: 1 побед\nКомпьютер: 1 побед\nНичьи: 1\n"));
}

#[test]
fn test_end_of_input_ends_session() {
    let (_dir, summary, _output, log) = play("б\n".as_bytes(), &[Move::Rock]);

    assert_eq!(*summary.exit(), ExitReason::InputClosed);
    assert_eq!(*summary.score(), ScoreState::new(1, 0, 0));
    assert_eq!(log.lines().count(), 1);
}

#[test]
fn test_unreadable_input_is_bounded() {
    // Each line is invalid UTF-8, so every read fails.
    let input = b"\xff\xfe\n\xff\n\xc3\n\xff\n";
    let (_dir, summary, output, log) = play(input, &[Move::Rock]);

    assert_eq!(*summary.exit(), ExitReason::InputFailed);
    assert_eq!(summary.score().rounds(), 0);
    assert_eq!(output.matches("⚠️ Ошибка ввода").count(), 3);
    assert!(log.trim_end().ends_with(" | 0 | 0 | 0"));
}

#[test]
fn test_read_error_recovers() {
    let input = [b"\xff\n".as_slice(), "н\nq\nда\n".as_bytes()].concat();
    let (_dir, summary, output, _log) = play(&input, &[Move::Paper]);

    assert_eq!(*summary.exit(), ExitReason::Confirmed);
    assert_eq!(summary.outcomes(), &vec![RoundOutcome::PlayerWin]);
    assert!(output.contains("Попробуйте еще раз."));
}

#[test]
fn test_unwritable_log_is_reported() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    // A directory cannot be opened for append.
    let log = ScoreLog::new(dir.path());

    let mut output = Vec::new();
    let session = GameSession::new(
        ScriptedOpponent::new([Move::Rock]).expect("Empty script"),
        InputReader::new(Cursor::new(b"exit\nyes\n".to_vec())),
        &mut output,
        log,
    );

    let err = session.run().expect_err("Persist should fail");
    assert!(err.message.contains("Could not save scores"), "{}", err);
    let output = String::from_utf8(output).expect("Output not UTF-8");
    assert!(!output.contains("До свидания"));
}

#[test]
fn test_step_walks_the_state_machine() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut output = Vec::new();
    let mut session = GameSession::new(
        ScriptedOpponent::new([Move::Paper]).expect("Empty script"),
        InputReader::new(Cursor::new("к\nвыход\nда\n".as_bytes().to_vec())),
        &mut output,
        ScoreLog::new(dir.path().join("scores.txt")),
    );

    assert_eq!(session.phase(), Phase::Prompting);

    let next = session.step().expect("step");
    assert_eq!(next, Phase::RoundResolved);
    assert_eq!(session.score(), ScoreState::new(0, 1, 0));

    assert_eq!(session.step().expect("step"), Phase::Prompting);
    assert_eq!(
        session.step().expect("step"),
        Phase::ExitConfirmed(ExitReason::Confirmed)
    );
    assert_eq!(
        session.step().expect("step"),
        Phase::Terminated(ExitReason::Confirmed)
    );
    assert_eq!(session.phase(), Phase::Terminated(ExitReason::Confirmed));

    // Terminal state is sticky and does not save twice.
    assert_eq!(
        session.step().expect("step"),
        Phase::Terminated(ExitReason::Confirmed)
    );
    let log = fs::read_to_string(dir.path().join("scores.txt")).expect("log written");
    assert_eq!(log.lines().count(), 1);
}

/// Terminal that accepts everything until it sees the farewell, then
/// behaves like a closed pipe.
struct HangUpOnFarewell {
    written: Vec<u8>,
}

impl Write for HangUpOnFarewell {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if String::from_utf8_lossy(buf).contains("До свидания") {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_score_saved_before_farewell() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let log_path = dir.path().join("scores.txt");

    let session = GameSession::new(
        ScriptedOpponent::new([Move::Scissors]).expect("Empty script"),
        InputReader::new(Cursor::new("к\nвыход\nда\n".as_bytes().to_vec())),
        HangUpOnFarewell {
            written: Vec::new(),
        },
        ScoreLog::new(&log_path),
    );

    let err = session.run().expect_err("Farewell write should fail");
    assert!(err.message.contains("Terminal I/O error"), "{}", err);

    let log = fs::read_to_string(&log_path).expect("Score should be saved");
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(" | 1 | 0 | 0"), "got {:?}", lines[0]);
}
