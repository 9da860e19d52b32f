use std::fmt::Write;

use crate::vm::{FeedbackVm, OptionState, QuestionVm, ResultVm, ScreenVm};

const PROGRESS_WIDTH: u32 = 20;

/// Plain-text rendering of a screen for a line-oriented terminal.
#[must_use]
pub fn render_screen(screen: &ScreenVm) -> String {
    let mut out = String::new();
    match screen {
        ScreenVm::Start => render_start(&mut out),
        ScreenVm::Loading => out.push_str("Preparing your questions...\n"),
        ScreenVm::Error { message } => {
            let _ = writeln!(out, "Something went wrong: {message}");
            out.push_str("\nPress Enter to go back.\n");
        }
        ScreenVm::Playing(question) => render_question(&mut out, question),
        ScreenVm::Finished(result) => render_result(&mut out, result),
    }
    out
}

fn render_start(out: &mut String) {
    out.push_str("Vocabulary Challenge\n");
    out.push_str("Test yourself on synonyms and antonyms.\n\n");
    out.push_str("Choose a mode: synonyms, antonyms or mixed (Enter for mixed).\n");
    out.push_str("m toggles sound, q quits.\n");
}

fn progress_bar(percent: u32) -> String {
    let filled = (percent.min(100) * PROGRESS_WIDTH / 100) as usize;
    let empty = PROGRESS_WIDTH as usize - filled;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(empty))
}

fn render_question(out: &mut String, question: &QuestionVm) {
    let _ = writeln!(
        out,
        "Question {}   Score {}   {}",
        question.position_label,
        question.score,
        progress_bar(question.progress_percent)
    );
    let _ = writeln!(out, "\n  ({})  {}", question.kind_label, question.word);
    let _ = writeln!(out, "  {}\n", question.prompt);

    for option in &question.options {
        let marker = match option.state {
            OptionState::Idle => "   ",
            OptionState::Correct => "[+]",
            OptionState::Wrong => "[x]",
            OptionState::Dimmed => " . ",
        };
        let _ = writeln!(out, "{marker} {}. {}", option.number, option.label);
    }

    match &question.feedback {
        Some(feedback) => render_feedback(out, feedback),
        None => out.push_str("\nPick 1-4. r restarts, m toggles sound, q quits.\n"),
    }
}

fn render_feedback(out: &mut String, feedback: &FeedbackVm) {
    let _ = writeln!(out, "\n{}", feedback.headline);
    if let Some(answer) = &feedback.correct_answer {
        let _ = writeln!(out, "The correct answer is: {answer}");
    }
    if let Some(explanation) = &feedback.explanation {
        let _ = writeln!(out, "{explanation}");
    }
}

fn render_result(out: &mut String, result: &ResultVm) {
    let _ = writeln!(out, "{}\n", result.message);
    let _ = write!(
        out,
        "Score {}/{}   {}",
        result.score, result.total, result.percentage_label
    );
    if let Some(elapsed) = &result.elapsed_label {
        let _ = write!(out, "   Time {elapsed}");
    }
    out.push_str("\n\nAnswer summary\n");
    for row in &result.review {
        let mark = if row.answered_correctly { "+" } else { "x" };
        let _ = writeln!(
            out,
            "  {mark} {} | {} -> {}",
            row.word, row.kind_label, row.correct_answer
        );
    }
    out.push_str("\nPress Enter to play again. m toggles sound, q quits.\n");
}
