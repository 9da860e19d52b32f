use std::sync::Arc;
use std::time::Duration;

use quiz_core::Verdict;
use quiz_core::model::QuizMode;
use quiz_core::session::SessionStatus;
use quiz_core::time::{fixed_clock, fixed_now};
use services::{QuestionBank, QuizConfig, QuizController};

#[tokio::test(start_paused = true)]
async fn offline_quiz_runs_to_summary() {
    let config = QuizConfig::default();
    let controller = QuizController::builder(Arc::new(QuestionBank::sample()))
        .config(config)
        .clock(fixed_clock())
        .build();

    assert!(controller.request_start(QuizMode::Mixed).await);
    assert_eq!(controller.snapshot().status(), SessionStatus::Playing);
    assert_eq!(controller.snapshot().started_at, Some(fixed_now()));

    while controller.snapshot().status() == SessionStatus::Playing {
        let snapshot = controller.snapshot();
        let answer = snapshot
            .current_question()
            .expect("question on screen")
            .correct_answer()
            .to_string();
        assert!(controller.select_option(&answer).await);
        tokio::time::sleep(config.reveal_delay + Duration::from_millis(1)).await;
    }

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.status(), SessionStatus::Finished);
    assert_eq!(snapshot.completed_at, Some(fixed_now()));

    let summary = snapshot.summary().expect("summary when finished");
    assert_eq!(summary.total(), 5);
    assert_eq!(summary.score(), 5);
    assert_eq!(summary.percentage(), 100);
    assert_eq!(summary.verdict(), Verdict::Perfect);
    assert!(summary.review().iter().all(|item| item.answered_correctly));
}
