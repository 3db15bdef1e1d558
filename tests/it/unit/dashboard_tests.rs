//! Unit tests for dashboard summaries.

use ideaboard::board::Board;
use ideaboard::dashboard::{job_progress, search_notes};
use ideaboard::types::{JobId, Point, TaskStatus};

#[test]
fn test_deleted_job_tasks_move_to_default() {
    let mut board = Board::new();
    let job2 = JobId::from("job2");
    for status in [TaskStatus::Done, TaskStatus::Done, TaskStatus::Todo, TaskStatus::Todo] {
        let id = board.create_note_at(Point::ZERO);
        board.set_note_job(&id, &job2);
        board.toggle_task(&id);
        board.set_status(&id, status);
    }
    assert_eq!(job_progress(&board)[1].percent, 50);

    board.delete_job(&job2).unwrap();
    let rows = job_progress(&board);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].job_id, JobId::from("job1"));
    assert_eq!((rows[0].done, rows[0].total, rows[0].percent), (2, 4, 50));
}

#[test]
fn test_all_done_is_one_hundred() {
    let mut board = Board::new();
    let id = board.create_note_at(Point::ZERO);
    board.toggle_task(&id);
    board.toggle_done(&id);
    assert_eq!(job_progress(&board)[0].percent, 100);

    board.toggle_done(&id);
    assert_eq!(job_progress(&board)[0].percent, 0);
}

#[test]
fn test_empty_query_lists_everything() {
    let mut board = Board::new();
    board.create_note_at(Point::ZERO);
    board.create_note_at(Point::ZERO);
    assert_eq!(search_notes(&board, "  ").len(), 2);
}
