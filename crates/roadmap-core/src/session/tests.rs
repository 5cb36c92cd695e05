use std::sync::Arc;

use crate::{
    client::PlanClient,
    error::{FailureKind, SyncError},
    models::{Goal, Plan, Progress, Task, TaskField},
    params::{DeleteTask, EditTask, SetCompletion},
    session::GoalSession,
    testing::{GatedTransport, MemoryBackend},
    transport::Method,
};

fn create_test_task(title: &str, completed: Option<bool>) -> Task {
    Task {
        title: title.to_string(),
        content: format!("Content for {title}"),
        duration: None,
        completed,
    }
}

fn create_test_goal() -> Goal {
    Goal {
        id: "g1".to_string(),
        user_id: "u1".to_string(),
        query: "Learn Python in 30 days".to_string(),
        result: Plan {
            objective: "Become proficient in Python".to_string(),
            tasks: vec![
                create_test_task("Week 1", Some(true)),
                create_test_task("Week 2", None),
                create_test_task("Week 3", Some(false)),
                create_test_task("Week 4", None),
            ],
        },
        timestamp: "2025-03-01T09:30:00".to_string(),
        ..Default::default()
    }
}

async fn open_session() -> (GoalSession, Arc<MemoryBackend>, PlanClient) {
    let backend = Arc::new(MemoryBackend::with_goals(vec![create_test_goal()]));
    let client = PlanClient::new(backend.clone(), "u1".to_string());
    let session = GoalSession::open(client.clone(), "g1")
        .await
        .expect("session opens");
    (session, backend, client)
}

#[tokio::test]
async fn test_open_loads_goal_and_progress() {
    let (session, backend, _) = open_session().await;

    assert_eq!(session.snapshot(), create_test_goal());
    assert_eq!(session.progress(), Progress { completed: 1, total: 4 });

    let paths: Vec<_> = backend.requests().iter().map(|r| r.path()).collect();
    assert_eq!(paths, ["/api/task/g1", "/api/task/g1/progress"]);
}

#[tokio::test]
async fn test_open_foreign_goal_fails() {
    let backend = Arc::new(MemoryBackend::with_goals(vec![create_test_goal()]));
    let client = PlanClient::new(backend, "intruder".to_string());

    let err = GoalSession::open(client, "g1").await.expect_err("not the owner");
    assert!(matches!(err, SyncError::NotFoundOrUnauthorized { .. }));
}

#[tokio::test]
async fn test_set_objective_then_refetch() {
    let (session, _, client) = open_session().await;

    let notice = session
        .set_objective("Write production Python")
        .await
        .expect("objective saved");
    assert_eq!(notice.message, "Goal objective updated successfully");
    assert_eq!(session.snapshot().result.objective, "Write production Python");

    let refetched = client.fetch_goal("g1").await.expect("refetch");
    assert_eq!(refetched.result.objective, "Write production Python");
    assert_eq!(refetched.result.tasks, create_test_goal().result.tasks);
}

#[tokio::test]
async fn test_failed_objective_leaves_state() {
    let (session, backend, _) = open_session().await;
    backend.fail(Method::Put, "task");

    let err = session.set_objective("Nope").await.expect_err("rejected");
    assert_eq!(err.user_message(), "Failed to update goal objective");
    assert_eq!(session.snapshot().result.objective, "Become proficient in Python");
}

#[tokio::test]
async fn test_save_task_replaces_whole_task() {
    let (session, backend, _) = open_session().await;
    let replacement = Task {
        title: "Week 2 revised".to_string(),
        content: "Loops".to_string(),
        duration: Some("5 days".to_string()),
        completed: Some(false),
    };

    session
        .save_task(1, replacement.clone())
        .await
        .expect("task saved");

    assert_eq!(session.snapshot().result.tasks[1], replacement);
    let stored = backend.goal("g1").expect("stored");
    assert_eq!(stored.result.tasks[1], replacement);
    assert_eq!(stored.result.tasks.len(), 4);
}

#[tokio::test]
async fn test_edit_task_field() {
    let (session, backend, _) = open_session().await;

    let notice = session
        .edit_task_field(&EditTask {
            index: 2,
            field: TaskField::Content,
            value: "Dictionaries".to_string(),
        })
        .await
        .expect("field saved");

    assert_eq!(notice.message, "Task content updated successfully");
    assert_eq!(session.snapshot().result.tasks[2].content, "Dictionaries");
    assert_eq!(
        backend.goal("g1").expect("stored").result.tasks[2].content,
        "Dictionaries"
    );
}

#[tokio::test]
async fn test_edit_out_of_range_sends_nothing() {
    let (session, backend, _) = open_session().await;
    let before = backend.request_count();

    let err = session
        .edit_task_field(&EditTask {
            index: 9,
            field: TaskField::Title,
            value: "x".to_string(),
        })
        .await
        .expect_err("bad index");

    assert_eq!(err.kind(), FailureKind::Validation);
    assert_eq!(backend.request_count(), before);
}

#[tokio::test]
async fn test_delete_task_preserves_order() {
    let (session, backend, _) = open_session().await;

    let notice = session
        .delete_task(&DeleteTask { index: 1, confirmed: true })
        .await
        .expect("task deleted");
    assert_eq!(notice.message, "Task deleted successfully");

    let titles: Vec<_> = session
        .snapshot()
        .result
        .tasks
        .iter()
        .map(|t| t.title.clone())
        .collect();
    assert_eq!(titles, ["Week 1", "Week 3", "Week 4"]);
    assert_eq!(
        backend.goal("g1").expect("stored").result.tasks,
        session.snapshot().result.tasks
    );
    assert_eq!(session.progress(), Progress { completed: 1, total: 3 });
}

#[tokio::test]
async fn test_toggle_moves_progress_by_one() {
    let (session, _, _) = open_session().await;
    let before = session.progress();

    let notice = session.toggle_completion(1).await.expect("toggled on");
    assert_eq!(notice.message, "Task marked as completed");
    assert_eq!(session.progress().completed, before.completed + 1);

    let notice = session.toggle_completion(1).await.expect("toggled off");
    assert_eq!(notice.message, "Task marked as incomplete");
    assert_eq!(session.progress(), before);
}

#[tokio::test]
async fn test_unreachable_progress_matches_local_count() {
    let (session, backend, _) = open_session().await;
    backend.fail(Method::Get, "progress");

    session.toggle_completion(3).await.expect("toggle succeeds");

    let expected = Progress::from_tasks(&session.snapshot().result.tasks);
    assert_eq!(session.progress(), expected);
    assert_eq!(session.local_progress(), expected);
    assert_eq!(expected.completed, 2);
}

#[tokio::test]
async fn test_failed_completion_reverts() {
    let (session, backend, _) = open_session().await;
    backend.fail(Method::Patch, "completion");

    let err = session
        .set_completion(&SetCompletion { index: 1, completed: true })
        .await
        .expect_err("rejected");

    assert_eq!(err.user_message(), "Failed to update task completion status");
    assert_eq!(session.snapshot().result.tasks[1].completed, None);
    assert_eq!(session.progress(), Progress { completed: 1, total: 4 });
}

#[tokio::test]
async fn test_concurrent_toggle_and_edit_out_of_order() {
    let backend = Arc::new(MemoryBackend::with_goals(vec![create_test_goal()]));
    backend.fail(Method::Patch, "completion");
    let gated = Arc::new(GatedTransport::new(backend.clone(), "completion"));
    let client = PlanClient::new(gated.clone(), "u1".to_string());
    let session = GoalSession::new(client, create_test_goal());

    // The toggle is issued first but its (failing) response arrives after
    // the content edit has been applied.
    let toggle = session.set_completion(&SetCompletion { index: 1, completed: true });
    let edit = async {
        let result = session
            .edit_task_field(&EditTask {
                index: 1,
                field: TaskField::Content,
                value: "Comprehensions".to_string(),
            })
            .await;
        assert_eq!(session.snapshot().result.tasks[1].completed, Some(true));
        gated.release();
        result
    };
    let (toggled, edited) = tokio::join!(toggle, edit);

    assert!(toggled.is_err());
    assert!(edited.is_ok());
    let task = &session.snapshot().result.tasks[1];
    assert_eq!(task.content, "Comprehensions");
    assert_eq!(task.completed, None);
}

#[tokio::test]
async fn test_failed_completion_keeps_later_change() {
    let backend = Arc::new(MemoryBackend::with_goals(vec![create_test_goal()]));
    let gated = Arc::new(GatedTransport::new(backend.clone(), "completion"));
    let client = PlanClient::new(gated.clone(), "u1".to_string());
    let session = GoalSession::new(client, create_test_goal());
    backend.fail(Method::Patch, "completion");

    let first = session.set_completion(&SetCompletion { index: 1, completed: true });
    let second = async {
        // Flip the flag again locally while the first request is held.
        session.state().goal.result.tasks[1].completed = Some(false);
        gated.release();
    };
    let (first, ()) = tokio::join!(first, second);

    assert!(first.is_err());
    assert_eq!(session.snapshot().result.tasks[1].completed, Some(false));
}

fn titles(goal: &Goal) -> Vec<String> {
    goal.result.tasks.iter().map(|t| t.title.clone()).collect()
}

#[tokio::test]
async fn test_edit_answered_after_delete_reloads() {
    let backend = Arc::new(MemoryBackend::with_goals(vec![create_test_goal()]));
    let gated = Arc::new(GatedTransport::new(backend.clone(), "detail"));
    let client = PlanClient::new(gated.clone(), "u1".to_string());
    let session = GoalSession::new(client, create_test_goal());

    // The rename of task 1 is answered only after task 0 is gone, so index 1
    // now points at a different task.
    let edit_req = EditTask {
        index: 1,
        field: TaskField::Title,
        value: "Week 2 renamed".to_string(),
    };
    let edit = session.edit_task_field(&edit_req);
    let delete = async {
        let result = session
            .delete_task(&DeleteTask { index: 0, confirmed: true })
            .await;
        gated.release();
        result
    };
    let (edited, deleted) = tokio::join!(edit, delete);

    assert!(edited.is_ok());
    assert!(deleted.is_ok());
    let local = session.snapshot();
    assert_eq!(titles(&local), ["Week 2", "Week 3", "Week 4"]);
    assert_eq!(
        local.result.tasks,
        backend.goal("g1").expect("stored").result.tasks
    );
    assert_eq!(session.progress(), Progress::from_tasks(&local.result.tasks));
}

#[tokio::test]
async fn test_failed_completion_after_delete_does_not_revert_neighbour() {
    let backend = Arc::new(MemoryBackend::with_goals(vec![create_test_goal()]));
    backend.fail(Method::Patch, "completion");
    let gated = Arc::new(GatedTransport::new(backend.clone(), "completion"));
    let client = PlanClient::new(gated.clone(), "u1".to_string());
    let session = GoalSession::new(client, create_test_goal());

    // Week 2 goes from unset to false. After the delete, index 1 holds
    // Week 3, which already shows false and must not be reset to unset.
    let complete = session.set_completion(&SetCompletion { index: 1, completed: false });
    let delete = async {
        let result = session
            .delete_task(&DeleteTask { index: 0, confirmed: true })
            .await;
        gated.release();
        result
    };
    let (completed, deleted) = tokio::join!(complete, delete);

    assert!(completed.is_err());
    assert!(deleted.is_ok());
    let local = session.snapshot();
    assert_eq!(titles(&local), ["Week 2", "Week 3", "Week 4"]);
    assert_eq!(local.result.tasks[1].completed, Some(false));
    assert_eq!(
        local.result.tasks,
        backend.goal("g1").expect("stored").result.tasks
    );
}

#[tokio::test]
async fn test_delete_goal_requires_confirmation() {
    let (session, backend, _) = open_session().await;
    let before = backend.request_count();

    let err = session.delete_goal(false).await.expect_err("unconfirmed");
    assert_eq!(err.kind(), FailureKind::Validation);
    assert_eq!(backend.request_count(), before);

    let notice = session.delete_goal(true).await.expect("deleted");
    assert_eq!(notice.message, "Goal deleted successfully");
    assert!(backend.goal("g1").is_none());
}
