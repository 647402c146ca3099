use std::error::Error;

use planner_core::domain::{NewSubject, NewTask, StatusFilter, SubjectFilter, TaskStatus};
use planner_core::seed::{SUBJECT_COLORS, SeedData};
use planner_core::store::Subscription;
use planner_core::views::{DashboardView, SettingsView, SubjectsView, TasksView, task_stats};
use planner_core::{Action, DefaultView, PlannerConfig, Session, Store, TaskViewMode};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 購読側：遷移ごとに 1 行出力する（UI の再描画の代わり）
async fn render_loop(mut subscription: Subscription) {
    while let Some(transition) = subscription.next().await {
        let stats = task_stats(transition.state.tasks.all());
        println!(
            "#{} {} -> total={} pending={} in_progress={} completed={}",
            transition.sequence,
            transition.action,
            stats.total,
            stats.pending,
            stats.in_progress,
            stats.completed,
        );
    }
}

fn print_view<T: Serialize>(title: &str, view: &T) -> Result<(), serde_json::Error> {
    println!("== {title}");
    println!("{}", serde_json::to_string_pretty(view)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // usage: planner-cli [display-name] [seed.json]
    let mut args = std::env::args().skip(1);
    let mut session = Session::new(args.next().unwrap_or_else(|| "Student".to_string()));
    let seed_path = args.next();

    // (A) 設定とストア
    let config = PlannerConfig::from_env()?;
    let mut store = Store::builder()
        .config(config.clone())
        .seed_demo_if_configured()
        .build()?;
    info!(upcoming_limit = config.upcoming_limit, "store ready");

    // (B) 購読者を起動
    let renderer = tokio::spawn(render_loop(store.subscribe()));

    // (C) シードファイルがあれば一括置換
    if let Some(path) = seed_path {
        let seed = SeedData::from_json(&std::fs::read_to_string(&path)?)?;
        info!(%path, subjects = seed.subjects.len(), tasks = seed.tasks.len(), "loading seed file");
        for action in seed.into_actions() {
            store.dispatch(action)?;
        }
    }

    // (D) 画面操作の代わりに intent を流す
    let subject_id = store.create_subject(NewSubject::new("Physics", SUBJECT_COLORS[3]))?;
    let task_id = store.create_task(
        NewTask::new(subject_id.clone(), "Lab report", "2025-12-16")
            .with_description("Pendulum experiment write-up"),
    )?;
    store.advance_task_status(&task_id)?;
    store.dispatch(Action::SetStatusFilter(StatusFilter::Only(TaskStatus::Pending)))?;
    store.dispatch(Action::SetSubjectFilter(SubjectFilter::Only(subject_id)))?;

    // フォームの検証エラーは拒否として返るだけ
    if let Err(err) = store.create_task(NewTask::new("subj-1", "  ", "2025-12-30")) {
        info!(error = %err, "form rejected");
    }

    // 設定画面の選択はセッション内だけで保持される
    session.set_default_view(DefaultView::Tasks);
    session.set_task_view_mode(TaskViewMode::Subject);
    info!(preferences = ?session.preferences(), "settings changed");

    // (E) ストアを落とすと購読チャネルが閉じ、renderer が終わる
    let state = store.snapshot();
    let upcoming_limit = store.config().upcoming_limit;
    drop(store);
    renderer.await?;

    // (F) 最新スナップショットから各画面を描画
    print_view("dashboard", &DashboardView::build(&state, &session, upcoming_limit))?;
    print_view("tasks", &TasksView::build(&state))?;
    print_view("subjects", &SubjectsView::build(&state))?;
    print_view("settings", &SettingsView::build(&session))?;

    Ok(())
}
