//! End-to-end checks of ranking and view state through the public API.

mod common;

use carbonboard::domain::{compute_rankings, Emission, Medal};
use carbonboard::error::ViewError;
use carbonboard::models::UserRecord;
use carbonboard::view_state::{LeaderboardView, LeaderboardViewState};
use common::{mixed_records, worked_example, TestAppBuilder};

fn ids(entries: &[carbonboard::domain::RankedEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.id.as_str()).collect()
}

// ============================================================================
// Ranking properties
// ============================================================================

#[test]
fn test_worked_example() {
    let rankings = compute_rankings(&worked_example());

    assert_eq!(ids(&rankings.global), vec!["2", "3", "1"]);
    assert_eq!(
        rankings.global.iter().map(|e| e.rank).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(ids(&rankings.friends), vec!["3", "1"]);
    assert_eq!(
        rankings.friends.iter().map(|e| e.rank).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[test]
fn test_global_ranks_are_dense_and_ordered() {
    let rankings = compute_rankings(&mixed_records());

    for (index, entry) in rankings.global.iter().enumerate() {
        assert_eq!(entry.rank as usize, index + 1);
    }
    for pair in rankings.global.windows(2) {
        assert!(pair[0].carbon_emission.value() <= pair[1].carbon_emission.value());
    }
}

#[test]
fn test_friends_are_reranked_subset() {
    let records = mixed_records();
    let rankings = compute_rankings(&records);

    let friend_ids: Vec<&str> = rankings
        .global
        .iter()
        .filter(|e| records.iter().any(|r| r.id == e.id && r.is_friend))
        .map(|e| e.id.as_str())
        .collect();

    assert_eq!(ids(&rankings.friends), friend_ids);
    assert_eq!(rankings.friends[0].rank, 1);
}

#[test]
fn test_ties_keep_input_order() {
    let rankings = compute_rankings(&mixed_records());
    // Ben "3" comes before Eli "3.0" in the input
    let ben = rankings.find_global("b").unwrap().rank;
    let eli = rankings.find_global("e").unwrap().rank;
    assert_eq!(eli, ben + 1);
}

#[test]
fn test_unparseable_sorts_last_without_failing() {
    let rankings = compute_rankings(&mixed_records());

    let last = rankings.global.last().unwrap();
    assert_eq!(last.id, "c");
    assert!(!last.carbon_emission.is_valid());
    assert_eq!(rankings.friends.last().unwrap().id, "c");
}

#[test]
fn test_ranking_is_deterministic() {
    let records = mixed_records();
    assert_eq!(compute_rankings(&records), compute_rankings(&records));
}

#[test]
fn test_empty_batch() {
    let rankings = compute_rankings(&[]);
    assert!(rankings.is_empty());
    assert!(rankings.friends.is_empty());
}

#[test]
fn test_medals_follow_rank() {
    let rankings = compute_rankings(&mixed_records());
    let medals: Vec<Option<Medal>> = rankings.global.iter().map(|e| e.medal()).collect();
    assert_eq!(
        &medals[..4],
        &[Some(Medal::Gold), Some(Medal::Silver), Some(Medal::Bronze), None]
    );
}

#[test]
fn test_numeric_not_lexical_order() {
    let records = vec![
        UserRecord::new("x", "X", "10", false),
        UserRecord::new("y", "Y", "9", false),
    ];
    let rankings = compute_rankings(&records);
    assert_eq!(ids(&rankings.global), vec!["y", "x"]);
    assert_eq!(rankings.global[0].carbon_emission, Emission::new(9.0));
}

// ============================================================================
// View state
// ============================================================================

#[test]
fn test_view_switch_does_not_touch_selection() {
    let mut state = LeaderboardViewState::new();
    state.set_rankings(compute_rankings(&worked_example()));

    let entry = state.displayed_sequence()[2].clone();
    state.select_entry(entry.clone());

    state.select_view(LeaderboardView::Friends);
    assert_eq!(state.selected(), Some(&entry));
    state.toggle_view();
    assert_eq!(state.active_view(), LeaderboardView::Global);
    assert_eq!(state.selected(), Some(&entry));
}

#[test]
fn test_selection_does_not_change_sequence() {
    let mut state = LeaderboardViewState::new();
    state.set_rankings(compute_rankings(&worked_example()));
    let before = state.displayed_sequence().to_vec();

    state.select_entry(before[0].clone());
    assert_eq!(state.displayed_sequence(), &before[..]);
    state.clear_selection();
    assert_eq!(state.displayed_sequence(), &before[..]);
}

#[test]
fn test_select_view_named() {
    let mut state = LeaderboardViewState::new();

    state.select_view_named("FRIENDS").unwrap();
    assert_eq!(state.active_view(), LeaderboardView::Friends);
    state.select_view_named("appWide").unwrap();
    assert_eq!(state.active_view(), LeaderboardView::Global);

    let err = state.select_view_named("weekly").unwrap_err();
    assert_eq!(
        err,
        ViewError::InvalidViewSelector {
            value: "weekly".to_string()
        }
    );
    assert_eq!(state.active_view(), LeaderboardView::Global);
}

// ============================================================================
// App flow
// ============================================================================

#[tokio::test]
async fn test_app_loads_and_resolves_viewer() {
    let app = TestAppBuilder::new()
        .with_records(worked_example())
        .with_viewer("1")
        .with_view(LeaderboardView::Friends)
        .build_loaded()
        .await;

    assert_eq!(ids(app.view_state.displayed_sequence()), vec!["3", "1"]);
    let viewer = app.view_state.viewer().unwrap();
    assert_eq!(viewer.display_name, "Ada");
    assert_eq!(viewer.carbon_emission, Emission::new(5.0));
    assert_eq!(app.view_state.viewer_entry().unwrap().rank, 2);
}

#[tokio::test]
async fn test_failed_refresh_reports_status() {
    let (mut app, source) = TestAppBuilder::new().build();
    source.push_failure("server unreachable");
    let mut rx = app.message_rx.take().unwrap();

    // Queue is [Ok([]), Err(..)]: first fetch succeeds, later ones fail
    app.refresh();
    app.handle_message(rx.recv().await.unwrap());
    app.refresh();
    app.handle_message(rx.recv().await.unwrap());

    assert_eq!(source.fetch_count(), 2);
    assert!(app
        .load_status
        .status_line()
        .contains("server unreachable"));
}
