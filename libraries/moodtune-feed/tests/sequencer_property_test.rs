//! Property-based tests for fetch sequencing
//!
//! Random interleavings of filter changes, load-more triggers and responses
//! arriving in arbitrary order.

use moodtune_client::PlaylistPage;
use moodtune_core::{Category, Playlist};
use moodtune_feed::{Completion, FeedError, FeedState, FetchTicket};
use proptest::prelude::*;

// ===== Helpers =====

#[derive(Debug, Clone)]
enum Op {
    /// Filter change followed by a fresh load
    ChangeFilter,
    /// Trigger became visible
    LoadMore,
    /// One outstanding response arrives
    Respond {
        pick: usize,
        ok: bool,
        count: usize,
        total: u64,
    },
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => Just(Op::ChangeFilter),
        1 => Just(Op::LoadMore),
        3 => (0usize..8, prop::bool::weighted(0.8), 0usize..=12, 0u64..60)
            .prop_map(|(pick, ok, count, total)| Op::Respond { pick, ok, count, total }),
    ]
}

fn page(generation: u32, count: usize, total: u64) -> PlaylistPage {
    let playlists: Vec<Playlist> = (0..count)
        .map(|i| {
            serde_json::from_value(serde_json::json!({
                "id": i,
                "name": format!("item-{i}"),
                "category": format!("c{generation}"),
                "createdAt": "2026-01-01T00:00:00Z"
            }))
            .unwrap()
        })
        .collect();
    PlaylistPage {
        playlists,
        total: Some(total),
    }
}

struct Outstanding {
    ticket: FetchTicket,
    generation: u32,
}

// ===== Property Tests =====

proptest! {
    /// Property: only the latest request ever changes the results, results
    /// never exceed the total, and results never mix filter generations
    #[test]
    fn stale_responses_never_commit(ops in prop::collection::vec(arbitrary_op(), 1..60)) {
        let mut state = FeedState::new(12);
        let mut generation = 0u32;
        let mut outstanding: Vec<Outstanding> = Vec::new();
        let mut last_seq = 0u64;

        for op in ops {
            match op {
                Op::ChangeFilter => {
                    generation += 1;
                    state.filters_mut().set_category(Category::parse(&format!("c{generation}")));
                    let ticket = state.begin(1, false);
                    prop_assert!(ticket.sequence_id > last_seq);
                    last_seq = ticket.sequence_id;
                    outstanding.push(Outstanding { ticket, generation });
                }
                Op::LoadMore => {
                    if state.can_trigger_load_more() {
                        let ticket = state.begin(state.loaded_pages() + 1, true);
                        prop_assert!(ticket.sequence_id > last_seq);
                        last_seq = ticket.sequence_id;
                        outstanding.push(Outstanding { ticket, generation });
                    }
                }
                Op::Respond { pick, ok, count, total } => {
                    if outstanding.is_empty() {
                        continue;
                    }
                    let response = outstanding.remove(pick % outstanding.len());
                    let is_latest = response.ticket.sequence_id == state.sequence_id();
                    let before: Vec<Playlist> = state.results().to_vec();

                    let outcome = if ok {
                        Ok(page(response.generation, count, total))
                    } else {
                        Err(FeedError::Source("offline".to_string()))
                    };
                    let completion = state.complete(&response.ticket, outcome);

                    if !is_latest {
                        prop_assert_eq!(completion, Completion::Discarded);
                        prop_assert_eq!(state.results(), before.as_slice());
                    }
                }
            }

            prop_assert!(state.results().len() as u64 <= state.total());

            let first = state.results().first().map(|p| p.category.clone());
            prop_assert!(state.results().iter().all(|p| Some(&p.category) == first.as_ref()));

            if !state.is_loading() {
                if let Some(category) = first {
                    prop_assert_eq!(category, format!("c{generation}"));
                }
            }
        }

        // Draining every response settles both loading flags
        while let Some(response) = outstanding.pop() {
            state.complete(&response.ticket, Ok(page(response.generation, 0, 0)));
        }
        prop_assert!(!state.is_loading());
        prop_assert!(!state.is_loading_more());
    }

    /// Property: the load-more trigger is armed exactly when idle with more to show
    #[test]
    fn trigger_armed_iff_idle_with_more(count in 0usize..=12, total in 0u64..40) {
        let mut state = FeedState::new(12);
        let ticket = state.begin(1, false);
        prop_assert!(!state.can_trigger_load_more());

        state.complete(&ticket, Ok(page(0, count, total)));
        let has_more = (state.results().len() as u64) < state.total();
        prop_assert_eq!(state.can_trigger_load_more(), has_more);
        prop_assert_eq!(state.all_loaded(), count > 0 && !has_more);
    }
}
