//! Fetch lifecycle for the dashboard: `idle -> loading -> {ready | errored}`,
//! re-entered from any terminal state by the refetch callback.

use crate::api_client::dashboard;
use crate::snapshot::{load_snapshot, Snapshot};
use chrono::{DateTime, Local};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub struct SnapshotState {
    pub snapshot: Snapshot,
    pub loading: bool,
    pub errored: bool,
    pub updated_at: Option<DateTime<Local>>,
}

pub enum SnapshotAction {
    Started,
    Loaded(Snapshot, DateTime<Local>),
    Failed,
}

impl Reducible for SnapshotState {
    type Action = SnapshotAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SnapshotAction::Started => Rc::new(Self {
                snapshot: self.snapshot.clone(),
                loading: true,
                errored: false,
                updated_at: self.updated_at,
            }),
            SnapshotAction::Loaded(snapshot, at) => Rc::new(Self {
                snapshot,
                loading: false,
                errored: false,
                updated_at: Some(at),
            }),
            // Keep the previous snapshot on screen: stale-but-consistent
            // beats partial. The only user-visible failure signal is data
            // simply not updating.
            SnapshotAction::Failed => Rc::new(Self {
                snapshot: self.snapshot.clone(),
                loading: false,
                errored: true,
                updated_at: self.updated_at,
            }),
        }
    }
}

/// Fetches the dashboard snapshot on mount and exposes a refetch callback.
///
/// Fetch cycles carry a generation counter; a cycle that resolves after a
/// newer one has started is discarded, so a slow stale response can never
/// overwrite fresher data.
#[hook]
pub fn use_snapshot() -> (UseReducerHandle<SnapshotState>, Callback<()>) {
    let state = use_reducer(SnapshotState::default);
    let generation = use_mut_ref(|| 0u64);

    let refetch = {
        let state = state.clone();
        let generation = generation.clone();

        use_callback((), move |_, _| {
            let cycle = {
                let mut counter = generation.borrow_mut();
                *counter += 1;
                *counter
            };
            log::debug!("Starting fetch cycle {}", cycle);
            state.dispatch(SnapshotAction::Started);

            let state = state.clone();
            let generation = generation.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = load_snapshot(dashboard::get_summary, dashboard::get_forecast).await;

                if *generation.borrow() != cycle {
                    log::debug!("Discarding stale fetch cycle {}", cycle);
                    return;
                }

                match result {
                    Ok(snapshot) => {
                        log::info!("Fetch cycle {} complete", cycle);
                        state.dispatch(SnapshotAction::Loaded(snapshot, Local::now()));
                    }
                    Err(err) => {
                        log::error!("Fetch cycle {} failed: {}", cycle, err);
                        state.dispatch(SnapshotAction::Failed);
                    }
                }
            });
        })
    };

    // Fetch on mount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    (state, refetch)
}
