//! Opening a walkthrough on its preset data.

use algostory_steps::{
    binary_search, bubble_sort, heap_sort, linear_search, merge_sort, quick_sort, shortest_path,
    GraphState, Trace,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{AlgorithmId, Metadata};
use crate::config::VisConfig;
use crate::error::{Error, Result};
use crate::playback::Playback;
use crate::player::Player;
use crate::presets;

/// The data shown by one step, whatever the algorithm family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Snapshot {
    /// Named items (evidence, book titles)
    Items(Vec<String>),
    /// Numeric values being sorted
    Numbers(Vec<i64>),
    /// Shortest-path search state
    Graph(GraphState),
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Run the generator for `id` over its preset dataset.
pub fn preset_trace(id: AlgorithmId, config: &VisConfig) -> Result<Trace<Snapshot>> {
    let trace = match id {
        AlgorithmId::LinearSearch => linear_search(
            &owned(&presets::EVIDENCE),
            &presets::EVIDENCE_TARGET.to_string(),
        )
        .map(Snapshot::Items),
        AlgorithmId::BinarySearch => binary_search(
            &owned(&presets::SHELF),
            &presets::SHELF_TARGET.to_string(),
        )
        .map(Snapshot::Items),
        AlgorithmId::BubbleSort => bubble_sort(&presets::BUBBLES, config.bubble).map(Snapshot::Numbers),
        AlgorithmId::MergeSort => merge_sort(&presets::PAPERS).map(Snapshot::Numbers),
        AlgorithmId::QuickSort => quick_sort(&presets::TROOPS).map(Snapshot::Numbers),
        AlgorithmId::HeapSort => heap_sort(&presets::MOUNTAIN).map(Snapshot::Numbers),
        AlgorithmId::ShortestPath => shortest_path(
            &presets::town_map()?,
            presets::TOWN_SOURCE,
            presets::TOWN_TARGET,
        )?
        .map(Snapshot::Graph),
        AlgorithmId::Stack | AlgorithmId::Queue => return Err(Error::Interactive(id)),
    };
    Ok(trace)
}

/// A walkthrough ready to play.
pub struct Session {
    id: AlgorithmId,
    player: Player<Snapshot>,
}

impl Session {
    /// Build the preset trace for `id` and wrap it in a stopped player.
    pub fn open(id: AlgorithmId, config: &VisConfig) -> Result<Self> {
        let trace = preset_trace(id, config)?;
        let base = config.base_interval(id).ok_or(Error::Interactive(id))?;

        let mut playback = Playback::new(trace);
        playback.set_speed(config.speed);
        info!(
            algorithm = %id,
            steps = playback.total(),
            interval_ms = u64::try_from(playback.speed().interval(base).as_millis()).unwrap_or(u64::MAX),
            "session opened"
        );

        Ok(Self {
            id,
            player: Player::from_playback(playback, base),
        })
    }

    /// Same as [`Session::open`], looking the walkthrough up by slug.
    pub fn open_slug(slug: &str, config: &VisConfig) -> Result<Self> {
        Self::open(slug.parse()?, config)
    }

    pub fn id(&self) -> AlgorithmId {
        self.id
    }

    pub fn metadata(&self) -> Metadata {
        self.id.metadata()
    }

    pub fn player(&self) -> &Player<Snapshot> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player<Snapshot> {
        &mut self.player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ALL;
    use crate::playback::{PlaybackSpeed, PlaybackState};
    use algostory_steps::{Action, BubbleOptions, Outcome};
    use std::time::Duration;

    fn config() -> VisConfig {
        VisConfig {
            tick_override: None,
            speed: PlaybackSpeed::Normal,
            bubble: BubbleOptions::default(),
        }
    }

    #[test]
    fn every_walkthrough_has_a_trace() {
        for id in ALL.into_iter().filter(|id| !id.is_interactive()) {
            let trace = preset_trace(id, &config()).unwrap();
            assert!(trace.outcome().is_success(), "{id} did not succeed");
        }
    }

    #[test]
    fn interactive_demos_have_no_trace() {
        assert_eq!(
            preset_trace(AlgorithmId::Stack, &config()).unwrap_err(),
            Error::Interactive(AlgorithmId::Stack)
        );
        assert!(matches!(
            Session::open(AlgorithmId::Queue, &config()),
            Err(Error::Interactive(AlgorithmId::Queue))
        ));
    }

    #[test]
    fn preset_outcomes() {
        let config = config();
        assert_eq!(
            preset_trace(AlgorithmId::LinearSearch, &config).unwrap().outcome(),
            Outcome::Found { index: 8 }
        );
        assert_eq!(
            preset_trace(AlgorithmId::BinarySearch, &config).unwrap().outcome(),
            Outcome::Found { index: 8 }
        );
        assert_eq!(
            preset_trace(AlgorithmId::ShortestPath, &config).unwrap().outcome(),
            Outcome::Reached { distance: 10 }
        );
    }

    #[test]
    fn bubble_options_come_from_config() {
        let full = preset_trace(AlgorithmId::BubbleSort, &config()).unwrap();
        let early = VisConfig {
            bubble: BubbleOptions::with_early_exit(),
            ..config()
        };
        let short = preset_trace(AlgorithmId::BubbleSort, &early).unwrap();

        assert_eq!(full.count(Action::Compare), 28);
        assert!(short.count(Action::Compare) <= 28);
        assert_eq!(short.terminal().sequence, full.terminal().sequence);
    }

    #[test]
    fn snapshot_serialization() {
        let trace = preset_trace(AlgorithmId::QuickSort, &config()).unwrap();
        let json = serde_json::to_value(trace.initial()).unwrap();
        assert_eq!(json["sequence"]["kind"], "numbers");
        assert_eq!(json["sequence"]["data"][6], 90);
        assert_eq!(json["action"], "start");
    }

    #[test]
    fn unknown_slug() {
        assert!(matches!(
            Session::open_slug("bogo-sort", &config()),
            Err(Error::UnknownAlgorithm(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn session_plays_its_preset() {
        let config = VisConfig {
            tick_override: Some(Duration::from_millis(10)),
            speed: PlaybackSpeed::Quadruple,
            ..config()
        };
        let mut session = Session::open_slug("shortest-path", &config).unwrap();
        assert_eq!(session.metadata().title, "Shortest Path");
        assert_eq!(session.player().base_interval(), Duration::from_millis(10));

        let mut frames = session.player().subscribe();
        session.player_mut().play().await;
        while frames.borrow_and_update().status.state != PlaybackState::Finished {
            frames.changed().await.unwrap();
        }

        let frame = session.player().frame().await;
        assert_eq!(frame.step.action, Action::Done(Outcome::Reached { distance: 10 }));
        match frame.step.sequence {
            Snapshot::Graph(state) => assert_eq!(state.path, vec![0, 2, 1, 3, 5]),
            other => panic!("unexpected snapshot {other:?}"),
        }
    }
}
