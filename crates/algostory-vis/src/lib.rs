//! Algostory Walkthroughs
//!
//! Story-driven algorithm walkthroughs with playback controls.
//!
//! # Architecture
//!
//! - **Catalog**: Every walkthrough with its card text, difficulty and tick rate
//! - **Presets**: The datasets each story runs on
//! - **Playback**: Cursor over a precomputed trace, play/pause/scrub
//! - **Player**: Advances the cursor on a tokio timer and publishes frames
//! - **Structures**: The hands-on stack and queue demos
//!
//! # Usage
//!
//! ```ignore
//! let config = VisConfig::from_env();
//! let mut session = Session::open(AlgorithmId::QuickSort, &config)?;
//!
//! let mut frames = session.player().subscribe();
//! session.player_mut().play().await;
//! while frames.changed().await.is_ok() {
//!     render(&frames.borrow());
//! }
//! ```

pub mod catalog;
mod config;
mod error;
mod playback;
mod player;
pub mod presets;
mod session;
mod structures;

pub use catalog::{AlgorithmId, Category, Difficulty, Metadata};
pub use config::VisConfig;
pub use error::{Error, Result};
pub use playback::{Frame, Playback, PlaybackSpeed, PlaybackState, PlaybackStatus};
pub use player::Player;
pub use session::{preset_trace, Session, Snapshot};
pub use structures::{AnimationLatch, BakeryQueue, PlateStack, ANIMATION_HOLD};
