use futures::channel::mpsc::{channel as fchannel, Receiver as FReceiver, Sender as FSender};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, warn};

mod episode;
mod player_state;
mod state_error;

pub use episode::Episode;
pub use player_state::PlayerState;
pub use state_error::StateError;

#[derive(Debug, Clone)]
pub enum PlayerAction {
    Play(Episode),
    PlayList {
        episodes: Vec<Episode>,
        index: usize,
    },
    PlayNext,
    PlayPrevious,

    TogglePlay,
    ToggleLoop,
    ToggleShuffle,
    /// Used by playback-completion callbacks.
    SetPlaying(bool),

    /// Empties the queue. Flags are kept.
    Clear,
}

/// The one player state of an application session.
///
/// Create it once at startup and hand the `Arc` to everything that reads or drives playback.
pub struct CurrentPlayer {
    state: RwLock<Arc<PlayerState>>,
    rng: Mutex<StdRng>,
    notify: Mutex<FSender<()>>,
}

impl std::fmt::Debug for CurrentPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CurrentPlayer")
    }
}

impl CurrentPlayer {
    /// Creates a player state that can be gotten or updated.
    ///
    /// Also creates a notifier that can be used to figure out when the state has been updated.
    pub fn new() -> (Arc<CurrentPlayer>, FReceiver<()>) {
        CurrentPlayer::with_rng(StdRng::from_entropy())
    }

    /// Like `new`, but shuffling draws from `rng`.
    pub fn with_rng(rng: StdRng) -> (Arc<CurrentPlayer>, FReceiver<()>) {
        let (send_update, receive_update) = fchannel(1);

        let current = Arc::new(CurrentPlayer {
            state: RwLock::new(Arc::new(PlayerState::new())),
            rng: Mutex::new(rng),
            notify: Mutex::new(send_update),
        });

        (current, receive_update)
    }

    pub fn get(&self) -> Arc<PlayerState> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Applies all of `actions`, or none of them if one is rejected.
    pub fn update(&self, actions: Vec<PlayerAction>) -> Result<(), StateError> {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

            debug!(?actions, "apply");
            let next = state.apply(actions, &mut *rng)?;
            *state = Arc::new(next);
        }

        // Only send if they're not already waiting for an update.
        let _ = self
            .notify
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .try_send(());

        Ok(())
    }

    fn dispatch(&self, action: PlayerAction) {
        if let Err(err) = self.update(vec![action]) {
            warn!(%err, "player action rejected");
        }
    }

    pub fn play(&self, episode: Episode) {
        self.dispatch(episode.play());
    }

    pub fn play_list(&self, episodes: Vec<Episode>, index: usize) -> Result<(), StateError> {
        self.update(vec![PlayerAction::PlayList { episodes, index }])
    }

    pub fn play_next(&self) {
        self.dispatch(PlayerAction::PlayNext);
    }

    pub fn play_previous(&self) {
        self.dispatch(PlayerAction::PlayPrevious);
    }

    pub fn toggle_play(&self) {
        self.dispatch(PlayerAction::TogglePlay);
    }

    pub fn toggle_loop(&self) {
        self.dispatch(PlayerAction::ToggleLoop);
    }

    pub fn toggle_shuffle(&self) {
        self.dispatch(PlayerAction::ToggleShuffle);
    }

    pub fn set_playing(&self, is_playing: bool) {
        self.dispatch(PlayerAction::SetPlaying(is_playing));
    }

    pub fn clear(&self) {
        self.dispatch(PlayerAction::Clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(title: &str) -> Episode {
        Episode::default()
            .with_title(title.to_owned())
            .with_members(String::from("Diego Fernandes"))
            .with_thumbnail(format!("https://cdn.example.com/{}.jpg", title))
            .with_duration(5400)
            .with_url(format!("https://cdn.example.com/{}.m4a", title))
    }

    #[test]
    fn smoke() {
        let (current, mut wait_for_update) = CurrentPlayer::new();

        assert!(current.get().queue().is_empty());
        assert_eq!(wait_for_update.try_next().is_err(), true);

        current.play(episode("Faladev #30"));
        assert_eq!(wait_for_update.try_next().unwrap(), Some(()));

        let state = current.get();
        assert_eq!(state.queue().len(), 1);
        assert_eq!(state.current_index(), 0);
        assert!(state.is_playing());
        assert_eq!(
            state.current_episode().map(Episode::title),
            Some("Faladev #30")
        );

        current.toggle_play();
        current.toggle_loop();
        let state = current.get();
        assert!(!state.is_playing());
        assert!(state.is_looping());
    }

    #[test]
    fn snapshots_do_not_change() {
        let (current, _wait_for_update) = CurrentPlayer::new();
        current
            .play_list(vec![episode("a"), episode("b"), episode("c")], 1)
            .unwrap();

        let before = current.get();
        current.play_next();
        current.set_playing(false);

        assert_eq!(before.current_index(), 1);
        assert!(before.is_playing());
        assert_eq!(current.get().current_index(), 2);
        assert!(!current.get().is_playing());
    }

    #[test]
    fn rejected_batch_is_not_committed() {
        let (current, mut wait_for_update) = CurrentPlayer::new();
        current
            .play_list(vec![episode("a"), episode("b")], 0)
            .unwrap();
        while wait_for_update.try_next().is_ok() {}

        let result = current.update(vec![
            PlayerAction::ToggleShuffle,
            PlayerAction::PlayList {
                episodes: vec![episode("c")],
                index: 5,
            },
        ]);

        assert_eq!(result, Err(StateError::InvalidIndex { index: 5, len: 1 }));
        assert!(wait_for_update.try_next().is_err());

        let state = current.get();
        assert!(!state.is_shuffling());
        assert_eq!(state.queue(), &[episode("a"), episode("b")]);
    }

    #[test]
    fn seeded_shuffle_is_repeatable() {
        let draws = |seed| {
            let (current, _wait_for_update) = CurrentPlayer::with_rng(StdRng::seed_from_u64(seed));
            current
                .play_list((0..10).map(|n| episode(&n.to_string())).collect(), 0)
                .unwrap();
            current.toggle_shuffle();

            (0..20)
                .map(|_| {
                    current.play_next();
                    current.get().current_index()
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(draws(3), draws(3));
        assert!(draws(3).iter().all(|index| *index < 10));
    }

    #[test]
    fn clear_keeps_flags() {
        let (current, _wait_for_update) = CurrentPlayer::new();
        current.play(episode("a"));
        current.toggle_shuffle();
        current.clear();

        let state = current.get();
        assert!(state.queue().is_empty());
        assert_eq!(state.current_index(), 0);
        assert!(state.is_playing());
        assert!(state.is_shuffling());
    }
}
