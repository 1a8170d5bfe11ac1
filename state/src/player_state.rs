use crate::{Episode, PlayerAction, StateError};
use rand::Rng;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
/// Everything that is needed to render the player.
pub struct PlayerState {
    pub(crate) queue: Arc<Vec<Episode>>,
    pub(crate) current_index: usize,

    pub(crate) is_playing: bool,
    pub(crate) is_looping: bool,
    pub(crate) is_shuffling: bool,
}

impl PlayerState {
    pub fn new() -> Self {
        PlayerState::default()
    }

    pub fn queue(&self) -> &[Episode] {
        &self.queue
    }

    /// Meaningless while the queue is empty.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.get(self.current_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_index + 1 < self.queue.len()
    }

    /// Applies a batch of actions to a copy of this state.
    ///
    /// Either every action is applied or, on the first rejected one, the error is returned and
    /// nothing is.
    pub fn apply<R: Rng>(
        &self,
        actions: Vec<PlayerAction>,
        rng: &mut R,
    ) -> Result<PlayerState, StateError> {
        let mut next = self.clone();

        for action in actions {
            match action {
                PlayerAction::Play(episode) => {
                    next.queue = Arc::new(vec![episode]);
                    next.current_index = 0;
                    next.is_playing = true;
                }
                PlayerAction::PlayList { episodes, index } => {
                    if index >= episodes.len() {
                        return Err(StateError::InvalidIndex {
                            index,
                            len: episodes.len(),
                        });
                    }

                    next.queue = Arc::new(episodes);
                    next.current_index = index;
                    next.is_playing = true;
                }
                PlayerAction::PlayNext => {
                    if next.is_shuffling {
                        // A repeat of the current episode is allowed.
                        if !next.queue.is_empty() {
                            next.current_index = rng.gen_range(0..next.queue.len());
                        }
                    } else if next.has_next() {
                        next.current_index += 1;
                    }
                }
                PlayerAction::PlayPrevious => {
                    if next.has_previous() {
                        next.current_index -= 1;
                    }
                }
                PlayerAction::TogglePlay => {
                    next.is_playing = !next.is_playing;
                }
                PlayerAction::ToggleLoop => {
                    next.is_looping = !next.is_looping;
                }
                PlayerAction::ToggleShuffle => {
                    next.is_shuffling = !next.is_shuffling;
                }
                PlayerAction::SetPlaying(is_playing) => {
                    next.is_playing = is_playing;
                }
                PlayerAction::Clear => {
                    next.queue = Arc::new(Vec::new());
                    next.current_index = 0;
                }
            }
        }

        Ok(next)
    }
}
