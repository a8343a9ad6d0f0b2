//! Match lifecycle state machine
//!
//! Tracks which screen the tick driver is on. The simulation itself never
//! consults it; the driver checks for a winner each tick and reports
//! `GameOver` here.

/// Lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    NotStarted,
    Running,
    Completed,
    Terminated,
}

/// Things that move the app between screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Play,
    GameOver,
    PlayAgain,
    Quit,
}

/// Outcome of [`GameFsm::transition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FsmState,
    pub to_state: FsmState,
    pub action: GameAction,
}

/// Screen the app is on, driven by the tick loop
#[derive(Debug)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::NotStarted,
        }
    }

    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Apply `action`; a rejected action leaves the state alone
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            log::info!("{:?} --{:?}--> {:?}", from_state, action, next_state);
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            log::warn!("ignoring {:?} in state {:?}", action, from_state);
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            // Quit is honoured from every live state
            (FsmState::Terminated, _) => None,
            (_, GameAction::Quit) => Some(FsmState::Terminated),

            (FsmState::NotStarted, GameAction::Play) => Some(FsmState::Running),
            (FsmState::Running, GameAction::GameOver) => Some(FsmState::Completed),
            (FsmState::Completed, GameAction::PlayAgain) => Some(FsmState::Running),

            _ => None,
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.state == FsmState::Terminated
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}
