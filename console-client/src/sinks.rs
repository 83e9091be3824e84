use std::cell::Cell;
use std::rc::Rc;

use common::games::snake::{
    Collaborators, CoinSink, ScoreSink, SessionEndSink, SessionOutcome, SoundCue, SoundSink,
};
use common::log;

/// Score, coins and outcome of the running session, shared between the
/// collaborators handed to the session and the host loop.
#[derive(Default)]
pub struct SessionTally {
    score: Cell<u32>,
    coins: Cell<u32>,
    outcome: Cell<Option<SessionOutcome>>,
}

#[derive(Clone, Default)]
pub struct TallyHandle(Rc<SessionTally>);

impl TallyHandle {
    pub fn score(&self) -> u32 {
        self.0.score.get()
    }

    pub fn coins(&self) -> u32 {
        self.0.coins.get()
    }

    pub fn outcome(&self) -> Option<SessionOutcome> {
        self.0.outcome.get()
    }
}

impl ScoreSink for TallyHandle {
    fn add_score(&mut self, amount: u32) {
        let score = self.0.score.get().saturating_add(amount);
        self.0.score.set(score);
        log!("Score: {}", score);
    }
}

impl CoinSink for TallyHandle {
    fn add_coins(&mut self, amount: u32) {
        self.0.coins.set(self.0.coins.get().saturating_add(amount));
    }
}

impl SessionEndSink for TallyHandle {
    fn on_game_over(&mut self, outcome: SessionOutcome) {
        self.0.outcome.set(Some(outcome));
        log!("Opening results view for {:?}", outcome);
    }
}

pub struct ConsoleSound {
    enabled: bool,
}

impl ConsoleSound {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl SoundSink for ConsoleSound {
    fn play(&mut self, cue: SoundCue) {
        if self.enabled {
            log!("Playing sound {:?}", cue);
        }
    }
}

pub fn console_collaborators(tally: &TallyHandle, sound_enabled: bool) -> Collaborators {
    Collaborators {
        score: Box::new(tally.clone()),
        coins: Box::new(tally.clone()),
        sound: Box::new(ConsoleSound::new(sound_enabled)),
        session_end: Box::new(tally.clone()),
    }
}
