use super::types::SessionOutcome;

pub trait ScoreSink {
    fn add_score(&mut self, amount: u32);
}

pub trait CoinSink {
    fn add_coins(&mut self, amount: u32);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Eat,
    Lose,
    Win,
}

pub trait SoundSink {
    fn play(&mut self, cue: SoundCue);
}

/// Told once when a session ends, typically to open the results view.
pub trait SessionEndSink {
    fn on_game_over(&mut self, outcome: SessionOutcome);
}

pub struct Collaborators {
    pub score: Box<dyn ScoreSink>,
    pub coins: Box<dyn CoinSink>,
    pub sound: Box<dyn SoundSink>,
    pub session_end: Box<dyn SessionEndSink>,
}

impl Collaborators {
    pub fn silent() -> Self {
        Self {
            score: Box::new(Silent),
            coins: Box::new(Silent),
            sound: Box::new(Silent),
            session_end: Box::new(Silent),
        }
    }
}

struct Silent;

impl ScoreSink for Silent {
    fn add_score(&mut self, _amount: u32) {}
}

impl CoinSink for Silent {
    fn add_coins(&mut self, _amount: u32) {}
}

impl SoundSink for Silent {
    fn play(&mut self, _cue: SoundCue) {}
}

impl SessionEndSink for Silent {
    fn on_game_over(&mut self, _outcome: SessionOutcome) {}
}
