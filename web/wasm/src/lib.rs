use dprs::{Card, EvalBatch, Game, GameOptions, GameState, HandResolution, Suit};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    pending: Option<EvalBatch>,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
            pending: None,
        }
    }

    /// Starts (or restarts) a game. The score carries over.
    pub fn start(&mut self) {
        self.pending = None;
        self.game.start();
    }

    pub fn reset(&mut self) {
        self.pending = None;
        self.game.reset();
    }

    /// Interval in milliseconds the page should wait before calling
    /// `release_selection_lock`.
    pub fn selection_lock_millis(&self) -> u32 {
        self.game.options.selection_lock_millis as u32
    }

    /// Delay in milliseconds the page should wait before calling
    /// `evaluate_pending`.
    pub fn evaluation_delay_millis(&self) -> u32 {
        self.game.options.evaluation_delay_millis as u32
    }

    /// Moves the card at `index` into the selected hand.
    ///
    /// Returns whether this selection completed a five-card selected hand;
    /// when it did, the page schedules `evaluate_pending` after
    /// `evaluation_delay_millis`.
    pub fn select_card(&mut self, index: u32) -> Result<bool, JsValue> {
        let outcome = self.game.select_card(index as usize).map_err(js_err)?;
        let scheduled = outcome.batch.is_some();
        if scheduled {
            self.pending = outcome.batch;
        }
        Ok(scheduled)
    }

    pub fn release_selection_lock(&mut self) {
        self.game.release_selection_lock();
    }

    pub fn has_pending_evaluation(&self) -> bool {
        self.pending.is_some()
    }

    /// Evaluates the selection captured by the last completing `select_card`.
    pub fn evaluate_pending(&mut self) -> Result<JsValue, JsValue> {
        let batch = self
            .pending
            .take()
            .ok_or_else(|| JsValue::from_str("no evaluation is pending"))?;
        let resolution = self.game.evaluate(&batch).map_err(js_err)?;
        to_js_value(&JsResolution::from(resolution))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            hand: self.game.hand().iter().copied().map(card_to_js).collect(),
            selected: self
                .game
                .selected()
                .iter()
                .copied()
                .map(card_to_js)
                .collect(),
            used: self
                .game
                .used_cards()
                .iter()
                .copied()
                .map(card_to_js)
                .collect(),
            score: self.game.score(),
            cards_remaining: self.game.cards_remaining() as u32,
            game_over: self.game.is_game_over(),
            selection_locked: self.game.is_selection_locked(),
            evaluation_pending: self.pending.is_some(),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    hand: Vec<JsCard>,
    selected: Vec<JsCard>,
    used: Vec<JsCard>,
    score: u32,
    cards_remaining: u32,
    game_over: bool,
    selection_locked: bool,
    evaluation_pending: bool,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
}

#[derive(Serialize)]
struct JsResolution {
    category: Option<&'static str>,
    points: u32,
    score: u32,
    round_cleared: bool,
    game_over: bool,
}

impl From<HandResolution> for JsResolution {
    fn from(resolution: HandResolution) -> Self {
        Self {
            category: resolution.category.map(dprs::HandCategory::name),
            points: resolution.points,
            score: resolution.score,
            round_cleared: resolution.round_cleared,
            game_over: resolution.game_over,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Idle => "Idle",
        GameState::InRound => "InRound",
        GameState::GameOver => "GameOver",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
