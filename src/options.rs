//! Game configuration options.

/// Configuration options for a game.
///
/// The engine performs no timing itself; the two interval fields tell the
/// host how long to wait before calling back
/// [`release_selection_lock`](crate::Game::release_selection_lock) and
/// [`evaluate`](crate::Game::evaluate).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use dprs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(5)
///     .with_selection_lock_millis(500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of cards dealt into the hand at the start of a game.
    pub hand_size: usize,
    /// Interval in milliseconds the selection lock stays armed after each
    /// selection.
    pub selection_lock_millis: u64,
    /// Delay in milliseconds between the fifth selection and evaluation.
    pub evaluation_delay_millis: u64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 5,
            selection_lock_millis: 1000,
            evaluation_delay_millis: 100,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt into the hand.
    ///
    /// # Example
    ///
    /// ```
    /// use dprs::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(7);
    /// assert_eq!(options.hand_size, 7);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the selection lock interval in milliseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use dprs::GameOptions;
    ///
    /// let options = GameOptions::default().with_selection_lock_millis(250);
    /// assert_eq!(options.selection_lock_millis, 250);
    /// ```
    #[must_use]
    pub const fn with_selection_lock_millis(mut self, millis: u64) -> Self {
        self.selection_lock_millis = millis;
        self
    }

    /// Sets the evaluation delay in milliseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use dprs::GameOptions;
    ///
    /// let options = GameOptions::default().with_evaluation_delay_millis(50);
    /// assert_eq!(options.evaluation_delay_millis, 50);
    /// ```
    #[must_use]
    pub const fn with_evaluation_delay_millis(mut self, millis: u64) -> Self {
        self.evaluation_delay_millis = millis;
        self
    }
}
