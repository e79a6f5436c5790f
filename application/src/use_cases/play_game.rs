//! Play Game use case.
//!
//! Runs the combine-two-concepts loop:
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────┐
//!   │ pick(vocabulary, status)        → first                  │
//!   │ pick(vocabulary, first)         → second                 │
//!   │ combine(first, second)          → result                 │
//!   │ vocabulary.discover(result)     → New / Known            │
//!   │ status = "You got: …" / "You already have: …"            │
//!   └──────────────────────────── loop ────────────────────────┘
//! ```
//!
//! There is a single steady state. The loop leaves it when the player
//! cancels a pick, the cancellation token fires, `max_rounds` is reached,
//! or an error is not absorbed by the [`ErrorPolicy`].

use crate::config::GameParams;
use crate::ports::combination_gateway::{CombinationGateway, ExtractionError, GatewayError};
use crate::ports::concept_picker::{ConceptPicker, PickerError};
use crate::ports::round_observer::{NoRoundObserver, RoundObserver};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use wordcraft_domain::{Concept, Discovery, RoundStatus, Vocabulary};

/// Errors that end a game abnormally.
#[derive(Error, Debug)]
pub enum PlayGameError {
    #[error("Picker error: {0}")]
    Picker(#[from] PickerError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Operation cancelled")]
    Cancelled,
}

impl PlayGameError {
    /// Check if this error represents a cancellation (token or player)
    pub fn is_cancelled(&self) -> bool {
        match self {
            PlayGameError::Cancelled => true,
            PlayGameError::Picker(e) => e.is_cancelled(),
            PlayGameError::Gateway(_) => false,
        }
    }
}

/// Mutable state of one game, owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    /// Every concept known so far.
    pub vocabulary: Vocabulary,
    /// Header for the next round's first pick.
    pub status: RoundStatus,
    /// Rounds that reached the combination step (including skipped ones).
    pub rounds_played: usize,
    /// Concepts appended during this game, in discovery order.
    pub discovered: Vec<Concept>,
}

impl GameState {
    /// Fresh game with the seed vocabulary and an empty header
    pub fn new() -> Self {
        Self::default()
    }

    /// Game starting from a given vocabulary
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            ..Self::default()
        }
    }
}

/// What happened in one completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Discovered {
        first: Concept,
        second: Concept,
        discovery: Discovery,
    },
    /// The combination failed and [`ErrorPolicy::SkipRound`](wordcraft_domain::ErrorPolicy::SkipRound) absorbed it.
    Skipped {
        first: Concept,
        second: Concept,
        reason: String,
    },
}

/// Why a game stopped without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// The player cancelled a pick.
    Cancelled,
    /// `max_rounds` rounds were played.
    RoundLimit,
    /// The cancellation token fired.
    Stopped,
}

/// Summary returned by [`PlayGameUseCase::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub rounds_played: usize,
    pub discovered: Vec<Concept>,
    pub vocabulary_size: usize,
    pub end: GameEnd,
}

impl GameSummary {
    fn from_state(state: &GameState, end: GameEnd) -> Self {
        Self {
            rounds_played: state.rounds_played,
            discovered: state.discovered.clone(),
            vocabulary_size: state.vocabulary.len(),
            end,
        }
    }
}

/// Use case for playing the combination game.
pub struct PlayGameUseCase {
    picker: Arc<dyn ConceptPicker>,
    gateway: Arc<dyn CombinationGateway>,
    observer: Arc<dyn RoundObserver>,
    params: GameParams,
    cancellation_token: Option<CancellationToken>,
}

impl PlayGameUseCase {
    pub fn new(picker: Arc<dyn ConceptPicker>, gateway: Arc<dyn CombinationGateway>) -> Self {
        Self {
            picker,
            gateway,
            observer: Arc::new(NoRoundObserver),
            params: GameParams::default(),
            cancellation_token: None,
        }
    }

    pub fn with_params(mut self, params: GameParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn RoundObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Set a cancellation token for graceful interruption
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Play rounds until the game ends.
    ///
    /// Returns `Ok` for every normal end (player cancel, token, round limit)
    /// and `Err` only for failures the error policy does not absorb.
    pub async fn run(&self, state: &mut GameState) -> Result<GameSummary, PlayGameError> {
        info!(
            "Starting game with {} concepts (policy: {}, max rounds: {:?})",
            state.vocabulary.len(),
            self.params.error_policy,
            self.params.max_rounds
        );

        let end = loop {
            if self.params.round_limit_reached(state.rounds_played) {
                break GameEnd::RoundLimit;
            }

            match self.play_round(state).await {
                Ok(_) => {}
                Err(PlayGameError::Cancelled) => break GameEnd::Stopped,
                Err(PlayGameError::Picker(PickerError::Cancelled)) => break GameEnd::Cancelled,
                Err(e) => return Err(e),
            }
        };

        info!(
            "Game ended ({:?}) after {} rounds, {} new concepts",
            end,
            state.rounds_played,
            state.discovered.len()
        );

        Ok(GameSummary::from_state(state, end))
    }

    /// Play exactly one round against `state`.
    pub async fn play_round(&self, state: &mut GameState) -> Result<RoundOutcome, PlayGameError> {
        self.check_cancelled()?;

        let round = state.rounds_played + 1;
        self.observer.on_round_start(round);

        let first = self
            .picker
            .pick(&state.vocabulary, state.status.as_str())
            .await?;
        // The second pick shows the first choice as its header.
        let second = self.picker.pick(&state.vocabulary, first.as_str()).await?;

        debug!("Round {}: combining {} + {}", round, first, second);

        self.observer.on_combine_start(&first, &second);
        let combined = self.combine_cancellable(&first, &second).await;
        self.observer.on_combine_end(combined.is_ok());

        match combined {
            Ok(result) => {
                let discovery = state.vocabulary.discover(result);
                if discovery.is_new() {
                    info!("Round {}: discovered {}", round, discovery.concept());
                    state.discovered.push(discovery.concept().clone());
                } else {
                    debug!("Round {}: already known {}", round, discovery.concept());
                }
                state.status = discovery.status();
                state.rounds_played = round;
                self.observer.on_discovery(round, &discovery);

                Ok(RoundOutcome::Discovered {
                    first,
                    second,
                    discovery,
                })
            }
            Err(PlayGameError::Gateway(e)) if !self.params.error_policy.is_fatal() => {
                warn!("Round {}: skipping failed combination: {}", round, e);
                state.status = RoundStatus::combination_failed(&e);
                state.rounds_played = round;
                self.observer.on_round_skipped(round, &e);

                Ok(RoundOutcome::Skipped {
                    first,
                    second,
                    reason: e.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Ask the gateway, racing the cancellation token when one is set.
    async fn combine_cancellable(
        &self,
        first: &Concept,
        second: &Concept,
    ) -> Result<Concept, PlayGameError> {
        let request = self.gateway.combine(first, second);

        let text = match &self.cancellation_token {
            Some(token) => tokio::select! {
                _ = token.cancelled() => return Err(PlayGameError::Cancelled),
                result = request => result?,
            },
            None => request.await?,
        };

        Concept::new(text).map_err(|_| GatewayError::Extraction(ExtractionError::EmptyText).into())
    }

    fn check_cancelled(&self) -> Result<(), PlayGameError> {
        if let Some(token) = &self.cancellation_token
            && token.is_cancelled()
        {
            return Err(PlayGameError::Cancelled);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use wordcraft_domain::ErrorPolicy;

    // ==================== Test Mocks ====================

    /// Returns scripted picks and records the header of every call.
    struct MockPicker {
        picks: Mutex<VecDeque<Result<String, PickerError>>>,
        headers: Mutex<Vec<String>>,
    }

    impl MockPicker {
        fn new(picks: Vec<Result<&str, PickerError>>) -> Self {
            Self {
                picks: Mutex::new(picks.into_iter().map(|p| p.map(String::from)).collect()),
                headers: Mutex::new(Vec::new()),
            }
        }

        fn headers(&self) -> Vec<String> {
            self.headers.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ConceptPicker for MockPicker {
        async fn pick(
            &self,
            vocabulary: &Vocabulary,
            header: &str,
        ) -> Result<Concept, PickerError> {
            self.headers.lock().unwrap().push(header.to_string());
            let name = self
                .picks
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(PickerError::Cancelled))?;
            let concept = Concept::new(name).unwrap();
            assert!(vocabulary.contains(&concept), "picked unknown {}", concept);
            Ok(concept)
        }
    }

    /// Returns scripted results and records every request pair.
    struct MockGateway {
        results: Mutex<VecDeque<Result<String, GatewayError>>>,
        requests: Mutex<Vec<(String, String)>>,
    }

    impl MockGateway {
        fn new(results: Vec<Result<&str, GatewayError>>) -> Self {
            Self {
                results: Mutex::new(results.into_iter().map(|r| r.map(String::from)).collect()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<(String, String)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CombinationGateway for MockGateway {
        async fn combine(&self, first: &Concept, second: &Concept) -> Result<String, GatewayError> {
            self.requests
                .lock()
                .unwrap()
                .push((first.to_string(), second.to_string()));
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Transport("no more results".to_string())))
        }
    }

    /// Gateway that never answers, for cancellation tests.
    struct PendingGateway;

    #[async_trait]
    impl CombinationGateway for PendingGateway {
        async fn combine(&self, _: &Concept, _: &Concept) -> Result<String, GatewayError> {
            std::future::pending().await
        }
    }

    /// Records observer callbacks as strings.
    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<String>>,
    }

    impl RoundObserver for RecordingObserver {
        fn on_round_start(&self, round: usize) {
            self.events.lock().unwrap().push(format!("start {}", round));
        }

        fn on_combine_start(&self, first: &Concept, second: &Concept) {
            self.events
                .lock()
                .unwrap()
                .push(format!("combine {} + {}", first, second));
        }

        fn on_combine_end(&self, success: bool) {
            self.events.lock().unwrap().push(format!("end {}", success));
        }

        fn on_discovery(&self, round: usize, discovery: &Discovery) {
            self.events
                .lock()
                .unwrap()
                .push(format!("discovery {} {}", round, discovery.status()));
        }

        fn on_round_skipped(&self, round: usize, _error: &GatewayError) {
            self.events.lock().unwrap().push(format!("skipped {}", round));
        }
    }

    fn names(vocabulary: &Vocabulary) -> Vec<&str> {
        vocabulary.iter().map(Concept::as_str).collect()
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_new_concept_is_appended() {
        let picker = Arc::new(MockPicker::new(vec![Ok("fire"), Ok("water")]));
        let gateway = Arc::new(MockGateway::new(vec![Ok("steam")]));
        let use_case = PlayGameUseCase::new(picker.clone(), gateway.clone());
        let mut state = GameState::new();

        let outcome = use_case.play_round(&mut state).await.unwrap();

        assert_eq!(
            names(&state.vocabulary),
            vec!["water", "earth", "air", "fire", "steam"]
        );
        assert_eq!(state.status.as_str(), "You got: steam !!");
        assert_eq!(state.rounds_played, 1);
        assert!(matches!(
            outcome,
            RoundOutcome::Discovered { ref discovery, .. } if discovery.is_new()
        ));
        assert_eq!(
            gateway.requests(),
            vec![("fire".to_string(), "water".to_string())]
        );
    }

    #[tokio::test]
    async fn test_repeat_discovery_leaves_vocabulary_unchanged() {
        let picker = Arc::new(MockPicker::new(vec![
            Ok("fire"),
            Ok("water"),
            Ok("fire"),
            Ok("water"),
        ]));
        let gateway = Arc::new(MockGateway::new(vec![Ok("steam"), Ok("steam")]));
        let use_case = PlayGameUseCase::new(picker.clone(), gateway);
        let mut state = GameState::new();

        use_case.play_round(&mut state).await.unwrap();
        let len_after_first = state.vocabulary.len();
        use_case.play_round(&mut state).await.unwrap();

        assert_eq!(state.vocabulary.len(), len_after_first);
        assert_eq!(state.status.as_str(), "You already have: steam");
        assert_eq!(state.discovered, vec![Concept::new("steam").unwrap()]);
    }

    #[tokio::test]
    async fn test_headers_flow_between_picks_and_rounds() {
        let picker = Arc::new(MockPicker::new(vec![
            Ok("fire"),
            Ok("water"),
            Ok("earth"),
            Ok("water"),
        ]));
        let gateway = Arc::new(MockGateway::new(vec![Ok("steam"), Ok("mud")]));
        let use_case = PlayGameUseCase::new(picker.clone(), gateway);
        let mut state = GameState::new();

        use_case.play_round(&mut state).await.unwrap();
        use_case.play_round(&mut state).await.unwrap();

        assert_eq!(
            picker.headers(),
            vec!["", "fire", "You got: steam !!", "earth"]
        );
    }

    #[tokio::test]
    async fn test_seed_result_is_known() {
        let picker = Arc::new(MockPicker::new(vec![Ok("air"), Ok("air")]));
        let gateway = Arc::new(MockGateway::new(vec![Ok("air")]));
        let use_case = PlayGameUseCase::new(picker, gateway);
        let mut state = GameState::new();

        use_case.play_round(&mut state).await.unwrap();

        assert_eq!(state.vocabulary, Vocabulary::seeded());
        assert_eq!(state.status.as_str(), "You already have: air");
    }

    #[tokio::test]
    async fn test_run_until_player_cancels() {
        let picker = Arc::new(MockPicker::new(vec![
            Ok("fire"),
            Ok("water"),
            Ok("earth"),
            Ok("water"),
            Err(PickerError::Cancelled),
        ]));
        let gateway = Arc::new(MockGateway::new(vec![Ok("steam"), Ok("mud")]));
        let use_case = PlayGameUseCase::new(picker, gateway);
        let mut state = GameState::new();

        let summary = use_case.run(&mut state).await.unwrap();

        assert_eq!(summary.end, GameEnd::Cancelled);
        assert_eq!(summary.rounds_played, 2);
        assert_eq!(summary.vocabulary_size, 6);
        assert_eq!(
            summary.discovered,
            vec![Concept::new("steam").unwrap(), Concept::new("mud").unwrap()]
        );
    }

    #[tokio::test]
    async fn test_cancel_on_second_pick_does_not_combine() {
        let picker = Arc::new(MockPicker::new(vec![Ok("fire"), Err(PickerError::Cancelled)]));
        let gateway = Arc::new(MockGateway::new(vec![Ok("steam")]));
        let use_case = PlayGameUseCase::new(picker, gateway.clone());
        let mut state = GameState::new();

        let summary = use_case.run(&mut state).await.unwrap();

        assert_eq!(summary.end, GameEnd::Cancelled);
        assert_eq!(summary.rounds_played, 0);
        assert!(gateway.requests().is_empty());
    }

    #[tokio::test]
    async fn test_picker_failure_is_fatal() {
        let picker = Arc::new(MockPicker::new(vec![Err(PickerError::Terminal(
            "not a tty".to_string(),
        ))]));
        let gateway = Arc::new(MockGateway::new(vec![]));
        let use_case = PlayGameUseCase::new(picker, gateway)
            .with_params(GameParams::default().with_error_policy(ErrorPolicy::SkipRound));
        let mut state = GameState::new();

        let err = use_case.run(&mut state).await.unwrap_err();
        assert!(matches!(err, PlayGameError::Picker(PickerError::Terminal(_))));
        assert!(!err.is_cancelled());
    }

    #[tokio::test]
    async fn test_gateway_failure_is_fatal_by_default() {
        let picker = Arc::new(MockPicker::new(vec![Ok("fire"), Ok("water")]));
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::Extraction(
            ExtractionError::NoCandidates,
        ))]));
        let use_case = PlayGameUseCase::new(picker, gateway);
        let mut state = GameState::new();

        let err = use_case.run(&mut state).await.unwrap_err();

        assert!(matches!(
            err,
            PlayGameError::Gateway(GatewayError::Extraction(ExtractionError::NoCandidates))
        ));
        assert_eq!(state.vocabulary, Vocabulary::seeded());
        assert_eq!(state.rounds_played, 0);
    }

    #[tokio::test]
    async fn test_skip_round_policy_keeps_playing() {
        let picker = Arc::new(MockPicker::new(vec![
            Ok("fire"),
            Ok("water"),
            Ok("fire"),
            Ok("water"),
        ]));
        let gateway = Arc::new(MockGateway::new(vec![
            Err(GatewayError::Transport("connection reset".to_string())),
            Ok("steam"),
        ]));
        let use_case = PlayGameUseCase::new(picker.clone(), gateway).with_params(
            GameParams::default()
                .with_error_policy(ErrorPolicy::SkipRound)
                .with_max_rounds(2),
        );
        let mut state = GameState::new();

        let summary = use_case.run(&mut state).await.unwrap();

        assert_eq!(summary.end, GameEnd::RoundLimit);
        assert_eq!(summary.rounds_played, 2);
        assert_eq!(summary.discovered, vec![Concept::new("steam").unwrap()]);
        assert_eq!(
            picker.headers()[2],
            "Combination failed: Request failed: connection reset"
        );
    }

    #[tokio::test]
    async fn test_empty_generated_text_is_extraction_error() {
        let picker = Arc::new(MockPicker::new(vec![Ok("fire"), Ok("water")]));
        let gateway = Arc::new(MockGateway::new(vec![Ok("   ")]));
        let use_case = PlayGameUseCase::new(picker, gateway);
        let mut state = GameState::new();

        let err = use_case.play_round(&mut state).await.unwrap_err();
        assert!(matches!(
            err,
            PlayGameError::Gateway(GatewayError::Extraction(ExtractionError::EmptyText))
        ));
    }

    #[tokio::test]
    async fn test_round_limit_bounds_loop() {
        let picker = Arc::new(MockPicker::new(vec![
            Ok("fire"),
            Ok("water"),
            Ok("earth"),
            Ok("fire"),
            Ok("air"),
            Ok("air"),
        ]));
        let gateway = Arc::new(MockGateway::new(vec![Ok("steam"), Ok("lava"), Ok("wind")]));
        let use_case = PlayGameUseCase::new(picker, gateway.clone())
            .with_params(GameParams::default().with_max_rounds(2));
        let mut state = GameState::new();

        let summary = use_case.run(&mut state).await.unwrap();

        assert_eq!(summary.end, GameEnd::RoundLimit);
        assert_eq!(gateway.requests().len(), 2);
        assert_eq!(state.vocabulary.len(), 6);
    }

    #[tokio::test]
    async fn test_cancelled_token_stops_before_picking() {
        let picker = Arc::new(MockPicker::new(vec![Ok("fire"), Ok("water")]));
        let gateway = Arc::new(MockGateway::new(vec![Ok("steam")]));
        let token = CancellationToken::new();
        token.cancel();
        let use_case = PlayGameUseCase::new(picker.clone(), gateway).with_cancellation(token);
        let mut state = GameState::new();

        let summary = use_case.run(&mut state).await.unwrap();

        assert_eq!(summary.end, GameEnd::Stopped);
        assert!(picker.headers().is_empty());
    }

    #[tokio::test]
    async fn test_cancellation_interrupts_pending_combination() {
        let picker = Arc::new(MockPicker::new(vec![Ok("fire"), Ok("water")]));
        let token = CancellationToken::new();
        let use_case = PlayGameUseCase::new(picker, Arc::new(PendingGateway))
            .with_cancellation(token.clone());
        let mut state = GameState::new();

        let canceller = tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            token.cancel();
        });

        let summary = use_case.run(&mut state).await.unwrap();
        canceller.await.unwrap();

        assert_eq!(summary.end, GameEnd::Stopped);
        assert_eq!(state.rounds_played, 0);
        assert_eq!(state.vocabulary, Vocabulary::seeded());
    }

    #[tokio::test]
    async fn test_observer_sees_round_lifecycle() {
        let picker = Arc::new(MockPicker::new(vec![Ok("fire"), Ok("water")]));
        let gateway = Arc::new(MockGateway::new(vec![Ok("steam")]));
        let observer = Arc::new(RecordingObserver::default());
        let use_case = PlayGameUseCase::new(picker, gateway).with_observer(observer.clone());
        let mut state = GameState::new();

        use_case.play_round(&mut state).await.unwrap();

        assert_eq!(
            *observer.events.lock().unwrap(),
            vec![
                "start 1",
                "combine fire + water",
                "end true",
                "discovery 1 You got: steam !!",
            ]
        );
    }

    #[test]
    fn test_play_game_error_is_cancelled() {
        assert!(PlayGameError::Cancelled.is_cancelled());
        assert!(PlayGameError::Picker(PickerError::Cancelled).is_cancelled());
        assert!(!PlayGameError::Gateway(GatewayError::Timeout).is_cancelled());
    }
}
