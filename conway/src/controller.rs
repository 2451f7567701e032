// controller.rs - Play/pause state machine, input dispatch and the generation ticker

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace};

use crate::config::{SimulationConfig, TICK_INTERVAL};
use crate::error::{LifeError, Result};
use crate::grid::Grid;
use crate::patterns::PATTERNS;
use crate::store::GridStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayState {
    #[default]
    Stopped,
    Running,
}

/// Named input events, decoupled from widgets and pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    CellClicked { x: usize, y: usize },
    Start,
    Stop,
    Randomize,
    Clear,
    ApplyPattern(usize),
    Save,
    Load,
}

/// What an action does in a given play state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    Ignore,
    Transition(PlayState),
    Toggle { x: usize, y: usize },
    Randomize,
    Clear,
    ApplyPattern(usize),
    Save,
    Load,
}

impl PlayState {
    pub fn is_running(self) -> bool {
        self == PlayState::Running
    }

    /// The dispatch table. Edits are only honored while stopped; while running
    /// only `Stop` and the storage actions get through.
    pub fn effect(self, action: Action) -> Effect {
        use PlayState::*;
        match (self, action) {
            (Stopped, Action::CellClicked { x, y })          => Effect::Toggle { x, y },
            (Stopped, Action::Start)                         => Effect::Transition(Running),
            (Stopped, Action::Randomize)                     => Effect::Randomize,
            (Stopped, Action::Clear)                         => Effect::Clear,
            (Stopped, Action::ApplyPattern(i)) if i < PATTERNS.len() => Effect::ApplyPattern(i),
            (Running, Action::Stop)                          => Effect::Transition(Stopped),
            (_, Action::Save)                                => Effect::Save,
            (_, Action::Load)                                => Effect::Load,
            _                                                => Effect::Ignore,
        }
    }
}

/// Read-only view handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub grid: Grid,
    pub state: PlayState,
    /// Generations advanced since the grid was last replaced wholesale.
    pub generation: u64,
}

impl Snapshot {
    pub fn is_playing(&self) -> bool {
        self.state.is_running()
    }

    pub fn live_cells(&self) -> usize {
        self.grid.live_cells()
    }
}

/// Render collaborator, called after every observable state change.
///
/// Called with the controller's lock held, so calls arrive in mutation order.
/// Implementations must not call back into the controller.
pub trait Renderer: Send + Sync + 'static {
    fn render(&self, snapshot: &Snapshot);
}

impl<R: Renderer + ?Sized> Renderer for Arc<R> {
    fn render(&self, snapshot: &Snapshot) {
        (**self).render(snapshot)
    }
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new generation was published.
    Advanced,
    /// Stopped; nothing to do.
    Idle,
    /// Another mutation held the grid; this tick is discarded, not queued.
    Dropped,
}

struct State {
    grid: Grid,
    play: PlayState,
    generation: u64,
}

impl State {
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid,
            state: self.play,
            generation: self.generation,
        }
    }

    fn replace(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = 0;
    }
}

struct Shared<R> {
    state: Mutex<State>,
    renderer: R,
    store: GridStore,
}

/// Owns the grid and play state; cloning yields another handle to the same simulation.
pub struct SimulationController<R: Renderer> {
    shared: Arc<Shared<R>>,
}

impl<R: Renderer> Clone for SimulationController<R> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<R: Renderer> SimulationController<R> {
    pub fn new(renderer: R, config: SimulationConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    grid: Grid::new(),
                    play: PlayState::Stopped,
                    generation: 0,
                }),
                renderer,
                store: GridStore::new(config.save_path),
            }),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.shared.renderer
    }

    pub fn store(&self) -> &GridStore {
        &self.shared.store
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.shared.state.lock()
    }

    fn render(&self, state: &State) {
        self.shared.renderer.render(&state.snapshot());
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    pub fn play_state(&self) -> PlayState {
        self.lock().play
    }

    pub fn is_playing(&self) -> bool {
        self.play_state().is_running()
    }

    /// Render the current state without changing it.
    pub fn refresh(&self) {
        let state = self.lock();
        self.render(&state);
    }

    /// Dispatch any action. Only `Save` and `Load` can fail; on failure the
    /// grid and play state are left as they were.
    pub fn handle(&self, action: Action) -> Result<Effect> {
        if let Action::CellClicked { x, y } = action {
            if !Grid::contains(x, y) {
                panic!("{}", LifeError::OutOfRange { x, y });
            }
        }
        let mut state = self.lock();
        let effect = state.play.effect(action);
        match effect {
            Effect::Save => self.shared.store.save(&state.grid)?,
            Effect::Load => {
                let grid = self.shared.store.load()?;
                state.replace(grid);
                debug!(live = grid.live_cells(), "grid replaced from storage");
                self.render(&state);
            }
            _ => self.apply(&mut state, effect),
        }
        Ok(effect)
    }

    fn edit(&self, action: Action) -> Effect {
        match self.handle(action) {
            Ok(effect) => effect,
            Err(err) => unreachable!("{action:?} does not touch storage: {err}"),
        }
    }

    fn apply(&self, state: &mut State, effect: Effect) {
        match effect {
            Effect::Ignore => {
                trace!(state = ?state.play, "input ignored");
                return;
            }
            Effect::Transition(next) => {
                debug!(from = ?state.play, to = ?next, "play state changed");
                state.play = next;
            }
            Effect::Toggle { x, y } => state.grid.toggle(x, y),
            Effect::Randomize => {
                let mut grid = Grid::new();
                grid.randomize();
                state.replace(grid);
                debug!(live = grid.live_cells(), "grid randomized");
            }
            Effect::Clear => {
                state.replace(Grid::new());
                debug!("grid cleared");
            }
            Effect::ApplyPattern(index) => {
                let pattern = &PATTERNS[index];
                state.replace(pattern.to_grid());
                debug!(pattern = pattern.name, "pattern applied");
            }
            Effect::Save | Effect::Load => unreachable!("storage effects are handled by the caller"),
        }
        self.render(state);
    }

    pub fn cell_clicked(&self, x: usize, y: usize) -> Effect {
        self.edit(Action::CellClicked { x, y })
    }

    pub fn start_requested(&self) -> Effect {
        self.edit(Action::Start)
    }

    pub fn stop_requested(&self) -> Effect {
        self.edit(Action::Stop)
    }

    pub fn randomize_requested(&self) -> Effect {
        self.edit(Action::Randomize)
    }

    pub fn clear_requested(&self) -> Effect {
        self.edit(Action::Clear)
    }

    pub fn pattern_requested(&self, index: usize) -> Effect {
        self.edit(Action::ApplyPattern(index))
    }

    pub fn save_requested(&self) -> Result<()> {
        self.handle(Action::Save).map(|_| ())
    }

    pub fn load_requested(&self) -> Result<()> {
        self.handle(Action::Load).map(|_| ())
    }

    /// Advance one generation if running. Never waits for the lock.
    pub fn tick(&self) -> TickOutcome {
        let Some(mut state) = self.shared.state.try_lock() else {
            debug!("tick dropped, grid busy");
            return TickOutcome::Dropped;
        };
        if !state.play.is_running() {
            return TickOutcome::Idle;
        }
        let next = state.grid.next_generation();
        state.grid = next;
        state.generation += 1;
        trace!(generation = state.generation, live = next.live_cells(), "generation advanced");
        self.render(&state);
        TickOutcome::Advanced
    }

    /// Tick every `TICK_INTERVAL` forever. Late ticks are skipped, not bunched.
    pub async fn run_ticker(self) {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            self.tick();
        }
    }

    /// Spawn `run_ticker` on the current tokio runtime.
    pub fn spawn_ticker(&self) -> Ticker {
        let controller = self.clone();
        Ticker {
            handle: tokio::spawn(controller.run_ticker()),
        }
    }
}

/// Handle to the background ticker; the task is aborted when this is dropped.
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
