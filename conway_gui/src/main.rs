// main.rs - Conway's Game of Life window with a background tick loop
// Drawing and input live in ui.rs; the simulation itself is the conway crate

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use conway::{Renderer, SimulationConfig, SimulationController, Snapshot, Ticker};
use eframe::egui;
use egui::Color32;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

mod ui;

#[derive(Parser, Debug)]
#[command(name = "conway", version, about = "Conway's Game of Life on a 40x40 grid")]
struct Args {
    /// Where Save writes and Load reads the grid
    #[arg(long, default_value = conway::DEFAULT_SAVE_FILE)]
    state_file: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "conway=info,conway_gui=info")]
    log: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let runtime = tokio::runtime::Runtime::new()?;
    let config = SimulationConfig::default().with_save_path(&args.state_file);
    tracing::info!(state_file = %args.state_file.display(), "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 980.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Box::new(GameOfLife::new(cc, runtime, config))),
    )
    .map_err(|err| anyhow::anyhow!("window closed with error: {err}"))
}

/// Publishes every snapshot for the next frame and wakes the UI.
pub struct RepaintSink {
    latest: Arc<Mutex<Snapshot>>,
    ctx: egui::Context,
}

impl Renderer for RepaintSink {
    fn render(&self, snapshot: &Snapshot) {
        *self.latest.lock() = *snapshot;
        self.ctx.request_repaint();
    }
}

pub struct GameOfLife {
    controller: SimulationController<RepaintSink>,
    latest: Arc<Mutex<Snapshot>>,

    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    /// Outcome of the last save/load, shown under the controls
    pub status: Option<String>,

    // Declared before the runtime so the task is aborted first
    _ticker: Ticker,
    _runtime: tokio::runtime::Runtime,
}

impl GameOfLife {
    fn new(cc: &eframe::CreationContext<'_>, runtime: tokio::runtime::Runtime, config: SimulationConfig) -> Self {
        let latest = Arc::new(Mutex::new(Snapshot::default()));
        let sink = RepaintSink {
            latest: Arc::clone(&latest),
            ctx: cc.egui_ctx.clone(),
        };
        let controller = SimulationController::new(sink, config);
        controller.refresh();

        let ticker = {
            let _guard = runtime.enter();
            controller.spawn_ticker()
        };

        Self {
            controller,
            latest,
            live_color: Color32::WHITE,
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            status: None,
            _ticker: ticker,
            _runtime: runtime,
        }
    }

    fn snapshot(&self) -> Snapshot {
        *self.latest.lock()
    }

    fn save(&mut self) {
        self.status = Some(match self.controller.save_requested() {
            Ok(()) => format!("Saved to {}", self.controller.store().path().display()),
            Err(err) => format!("Save failed: {err}"),
        });
    }

    fn load(&mut self) {
        self.status = Some(match self.controller.load_requested() {
            Ok(()) => format!("Loaded {}", self.controller.store().path().display()),
            Err(err) => format!("Load failed: {err}"),
        });
    }
}
