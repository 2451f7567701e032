#![allow(dead_code)]

use std::path::PathBuf;

use conway::{Renderer, Snapshot};
use parking_lot::Mutex;
use uuid::Uuid;

/// Keeps every snapshot it is asked to render.
#[derive(Default)]
pub struct Recorder {
    frames: Mutex<Vec<Snapshot>>,
}

impl Recorder {
    pub fn count(&self) -> usize {
        self.frames.lock().len()
    }

    pub fn last(&self) -> Option<Snapshot> {
        self.frames.lock().last().copied()
    }

    pub fn frames(&self) -> Vec<Snapshot> {
        self.frames.lock().clone()
    }
}

impl Renderer for Recorder {
    fn render(&self, snapshot: &Snapshot) {
        self.frames.lock().push(*snapshot);
    }
}

/// A fresh path under the system temp directory; nothing is created.
pub fn scratch_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("conway-{tag}-{}.dat", Uuid::new_v4()))
}
