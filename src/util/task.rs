use std::collections::HashMap;

use tokio::task::JoinHandle;

/// Keeps at most one live task per key. Spawning under an occupied key aborts
/// the previous task, so a new fetch cancels the in-flight one it replaces.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<&'static str, JoinHandle<()>>,
}

impl TaskManager {
    pub fn spawn(&mut self, key: &'static str, task: JoinHandle<()>) {
        if let Some(handle) = self.tasks.insert(key, task) {
            handle.abort();
        }
    }

    pub fn abort_all(&mut self) {
        for handle in self.tasks.values() {
            handle.abort();
        }
        self.tasks.clear();
    }
}
