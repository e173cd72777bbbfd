use std::sync::mpsc::Sender;

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, hall_of_fame_size: usize);
    fn on_lineup_bred(&mut self, lineup_num: usize, total: usize);
}

/// Ignores every event.
pub struct SilentProgress;

impl ProgressCallback for SilentProgress {
    fn on_generation_start(&mut self, _generation: usize) {}
    fn on_generation_complete(&mut self, _generation: usize, _best_fitness: f64, _hof_size: usize) {}
    fn on_lineup_bred(&mut self, _lineup_num: usize, _total: usize) {}
}

/// Logs a summary every `every` generations (0 = never).
pub struct ConsoleProgressCallback {
    every: usize,
}

impl ConsoleProgressCallback {
    pub fn new(every: usize) -> Self {
        Self { every }
    }
}

impl Default for ConsoleProgressCallback {
    fn default() -> Self {
        Self::new(50)
    }
}

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::trace!("Generation {} starting", generation + 1);
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, hof_size: usize) {
        if self.every > 0 && (generation + 1) % self.every == 0 {
            log::info!(
                "Generation {} complete. Best fitness: {:.2}, Hall of Fame size: {}",
                generation + 1,
                best_fitness,
                hof_size
            );
        }
    }

    fn on_lineup_bred(&mut self, _lineup_num: usize, _total: usize) {}
}

pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete { generation: usize, best_fitness: f64, hof_size: usize },
    LineupBred { current: usize, total: usize },
}

/// Forwards events to another thread. A dropped receiver is ignored.
pub struct ChannelProgressCallback {
    sender: Sender<ProgressMessage>,
}

impl ChannelProgressCallback {
    pub fn new(sender: Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, hof_size: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            best_fitness,
            hof_size,
        });
    }

    fn on_lineup_bred(&mut self, lineup_num: usize, total: usize) {
        let _ = self.sender.send(ProgressMessage::LineupBred {
            current: lineup_num,
            total,
        });
    }
}
