use std::io::Write;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL: Duration = Duration::from_millis(150);

/// Single-line progress indicator on stderr for long CLI waits.
pub struct Spinner {
    message: String,
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl Spinner {
    pub fn start(message: impl Into<String>) -> Self {
        let message = message.into();
        let (stop_tx, mut stop_rx) = oneshot::channel();
        let label = message.clone();

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(FRAME_INTERVAL);
            for frame in FRAMES.iter().cycle() {
                tokio::select! {
                    _ = interval.tick() => {
                        let mut stderr = std::io::stderr();
                        let _ = write!(stderr, "\r{} {} ", label, frame);
                        let _ = stderr.flush();
                    }
                    _ = &mut stop_rx => break,
                }
            }
        });

        Self {
            message,
            stop: Some(stop_tx),
            task: Some(task),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub async fn succeed(mut self, final_message: &str) {
        self.halt().await;
        Self::print_line(&format!("✅ {}", final_message));
    }

    pub async fn fail(mut self, error_message: &str) {
        self.halt().await;
        Self::print_line(&format!("❌ {}", error_message));
    }

    async fn halt(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    fn print_line(line: &str) {
        let mut stderr = std::io::stderr();
        let _ = writeln!(stderr, "\r\x1b[K{}", line);
        let _ = stderr.flush();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
