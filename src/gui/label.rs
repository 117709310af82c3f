/// Transient selection label
///
/// Shows a text at full visibility, holds it, then fades it out in fixed
/// steps and clears it. At most one label task runs; starting a new one
/// aborts the previous.

use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, warn};

use super::presenter::PresentationDriver;
use crate::config::LabelConfig;

/// Visibility below which the label counts as gone
const FADE_CUTOFF: f32 = 0.01;

/// Alpha values of a fade, starting from full visibility
///
/// Each item is the alpha after one step. Stops once alpha drops to the cutoff.
#[derive(Debug, Clone)]
pub struct FadeSteps {
    alpha: f32,
    step: f32,
}

impl FadeSteps {
    pub fn new(step: f32) -> Self {
        Self { alpha: 1.0, step }
    }
}

impl Iterator for FadeSteps {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.alpha <= FADE_CUTOFF {
            return None;
        }
        self.alpha = (self.alpha - self.step).max(0.0);
        Some(self.alpha)
    }
}

/// Single-slot, cancelable label display
///
/// The fade runs on the tokio runtime current at construction (or at
/// `start`, when built outside one). Without any runtime the label is shown
/// and stays up until replaced.
pub struct LabelTask {
    presenter: Arc<dyn PresentationDriver>,
    config: LabelConfig,
    runtime: Option<Handle>,
    handle: Option<JoinHandle<()>>,
}

impl LabelTask {
    pub fn new(presenter: Arc<dyn PresentationDriver>, config: LabelConfig) -> Self {
        Self {
            presenter,
            config,
            runtime: Handle::try_current().ok(),
            handle: None,
        }
    }

    /// Show `text` now and schedule its fade, replacing any running label
    pub fn start(&mut self, text: &str) {
        self.cancel();

        self.presenter.set_label_text(text);
        self.presenter.set_label_alpha(1.0);

        let Some(runtime) = self
            .runtime
            .clone()
            .or_else(|| Handle::try_current().ok())
        else {
            warn!("No tokio runtime, label \"{}\" will not fade", text);
            return;
        };

        let presenter = Arc::clone(&self.presenter);
        let hold = self.config.hold();
        let interval = self.config.step_interval();
        let step = self.config.fade_step();

        self.handle = Some(runtime.spawn(async move {
            sleep(hold).await;

            for alpha in FadeSteps::new(step) {
                presenter.set_label_alpha(alpha);
                sleep(interval).await;
            }

            presenter.set_label_text("");
        }));
        debug!("Label started: {}", text);
    }

    /// Stop the running label, leaving whatever it last displayed
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Whether a label is still showing or fading
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().map(|h| !h.is_finished()).unwrap_or(false)
    }
}

impl Drop for LabelTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::testing::RecordingPresenter;
    use std::time::Duration;

    fn config() -> LabelConfig {
        LabelConfig {
            hold_ms: 2000,
            fade_step: 0.1,
            step_interval_ms: 100,
        }
    }

    #[test]
    fn test_fade_steps_reach_zero() {
        let steps: Vec<f32> = FadeSteps::new(0.1).collect();
        assert_eq!(steps.len(), 10);
        assert!((steps[0] - 0.9).abs() < 1e-6);
        assert!(*steps.last().unwrap() <= FADE_CUTOFF);
    }

    #[test]
    fn test_fade_steps_full_step() {
        let steps: Vec<f32> = FadeSteps::new(1.0).collect();
        assert_eq!(steps, vec![0.0]);
    }

    #[test]
    fn test_label_without_runtime_shows_and_stays() {
        let presenter = Arc::new(RecordingPresenter::default());
        let mut label = LabelTask::new(presenter.clone(), config());

        label.start("Sword");
        assert_eq!(presenter.label(), ("Sword".to_string(), 1.0));
        assert!(!label.is_running());

        label.start("Shield");
        assert_eq!(presenter.label(), ("Shield".to_string(), 1.0));
    }

    #[test]
    fn test_label_built_in_runtime_fades_from_outside() {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .unwrap();
        let presenter = Arc::new(RecordingPresenter::default());
        let mut label = rt.block_on(async {
            LabelTask::new(
                presenter.clone(),
                LabelConfig {
                    hold_ms: 0,
                    fade_step: 1.0,
                    step_interval_ms: 1,
                },
            )
        });

        // called from a plain thread, spawned on the captured runtime
        label.start("Bow");
        rt.block_on(async {
            while label.is_running() {
                sleep(Duration::from_millis(5)).await;
            }
        });
        assert_eq!(presenter.label(), ("".to_string(), 0.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_label_shows_holds_then_clears() {
        let presenter = Arc::new(RecordingPresenter::default());
        let mut label = LabelTask::new(presenter.clone(), config());

        label.start("Sword");
        assert_eq!(presenter.label(), ("Sword".to_string(), 1.0));
        assert!(label.is_running());

        sleep(Duration::from_millis(1900)).await;
        assert_eq!(presenter.label(), ("Sword".to_string(), 1.0));

        sleep(Duration::from_millis(350)).await;
        let (text, alpha) = presenter.label();
        assert_eq!(text, "Sword");
        assert!(alpha < 1.0 && alpha > 0.0);

        sleep(Duration::from_millis(1500)).await;
        assert_eq!(presenter.label().0, "");
        assert!(!label.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_label_replaces_running_fade() {
        let presenter = Arc::new(RecordingPresenter::default());
        let mut label = LabelTask::new(presenter.clone(), config());

        label.start("Sword");
        sleep(Duration::from_millis(2500)).await;
        assert!(presenter.label().1 < 1.0);

        label.start("Shield");
        assert_eq!(presenter.label(), ("Shield".to_string(), 1.0));

        // the first fade would have cleared the text by now
        sleep(Duration::from_millis(1000)).await;
        assert_eq!(presenter.label(), ("Shield".to_string(), 1.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_freezes_label() {
        let presenter = Arc::new(RecordingPresenter::default());
        let mut label = LabelTask::new(presenter.clone(), config());

        label.start("Bow");
        label.cancel();
        sleep(Duration::from_secs(10)).await;
        assert_eq!(presenter.label(), ("Bow".to_string(), 1.0));
    }
}
