use crate::application::dto::ImageFormat;
use crate::i18n::{MessageKey, Translator};
use crate::ports::outbound::{DiagramRenderer, Notification, Notifier};
use crate::shared::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Observable state of the latest render request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenderState {
    #[default]
    Idle,
    Loading {
        ticket: u64,
    },
    Ready {
        ticket: u64,
        format: ImageFormat,
        image: Vec<u8>,
    },
    /// Rendering failed; the diagram text is still usable
    Fallback {
        ticket: u64,
        source: String,
        reason: String,
    },
}

impl RenderState {
    pub fn ticket(&self) -> Option<u64> {
        match self {
            RenderState::Idle => None,
            RenderState::Loading { ticket }
            | RenderState::Ready { ticket, .. }
            | RenderState::Fallback { ticket, .. } => Some(*ticket),
        }
    }
}

/// RenderDiagramUseCase - Turns diagram text into an image, best effort
///
/// Each request takes a ticket from a monotonically increasing counter. A
/// completion is applied only while its ticket is still the latest, so a
/// slow response can never overwrite the state of a newer request. Failures
/// never propagate: they resolve to [`RenderState::Fallback`] carrying the
/// source text.
///
/// # Type Parameters
/// * `R` - DiagramRenderer implementation
/// * `N` - Notifier implementation
pub struct RenderDiagramUseCase<R: DiagramRenderer, N: Notifier> {
    renderer: R,
    notifier: N,
    translator: Translator,
    latest_ticket: AtomicU64,
    state: Mutex<RenderState>,
}

impl<R: DiagramRenderer, N: Notifier> RenderDiagramUseCase<R, N> {
    pub fn new(renderer: R, notifier: N, translator: Translator) -> Self {
        Self {
            renderer,
            notifier,
            translator,
            latest_ticket: AtomicU64::new(0),
            state: Mutex::new(RenderState::Idle),
        }
    }

    /// Service URL for the diagram, without fetching it
    pub fn url(&self, source: &str, format: ImageFormat) -> Result<String> {
        self.renderer.url_for(source, format)
    }

    /// Snapshot of the current state
    pub fn state(&self) -> RenderState {
        self.lock_state().clone()
    }

    /// Renders `source`, returning the state this request resolved to
    ///
    /// The returned state is this request's own outcome even when a newer
    /// request superseded it; [`Self::state`] only ever reflects the latest.
    pub async fn render(&self, source: &str, format: ImageFormat) -> RenderState {
        let ticket = self.begin();
        self.notifier
            .start_waiting(self.translator.t(MessageKey::RenderingDiagram));

        let outcome = match self.renderer.render(source, format).await {
            Ok(image) => RenderState::Ready {
                ticket,
                format,
                image,
            },
            Err(e) => {
                log::warn!("Diagram rendering failed: {:#}", e);
                RenderState::Fallback {
                    ticket,
                    source: source.to_string(),
                    reason: format!("{:#}", e),
                }
            }
        };

        if self.complete(outcome.clone()) {
            self.notifier.stop_waiting();
            if let RenderState::Fallback { .. } = outcome {
                self.notifier.notify(&Notification::error(
                    self.translator.t(MessageKey::RenderErrorTitle),
                    self.translator.t(MessageKey::RenderErrorDescription),
                ));
            }
        }
        outcome
    }

    fn begin(&self) -> u64 {
        let mut state = self.lock_state();
        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        *state = RenderState::Loading { ticket };
        ticket
    }

    /// Applies `outcome` if its ticket is still the latest
    fn complete(&self, outcome: RenderState) -> bool {
        let mut state = self.lock_state();
        let latest = self.latest_ticket.load(Ordering::SeqCst);
        if outcome.ticket() == Some(latest) {
            *state = outcome;
            true
        } else {
            log::debug!(
                "Discarding stale render result {:?} (latest is {})",
                outcome.ticket(),
                latest
            );
            false
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, RenderState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::time::Duration;

    struct DelayedRenderer;

    #[async_trait]
    impl DiagramRenderer for DelayedRenderer {
        fn url_for(&self, source: &str, format: ImageFormat) -> Result<String> {
            Ok(format!("http://render/{}/{}", format, source.len()))
        }

        async fn render(&self, source: &str, _format: ImageFormat) -> Result<Vec<u8>> {
            if source.starts_with("fail") {
                anyhow::bail!("service unavailable");
            }
            let delay = if source.starts_with("slow") { 50 } else { 1 };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(source.as_bytes().to_vec())
        }
    }

    #[derive(Default)]
    struct CountingNotifier {
        notes: RefCell<Vec<Notification>>,
        waits: RefCell<u32>,
        spinning: RefCell<bool>,
    }

    impl Notifier for CountingNotifier {
        fn notify(&self, notification: &Notification) {
            self.notes.borrow_mut().push(notification.clone());
        }
        fn start_waiting(&self, _message: &str) {
            *self.waits.borrow_mut() += 1;
            *self.spinning.borrow_mut() = true;
        }
        fn stop_waiting(&self) {
            *self.spinning.borrow_mut() = false;
        }
    }

    fn use_case() -> RenderDiagramUseCase<DelayedRenderer, CountingNotifier> {
        RenderDiagramUseCase::new(
            DelayedRenderer,
            CountingNotifier::default(),
            Translator::new(Locale::En),
        )
    }

    #[tokio::test]
    async fn test_successful_render_is_ready() {
        let uc = use_case();
        assert_eq!(uc.state(), RenderState::Idle);

        let state = uc.render("@startuml", ImageFormat::Png).await;
        assert!(matches!(state, RenderState::Ready { ticket: 1, .. }));
        assert_eq!(uc.state(), state);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_source() {
        let uc = use_case();
        let state = uc.render("fail @startuml", ImageFormat::Svg).await;
        match state {
            RenderState::Fallback { source, reason, .. } => {
                assert_eq!(source, "fail @startuml");
                assert!(reason.contains("service unavailable"));
            }
            other => panic!("unexpected state {:?}", other),
        }
        assert_eq!(uc.notifier.notes.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_stale_result_does_not_overwrite_newer_request() {
        let uc = use_case();
        let (slow, fast) = tokio::join!(
            uc.render("slow diagram", ImageFormat::Png),
            uc.render("fast diagram", ImageFormat::Png),
        );

        assert_eq!(slow.ticket(), Some(1));
        assert_eq!(fast.ticket(), Some(2));
        match uc.state() {
            RenderState::Ready { ticket, image, .. } => {
                assert_eq!(ticket, 2);
                assert_eq!(image, b"fast diagram".to_vec());
            }
            other => panic!("unexpected state {:?}", other),
        }
        assert_eq!(*uc.notifier.waits.borrow(), 2);
    }

    #[tokio::test]
    async fn test_stale_completion_keeps_newer_spinner() {
        let uc = use_case();
        let (older, newer, spinning_midway) = tokio::join!(
            uc.render("fast diagram", ImageFormat::Png),
            uc.render("slow diagram", ImageFormat::Png),
            async {
                tokio::time::sleep(Duration::from_millis(20)).await;
                (uc.state(), *uc.notifier.spinning.borrow())
            },
        );

        assert_eq!(older.ticket(), Some(1));
        assert_eq!(newer.ticket(), Some(2));
        assert_eq!(spinning_midway, (RenderState::Loading { ticket: 2 }, true));
        assert!(!*uc.notifier.spinning.borrow());
        assert_eq!(uc.state(), newer);
    }

    #[test]
    fn test_url_delegates_to_renderer() {
        let uc = use_case();
        assert_eq!(uc.url("abc", ImageFormat::Txt).unwrap(), "http://render/txt/3");
    }
}
