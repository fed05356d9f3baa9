//! Memoized lazy view resolution.
//!
//! A lazy factory is invoked at most once per session; the resolution —
//! success or failure — is cached so repeated renders do not re-fetch the
//! plugin artifact. A bundle that fails to load therefore yields the same
//! scoped error on every render instead of a retry storm.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::debug;

use plughub_core::error::AppError;
use plughub_core::result::AppResult;

use crate::component::View;
use crate::descriptor::ViewFactory;

/// A view factory wrapped with at-most-once memoization.
pub struct LazyView {
    /// The underlying factory.
    factory: ViewFactory,
    /// Cached resolution outcome.
    cell: OnceCell<Result<Arc<dyn View>, AppError>>,
}

impl LazyView {
    /// Wraps a factory. The factory is not invoked here.
    pub fn new(factory: ViewFactory) -> Self {
        Self {
            factory,
            cell: OnceCell::new(),
        }
    }

    /// Resolves the view, invoking the factory on first call only.
    pub async fn resolve(&self) -> AppResult<Arc<dyn View>> {
        let outcome = self
            .cell
            .get_or_init(|| async {
                debug!("Resolving lazy view factory");
                (self.factory)().await
            })
            .await;

        outcome.clone()
    }

    /// Whether the factory has already been invoked.
    pub fn is_resolved(&self) -> bool {
        self.cell.initialized()
    }
}

impl std::fmt::Debug for LazyView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyView")
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ViewContext;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Fixed(&'static str);

    impl View for Fixed {
        fn render(&self, _ctx: &ViewContext) -> String {
            self.0.to_string()
        }
    }

    fn counting_factory(calls: Arc<AtomicUsize>) -> ViewFactory {
        Arc::new(move || {
            let calls = calls.clone();
            Box::pin(async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(Arc::new(Fixed("widget")) as Arc<dyn View>)
            })
        })
    }

    #[tokio::test]
    async fn test_factory_invoked_at_most_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let lazy = LazyView::new(counting_factory(calls.clone()));

        assert!(!lazy.is_resolved());

        let first = lazy.resolve().await.unwrap();
        let second = lazy.resolve().await.unwrap();

        assert_eq!(first.render(&ViewContext::default()), "widget");
        assert_eq!(second.render(&ViewContext::default()), "widget");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(lazy.is_resolved());
    }

    #[tokio::test]
    async fn test_failure_is_memoized() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_inner = calls.clone();
        let lazy = LazyView::new(Arc::new(move || {
            let calls = calls_inner.clone();
            Box::pin(async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(AppError::internal("bundle failed to load"))
            })
        }));

        assert!(lazy.resolve().await.is_err());
        assert!(lazy.resolve().await.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
