use std::time::Duration;

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use wellnest::Timer;

/// Request deadlines backed by `window.setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

struct ClearOnDrop(TimeoutHandle);

impl Drop for ClearOnDrop {
    fn drop(&mut self) {
        self.0.clear();
    }
}

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let (tx, rx) = oneshot::channel::<()>();
        let handle = set_timeout_with_handle(
            move || {
                let _ = tx.send(());
            },
            duration,
        );
        Box::pin(async move {
            match handle {
                Ok(handle) => {
                    // a finished request drops this future before it fires
                    let _guard = ClearOnDrop(handle);
                    let _ = rx.await;
                }
                Err(err) => {
                    log::error!("Could not arm request deadline: {:?}", err);
                    futures::future::pending::<()>().await;
                }
            }
        })
    }
}

/// A single cancellable timeout. Scheduling again replaces the pending one,
/// and the pending one is cleared when the owning scope is cleaned up.
#[derive(Clone, Copy)]
pub struct ScheduledTask {
    handle: StoredValue<Option<TimeoutHandle>>,
}

impl ScheduledTask {
    pub fn new() -> Self {
        let task = Self {
            handle: store_value(None),
        };
        on_cleanup(move || task.cancel());
        task
    }

    pub fn schedule<F>(&self, delay: Duration, f: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        let handle = self.handle;
        let result = set_timeout_with_handle(
            move || {
                handle.try_set_value(None);
                f();
            },
            delay,
        );
        match result {
            Ok(timeout) => {
                self.handle.try_set_value(Some(timeout));
            }
            Err(err) => log::error!("Could not schedule timeout: {:?}", err),
        }
    }

    pub fn cancel(&self) {
        if let Some(Some(timeout)) =
            self.handle.try_update_value(|pending| pending.take())
        {
            timeout.clear();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle
            .try_with_value(|pending| pending.is_some())
            .unwrap_or(false)
    }
}

impl Default for ScheduledTask {
    fn default() -> Self {
        Self::new()
    }
}
