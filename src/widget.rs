use std::sync::Arc;

use anyhow::anyhow;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::error;

use crate::config::SlideshowOptions;
use crate::controller::SlideshowSm;
use crate::dom::Dom;
use crate::error::Error;
use crate::events::WidgetCommand;
use crate::registry::SlideRegistry;
use crate::tasks::runner;

/// Handle to one attached slideshow.
///
/// Widgets are independent: each [`Slideshow::attach`] owns its own state,
/// timers, and task, keyed by nothing but this handle. Nothing is stored
/// on the document, and any number of widgets can run on the same page.
pub struct Slideshow {
    commands: mpsc::Sender<WidgetCommand>,
    cancel: CancellationToken,
    task: Option<JoinHandle<anyhow::Result<()>>>,
}

impl Slideshow {
    /// Resolve the container and slides, then start the widget event loop.
    ///
    /// Must be called within a tokio runtime. On error the diagnostic is
    /// logged, the document is left untouched, and no widget is running.
    pub fn attach(
        dom: Arc<dyn Dom>,
        container_selector: &str,
        opts: SlideshowOptions,
    ) -> Result<Self, Error> {
        let registry = match SlideRegistry::build(dom.as_ref(), container_selector, &opts) {
            Ok(registry) => registry,
            Err(err) => {
                error!(selector = container_selector, %err, "slideshow setup aborted");
                return Err(err);
            }
        };
        let sm = SlideshowSm::new(registry.len(), registry.first_index());
        let (commands, rx) = mpsc::channel(16);
        let cancel = CancellationToken::new();
        let task = tokio::spawn(runner::run(dom, registry, opts, sm, rx, cancel.clone()));
        Ok(Self {
            commands,
            cancel,
            task: Some(task),
        })
    }

    /// Deliver one host event to the widget.
    pub async fn command(&self, cmd: WidgetCommand) -> anyhow::Result<()> {
        self.commands
            .send(cmd)
            .await
            .map_err(|_| anyhow!("widget task stopped"))
    }

    /// A clonable sender for the host's event wiring.
    pub fn sender(&self) -> mpsc::Sender<WidgetCommand> {
        self.commands.clone()
    }

    /// Stop the widget and wait for its task to finish. After this returns
    /// the widget performs no further document mutation.
    pub async fn detach(mut self) -> anyhow::Result<()> {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            task.await??;
        }
        Ok(())
    }
}

impl Drop for Slideshow {
    fn drop(&mut self) {
        // Detaching is preferred; dropping the handle still stops the task.
        self.cancel.cancel();
    }
}
