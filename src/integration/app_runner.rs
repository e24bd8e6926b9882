use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd::TuiCommand,
        msg::{feed::FeedMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::post::Post,
    infrastructure::{config::Config, repository::PostRepository, tui},
    integration::runtime::Runtime,
    presentation::components::Components,
};

/// Drives the Elm loop: terminal events in, state updates, commands out, render
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    components: Components,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Create a runner wired to `repository` and an injected terminal
    pub fn new_with_tui(
        config: Config,
        repository: Arc<dyn PostRepository>,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    ) -> Result<Self> {
        let initial_state = AppState::new_with_config(config);
        let mut runtime = Runtime::new_with_executor(initial_state, repository);
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_tx)?;

        Ok(Self {
            runtime,
            tui,
            tui_rx,
            components: Components::new(),
        })
    }

    /// Run the main loop until quit or until the event source closes
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;

        // Mount: load the first page
        self.runtime.send_msg(Msg::Feed(FeedMsg::AdvanceRequested));

        let result = self.run_loop().await;

        self.runtime.shutdown();
        self.tui.lock().await.exit()?;
        result
    }

    async fn run_loop(&mut self) -> Result<()> {
        loop {
            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Runtime error: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
            }

            // Handle commands that require immediate host reaction
            while let Ok(cmd) = self.tui_rx.try_recv() {
                match cmd {
                    TuiCommand::Resize { width, height } => {
                        self.tui
                            .lock()
                            .await
                            .resize(Rect::new(0, 0, width, height))?;
                    }
                }
            }

            self.render().await?;

            if self.runtime.state().system.should_quit {
                break;
            }

            let awaiting_reply = self.runtime.has_pending_replies();
            let event = {
                let mut tui = self.tui.lock().await;
                tokio::select! {
                    event = tui.next() => match event {
                        Some(tui::Event::Closed) | None => break,
                        Some(event) => Some(event),
                    },
                    received = self.runtime.wait_for_external_msg(), if awaiting_reply => {
                        if !received {
                            log::warn!("Repository requests ended without a reply");
                        }
                        None
                    }
                }
            };

            if let Some(event) = event {
                self.handle_event(event);
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: tui::Event) {
        let raw = match event {
            tui::Event::Quit => RawMsg::Quit,
            tui::Event::Tick => RawMsg::Tick,
            tui::Event::Render => RawMsg::Render,
            tui::Event::Resize(w, h) => RawMsg::Resize(w, h),
            tui::Event::Key(key) => RawMsg::Key(key),
            tui::Event::Error => RawMsg::Error("Terminal input error".to_string()),
            tui::Event::Init
            | tui::Event::Closed
            | tui::Event::FocusGained
            | tui::Event::FocusLost
            | tui::Event::Paste(_)
            | tui::Event::Mouse(_) => return,
        };
        self.runtime.send_raw_msg(raw);
    }

    async fn render(&self) -> Result<()> {
        let state = self.runtime.state();
        let components = &self.components;
        self.tui
            .lock()
            .await
            .draw(&mut |f: &mut tui::Frame<'_>| components.render(f, state))
    }
}

/// Walk the whole feed without a terminal, page after page
///
/// Stops once the feed is exhausted; a failed page ends the run with its
/// error. Returns the posts in feed order.
pub async fn run_headless(config: Config, repository: Arc<dyn PostRepository>) -> Result<Vec<Post>> {
    let mut runtime = Runtime::new_with_executor(AppState::new_with_config(config), repository);

    loop {
        runtime.send_msg(Msg::Feed(FeedMsg::AdvanceRequested));
        runtime.run_update_cycle()?;

        while runtime.state().feed.is_loading() {
            if !runtime.wait_for_external_msg().await {
                return Err(eyre!("Repository request ended without a reply"));
            }
            runtime.run_update_cycle()?;
        }

        let state = runtime.state();
        if state.system.is_error {
            let message = state.system.status_message.clone().unwrap_or_default();
            return Err(eyre!(message));
        }
        if state.feed.is_exhausted() {
            break;
        }
    }

    let posts = runtime.state().feed.posts().as_slice().to_vec();
    log::info!("Headless run loaded {} posts", posts.len());
    Ok(posts)
}
