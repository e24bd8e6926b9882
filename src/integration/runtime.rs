use std::{collections::VecDeque, sync::Arc};

use color_eyre::eyre::{eyre, Result};
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::update,
    },
    infrastructure::repository::PostRepository,
};

/// Message loop owner
///
/// Holds the single copy of `AppState`. Messages are applied one at a time;
/// commands produced by `update` are queued and handed to the executor,
/// whose results come back through `msg_rx`.
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a new Runtime without an executor; commands stay queued
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a new Runtime whose commands run against `repository`
    pub fn new_with_executor(initial_state: AppState, repository: Arc<dyn PostRepository>) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(CmdExecutor::new(repository, runtime.msg_tx.clone()));
        runtime
    }

    /// Add TUI command sender support to existing executor (for TuiCommand execution)
    pub fn add_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) -> Result<()> {
        let executor = self
            .cmd_executor
            .as_mut()
            .ok_or_else(|| eyre!("No executor available. Use new_with_executor() first."))?;
        executor.set_tui_sender(tui_sender);
        Ok(())
    }

    /// Get sender for message transmission
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>> {
        let Some(executor) = &self.cmd_executor else {
            return Err(eyre!(
                "No command executor available. Use new_with_executor() to configure."
            ));
        };

        let commands: Vec<Cmd> = self.cmd_queue.drain(..).collect();
        if commands.is_empty() {
            return Ok(vec![]);
        }
        executor.execute_commands(&commands)
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update(msg, state);
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Each raw message is translated against the state left by the previous one
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            for msg in translate_raw_to_domain(raw_msg, &self.state) {
                let commands = self.process_message(msg);
                all_commands.extend(commands);
            }
        }

        // Process domain messages in internal queue
        while let Some(msg) = self.msg_queue.pop_front() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }

        // Process domain messages from external sources
        while let Ok(msg) = self.msg_rx.try_recv() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>> {
        let _commands = self.process_all_messages();
        if self.cmd_executor.is_none() {
            return Ok(vec![]);
        }
        self.execute_pending_commands()
    }

    /// Whether an executor task still owes a reply
    pub fn has_pending_replies(&self) -> bool {
        self.cmd_executor
            .as_ref()
            .is_some_and(|executor| !executor.pending().is_idle())
    }

    /// Wait for the next message from an executor task and queue it
    ///
    /// Returns `false` once every spawned task has finished without leaving a
    /// message behind, e.g. after a panic or cancellation.
    pub async fn wait_for_external_msg(&mut self) -> bool {
        let Some(pending) = self.cmd_executor.as_ref().map(|e| e.pending().clone()) else {
            return self.take_external_msg();
        };

        loop {
            let idle = pending.idle();
            tokio::pin!(idle);
            idle.as_mut().enable();

            if self.take_external_msg() {
                return true;
            }
            if pending.is_idle() {
                // A task sends before releasing its guard
                return self.take_external_msg();
            }

            tokio::select! {
                msg = self.msg_rx.recv() => {
                    let Some(msg) = msg else { return false };
                    self.msg_queue.push_back(msg);
                    return true;
                }
                _ = &mut idle => {}
            }
        }
    }

    fn take_external_msg(&mut self) -> bool {
        match self.msg_rx.try_recv() {
            Ok(msg) => {
                self.msg_queue.push_back(msg);
                true
            }
            Err(_) => false,
        }
    }

    /// Abandon outstanding repository requests
    pub fn shutdown(&self) {
        if let Some(executor) = &self.cmd_executor {
            executor.shutdown();
        }
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            posts_count: self.state.feed.len(),
            is_loading: self.state.feed.is_loading(),
            is_exhausted: self.state.feed.is_exhausted(),
            is_form_open: self.state.form.is_open(),
            selected_index: self.state.feed.selected_index(),
            has_executor: self.cmd_executor.is_some(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub posts_count: usize,
    pub is_loading: bool,
    pub is_exhausted: bool,
    pub is_form_open: bool,
    pub selected_index: Option<usize>,
    pub has_executor: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::msg::{feed::FeedMsg, form::FormMsg, system::SystemMsg},
        test_helpers::{page, posts, InMemoryPostRepository},
    };
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn create_test_runtime() -> Runtime {
        Runtime::new(AppState::default())
    }

    #[test]
    fn test_runtime_creation() {
        let runtime = create_test_runtime();
        let stats = runtime.get_stats();

        assert_eq!(stats.queued_messages, 0);
        assert_eq!(stats.queued_commands, 0);
        assert_eq!(stats.posts_count, 0);
        assert!(!stats.has_executor);
    }

    #[test]
    fn test_send_message() {
        let mut runtime = create_test_runtime();

        runtime.send_msg(Msg::Form(FormMsg::OpenNew));
        assert_eq!(runtime.get_stats().queued_messages, 1);

        let commands = runtime.process_all_messages();

        assert_eq!(runtime.get_stats().queued_messages, 0);
        assert!(runtime.get_stats().is_form_open);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_process_message() {
        let mut runtime = create_test_runtime();

        let commands = runtime.process_message(Msg::System(SystemMsg::Quit));
        assert!(commands.is_empty());
        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_raw_messages_are_translated() {
        let mut runtime = create_test_runtime();

        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
            KeyCode::Char('n'),
            KeyModifiers::NONE,
        )));
        runtime.process_all_messages();

        assert!(runtime.state().form.is_open());
    }

    #[test]
    fn test_raw_messages_see_preceding_updates() {
        let mut runtime = create_test_runtime();

        // 'q' quits in the feed view but is text once the form is open
        for c in ['n', 'q'] {
            runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::NONE,
            )));
        }
        runtime.process_all_messages();

        assert!(!runtime.state().system.should_quit);
        assert_eq!(
            runtime.state().form.draft().map(|d| d.title.as_str()),
            Some("q")
        );
    }

    #[test]
    fn test_commands_are_queued_without_executor() -> Result<()> {
        let mut runtime = create_test_runtime();

        runtime.send_msg(Msg::Feed(FeedMsg::AdvanceRequested));
        runtime.send_msg(Msg::Feed(FeedMsg::AdvanceRequested));
        runtime.run_update_cycle()?;

        assert_eq!(
            runtime.pending_commands(),
            vec![Cmd::FetchPage { skip: 0, limit: 20 }]
        );
        assert!(runtime.execute_pending_commands().is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_wait_returns_false_when_nothing_is_pending() {
        let mut runtime = Runtime::new_with_executor(
            AppState::default(),
            Arc::new(InMemoryPostRepository::default()),
        );

        assert!(!runtime.has_pending_replies());
        assert!(!runtime.wait_for_external_msg().await);
    }

    #[tokio::test]
    async fn test_wait_queues_executor_reply() -> Result<()> {
        let mut runtime = Runtime::new_with_executor(
            AppState::default(),
            Arc::new(InMemoryPostRepository::with_posts(posts(1..=3))),
        );

        runtime.send_msg(Msg::Feed(FeedMsg::AdvanceRequested));
        runtime.run_update_cycle()?;
        assert!(runtime.has_pending_replies());

        assert!(runtime.wait_for_external_msg().await);
        runtime.run_update_cycle()?;

        assert_eq!(runtime.state().feed.len(), 3);
        assert!(runtime.state().feed.is_exhausted());
        assert!(!runtime.wait_for_external_msg().await);
        Ok(())
    }

    #[test]
    fn test_external_message_channel() {
        let mut runtime = create_test_runtime();
        let sender = runtime.get_sender();

        runtime.process_message(Msg::Feed(FeedMsg::AdvanceRequested));
        let _ = sender.send(Msg::Feed(FeedMsg::PageLoaded {
            offset: 0,
            page: page(0, 1..=20, 100),
        }));

        // Not processed yet
        assert_eq!(runtime.state().feed.len(), 0);

        runtime.process_all_messages();
        assert_eq!(runtime.state().feed.len(), 20);
        assert!(!runtime.state().feed.is_loading());
    }
}
