use std::{
    future::Future,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use color_eyre::eyre::Result;
use tokio::sync::{futures::Notified, mpsc, Notify};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::{
            feed::FeedMsg,
            form::{FormMsg, SavedPost},
            Msg,
        },
    },
    domain::post::PostPatch,
    infrastructure::repository::PostRepository,
};

/// Number of spawned tasks that still owe a reply
///
/// Each task holds a [`PendingGuard`]; the guard is released when the task
/// ends for any reason, including a panic or cancellation.
#[derive(Debug, Clone, Default)]
pub struct PendingReplies {
    count: Arc<AtomicUsize>,
    idle: Arc<Notify>,
}

impl PendingReplies {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn is_idle(&self) -> bool {
        self.count() == 0
    }

    /// Resolves after the last outstanding task has finished
    ///
    /// Only wakes futures that exist (or were enabled) before that moment.
    pub fn idle(&self) -> Notified<'_> {
        self.idle.notified()
    }

    fn start(&self) -> PendingGuard {
        self.count.fetch_add(1, Ordering::SeqCst);
        PendingGuard(self.clone())
    }
}

pub struct PendingGuard(PendingReplies);

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if self.0.count.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.0.idle.notify_waiters();
        }
    }
}

/// Command executor that performs side effects described by `Cmd`
///
/// Repository round trips run on spawned tokio tasks; their outcome is sent
/// back as a `Msg`. A closed message channel means the application is
/// shutting down, so late completions are dropped.
#[derive(Clone)]
pub struct CmdExecutor {
    repository: Arc<dyn PostRepository>,
    msg_sender: mpsc::UnboundedSender<Msg>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    cancel_token: CancellationToken,
    pending: PendingReplies,
}

impl CmdExecutor {
    /// Create a new command executor
    pub fn new(repository: Arc<dyn PostRepository>, msg_sender: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            repository,
            msg_sender,
            tui_sender: None,
            cancel_token: CancellationToken::new(),
            pending: PendingReplies::default(),
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Tasks that have not delivered their reply yet
    pub fn pending(&self) -> &PendingReplies {
        &self.pending
    }

    /// Abandon outstanding requests
    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::FetchPage { skip, limit } => {
                let (skip, limit) = (*skip, *limit);
                let repository = Arc::clone(&self.repository);
                self.spawn(async move {
                    let msg = match repository.fetch_page(skip, limit).await {
                        Ok(page) => FeedMsg::PageLoaded { offset: skip, page },
                        Err(e) => FeedMsg::PageFailed {
                            offset: skip,
                            error: e.to_string(),
                        },
                    };
                    Msg::Feed(msg)
                });
            }

            Cmd::CreatePost(new_post) => {
                let new_post = new_post.clone();
                let repository = Arc::clone(&self.repository);
                self.spawn(async move {
                    let msg = match repository.create_post(new_post).await {
                        Ok(post) => FormMsg::Saved(SavedPost::Created(post)),
                        Err(e) => FormMsg::SubmitFailed(e.to_string()),
                    };
                    Msg::Form(msg)
                });
            }

            Cmd::UpdatePost(post) => {
                let post = post.clone();
                let repository = Arc::clone(&self.repository);
                self.spawn(async move {
                    let patch = PostPatch::from(&post);
                    let msg = match repository.update_post(post.id, patch).await {
                        Ok(()) => FormMsg::Saved(SavedPost::Updated(post)),
                        Err(e) => FormMsg::SubmitFailed(e.to_string()),
                    };
                    Msg::Form(msg)
                });
            }

            Cmd::Tui(tui_cmd) => match tui_cmd {
                TuiCommand::Resize { width, height } => {
                    if let Some(tx) = &self.tui_sender {
                        let _ = tx.send(tui_cmd.clone());
                    } else {
                        log::warn!(
                            "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                        );
                    }
                }
            },

            Cmd::LogError { message } => {
                log::error!("{message}");
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// Run `task` in the background and deliver its message unless cancelled
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = Msg> + Send + 'static,
    {
        let msg_sender = self.msg_sender.clone();
        let cancel_token = self.cancel_token.clone();
        let guard = self.pending.start();
        tokio::spawn(async move {
            let _guard = guard;
            tokio::select! {
                biased;
                _ = cancel_token.cancelled() => {
                    log::debug!("Request cancelled on shutdown");
                }
                msg = task => {
                    if msg_sender.send(msg).is_err() {
                        log::debug!("Dropping late result: receiver closed");
                    }
                }
            }
        });
    }
}
