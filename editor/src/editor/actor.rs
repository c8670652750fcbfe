//! Single-writer editor task.
//!
//! The schedule has exactly one writer: a tokio task that owns the
//! [`ProfileEditor`]. UI-facing code holds an [`EditorHandle`] and talks to
//! the task over a channel, so every mutation and every normalization pass
//! runs serialized on that task, and no reader ever observes the row list
//! mid-mutation.

use std::sync::Arc;

use anyhow::Context;
use log::{debug, error};
use tokio::sync::{mpsc, oneshot};

use crate::editor::state::{ProfileEditor, Row};
use crate::providers::{ProfileProvider, ProviderFactory, ProviderResult, SettingsProvider};

enum Command {
    Add,
    SetRow { index: usize, row: Row },
    RemoveRow { index: usize },
    Validate,
    Save,
    Rows { reply: oneshot::Sender<Vec<Row>> },
    CanAdd { reply: oneshot::Sender<bool> },
}

/// Handle to the owning editor task.
///
/// Cloning shares the same task; dropping every clone closes the channel
/// and stops it.
#[derive(Clone)]
pub struct EditorHandle {
    tx: mpsc::UnboundedSender<Command>,
}

impl EditorHandle {
    /// Activate an editor: read the active unit, load the persisted
    /// profile, and spawn the owning task.
    ///
    /// The loaded rows mirror the persisted entry order; the first
    /// normalization pass runs once a mutation (or an explicit
    /// [`Self::validate`]) asks for one.
    pub async fn spawn(
        settings: Arc<dyn SettingsProvider>,
        profiles: Arc<dyn ProfileProvider>,
    ) -> ProviderResult<Self> {
        let unit = settings.active_unit().await?;
        let profile = profiles.load_profile().await?;

        let mut editor = ProfileEditor::new(unit);
        editor.load(&profile);
        if editor.snapped_lookups() > 0 {
            debug!(
                "loaded profile with {} snapped lookups",
                editor.snapped_lookups()
            );
        }

        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run(editor, profiles, tx.downgrade(), rx));
        Ok(Self { tx })
    }

    /// Activate an editor with providers wired from the environment.
    ///
    /// Reads `PROFILE_UNIT` for the settings provider and
    /// `PROFILE_STORE`/`PROFILE_PATH` for the profile store.
    pub async fn from_env() -> anyhow::Result<Self> {
        let settings = ProviderFactory::settings_from_env();
        let profiles = ProviderFactory::from_env().context("Failed to create profile store")?;
        let handle = Self::spawn(settings, profiles)
            .await
            .context("Failed to activate profile editor")?;
        Ok(handle)
    }

    /// Queue an append of the next row.
    ///
    /// Rejected (and logged) by the task when the grid has no room left;
    /// check [`Self::can_add`] before calling.
    pub fn add(&self) {
        self.send(Command::Add);
    }

    /// Queue an overwrite of the row at `index`.
    pub fn set_row(&self, index: usize, row: Row) {
        self.send(Command::SetRow { index, row });
    }

    /// Queue removal of the row at `index`.
    pub fn remove_row(&self, index: usize) {
        self.send(Command::RemoveRow { index });
    }

    /// Queue a normalization pass.
    ///
    /// Mutations queue one automatically; this exists for callers that need
    /// the schedule consistent before reading it back.
    pub fn validate(&self) {
        self.send(Command::Validate);
    }

    /// Queue a save of the current rows.
    ///
    /// Fire-and-forget: a provider failure is logged by the task and not
    /// reported back.
    pub fn save(&self) {
        self.send(Command::Save);
    }

    /// Snapshot of the current rows.
    pub async fn rows(&self) -> Vec<Row> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Rows { reply });
        rx.await.unwrap_or_default()
    }

    /// Whether another row currently fits on the grid.
    pub async fn can_add(&self) -> bool {
        let (reply, rx) = oneshot::channel();
        self.send(Command::CanAdd { reply });
        rx.await.unwrap_or(false)
    }

    fn send(&self, command: Command) {
        // The task only stops once every handle is gone, so a failed send
        // means shutdown is already underway.
        let _ = self.tx.send(command);
    }
}

struct EditorTask {
    editor: ProfileEditor,
    profiles: Arc<dyn ProfileProvider>,
    // Weak: the task must not keep its own channel open.
    tx: mpsc::WeakUnboundedSender<Command>,
    validate_pending: bool,
}

async fn run(
    editor: ProfileEditor,
    profiles: Arc<dyn ProfileProvider>,
    tx: mpsc::WeakUnboundedSender<Command>,
    mut rx: mpsc::UnboundedReceiver<Command>,
) {
    let mut task = EditorTask {
        editor,
        profiles,
        tx,
        validate_pending: false,
    };

    while let Some(command) = rx.recv().await {
        task.handle(command).await;
    }
    debug!("editor task stopped");
}

impl EditorTask {
    async fn handle(&mut self, command: Command) {
        match command {
            Command::Add => {
                if !self.editor.add() {
                    debug!("add rejected: no slot left on the time grid");
                }
                self.queue_validate();
            }
            Command::SetRow { index, row } => {
                self.editor.set_row(index, row);
                self.queue_validate();
            }
            Command::RemoveRow { index } => {
                self.editor.remove_row(index);
                self.queue_validate();
            }
            Command::Validate => {
                self.validate_pending = false;
                self.editor.validate();
            }
            Command::Save => {
                let profile = self.editor.to_profile();
                if let Err(err) = self.profiles.save_profile(&profile).await {
                    error!("failed to save profile: {err}");
                }
            }
            Command::Rows { reply } => {
                let _ = reply.send(self.editor.rows().to_vec());
            }
            Command::CanAdd { reply } => {
                let _ = reply.send(self.editor.can_add());
            }
        }
    }

    /// Queue a deferred normalization pass on our own channel.
    ///
    /// Single-flight: at most one pass is outstanding, and it runs on a
    /// later queue iteration, after commands that were already enqueued.
    fn queue_validate(&mut self) {
        if self.validate_pending {
            return;
        }
        if let Some(tx) = self.tx.upgrade() {
            self.validate_pending = true;
            let _ = tx.send(Command::Validate);
        }
    }
}
