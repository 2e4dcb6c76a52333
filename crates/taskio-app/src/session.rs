use anyhow::{Context, Result};
use tracing::debug;

use taskio_client::TaskClient;
use taskio_core::Task;
use taskio_core::filters::SearchFilters;
use taskio_core::id::TaskId;
use taskio_core::view::{Projection, ViewOptions, project};

/// In-memory view state for one run of the client.
///
/// Owns the transient task collection, the active filters and the view
/// options; the server stays authoritative. Every data-mutating call is
/// followed by a full reload before the session is considered up to date,
/// so the derived view always reflects server state.
pub struct Session {
    client: TaskClient,
    tasks: Vec<Task>,
    filters: SearchFilters,
    options: ViewOptions,
}

impl Session {
    /// Create an empty session talking to `client`.
    #[must_use]
    pub fn new(client: TaskClient) -> Self {
        Self {
            client,
            tasks: Vec::new(),
            filters: SearchFilters::default(),
            options: ViewOptions::default(),
        }
    }

    /// Tasks as last loaded from the service.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Currently active search filters.
    #[must_use]
    pub const fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    /// Current view options.
    #[must_use]
    pub const fn options(&self) -> ViewOptions {
        self.options
    }

    /// Replace the view options; takes effect on the next [`Self::view`].
    pub fn set_options(&mut self, options: ViewOptions) {
        self.options = options;
    }

    /// Replace the active filters and reload the collection.
    ///
    /// # Errors
    /// Propagates client failures from the reload.
    pub async fn apply_filters(&mut self, filters: SearchFilters) -> Result<()> {
        self.filters = filters;
        self.refresh().await
    }

    /// Reload the collection using the active filters.
    ///
    /// An empty filter set means "browse everything" and uses the plain
    /// listing endpoint; anything else goes through the search endpoint.
    ///
    /// # Errors
    /// Propagates client failures.
    pub async fn refresh(&mut self) -> Result<()> {
        let tasks = if self.filters.is_empty() {
            self.client.list_tasks().await.context("failed to load tasks")?
        } else {
            self.client
                .search_tasks(&self.filters)
                .await
                .context("failed to search tasks")?
        };
        debug!(count = tasks.len(), "reloaded task collection");
        self.tasks = tasks;
        Ok(())
    }

    /// Create `task` on the service, then reload.
    ///
    /// # Errors
    /// Fails on validation errors (before any request is made) and on client
    /// failures.
    pub async fn create(&mut self, task: &Task) -> Result<Task> {
        task.validate()?;
        let created = self
            .client
            .create_task(task)
            .await
            .context("failed to create task")?;
        self.refresh().await?;
        Ok(created)
    }

    /// Replace the task at `id` wholesale, then reload.
    ///
    /// # Errors
    /// Fails on validation errors (before any request is made) and on client
    /// failures, including a missing task.
    pub async fn update(&mut self, id: TaskId, task: &Task) -> Result<Task> {
        task.validate()?;
        let updated = self
            .client
            .update_task(id, task)
            .await
            .context("failed to update task")?;
        self.refresh().await?;
        Ok(updated)
    }

    /// Delete the task at `id` (a no-op when already gone), then reload.
    ///
    /// # Errors
    /// Propagates client failures.
    pub async fn remove(&mut self, id: TaskId) -> Result<()> {
        self.client
            .delete_task(id)
            .await
            .context("failed to delete task")?;
        self.refresh().await
    }

    /// Fetch one task by id straight from the service.
    ///
    /// # Errors
    /// Propagates client failures; a missing task is `Ok(None)`.
    pub async fn fetch(&self, id: TaskId) -> Result<Option<Task>> {
        self.client
            .get_task(id)
            .await
            .with_context(|| format!("failed to fetch task {id}"))
    }

    /// Distinct category labels currently in use on the service.
    ///
    /// # Errors
    /// Propagates client failures.
    pub async fn categories(&self) -> Result<Vec<String>> {
        self.client
            .list_categories()
            .await
            .context("failed to load categories")
    }

    /// Project the current collection with the active view options.
    #[must_use]
    pub fn view(&self) -> Projection<'_> {
        project(&self.tasks, &self.options)
    }
}
