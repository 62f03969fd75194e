use super::AdminBlogService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::blog::BlogId,
};
use tracing::info;

pub struct DeleteSelectedCommand {
    pub ids: Vec<i64>,
}

impl AdminBlogService {
    /// Bulk "delete selected" action. Unknown ids are skipped; returns the
    /// number of blogs removed.
    pub async fn delete_selected(&self, command: DeleteSelectedCommand) -> ApplicationResult<u64> {
        if command.ids.is_empty() {
            return Err(ApplicationError::validation(
                "select at least one blog to delete",
            ));
        }

        let mut ids: Vec<BlogId> = command
            .ids
            .into_iter()
            .filter_map(|id| BlogId::new(id).ok())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        let deleted = self.write_repo.delete_many(&ids).await?;
        info!(requested = ids.len(), deleted, "admin deleted selected blogs");
        Ok(deleted)
    }
}
