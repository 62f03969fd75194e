use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::blog::{BlogReadRepository, BlogWriteRepository},
};

pub struct AdminBlogService {
    pub(super) read_repo: Arc<dyn BlogReadRepository>,
    pub(super) write_repo: Arc<dyn BlogWriteRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AdminBlogService {
    pub fn new(
        read_repo: Arc<dyn BlogReadRepository>,
        write_repo: Arc<dyn BlogWriteRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            clock,
        }
    }
}
