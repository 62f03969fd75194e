// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        admin::AdminBlogService,
        commands::blogs::BlogCommandService,
        ports::{time::Clock, util::SlugGenerator},
        queries::blogs::BlogQueryService,
    },
    domain::blog::{BlogReadRepository, BlogWriteRepository, services::BlogSlugService},
};

pub struct ApplicationServices {
    pub blog_commands: Arc<BlogCommandService>,
    pub blog_queries: Arc<BlogQueryService>,
    pub admin: Arc<AdminBlogService>,
}

impl ApplicationServices {
    pub fn new(
        blog_write_repo: Arc<dyn BlogWriteRepository>,
        blog_read_repo: Arc<dyn BlogReadRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(BlogSlugService::new(
            Arc::clone(&blog_read_repo),
            Arc::clone(&slugger),
        ));

        let blog_commands = Arc::new(BlogCommandService::new(
            Arc::clone(&blog_write_repo),
            Arc::clone(&blog_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let blog_queries = Arc::new(BlogQueryService::new(Arc::clone(&blog_read_repo)));

        let admin = Arc::new(AdminBlogService::new(
            Arc::clone(&blog_read_repo),
            Arc::clone(&blog_write_repo),
            Arc::clone(&clock),
        ));

        Self {
            blog_commands,
            blog_queries,
            admin,
        }
    }
}
