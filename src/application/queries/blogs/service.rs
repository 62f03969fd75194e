use std::sync::Arc;

use crate::domain::blog::BlogReadRepository;

pub struct BlogQueryService {
    pub(super) read_repo: Arc<dyn BlogReadRepository>,
}

impl BlogQueryService {
    pub fn new(read_repo: Arc<dyn BlogReadRepository>) -> Self {
        Self { read_repo }
    }
}
