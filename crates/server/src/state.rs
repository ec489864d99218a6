use service::search::SearchService;

/// Shared handler state; cloning is cheap (one `Arc` inside the service).
#[derive(Clone)]
pub struct ServerState {
    pub search: SearchService,
}

impl ServerState {
    pub fn new(search: SearchService) -> Self {
        Self { search }
    }
}
