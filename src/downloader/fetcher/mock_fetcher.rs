use std::cell::RefCell;
use std::collections::VecDeque;

use super::{FileFetcher, Response};

pub struct MockFetcher {
    responses: RefCell<VecDeque<Response>>,
}

impl FileFetcher for MockFetcher {
    fn fetch(&self, _url: &str) -> Response {
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(Response::network_error)
    }
}

impl MockFetcher {
    pub fn new(responses: Vec<Response>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
        }
    }
}
