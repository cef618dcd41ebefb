use ureq::Error::Status;

use super::{FileFetcher, Response};

use std::io::Read;

pub struct UReqFetcher;

impl FileFetcher for UReqFetcher {
    fn fetch(&self, url: &str) -> Response {
        let request = ureq::request("GET", url);

        match request.call() {
            Ok(response) => {
                let code = response.status();

                // ureq follows redirects itself; a non-2xx left over here
                // is terminal.
                if !(200..300).contains(&code) {
                    return Response::status(code);
                }

                let body = response
                    .into_reader()
                    .bytes()
                    .collect::<Result<Vec<u8>, _>>();

                let Ok(body) = body else {
                    return Response::invalid_body();
                };

                Response::ok(body)
            }

            Err(Status(code, _)) => Response::status(code),

            Err(_) => Response::network_error(),
        }
    }
}

impl UReqFetcher {
    pub fn new() -> Self {
        UReqFetcher
    }
}

impl Default for UReqFetcher {
    fn default() -> Self {
        Self::new()
    }
}
