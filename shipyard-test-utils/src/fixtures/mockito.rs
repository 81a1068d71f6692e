use std::{thread, time::Duration};

use mockito::Mock;
use serde_json::Value;

use crate::{fixtures::factory, TestSetup};

impl TestSetup {
    /// Register a collection page served at `path`.
    ///
    /// The endpoint is verified by [`TestSetup::assert_mocks`].
    ///
    /// # Arguments
    /// - `path` - Path of the page on the mock catalog, e.g. `/vehicles/`
    /// - `results` - Records on the page
    /// - `next` - Absolute URL of the following page, `None` on the last page
    /// - `expected_requests` - How many times the page must be requested
    pub fn with_page_endpoint(
        &mut self,
        path: &str,
        results: Vec<Value>,
        next: Option<&str>,
        expected_requests: usize,
    ) {
        let body = factory::mock_page(results, next);

        let mock = self
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create();

        self.track(mock);
    }

    /// Register a film served at `path`.
    pub fn with_film_endpoint(
        &mut self,
        path: &str,
        title: &str,
        episode_id: i64,
        expected_requests: usize,
    ) {
        let body = factory::mock_film(title, episode_id);

        let mock = self
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create();

        self.track(mock);
    }

    /// Register a film served at `path` whose body is only sent after `delay`.
    pub fn with_slow_film_endpoint(
        &mut self,
        path: &str,
        title: &str,
        episode_id: i64,
        delay: Duration,
        expected_requests: usize,
    ) {
        let body = factory::mock_film(title, episode_id).to_string();

        let mock = self
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_chunked_body(move |writer| {
                thread::sleep(delay);
                writer.write_all(body.as_bytes())
            })
            .expect(expected_requests)
            .create();

        self.track(mock);
    }

    /// Register an endpoint at `path` answering with `status` and an error body.
    pub fn with_failing_endpoint(&mut self, path: &str, status: usize, expected_requests: usize) {
        let mock = self
            .server
            .mock("GET", path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": "Not found"}"#)
            .expect(expected_requests)
            .create();

        self.track(mock);
    }

    /// Register an endpoint at `path` answering 200 with a truncated JSON body.
    pub fn with_malformed_endpoint(&mut self, path: &str, expected_requests: usize) {
        let mock = self
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"results": "#)
            .expect(expected_requests)
            .create();

        self.track(mock);
    }

    /// Keeps the endpoint alive for the rest of the test; mockito removes dropped mocks.
    fn track(&mut self, mock: Mock) {
        self.mocks.push(mock);
    }
}
