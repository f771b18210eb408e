//! Test doubles for the platform runtime capability.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::http::runtime::{
    PlatformRuntime, RequestConfig, RequestTask, RuntimeFailure, RuntimeResponse,
};

/// Which callback a [`MockRuntime`] fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackType {
    Success,
    Fail,
}

/// Scriptable [`PlatformRuntime`] double.
///
/// Fires the configured callback with a canned payload, records every
/// dispatched descriptor for assertion, and serves `read_file` from an
/// in-memory store.
pub struct MockRuntime {
    callback_type: Mutex<CallbackType>,
    response: Mutex<RuntimeResponse>,
    failure: Mutex<RuntimeFailure>,
    files: Mutex<HashMap<String, String>>,
    logs: Mutex<Vec<RequestConfig>>,
}

impl Default for MockRuntime {
    fn default() -> Self {
        Self {
            callback_type: Mutex::new(CallbackType::Fail),
            response: Mutex::new(RuntimeResponse::default()),
            failure: Mutex::new(RuntimeFailure::new("mock failure")),
            files: Mutex::new(HashMap::new()),
            logs: Mutex::new(Vec::new()),
        }
    }
}

impl MockRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select which callback subsequent dispatches fire.
    pub fn set_callback_type(&self, callback_type: CallbackType) {
        *lock(&self.callback_type) = callback_type;
    }

    /// Set the canned success payload.
    pub fn mock_response(&self, response: RuntimeResponse) {
        *lock(&self.response) = response;
    }

    /// Set the canned failure payload.
    pub fn mock_failure(&self, err_msg: impl Into<String>) {
        *lock(&self.failure) = RuntimeFailure::new(err_msg);
    }

    /// Register a file served by `read_file`.
    pub fn mock_file(&self, path: impl Into<String>, contents: impl Into<String>) {
        lock(&self.files).insert(path.into(), contents.into());
    }

    /// Every descriptor dispatched so far, in order.
    pub fn logs(&self) -> Vec<RequestConfig> {
        lock(&self.logs).clone()
    }

    fn complete(&self, task: RequestTask) {
        lock(&self.logs).push(task.config.clone());
        match *lock(&self.callback_type) {
            CallbackType::Success => (task.success)(lock(&self.response).clone()),
            CallbackType::Fail => (task.fail)(lock(&self.failure).clone()),
        }
    }
}

impl PlatformRuntime for MockRuntime {
    fn request(&self, task: RequestTask) {
        self.complete(task);
    }

    fn upload_file(&self, task: RequestTask) {
        self.complete(task);
    }

    fn download_file(&self, task: RequestTask) {
        self.complete(task);
    }

    fn read_file(&self, path: &str) -> Result<String, RuntimeFailure> {
        lock(&self.files)
            .get(path)
            .cloned()
            .ok_or_else(|| RuntimeFailure::new(format!("readFile:fail no such file {path}")))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_dispatched_descriptors() {
        let runtime = MockRuntime::new();
        runtime.set_callback_type(CallbackType::Success);
        let config = RequestConfig {
            method: crate::http::HttpMethod::Get,
            url: "https://example.com/k/v1/record.json?".to_string(),
            header: HashMap::new(),
            data: None,
            file_path: None,
            name: None,
            file_method: None,
        };
        runtime.request(RequestTask {
            config: config.clone(),
            success: Box::new(|_| {}),
            fail: Box::new(|_| {}),
        });
        assert_eq!(runtime.logs(), vec![config]);
    }

    #[test]
    fn read_file_serves_registered_contents() {
        let runtime = MockRuntime::new();
        runtime.mock_file("http://tmp/a.json", "{}");
        assert_eq!(runtime.read_file("http://tmp/a.json").unwrap(), "{}");
        assert!(runtime.read_file("http://tmp/missing.json").is_err());
    }
}
