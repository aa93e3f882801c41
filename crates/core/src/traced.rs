// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced setting wrapper for consistent observability

use crate::setting::Setting;

/// Wrapper that adds tracing to any Setting
#[derive(Debug, Clone)]
pub struct TracedSetting<S> {
    inner: S,
}

impl<S> TracedSetting<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Setting> Setting for TracedSetting<S> {
    fn filename(&self) -> Option<&str> {
        self.inner.filename()
    }

    fn read(&self) -> std::io::Result<String> {
        let span = tracing::debug_span!(
            "setting.read",
            filename = self.inner.filename().unwrap_or("<inline>")
        );
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.read();
        let elapsed = start.elapsed();

        match &result {
            Ok(text) => tracing::debug!(
                bytes = text.len(),
                elapsed_us = elapsed.as_micros() as u64,
                "read"
            ),
            Err(e) => tracing::error!(
                elapsed_us = elapsed.as_micros() as u64,
                error = %e,
                "read failed"
            ),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
