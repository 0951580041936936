//! Shared fixtures for babel-web integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use babel_i18n::{I18nResult, Locale, MessageBundle, MessageLoader};
use scraper::{Html, Selector};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Serves the same JSON document for every locale.
pub struct StaticLoader {
    json: String,
}

impl StaticLoader {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

#[async_trait]
impl MessageLoader for StaticLoader {
    async fn load(&self, locale: Locale) -> I18nResult<MessageBundle> {
        MessageBundle::from_json(locale, &self.json, "static")
    }
}

/// Wraps a loader and records which locales it is asked for.
pub struct CountingLoader<L> {
    inner: L,
    calls: AtomicUsize,
    requested: Mutex<Vec<Locale>>,
}

impl<L> CountingLoader<L> {
    pub fn new(inner: L) -> Arc<Self> {
        Arc::new(Self {
            inner,
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<Locale> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl<L: MessageLoader> MessageLoader for CountingLoader<L> {
    async fn load(&self, locale: Locale) -> I18nResult<MessageBundle> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(locale);
        self.inner.load(locale).await
    }
}

/// Text content of the first element matching `selector`.
pub fn text_of(document: &str, selector: &str) -> Option<String> {
    let html = Html::parse_document(document);
    let selector = Selector::parse(selector).expect("valid selector");
    html.select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
}

/// Value of `attr` on the first element matching `selector`.
pub fn attr_of(document: &str, selector: &str, attr: &str) -> Option<String> {
    let html = Html::parse_document(document);
    let selector = Selector::parse(selector).expect("valid selector");
    html.select(&selector)
        .next()
        .and_then(|element| element.value().attr(attr).map(str::to_string))
}
