// src/loader.rs
//
// Fetch every trip page, pull the embedded trip-data JSON out of each, and
// collect the survivors into a RecordStore in page order.
//
// A page that cannot be fetched or has no usable trip data is logged and
// skipped; the load as a whole never fails. Zero records is a valid result.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{
        Arc, mpsc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};

use crate::{
    config::{
        consts::{TRIP_DATA_ID, TRIP_DATA_TAG, WORKERS},
        options::SourceOptions,
    },
    core::{html, net::{self, HttpBase}},
    error::LoadError,
    progress::Progress,
    record::{RecordStore, TripRecord},
};

/// Where one trip page lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    Http { host: String, port: u16, path: String },
    File(PathBuf),
}

impl Location {
    /// Resolve `page` against `base` (an `http://` URL or a directory).
    pub fn resolve(base: &str, page: &str) -> Result<Self, LoadError> {
        let base = base.trim();
        if let Some(http) = HttpBase::parse(base) {
            return Ok(Location::Http {
                path: http.path_for(page),
                host: http.host,
                port: http.port,
            });
        }
        if base.contains("://") {
            return Err(LoadError::UnsupportedLocation(s!(base)));
        }
        let dir = if base.is_empty() { Path::new(".") } else { Path::new(base) };
        Ok(Location::File(dir.join(page)))
    }

    pub fn fetch(&self) -> Result<String, LoadError> {
        match self {
            Location::Http { host, port, path } => net::http_get(host, *port, path),
            Location::File(p) => fs::read_to_string(p).map_err(|source| LoadError::Io {
                location: p.display().to_string(),
                source,
            }),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Http { host, port: 80, path } => write!(f, "http://{host}{path}"),
            Location::Http { host, port, path } => write!(f, "http://{host}:{port}{path}"),
            Location::File(p) => write!(f, "{}", p.display()),
        }
    }
}

/// Pull the trip record out of a fetched page.
pub fn parse_document(location: &str, doc: &str) -> Result<TripRecord, LoadError> {
    let block = html::element_inner_by_id(doc, TRIP_DATA_TAG, TRIP_DATA_ID)
        .filter(|b| !b.trim().is_empty())
        .ok_or_else(|| LoadError::MissingBlock { location: s!(location) })?;
    TripRecord::from_json(block).map_err(|source| LoadError::Parse { location: s!(location), source })
}

/// Fetch + parse one page.
pub fn load_one(base: &str, page: &str) -> Result<TripRecord, LoadError> {
    let loc = Location::resolve(base, page)?;
    let doc = loc.fetch()?;
    parse_document(&loc.to_string(), &doc)
}

/// Load every page in `source`. Failures are logged and dropped.
pub fn load_records(source: &SourceOptions, mut progress: Option<&mut dyn Progress>) -> RecordStore {
    let pages = Arc::new(source.pages.clone());
    let base = Arc::new(source.base.clone());
    let total = pages.len();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }
    logf!("Load: begin base='{}' pages={}", base, total);

    type FetchOk = (usize, TripRecord);
    type FetchErr = (usize, LoadError);

    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Result<FetchOk, FetchErr>>();

    let workers = WORKERS.min(total).max(1);

    for _ in 0..workers {
        let pages = Arc::clone(&pages);
        let base = Arc::clone(&base);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= pages.len() {
                    break;
                }
                let result = match load_one(&base, &pages[i]) {
                    Ok(rec) => Ok((i, rec)),
                    Err(e) => Err((i, e)),
                };
                if tx.send(result).is_err() {
                    break;
                }
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    let mut slots: Vec<Option<TripRecord>> = vec![None; total];
    for _ in 0..total {
        match res_rx.recv() {
            Ok(Ok((i, rec))) => {
                logd!("Load: ok [{i}] '{}' ({})", rec.title, pages[i]);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(i, &pages[i]);
                }
                slots[i] = Some(rec);
            }
            Ok(Err((i, e))) => {
                loge!("Load: skipped [{i}] {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(i, &pages[i]);
                }
            }
            Err(_) => break, // workers ended early; keep what we have
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    let records: Vec<TripRecord> = slots.into_iter().flatten().collect();
    logf!("Load: done {}/{} records", records.len(), total);
    RecordStore::new(records)
}
