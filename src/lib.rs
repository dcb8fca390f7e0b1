//! A grab-bag of small, independent helpers: collections, text, formatting, maths, iterator
//! adapters and a few odds and ends.
//!
//! # Purpose
//! None of these pieces form a system. Each module is a standalone helper that can be pulled in on
//! its own, which is why most of them sit behind a Cargo feature.
//!
//! # Error Handling
//! Following the standard library, some functions panic instead of returning a [`Result`] when
//! the failure can only be caused by a programming error, such as asking for pages of zero
//! elements. Those functions say so under a `# Panics` heading.
//!
//! When this crate does return a [`Result`], the error is strongly typed: small structs that
//! implement [`Error`](std::error::Error), grouped into enums for static dispatch where one
//! operation can fail in several ways.
//!
//! # Logging
//! Internal events (page recalculation, archive extraction) are emitted through [`tracing`] at
//! `debug` and `trace` level. This crate never installs a subscriber, though the `log` feature
//! provides [`FormattingLayer`](format::FormattingLayer) for applications that want their log
//! messages passed through string formatters.
//!
//! # Features
//! - `collections`: paged lists, builders and the smaller map types.
//! - `text`: string helpers, including Levenshtein distance and random strings.
//! - `format`: composable string formatters.
//! - `log`: a `tracing-subscriber` layer applying formatters to log messages (implies `format`).
//! - `math`: numeric helpers and [`FastRandom`](math::FastRandom).
//! - `stream`: iterator adapters and pair collectors (implies `collections`).
//! - `io`: zip archive extraction.
//!
//! All features are enabled by default.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
pub mod concurrent;
#[cfg(feature = "format")]
pub mod format;
pub mod functions;
pub mod hashing;
#[cfg(feature = "io")]
pub mod io;
pub mod iterate;
#[cfg(feature = "math")]
pub mod math;
#[cfg(feature = "stream")]
pub mod stream;
#[cfg(feature = "text")]
pub mod text;

pub(crate) mod util;
