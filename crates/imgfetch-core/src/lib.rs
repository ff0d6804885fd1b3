//! Core of imgfetch: fetch images from a list of URLs, drop non-images,
//! oversized and duplicate bodies, and save the rest under run-unique names.

pub mod config;
pub mod logging;

pub mod checksum;
pub mod fetch;
pub mod http;
pub mod naming;
pub mod run;
pub mod storage;
