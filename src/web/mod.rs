//! JSON HTTP API for symptom matching.
//!
//! The server shares one loaded [`Dataset`](crate::dataset::store::Dataset) across
//! all requests behind an `Arc`; requests never mutate it.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! symptom-match serve
//!
//! # Custom port, custom tables
//! symptom-match serve --port 3000 --diseases diseases.csv --precautions precautions.csv
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /api/symptoms` - Sorted symptom universe
//! - `GET /api/summary` - Dataset counters
//! - `GET /api/statistics?top=N` - Disease and symptom frequency tables
//! - `POST /api/predict` - Predict a disease from `{"symptoms": [..]}`

pub mod server;
