/// Data layer: core types and CSV loading.
///
/// Architecture:
/// ```text
///  debug .csv dump
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SignalDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ SignalDataset │  equal-length named columns
///   └───────────────┘
/// ```

pub mod loader;
pub mod model;
