/// Data layer: core types, parsing, and media loading.
///
/// Architecture:
/// ```text
///  typed text            files (.csv/.json, .wav/.mp3, .png/.jpg)
///        │                         │
///        ▼                         ▼
///   ┌──────────┐          ┌──────────────────┐
///   │  parse    │          │ loader / audio /  │
///   │           │          │ images            │
///   └──────────┘          └──────────────────┘
///        │                         │
///        └────────────┬────────────┘
///                     ▼
///            ┌────────────────┐
///            │  model types    │  PointSet / ArrayData / AudioClip
///            └────────────────┘
/// ```
pub mod audio;
pub mod images;
pub mod loader;
pub mod model;
pub mod parse;
pub mod tokenize;
