//! wxgloss - Token classification and localized field explanations for
//! decoded METAR, TAF and NOTAM messages.
//!
//! This crate re-exports all layers of the wxgloss system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: wxgloss_runtime    - CLI, REPL, rendering, configuration
//! Layer 2: wxgloss_engine     - Token classifier, field explainer
//! Layer 1: wxgloss_decode     - Q-line, weather, cloud, remark decoders
//!          wxgloss_lexicon    - Lexicon tables, message catalogs
//! Layer 0: wxgloss_foundation - Message schema, field keys, errors
//! ```

pub use wxgloss_decode as decode;
pub use wxgloss_engine as engine;
pub use wxgloss_foundation as foundation;
pub use wxgloss_lexicon as lexicon;
pub use wxgloss_runtime as runtime;
